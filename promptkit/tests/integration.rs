//! Integration tests for promptkit

use promptkit::{
    Candidate, Prompt, PromptBackend, PromptError, PromptOptions, ScriptedAnswer, ScriptedBackend,
    select_multiple,
};

#[test]
fn test_toggle_b_then_a() {
    let prompt = Prompt::new(ScriptedBackend::new().with_choices([2, 1, 0]));
    assert_eq!(prompt.select_multiple(["a", "b", "c"]).unwrap(), vec!["a", "b"]);
}

#[test]
fn test_toggle_twice_then_done() {
    let prompt = Prompt::new(ScriptedBackend::new().with_choices([1, 1, 0]));
    assert!(prompt.select_multiple(["x"]).unwrap().is_empty());
}

#[test]
fn test_immediate_done_for_any_input() {
    let inputs: [&[&str]; 4] = [&[], &["a"], &["a", "b"], &["a", "b", "c", "d", "e"]];
    for items in inputs {
        let prompt = Prompt::new(ScriptedBackend::new().with_choice(0));
        assert!(prompt.select_multiple(items.iter().copied()).unwrap().is_empty());
    }
}

#[test]
fn test_abort_on_first_prompt() {
    let backend = ScriptedBackend::new().with_answer(ScriptedAnswer::Cancel);
    let prompt = Prompt::new(&backend);
    let err = prompt.select_multiple(["a", "b"]).unwrap_err();
    assert!(matches!(
        &err,
        PromptError::Aborted(inner) if matches!(**inner, PromptError::Cancelled)
    ));
    assert_eq!(backend.calls().len(), 1);
}

#[test]
fn test_mixed_session() {
    let backend = ScriptedBackend::new()
        .with_text("Alice")
        .with_text("")
        .with_choice(0)
        .with_choices([3, 1, 0]);
    let prompt = Prompt::new(&backend).with_multi_select_label("Languages");

    let name = prompt.ask_string(&["Name"]).unwrap();
    let age = prompt.ask_int("Age", 30).unwrap();
    let student = prompt.ask_bool("Student?").unwrap();
    let langs = prompt.select_multiple(["rust", "go", "zig"]).unwrap();

    assert_eq!(name, "Alice");
    assert_eq!(age, 30);
    assert!(student);
    assert_eq!(langs, vec!["rust", "zig"]);
    assert_eq!(backend.remaining(), 0);
}

/// A backend that always picks the same index, to check the loop with a
/// hand-written collaborator.
struct AlwaysDone;

impl PromptBackend for AlwaysDone {
    type Error = PromptError;

    fn ask_text(
        &self,
        _label: &str,
        _default: Option<&str>,
        _validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<String, Self::Error> {
        Err(PromptError::Cancelled)
    }

    fn ask_select(
        &self,
        _label: &str,
        _items: &[String],
        _cursor: usize,
    ) -> Result<usize, Self::Error> {
        Ok(0)
    }

    fn ask_choice(
        &self,
        _label: &str,
        candidates: &[Candidate],
        cursor: usize,
    ) -> Result<usize, Self::Error> {
        assert!(candidates[0].is_done());
        assert_eq!(cursor, 0);
        Ok(0)
    }
}

#[test]
fn test_custom_backend() {
    let selected = select_multiple(&AlwaysDone, &PromptOptions::default(), ["a", "b"]).unwrap();
    assert!(selected.is_empty());
}
