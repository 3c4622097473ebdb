//! Multi-select on top of a single-choice prompt.
//!
//! The list is shown over and over. Every pick of an item flips its selection
//! and re-opens the list on that item; picking the "Done" entry at the top
//! returns the selected items.

use promptkit_types::{CandidateList, PromptBackend, PromptError, PromptOptions, Toggle};
use tracing::debug;

/// Let the user pick any number of `items` and return them in their original order.
///
/// Any error from the backend abandons the selection and is returned wrapped
/// in [`PromptError::Aborted`].
pub fn select_multiple<B, I, S>(
    backend: &B,
    options: &PromptOptions,
    items: I,
) -> Result<Vec<String>, PromptError>
where
    B: PromptBackend + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut candidates = CandidateList::new(options.done_label.as_str(), items);
    let mut cursor = 0;
    debug!(items = candidates.item_count(), "multi-select started");

    loop {
        let chosen = backend
            .ask_choice(&options.multi_select_label, candidates.candidates(), cursor)
            .map_err(PromptError::aborted)?;

        match candidates.toggle(chosen).map_err(PromptError::aborted)? {
            Toggle::Done => break,
            toggle => {
                debug!(
                    index = chosen,
                    item = candidates.candidates()[chosen].label(),
                    ?toggle,
                    selected = candidates.selected_count(),
                    "toggled candidate"
                );
                cursor = chosen;
            }
        }
    }

    let selected = candidates.into_selected();
    debug!(count = selected.len(), "multi-select finished");
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScriptedAnswer, ScriptedBackend};

    fn run(items: &[&str], picks: &[usize]) -> Result<Vec<String>, PromptError> {
        let backend = ScriptedBackend::new().with_choices(picks.iter().copied());
        select_multiple(&backend, &PromptOptions::default(), items.iter().copied())
    }

    #[test]
    fn immediate_done_returns_nothing() {
        assert!(run(&["a", "b", "c"], &[0]).unwrap().is_empty());
    }

    #[test]
    fn empty_items_immediate_done() {
        assert!(run(&[], &[0]).unwrap().is_empty());
    }

    #[test]
    fn toggle_b_then_a() {
        assert_eq!(run(&["a", "b", "c"], &[2, 1, 0]).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn toggle_same_item_twice() {
        assert!(run(&["x"], &[1, 1, 0]).unwrap().is_empty());
    }

    #[test]
    fn double_toggle_matches_no_toggle() {
        let with = run(&["a", "b", "c"], &[3, 2, 2, 0]).unwrap();
        let without = run(&["a", "b", "c"], &[3, 0]).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn odd_toggle_count_keeps_item_selected() {
        assert_eq!(run(&["x", "y"], &[2, 2, 2, 0]).unwrap(), vec!["y"]);
    }

    #[test]
    fn result_follows_input_order() {
        let items = ["one", "two", "three", "four", "five"];
        assert_eq!(
            run(&items, &[5, 1, 4, 2, 0]).unwrap(),
            vec!["one", "two", "four", "five"]
        );
    }

    #[test]
    fn subset_round_trip() {
        let items = ["red", "green", "blue", "cyan"];
        let subsets: &[&[usize]] = &[&[], &[1], &[4], &[2, 3], &[1, 2, 3, 4]];
        for subset in subsets {
            let mut picks = subset.to_vec();
            picks.push(0);
            let expected: Vec<&str> = subset.iter().map(|&i| items[i - 1]).collect();
            assert_eq!(run(&items, &picks).unwrap(), expected);
        }
    }

    #[test]
    fn cursor_follows_last_toggle() {
        let backend = ScriptedBackend::new().with_choices([3, 1, 0]);
        select_multiple(&backend, &PromptOptions::default(), ["a", "b", "c"]).unwrap();

        let cursors: Vec<usize> = backend.calls().iter().map(|c| c.cursor).collect();
        assert_eq!(cursors, vec![0, 3, 1]);
    }

    #[test]
    fn selected_items_are_marked() {
        let backend = ScriptedBackend::new().with_choices([2, 0]);
        select_multiple(&backend, &PromptOptions::default(), ["a", "b"]).unwrap();

        let calls = backend.calls();
        assert_eq!(calls[0].items, vec!["Done ✔", "a", "b"]);
        assert_eq!(calls[1].items, vec!["Done ✔", "a", "✔ b"]);
        assert!(calls.iter().all(|c| c.label == "Item"));
    }

    #[test]
    fn custom_labels_are_used() {
        let options = PromptOptions::default()
            .with_multi_select_label("Toppings")
            .with_done_label("Finished");
        let backend = ScriptedBackend::new().with_choices([0]);
        select_multiple(&backend, &options, ["cheese"]).unwrap();

        let calls = backend.calls();
        assert_eq!(calls[0].label, "Toppings");
        assert_eq!(calls[0].items, vec!["Finished", "cheese"]);
    }

    #[test]
    fn item_named_like_sentinel_is_selectable() {
        assert_eq!(
            run(&["Done ✔", "b"], &[1, 0]).unwrap(),
            vec!["Done ✔"]
        );
    }

    #[test]
    fn cancellation_on_first_prompt_aborts() {
        let backend = ScriptedBackend::new().with_answer(ScriptedAnswer::Cancel);
        let err = select_multiple(&backend, &PromptOptions::default(), ["a"]).unwrap_err();
        assert!(err.is_aborted());
        assert!(err.is_cancelled());
    }

    #[test]
    fn cancellation_discards_progress() {
        let backend = ScriptedBackend::new()
            .with_choices([1, 2])
            .with_answer(ScriptedAnswer::Cancel);
        let err = select_multiple(&backend, &PromptOptions::default(), ["a", "b"]).unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(backend.calls().len(), 3);
    }

    #[test]
    fn out_of_range_choice_aborts() {
        let err = run(&["a"], &[5]).unwrap_err();
        assert!(err.is_aborted());
        assert!(!err.is_cancelled());
    }
}
