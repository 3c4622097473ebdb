use crate::{Candidate, PromptError};

/// Trait for backend implementations that render prompts and read answers.
///
/// Backends own everything about presentation: layout, key handling, themes.
/// Callers hand them a label and the data to show, and get back the raw answer.
pub trait PromptBackend {
    /// The error type for this backend.
    type Error: Into<PromptError>;

    /// Ask for a line of text.
    ///
    /// # Arguments
    /// * `label` - The prompt text shown to the user
    /// * `default` - Pre-filled value, if any
    /// * `validate` - Called on each submitted value, including the empty string.
    ///   The validator alone decides whether empty input is accepted. Interactive
    ///   backends show the message and ask again; non-interactive ones fail.
    fn ask_text(
        &self,
        label: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<String, Self::Error>;

    /// Ask the user to pick one entry of `items`, starting with the cursor on `cursor`.
    ///
    /// Returns the zero-based index of the chosen entry.
    fn ask_select(&self, label: &str, items: &[String], cursor: usize)
    -> Result<usize, Self::Error>;

    /// Ask the user to pick one candidate of a multi-select list.
    ///
    /// Selected candidates must be visibly marked. The cursor starts on `cursor`.
    /// Returns the zero-based index of the chosen candidate.
    fn ask_choice(
        &self,
        label: &str,
        candidates: &[Candidate],
        cursor: usize,
    ) -> Result<usize, Self::Error>;
}

impl<B: PromptBackend + ?Sized> PromptBackend for &B {
    type Error = B::Error;

    fn ask_text(
        &self,
        label: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<String, Self::Error> {
        (**self).ask_text(label, default, validate)
    }

    fn ask_select(
        &self,
        label: &str,
        items: &[String],
        cursor: usize,
    ) -> Result<usize, Self::Error> {
        (**self).ask_select(label, items, cursor)
    }

    fn ask_choice(
        &self,
        label: &str,
        candidates: &[Candidate],
        cursor: usize,
    ) -> Result<usize, Self::Error> {
        (**self).ask_choice(label, candidates, cursor)
    }
}
