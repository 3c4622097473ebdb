//! Dialoguer backend implementation for PromptBackend trait.

use dialoguer::{
    Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use promptkit::{Candidate, PromptBackend, PromptError};
use thiserror::Error;
use tracing::debug;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the prompt (e.g., pressed Ctrl+C or Escape).
    #[error("Prompt cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl From<DialoguerError> for PromptError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => PromptError::Cancelled,
            other => PromptError::backend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn map_err(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// Dialoguer backend for interactive CLI prompts.
///
/// This backend uses the `dialoguer` library to present prompts
/// in a command-line interface with colorful themes.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    pub fn is_colorful(&self) -> bool {
        self.colorful
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    fn select(
        &self,
        label: &str,
        items: &[String],
        cursor: usize,
    ) -> Result<usize, DialoguerError> {
        let theme = self.theme();
        let result = Select::with_theme(&*theme)
            .with_prompt(label)
            .items(items)
            .default(cursor)
            .report(false)
            .interact_opt();

        match result {
            Ok(Some(index)) => Ok(index),
            Ok(None) => Err(DialoguerError::Cancelled),
            Err(e) => Err(map_err(e)),
        }
    }
}

impl PromptBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn ask_text(
        &self,
        label: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<String, Self::Error> {
        let theme = self.theme();
        // Empty input goes to the validator like any other answer.
        let mut builder: Input<String> = Input::with_theme(&*theme)
            .with_prompt(label)
            .allow_empty(true);

        if let Some(default) = default {
            builder = builder.default(default.to_string());
        }

        // Dialoguer shows the message and asks again until the validator passes.
        builder
            .validate_with(|input: &String| validate(input.as_str()))
            .interact_text()
            .map_err(map_err)
    }

    fn ask_select(
        &self,
        label: &str,
        items: &[String],
        cursor: usize,
    ) -> Result<usize, Self::Error> {
        self.select(label, items, cursor)
    }

    fn ask_choice(
        &self,
        label: &str,
        candidates: &[Candidate],
        cursor: usize,
    ) -> Result<usize, Self::Error> {
        let items: Vec<String> = candidates.iter().map(ToString::to_string).collect();
        debug!(label, cursor, count = items.len(), "showing multi-select list");
        self.select(label, &items, cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_creation() {
        assert!(DialoguerBackend::new().is_colorful());
        assert!(!DialoguerBackend::plain().is_colorful());
    }

    #[test]
    fn test_error_types() {
        let err = DialoguerError::Cancelled;
        assert_eq!(err.to_string(), "Prompt cancelled by user");
        assert!(PromptError::from(err).is_cancelled());
    }

    #[test]
    fn test_interrupted_io_is_cancellation() {
        let err = dialoguer::Error::IO(std::io::Error::from(std::io::ErrorKind::Interrupted));
        assert!(matches!(map_err(err), DialoguerError::Cancelled));

        let err = dialoguer::Error::IO(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        let err = PromptError::from(map_err(err));
        assert!(matches!(err, PromptError::Backend(_)));
    }
}
