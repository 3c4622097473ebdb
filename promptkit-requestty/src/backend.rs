//! Requestty backend implementation for PromptBackend trait.

use promptkit::{Candidate, PromptBackend, PromptError};
use thiserror::Error;
use tracing::debug;

/// Name requestty stores answers under. Only one question is asked at a time.
const ANSWER_KEY: &str = "answer";

/// Error type for the Requestty backend.
#[derive(Debug, Error)]
pub enum RequesttyError {
    /// User cancelled the prompt (e.g., pressed Ctrl+C).
    #[error("Prompt cancelled by user")]
    Cancelled,

    /// An error occurred during prompting.
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// Unexpected answer type received.
    #[error("Unexpected answer type: expected {expected}, got {got}")]
    UnexpectedAnswerType { expected: String, got: String },
}

impl From<requestty::ErrorKind> for RequesttyError {
    fn from(err: requestty::ErrorKind) -> Self {
        match err {
            requestty::ErrorKind::Interrupted => Self::Cancelled,
            _ => Self::PromptError(err.to_string()),
        }
    }
}

impl From<RequesttyError> for PromptError {
    fn from(err: RequesttyError) -> Self {
        match err {
            RequesttyError::Cancelled => PromptError::Cancelled,
            other => PromptError::backend(other),
        }
    }
}

/// Requestty backend for interactive CLI prompts.
///
/// This backend uses the `requestty` library to present prompts
/// in a command-line interface.
#[derive(Debug, Default, Clone)]
pub struct RequesttyBackend;

impl RequesttyBackend {
    /// Create a new Requestty backend.
    pub const fn new() -> Self {
        Self
    }

    fn select(
        &self,
        label: &str,
        items: Vec<String>,
        cursor: usize,
    ) -> Result<usize, RequesttyError> {
        let q = requestty::Question::select(ANSWER_KEY)
            .message(label)
            .choices(items)
            .default(cursor)
            .build();

        match requestty::prompt_one(q)? {
            requestty::Answer::ListItem(item) => Ok(item.index),
            other => Err(RequesttyError::UnexpectedAnswerType {
                expected: "ListItem".to_string(),
                got: format!("{other:?}"),
            }),
        }
    }
}

impl PromptBackend for RequesttyBackend {
    type Error = RequesttyError;

    fn ask_text(
        &self,
        label: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<String, Self::Error> {
        let mut q = requestty::Question::input(ANSWER_KEY).message(label);

        if let Some(default) = default {
            q = q.default(default.to_string());
        }

        // Requestty keeps the prompt open until the validator passes.
        let validate_fn = move |value: &str, _: &requestty::Answers| -> Result<(), String> {
            validate(value)
        };

        match requestty::prompt_one(q.validate(validate_fn).build())? {
            requestty::Answer::String(s) => Ok(s),
            other => Err(RequesttyError::UnexpectedAnswerType {
                expected: "String".to_string(),
                got: format!("{other:?}"),
            }),
        }
    }

    fn ask_select(
        &self,
        label: &str,
        items: &[String],
        cursor: usize,
    ) -> Result<usize, Self::Error> {
        self.select(label, items.to_vec(), cursor)
    }

    fn ask_choice(
        &self,
        label: &str,
        candidates: &[Candidate],
        cursor: usize,
    ) -> Result<usize, Self::Error> {
        let items: Vec<String> = candidates.iter().map(ToString::to_string).collect();
        debug!(label, cursor, count = items.len(), "showing multi-select list");
        self.select(label, items, cursor)
    }
}
