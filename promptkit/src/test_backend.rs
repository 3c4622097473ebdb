//! Scripted backend for driving prompts without user interaction.
//!
//! `ScriptedBackend` answers each prompt with the next entry of a queue and
//! records what it was asked. This is useful for testing code built on
//! `Prompt` without a terminal.
//!
//! # Example
//!
//! ```rust,ignore
//! use promptkit::{Prompt, ScriptedBackend};
//!
//! let backend = ScriptedBackend::new()
//!     .with_text("Alice")
//!     .with_choices([2, 1, 0]);
//! let prompt = Prompt::new(&backend);
//!
//! assert_eq!(prompt.ask_string(&["Name?"]).unwrap(), "Alice");
//! assert_eq!(prompt.select_multiple(["a", "b", "c"]).unwrap(), vec!["a", "b"]);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;

use tracing::warn;

use crate::{Candidate, PromptBackend, PromptError};

/// One pre-configured answer.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedAnswer {
    /// Typed text. An empty string accepts the default, if there is one.
    Text(String),

    /// The index of the chosen entry in a list prompt.
    Choice(usize),

    /// The user cancels the prompt.
    Cancel,
}

/// Which backend method a recorded prompt came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Text,
    Select,
    Choice,
}

/// A prompt as the scripted backend saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPrompt {
    pub kind: PromptKind,
    pub label: String,
    /// Cursor start for list prompts; 0 for text prompts.
    pub cursor: usize,
    /// Entries as they would be rendered. The default value for text prompts.
    pub items: Vec<String>,
}

/// Error type for ScriptedBackend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptedBackendError {
    #[error("Prompt cancelled by user")]
    Cancelled,

    #[error("No scripted answer left for '{0}'")]
    OutOfAnswers(String),

    #[error("Unexpected answer for '{label}': expected {expected}, got {got:?}")]
    UnexpectedAnswer {
        label: String,
        expected: &'static str,
        got: ScriptedAnswer,
    },

    #[error("Validation failed for '{label}': {message}")]
    ValidationFailed { label: String, message: String },
}

impl From<ScriptedBackendError> for PromptError {
    fn from(err: ScriptedBackendError) -> Self {
        match err {
            ScriptedBackendError::Cancelled => PromptError::Cancelled,
            ScriptedBackendError::ValidationFailed { message, .. } => {
                PromptError::ValidationFailed(message)
            }
            other => PromptError::backend(other),
        }
    }
}

/// A backend that returns pre-configured answers, in order.
///
/// Text answers are run through the prompt's validator; since there is no one
/// to ask again, a rejected value fails with `ValidationFailed`.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    answers: RefCell<VecDeque<ScriptedAnswer>>,
    calls: RefCell<Vec<RecordedPrompt>>,
}

impl ScriptedBackend {
    /// Create a new backend with no answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer.
    pub fn with_answer(self, answer: ScriptedAnswer) -> Self {
        self.answers.borrow_mut().push_back(answer);
        self
    }

    /// Queue a text answer.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_answer(ScriptedAnswer::Text(text.into()))
    }

    /// Queue a list choice.
    pub fn with_choice(self, index: usize) -> Self {
        self.with_answer(ScriptedAnswer::Choice(index))
    }

    /// Queue several list choices.
    pub fn with_choices(self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.answers
            .borrow_mut()
            .extend(indices.into_iter().map(ScriptedAnswer::Choice));
        self
    }

    /// Every prompt asked so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedPrompt> {
        self.calls.borrow().clone()
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next_answer(&self, record: RecordedPrompt) -> Result<ScriptedAnswer, ScriptedBackendError> {
        let label = record.label.clone();
        self.calls.borrow_mut().push(record);
        match self.answers.borrow_mut().pop_front() {
            Some(ScriptedAnswer::Cancel) => Err(ScriptedBackendError::Cancelled),
            Some(answer) => Ok(answer),
            None => Err(ScriptedBackendError::OutOfAnswers(label)),
        }
    }

    fn next_choice(&self, record: RecordedPrompt) -> Result<usize, ScriptedBackendError> {
        let label = record.label.clone();
        match self.next_answer(record)? {
            ScriptedAnswer::Choice(index) => Ok(index),
            got => Err(ScriptedBackendError::UnexpectedAnswer {
                label,
                expected: "a choice",
                got,
            }),
        }
    }
}

impl PromptBackend for ScriptedBackend {
    type Error = ScriptedBackendError;

    fn ask_text(
        &self,
        label: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<String, Self::Error> {
        let record = RecordedPrompt {
            kind: PromptKind::Text,
            label: label.to_string(),
            cursor: 0,
            items: default.map(str::to_string).into_iter().collect(),
        };

        let text = match self.next_answer(record)? {
            ScriptedAnswer::Text(text) if text.is_empty() => {
                default.map(str::to_string).unwrap_or_default()
            }
            ScriptedAnswer::Text(text) => text,
            got => {
                return Err(ScriptedBackendError::UnexpectedAnswer {
                    label: label.to_string(),
                    expected: "text",
                    got,
                });
            }
        };

        if let Err(message) = validate(&text) {
            warn!(label, %message, "scripted answer rejected by validator");
            return Err(ScriptedBackendError::ValidationFailed {
                label: label.to_string(),
                message,
            });
        }

        Ok(text)
    }

    fn ask_select(
        &self,
        label: &str,
        items: &[String],
        cursor: usize,
    ) -> Result<usize, Self::Error> {
        self.next_choice(RecordedPrompt {
            kind: PromptKind::Select,
            label: label.to_string(),
            cursor,
            items: items.to_vec(),
        })
    }

    fn ask_choice(
        &self,
        label: &str,
        candidates: &[Candidate],
        cursor: usize,
    ) -> Result<usize, Self::Error> {
        self.next_choice(RecordedPrompt {
            kind: PromptKind::Choice,
            label: label.to_string(),
            cursor,
            items: candidates.iter().map(ToString::to_string).collect(),
        })
    }
}
