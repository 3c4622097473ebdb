/// Error type for prompt operations.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// User cancelled the prompt (Ctrl+C, Escape, etc.)
    #[error("Prompt cancelled by user")]
    Cancelled,

    /// Backend-specific failure (I/O, unexpected answer, bad index, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),

    /// A prompt inside a multi-step interaction failed and abandoned it.
    #[error("Prompt failed: {0}")]
    Aborted(#[source] Box<PromptError>),

    /// The caller passed the wrong number or shape of arguments.
    #[error("Invalid arguments: expected {expected}, got {got}")]
    InvalidArguments { expected: &'static str, got: usize },

    /// A validator rejected a value and the backend could not ask again.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl PromptError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Wrap an error as the reason a multi-step prompt was abandoned.
    pub fn aborted(err: impl Into<PromptError>) -> Self {
        Self::Aborted(Box::new(err.into()))
    }

    /// Check if this error represents user cancellation, looking through `Aborted`.
    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::Cancelled => true,
            Self::Aborted(inner) => inner.is_cancelled(),
            _ => false,
        }
    }

    /// Check if this error abandoned a multi-step prompt.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_is_seen_through_aborted() {
        let err = PromptError::aborted(PromptError::Cancelled);
        assert!(err.is_aborted());
        assert!(err.is_cancelled());
        assert_eq!(err.to_string(), "Prompt failed: Prompt cancelled by user");
    }

    #[test]
    fn backend_error_is_not_cancellation() {
        let err = PromptError::backend(anyhow::anyhow!("terminal gone"));
        assert!(!err.is_cancelled());
        assert_eq!(err.to_string(), "Backend error: terminal gone");
    }

    #[test]
    fn invalid_arguments_message() {
        let err = PromptError::InvalidArguments {
            expected: "label and optional default",
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid arguments: expected label and optional default, got 3"
        );
    }
}
