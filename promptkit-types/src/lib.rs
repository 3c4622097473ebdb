//! Core types for the promptkit crate.
//!
//! This crate provides the foundational types for terminal prompts:
//! - `Candidate` and `CandidateList` - The data model of a multi-select
//! - `PromptError` - Errors shared by all backends
//! - `PromptBackend` trait - For implementing prompt renderers
//! - Stock validators for text prompts

mod candidate;
pub use candidate::{Candidate, CandidateList, SELECTED_MARKER, Toggle};

mod options;
pub use options::{DEFAULT_DONE_LABEL, DEFAULT_MULTI_SELECT_LABEL, PromptOptions};

mod validate;
pub use validate::{validate_float, validate_int, validate_string};

mod error;
pub use error::PromptError;

mod traits;
pub use traits::PromptBackend;
