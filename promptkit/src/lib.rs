//! # promptkit
//!
//! Typed terminal prompts on top of a pluggable prompt renderer.
//!
//! `Prompt` collects strings, numbers, booleans and list selections, and adds a
//! multi-select built from repeated single-choice prompts: the user toggles
//! items one at a time and finishes by picking "Done".
//!
//! ## Usage
//!
//! ```rust,ignore
//! use promptkit::Prompt;
//! use promptkit_dialoguer::DialoguerBackend;
//!
//! let prompt = Prompt::new(DialoguerBackend::new());
//!
//! let name = prompt.ask_string(&["What is your name?"])?;
//! let age = prompt.ask_int("How old are you?", 30)?;
//! let toppings = prompt.select_multiple(["cheese", "ham", "pineapple"])?;
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement `PromptBackend`:
//! - `promptkit-dialoguer` - CLI prompts via dialoguer
//! - `promptkit-requestty` - CLI prompts via requestty
//!
//! `ScriptedBackend` answers from a queue and is meant for tests.

// Re-export all types from promptkit-types
pub use promptkit_types::*;

mod multi_select;
pub use multi_select::select_multiple;

mod prompt;
pub use prompt::Prompt;

// Scripted backend for driving prompts without user interaction
mod test_backend;
pub use test_backend::{
    PromptKind, RecordedPrompt, ScriptedAnswer, ScriptedBackend, ScriptedBackendError,
};
