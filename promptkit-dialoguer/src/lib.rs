//! # promptkit-dialoguer
//!
//! Dialoguer backend for promptkit.
//!
//! This crate renders promptkit prompts in the terminal using the `dialoguer`
//! library. Lists are shown with the cursor on the last touched entry, and
//! selected entries of a multi-select carry a check mark.
//!
//! ## Example
//!
//! ```rust,ignore
//! use promptkit::Prompt;
//! use promptkit_dialoguer::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let prompt = Prompt::new(DialoguerBackend::new());
//!     let name = prompt.ask_string(&["What is your name?"])?;
//!     let age = prompt.ask_int("How old are you?", 30)?;
//!     println!("Hello, {name} ({age} years old)!");
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerBackend, DialoguerError};
