//! Requestty backend for promptkit.
//!
//! This crate renders promptkit prompts in the terminal using the `requestty`
//! library.
//!
//! # Example
//!
//! ```ignore
//! use promptkit::Prompt;
//! use promptkit_requestty::RequesttyBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let prompt = Prompt::new(RequesttyBackend::new());
//!     let langs = prompt.select_multiple(["rust", "go", "zig"])?;
//!     println!("{langs:?}");
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::RequesttyBackend;
pub use backend::RequesttyError;
