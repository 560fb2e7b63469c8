//! `pp-input`: load the planning configuration document.
//!
//! See [`loader`] for the document format.

pub mod document;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use document::{ProblemConfig, TaskParameters};
pub use error::{InputError, InputResult};
pub use loader::{load_config, load_config_reader};
