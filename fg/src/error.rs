//! Generator error taxonomy
//!
//! Four failure classes with distinct handling:
//! - [`GenError::Validation`] is recovered by re-prompting when the value came
//!   from an interactive answer, fatal when it came from CLI options or saved
//!   settings (there is no one to re-prompt).
//! - [`GenError::Incomplete`] is always fatal and stops the run before planning.
//! - [`GenError::SettingsRead`] is non-fatal; the run proceeds with defaults.
//! - [`GenError::Render`] aborts the remainder of the render stage.

use thiserror::Error;

/// Errors raised by the generator core
#[derive(Debug, Error)]
pub enum GenError {
    #[error("Invalid value for {key}: \"{value}\" ({reason})")]
    Validation {
        key: String,
        value: String,
        reason: String,
    },

    #[error("No resolved value for required option: {key}")]
    Incomplete { key: String },

    #[error("Could not read saved settings: {0}")]
    SettingsRead(String),

    #[error("Failed to write {dest}: {reason}")]
    Render { dest: String, reason: String },
}

impl GenError {
    /// Build a validation error for a key/value pair
    pub fn validation(key: &str, value: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        Self::Validation {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
