//! Configuration error types.
//!
//! Every variant is a startup-time failure: once the timer loop runs, no
//! configuration error can occur.

use thiserror::Error;

use crate::hooks::HookError;

/// Errors produced while validating the timer configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric option is outside its accepted range.
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Option name as shown to the user
        name: &'static str,
        /// Rejected value
        value: u32,
        /// Smallest accepted value
        min: u32,
        /// Largest accepted value
        max: u32,
    },

    /// A phase hook command is unusable.
    #[error(transparent)]
    Hook(#[from] HookError),
}

impl ConfigError {
    /// Returns true if this error is a numeric range violation.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
