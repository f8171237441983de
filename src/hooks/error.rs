//! Phase hook error types.
//!
//! Only `CommandNotFound` is fatal, and only at startup. Everything that
//! goes wrong while a hook runs is logged and the timer keeps going.

use thiserror::Error;

/// Errors that can occur in phase hooks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HookError {
    /// The hook's program is not on PATH.
    #[error("hook command '{0}' not found in PATH")]
    CommandNotFound(String),

    /// The hook did not finish in time.
    #[error("hook command '{0}' timed out after {1}s")]
    ExecutionTimeout(String, u64),

    /// The hook exited with a failure status.
    #[error("hook command '{0}' failed: {1}")]
    ExecutionFailed(String, String),

    /// The hook could not be spawned.
    #[error("hook error: {0}")]
    Other(String),
}

impl HookError {
    /// Returns true if this error is a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ExecutionTimeout(_, _))
    }
}
