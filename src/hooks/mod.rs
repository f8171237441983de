//! Phase hooks for the Pomodoro timer.
//!
//! Optional shell commands run when a work interval or a break completes,
//! e.g. `xset dpms force off` to blank the screen for a break.

pub mod command;
pub mod error;

pub use command::{program_exists, run_hook, PhaseHooks, DEFAULT_TIMEOUT_SECONDS};
pub use error::HookError;
