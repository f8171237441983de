//! pomodoro-bar library
//!
//! This library provides the core functionality for the pomodoro-bar CLI.
//! It includes:
//! - Session state and the work/break cycle policy
//! - Timer engine ticking once per second
//! - Status line templates and emission for status bars
//! - Shell hooks run when a phase ends
//! - CLI argument parsing and validation

pub mod cli;
pub mod hooks;
pub mod output;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{ConfigError, PomodoroConfig, StatusSnapshot, TimerPhase, TimerState};

pub use timer::{run_timer, TimerControl, TimerEngine, TimerEvent};

pub use output::{OutputMode, StatusEmitter, Template, TemplateError};

pub use hooks::{HookError, PhaseHooks};
