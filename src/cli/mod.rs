//! CLI module for pomodoro-bar.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `settings`: Validation of parsed arguments into runtime settings

pub mod commands;
pub mod settings;

pub use commands::{Cli, Commands, TimerArgs};
pub use settings::TimerSettings;
