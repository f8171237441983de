//! Status output for the Pomodoro timer.
//!
//! This module turns timer snapshots into status-bar lines:
//! - `template`: user format strings with placeholders
//! - `format`: time and progress-bar formatting
//! - `emitter`: line-per-tick writer with immediate flush

pub mod emitter;
pub mod format;
pub mod template;

pub use emitter::{OutputMode, StatusEmitter};
pub use format::{format_hhmmss, progress_bar};
pub use template::{Placeholder, Template, TemplateError};
