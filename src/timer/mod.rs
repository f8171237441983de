//! Timer module for the Pomodoro timer.
//!
//! This module contains the countdown loop:
//! - `engine`: Timer engine with state transitions and tick handling
//! - `runner`: Engine wired to the status emitter and phase hooks
//! - `signals`: Unix signals mapped to pause/skip controls and shutdown

pub mod engine;
pub mod runner;
pub mod signals;

pub use engine::{TimerControl, TimerEngine, TimerEvent, TICK_INTERVAL};
pub use runner::run_timer;
pub use signals::{shutdown_signal, spawn_control_listener};
