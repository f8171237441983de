//! Resolved runtime settings.
//!
//! Turns parsed [`TimerArgs`] into validated settings for the timer loop.
//! Any error here is a usage error and happens before the first status line.

use std::time::Duration;

use super::commands::TimerArgs;
use crate::hooks::PhaseHooks;
use crate::output::OutputMode;
use crate::timer::TICK_INTERVAL;
use crate::types::{ConfigError, PomodoroConfig};

/// Everything the timer loop needs to run.
#[derive(Debug, Clone)]
pub struct TimerSettings {
    /// Durations and cycle policy
    pub config: PomodoroConfig,
    /// How status lines are rendered
    pub output: OutputMode,
    /// Commands run when phases complete
    pub hooks: PhaseHooks,
    /// Length of one tick
    pub tick_interval: Duration,
    /// Stop after this many ticks
    pub max_ticks: Option<u64>,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            config: PomodoroConfig::default(),
            output: OutputMode::default(),
            hooks: PhaseHooks::default(),
            tick_interval: TICK_INTERVAL,
            max_ticks: None,
        }
    }
}

impl TimerSettings {
    /// Validates the arguments and builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a duration is out of range or a hook command
    /// cannot be found.
    pub fn resolve(args: &TimerArgs) -> Result<Self, ConfigError> {
        let config = PomodoroConfig {
            work_minutes: args.work,
            short_break_minutes: args.short_break,
            long_break_minutes: args.long_break,
            cycles_before_long_break: args.cycles,
            start_session: args.session,
        };
        config.validate()?;

        let mut hooks = PhaseHooks::new(args.cmd_work.clone(), args.cmd_break.clone())?;
        hooks.timeout_seconds = args.hook_timeout;

        let output = if args.json {
            OutputMode::Json
        } else {
            OutputMode::Template(args.format.clone())
        };

        Ok(Self {
            config,
            output,
            hooks,
            tick_interval: Duration::from_millis(args.tick_millis),
            max_ticks: args.max_ticks,
        })
    }
}
