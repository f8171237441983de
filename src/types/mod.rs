//! Core data types for the Pomodoro timer.
//!
//! This module defines the data structures used for:
//! - Timer phases and the cycle policy
//! - Timer configuration with validation
//! - The session state mutated once per tick
//! - Status snapshots handed to the output layer

pub mod error;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Upper bound for any phase duration, in minutes.
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

/// Upper bound for the number of work cycles before a long break.
pub const MAX_CYCLES: u32 = 100;

/// Upper bound for the session number the timer may start at.
pub const MAX_START_SESSION: u32 = 10_000;

// ============================================================================
// TimerPhase
// ============================================================================

/// Represents the current phase of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    /// Focused work interval
    Work,
    /// Short break between work intervals
    ShortBreak,
    /// Long break after the configured number of work intervals
    LongBreak,
    /// Countdown suspended
    Paused,
}

impl TimerPhase {
    /// Returns the machine-friendly name of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Work => "work",
            TimerPhase::ShortBreak => "short_break",
            TimerPhase::LongBreak => "long_break",
            TimerPhase::Paused => "paused",
        }
    }

    /// Returns the upper-case label shown in a status bar.
    pub fn label(&self) -> &'static str {
        match self {
            TimerPhase::Work => "WORK",
            TimerPhase::ShortBreak => "BREAK",
            TimerPhase::LongBreak => "LONG BREAK",
            TimerPhase::Paused => "PAUSE",
        }
    }

    /// Returns true if the timer is actively counting down.
    pub fn is_active(&self) -> bool {
        !matches!(self, TimerPhase::Paused)
    }

    /// Returns true for either kind of break.
    pub fn is_break(&self) -> bool {
        matches!(self, TimerPhase::ShortBreak | TimerPhase::LongBreak)
    }
}

impl Default for TimerPhase {
    fn default() -> Self {
        TimerPhase::Work
    }
}

impl std::fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PomodoroConfig
// ============================================================================

/// Configuration for the Pomodoro timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroConfig {
    /// Work duration in minutes
    pub work_minutes: u32,
    /// Short break duration in minutes
    pub short_break_minutes: u32,
    /// Long break duration in minutes
    pub long_break_minutes: u32,
    /// Completed work intervals between long breaks
    pub cycles_before_long_break: u32,
    /// Session number to start counting from
    pub start_session: u32,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            cycles_before_long_break: 4,
            start_session: 1,
        }
    }
}

impl PomodoroConfig {
    /// Creates a new configuration with the specified work duration.
    pub fn with_work_minutes(mut self, minutes: u32) -> Self {
        self.work_minutes = minutes;
        self
    }

    /// Creates a new configuration with the specified short break duration.
    pub fn with_short_break_minutes(mut self, minutes: u32) -> Self {
        self.short_break_minutes = minutes;
        self
    }

    /// Creates a new configuration with the specified long break duration.
    pub fn with_long_break_minutes(mut self, minutes: u32) -> Self {
        self.long_break_minutes = minutes;
        self
    }

    /// Creates a new configuration with the specified cycle count.
    pub fn with_cycles(mut self, cycles: u32) -> Self {
        self.cycles_before_long_break = cycles;
        self
    }

    /// Creates a new configuration starting at the given session number.
    pub fn with_start_session(mut self, session: u32) -> Self {
        self.start_session = session;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("work", self.work_minutes, MAX_DURATION_MINUTES)?;
        check_range("short break", self.short_break_minutes, MAX_DURATION_MINUTES)?;
        check_range("long break", self.long_break_minutes, MAX_DURATION_MINUTES)?;
        check_range("cycles", self.cycles_before_long_break, MAX_CYCLES)?;
        check_range("session", self.start_session, MAX_START_SESSION)?;
        Ok(())
    }

    /// Returns the configured length of a phase in seconds.
    ///
    /// `Paused` has no length of its own and yields 0.
    pub fn seconds_for(&self, phase: TimerPhase) -> u32 {
        match phase {
            TimerPhase::Work => self.work_minutes * 60,
            TimerPhase::ShortBreak => self.short_break_minutes * 60,
            TimerPhase::LongBreak => self.long_break_minutes * 60,
            TimerPhase::Paused => 0,
        }
    }
}

fn check_range(name: &'static str, value: u32, max: u32) -> Result<(), ConfigError> {
    if value < 1 || value > max {
        return Err(ConfigError::OutOfRange {
            name,
            value,
            min: 1,
            max,
        });
    }
    Ok(())
}

// ============================================================================
// TimerState
// ============================================================================

/// Outcome of a phase ending, either naturally or by a skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    /// Phase that just ended
    pub finished: TimerPhase,
    /// Session number the finished phase belonged to
    pub finished_session: u32,
    /// Phase that just started
    pub started: TimerPhase,
    /// Session number of the started phase
    pub session: u32,
}

/// Represents the state of one timer instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerState {
    /// Current phase of the timer
    pub phase: TimerPhase,
    /// Remaining seconds in the current phase
    pub remaining_seconds: u32,
    /// Number of completed work intervals
    pub cycle_count: u32,
    /// Current session number (a work interval and its break share one)
    pub session: u32,
    /// Timer configuration
    pub config: PomodoroConfig,
    /// Phase to restore on resume
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_phase: Option<TimerPhase>,
}

impl TimerState {
    /// Creates a new TimerState at the start of a work interval.
    ///
    /// Sessions before `config.start_session` count as completed, so the
    /// long-break schedule lines up with the session number.
    pub fn new(config: PomodoroConfig) -> Self {
        let session = config.start_session.max(1);
        Self {
            phase: TimerPhase::Work,
            remaining_seconds: config.seconds_for(TimerPhase::Work),
            cycle_count: session - 1,
            session,
            config,
            previous_phase: None,
        }
    }

    /// Returns the phase that is counting down, looking through a pause.
    pub fn active_phase(&self) -> TimerPhase {
        match self.phase {
            TimerPhase::Paused => self.previous_phase.unwrap_or(TimerPhase::Work),
            phase => phase,
        }
    }

    /// Decrements the timer by one second.
    ///
    /// Returns true if the current phase has run out. Does nothing while
    /// paused.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        self.remaining_seconds == 0
    }

    /// Ends the current phase and enters the next one per the cycle policy.
    ///
    /// Work is followed by a short break, or by a long break when the
    /// completed-work count reaches a multiple of the configured cycles.
    /// Any break is followed by work in the next session.
    pub fn complete_phase(&mut self) -> PhaseTransition {
        let finished = self.active_phase();
        let finished_session = self.session;

        let started = if finished == TimerPhase::Work {
            self.cycle_count += 1;
            if self.long_break_due() {
                TimerPhase::LongBreak
            } else {
                TimerPhase::ShortBreak
            }
        } else {
            self.session += 1;
            TimerPhase::Work
        };
        self.enter(started);

        PhaseTransition {
            finished,
            finished_session,
            started,
            session: self.session,
        }
    }

    /// Cuts the current break short and starts the next work interval.
    ///
    /// Returns `None` (and changes nothing) when no break is in progress,
    /// paused or not.
    pub fn skip_break(&mut self) -> Option<PhaseTransition> {
        if !self.active_phase().is_break() {
            return None;
        }
        Some(self.complete_phase())
    }

    /// Returns true if the next break should be a long one.
    pub fn long_break_due(&self) -> bool {
        self.cycle_count > 0 && self.cycle_count % self.config.cycles_before_long_break.max(1) == 0
    }

    /// Pauses the timer.
    ///
    /// Returns false if the timer was already paused.
    pub fn pause(&mut self) -> bool {
        if !self.phase.is_active() {
            return false;
        }
        self.previous_phase = Some(self.phase);
        self.phase = TimerPhase::Paused;
        true
    }

    /// Resumes the timer from pause, restoring the phase before the pause.
    ///
    /// Returns false if the timer was not paused.
    pub fn resume(&mut self) -> bool {
        if self.phase != TimerPhase::Paused {
            return false;
        }
        self.phase = self.previous_phase.take().unwrap_or(TimerPhase::Work);
        true
    }

    /// Returns true if the timer is actively running.
    pub fn is_running(&self) -> bool {
        self.phase.is_active()
    }

    /// Captures the fields the output layer renders.
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            phase: self.phase,
            active_phase: self.active_phase(),
            remaining_seconds: self.remaining_seconds,
            session: self.session,
            cycle_count: self.cycle_count,
            cycles_before_long_break: self.config.cycles_before_long_break,
        }
    }

    fn enter(&mut self, phase: TimerPhase) {
        self.phase = phase;
        self.remaining_seconds = self.config.seconds_for(phase);
        self.previous_phase = None;
    }
}

// ============================================================================
// StatusSnapshot
// ============================================================================

/// Read-only view of the timer for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Current phase, `paused` included
    pub phase: TimerPhase,
    /// Phase counting down (the paused-over phase while paused)
    pub active_phase: TimerPhase,
    /// Remaining seconds in the current phase
    pub remaining_seconds: u32,
    /// Current session number
    pub session: u32,
    /// Completed work intervals
    pub cycle_count: u32,
    /// Completed-work count between long breaks
    pub cycles_before_long_break: u32,
}

// ============================================================================
// Tests
// ============================================================================
