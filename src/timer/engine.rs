//! Timer engine for the Pomodoro timer.
//!
//! This module provides the core timer loop:
//! - Countdown with `tokio::time::interval`, one tick per interval
//! - Phase transitions (Work → ShortBreak/LongBreak → Work)
//! - Pause, resume and break skipping between ticks
//! - Events for the output layer and phase hooks

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::debug;

use crate::types::{PomodoroConfig, StatusSnapshot, TimerPhase, TimerState};

/// Default length of one tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

// ============================================================================
// TimerEvent
// ============================================================================

/// Events published by the timer engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Current status, published at start, on every tick and after controls
    Status(StatusSnapshot),
    /// A phase began
    PhaseStarted {
        /// Phase that began
        phase: TimerPhase,
        /// Session number
        session: u32,
    },
    /// A phase ran out
    PhaseCompleted {
        /// Phase that ran out
        phase: TimerPhase,
        /// Session number
        session: u32,
    },
    /// A break was cut short
    Skipped {
        /// Break that was skipped
        phase: TimerPhase,
        /// Session number
        session: u32,
    },
    /// Timer paused
    Paused,
    /// Timer resumed
    Resumed,
}

// ============================================================================
// TimerControl
// ============================================================================

/// Commands accepted by a running engine between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerControl {
    /// Pause if running, resume if paused
    TogglePause,
    /// End the current break and start working
    Skip,
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Timer engine that owns the timer state and publishes events.
pub struct TimerEngine {
    /// Current timer state
    state: TimerState,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TimerEngine {
    /// Creates a new TimerEngine with the given configuration and event channel.
    pub fn new(config: PomodoroConfig, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: TimerState::new(config),
            event_tx,
        }
    }

    /// Runs the timer loop.
    ///
    /// Publishes the initial status, then ticks once per `tick_interval`
    /// and applies controls as they arrive. Runs forever unless
    /// `max_ticks` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the event receiver has been dropped.
    pub async fn run(
        &mut self,
        mut controls: mpsc::UnboundedReceiver<TimerControl>,
        tick_interval: Duration,
        max_ticks: Option<u64>,
    ) -> Result<()> {
        self.start()?;
        if max_ticks == Some(0) {
            return Ok(());
        }

        let mut ticker = interval_at(Instant::now() + tick_interval, tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut ticks: u64 = 0;
        let mut controls_open = true;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick()?;
                    ticks += 1;
                    if max_ticks.is_some_and(|max| ticks >= max) {
                        debug!(ticks, "Tick limit reached");
                        return Ok(());
                    }
                }
                control = controls.recv(), if controls_open => match control {
                    Some(control) => self.apply(control)?,
                    None => controls_open = false,
                },
            }
        }
    }

    /// Publishes the opening phase and the initial status.
    pub fn start(&mut self) -> Result<()> {
        debug!(
            session = self.state.session,
            remaining = self.state.remaining_seconds,
            "Timer started"
        );

        self.event_tx
            .send(TimerEvent::PhaseStarted {
                phase: self.state.phase,
                session: self.state.session,
            })
            .context("Failed to send phase started event")?;

        self.send_status()
    }

    /// Performs one tick: decrement, transition when the phase runs out,
    /// then publish the status.
    ///
    /// While paused nothing is decremented but the status is still
    /// published.
    pub fn tick(&mut self) -> Result<()> {
        if self.state.tick() {
            self.handle_phase_complete()?;
        }
        self.send_status()
    }

    /// Applies a control command.
    pub fn apply(&mut self, control: TimerControl) -> Result<()> {
        match control {
            TimerControl::TogglePause => self.toggle_pause(),
            TimerControl::Skip => self.skip(),
        }
    }

    /// Pauses a running timer or resumes a paused one.
    pub fn toggle_pause(&mut self) -> Result<()> {
        if self.state.pause() {
            debug!(remaining = self.state.remaining_seconds, "Timer paused");
            self.event_tx
                .send(TimerEvent::Paused)
                .context("Failed to send paused event")?;
        } else if self.state.resume() {
            debug!(phase = %self.state.phase, "Timer resumed");
            self.event_tx
                .send(TimerEvent::Resumed)
                .context("Failed to send resumed event")?;
        }

        self.send_status()
    }

    /// Ends the current break early and starts the next work interval.
    ///
    /// Ignored while working.
    pub fn skip(&mut self) -> Result<()> {
        let Some(transition) = self.state.skip_break() else {
            debug!("Skip ignored outside a break");
            return Ok(());
        };

        self.event_tx
            .send(TimerEvent::Skipped {
                phase: transition.finished,
                session: transition.finished_session,
            })
            .context("Failed to send skipped event")?;

        self.event_tx
            .send(TimerEvent::PhaseStarted {
                phase: transition.started,
                session: transition.session,
            })
            .context("Failed to send phase started event")?;

        self.send_status()
    }

    /// Handles a phase running out.
    fn handle_phase_complete(&mut self) -> Result<()> {
        let transition = self.state.complete_phase();
        debug!(
            finished = %transition.finished,
            started = %transition.started,
            cycle_count = self.state.cycle_count,
            "Phase complete"
        );

        self.event_tx
            .send(TimerEvent::PhaseCompleted {
                phase: transition.finished,
                session: transition.finished_session,
            })
            .context("Failed to send phase completed event")?;

        self.event_tx
            .send(TimerEvent::PhaseStarted {
                phase: transition.started,
                session: transition.session,
            })
            .context("Failed to send phase started event")?;

        Ok(())
    }

    fn send_status(&self) -> Result<()> {
        self.event_tx
            .send(TimerEvent::Status(self.state.snapshot()))
            .context("Failed to send status event")?;
        Ok(())
    }

    /// Returns a reference to the current timer state.
    pub fn get_state(&self) -> &TimerState {
        &self.state
    }

    /// Returns a mutable reference to the timer state (for testing).
    #[cfg(test)]
    pub fn get_state_mut(&mut self) -> &mut TimerState {
        &mut self.state
    }
}

// ============================================================================
// Tests
// ============================================================================
