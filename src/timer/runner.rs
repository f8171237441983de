//! Wires the engine to the status emitter and the phase hooks.

use std::io::Write;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;

use super::engine::{TimerControl, TimerEngine, TimerEvent};
use crate::cli::TimerSettings;
use crate::hooks::PhaseHooks;
use crate::output::StatusEmitter;

/// Runs the timer, writing one status line per tick to `writer`.
///
/// Returns the number of status lines written once the engine stops,
/// which only happens when a tick limit is configured or an error occurs.
///
/// # Errors
///
/// Returns an error if the writer fails, e.g. the status bar closed the pipe.
pub async fn run_timer<W: Write>(
    settings: TimerSettings,
    writer: W,
    controls: mpsc::UnboundedReceiver<TimerControl>,
) -> Result<u64> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let engine = TimerEngine::new(settings.config, event_tx);
    let mut emitter = StatusEmitter::new(writer, settings.output);
    let hooks = settings.hooks;

    let tick_interval = settings.tick_interval;
    let max_ticks = settings.max_ticks;

    // The engine owns the only event sender, so the consumer ends once the
    // engine is dropped.
    let produce = async move {
        let mut engine = engine;
        engine.run(controls, tick_interval, max_ticks).await
    };

    let consume = async {
        while let Some(event) = event_rx.recv().await {
            handle_event(&mut emitter, &hooks, event)?;
        }
        Ok::<_, anyhow::Error>(())
    };

    tokio::try_join!(produce, consume)?;
    Ok(emitter.lines_written())
}

fn handle_event<W: Write>(
    emitter: &mut StatusEmitter<W>,
    hooks: &PhaseHooks,
    event: TimerEvent,
) -> Result<()> {
    match event {
        TimerEvent::Status(snapshot) => emitter.emit(&snapshot)?,
        TimerEvent::PhaseCompleted { phase, session } => {
            info!(%phase, session, "Phase completed");
            hooks.fire(phase);
        }
        TimerEvent::PhaseStarted { phase, session } => {
            info!(%phase, session, "Phase started");
        }
        TimerEvent::Skipped { phase, session } => {
            info!(%phase, session, "Break skipped");
        }
        TimerEvent::Paused => info!("Paused"),
        TimerEvent::Resumed => info!("Resumed"),
    }
    Ok(())
}
