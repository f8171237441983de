//! Process signals that steer the timer.
//!
//! Status bars can only talk back to a running process through signals, so
//! click handlers send them (e.g. `pkill -USR1 pomodoro-bar`):
//! - `SIGUSR1` toggles pause/resume
//! - `SIGUSR2` skips the current break
//! - `SIGINT`/`SIGTERM` end the process

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use super::engine::TimerControl;

/// Forwards control signals to the engine until the engine goes away.
///
/// Returns `None` on platforms without Unix signals.
///
/// # Errors
///
/// Returns an error if a signal handler cannot be installed.
#[cfg(unix)]
pub fn spawn_control_listener(
    control_tx: mpsc::UnboundedSender<TimerControl>,
) -> Result<Option<JoinHandle<()>>> {
    use anyhow::Context;
    use tokio::signal::unix::{signal, SignalKind};

    let mut pause =
        signal(SignalKind::user_defined1()).context("Failed to install SIGUSR1 handler")?;
    let mut skip =
        signal(SignalKind::user_defined2()).context("Failed to install SIGUSR2 handler")?;

    Ok(Some(tokio::spawn(async move {
        loop {
            let control = tokio::select! {
                Some(()) = pause.recv() => TimerControl::TogglePause,
                Some(()) = skip.recv() => TimerControl::Skip,
                else => break,
            };

            debug!(?control, "Control signal received");
            if control_tx.send(control).is_err() {
                break;
            }
        }
    })))
}

#[cfg(not(unix))]
pub fn spawn_control_listener(
    _control_tx: mpsc::UnboundedSender<TimerControl>,
) -> Result<Option<JoinHandle<()>>> {
    Ok(None)
}

/// Resolves when the process is asked to terminate.
///
/// Returns the name of the signal received.
///
/// # Errors
///
/// Returns an error if a signal handler cannot be installed.
#[cfg(unix)]
pub async fn shutdown_signal() -> Result<&'static str> {
    use anyhow::Context;
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate =
        signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?;

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for SIGINT")?;
            Ok("SIGINT")
        }
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
pub async fn shutdown_signal() -> Result<&'static str> {
    use anyhow::Context;

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl+C")?;
    Ok("Ctrl+C")
}
