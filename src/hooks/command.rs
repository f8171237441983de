//! Shell commands run when a phase ends.
//!
//! A hook runs through `sh -c` as a tokio child process with a timeout, so
//! a slow command never delays the next tick. The child is killed when its
//! task is dropped, either on timeout or at shutdown.

use std::env;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::error::HookError;
use crate::types::TimerPhase;

/// Default timeout for hook execution in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Commands to run when work or break phases complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseHooks {
    /// Runs after a work interval completes
    pub work_command: Option<String>,
    /// Runs after a break completes without being skipped
    pub break_command: Option<String>,
    /// Maximum time a hook may run
    pub timeout_seconds: u64,
}

impl Default for PhaseHooks {
    fn default() -> Self {
        Self {
            work_command: None,
            break_command: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl PhaseHooks {
    /// Creates hooks from raw command strings.
    ///
    /// Empty strings and `""` mean no hook.
    ///
    /// # Errors
    ///
    /// Returns `HookError::CommandNotFound` if a command's program cannot be
    /// found.
    pub fn new(
        work_command: Option<String>,
        break_command: Option<String>,
    ) -> Result<Self, HookError> {
        let work_command = normalize(work_command);
        let break_command = normalize(break_command);

        for command in work_command.iter().chain(break_command.iter()) {
            if !program_exists(command) {
                return Err(HookError::CommandNotFound(command.clone()));
            }
        }

        Ok(Self {
            work_command,
            break_command,
            ..Self::default()
        })
    }

    /// Returns the command to run when `finished` completes.
    pub fn command_for(&self, finished: TimerPhase) -> Option<&str> {
        match finished {
            TimerPhase::Work => self.work_command.as_deref(),
            TimerPhase::ShortBreak | TimerPhase::LongBreak => self.break_command.as_deref(),
            TimerPhase::Paused => None,
        }
    }

    /// Returns true if no hook is configured.
    pub fn is_empty(&self) -> bool {
        self.work_command.is_none() && self.break_command.is_none()
    }

    /// Starts the hook for a completed phase in the background.
    ///
    /// Returns `None` when no hook is configured for that phase. Failures
    /// are logged, never returned.
    pub fn fire(&self, finished: TimerPhase) -> Option<JoinHandle<()>> {
        let command = self.command_for(finished)?.to_string();
        let timeout_seconds = self.timeout_seconds;

        Some(tokio::spawn(async move {
            if let Err(e) = run_hook(&command, timeout_seconds).await {
                warn!("{}", e);
            }
        }))
    }
}

fn normalize(command: Option<String>) -> Option<String> {
    command
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty() && c != "\"\"")
}

/// Checks whether the program of a command line can be executed.
///
/// The program is the first whitespace-separated word. Paths are checked
/// directly, bare names are looked up on `PATH`.
#[must_use]
pub fn program_exists(command: &str) -> bool {
    let Some(program) = command.split_whitespace().next() else {
        return false;
    };

    if program.contains('/') {
        return Path::new(program).is_file();
    }

    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| dir.join(program).is_file()))
        .unwrap_or(false)
}

/// Runs a hook command to completion with a timeout.
///
/// # Errors
///
/// Returns an error if the command cannot be spawned, exits with a failure
/// status, or exceeds `timeout_seconds`.
pub async fn run_hook(command: &str, timeout_seconds: u64) -> Result<(), HookError> {
    info!("Running hook: {}", command);

    let result = timeout(Duration::from_secs(timeout_seconds), execute(command)).await;

    match result {
        Ok(Ok(())) => {
            debug!("Hook finished: {}", command);
            Ok(())
        }
        Ok(Err(e)) => Err(e),
        Err(_) => Err(HookError::ExecutionTimeout(
            command.to_string(),
            timeout_seconds,
        )),
    }
}

async fn execute(command: &str) -> Result<(), HookError> {
    let child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| HookError::Other(format!("failed to spawn sh: {}", e)))?;

    let output = child
        .wait_with_output()
        .await
        .map_err(|e| HookError::Other(format!("failed to wait for sh: {}", e)))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = if stderr.trim().is_empty() {
            output.status.to_string()
        } else {
            stderr.trim().to_string()
        };
        Err(HookError::ExecutionFailed(command.to_string(), detail))
    }
}
