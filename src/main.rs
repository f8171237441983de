//! pomodoro-bar - A Pomodoro timer for status bars
//!
//! Alternates focused work with breaks:
//! - 25 minutes of focused work
//! - 5 minutes of short break
//! - 15 minutes of long break after 4 pomodoros
//!
//! The status is printed once per second for polybar, xmobar and friends.

use std::io;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tokio::runtime::Builder;
use tokio::sync::mpsc;

use pomodoro_bar::cli::{Cli, Commands, TimerSettings};
use pomodoro_bar::timer::{run_timer, shutdown_signal, spawn_control_listener};

/// Main entry point
fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    let runtime = match Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: failed to start the async runtime: {}", e);
            std::process::exit(1);
        }
    };

    // Execute command
    let result = runtime.block_on(execute(cli));

    // Hook tasks still in flight are dropped, which kills their children.
    runtime.shutdown_background();

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr; stdout carries only status lines.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
            Ok(())
        }
        None => {
            let settings = match TimerSettings::resolve(&cli.timer) {
                Ok(settings) => settings,
                Err(e) => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
            };
            run(settings).await
        }
    }
}

/// Runs the timer until it is interrupted.
async fn run(settings: TimerSettings) -> Result<()> {
    let (control_tx, control_rx) = mpsc::unbounded_channel();
    let _listener = spawn_control_listener(control_tx)?;

    tokio::select! {
        result = run_timer(settings, io::stdout(), control_rx) => {
            let lines = result?;
            tracing::debug!(lines, "Timer finished");
        }
        signal = shutdown_signal() => {
            tracing::info!("Received {}, exiting", signal?);
        }
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["pomodoro-bar"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_completions() {
        let cli = Cli::parse_from(["pomodoro-bar", "completions", "fish"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["pomodoro-bar", "--verbose"]);
        assert!(cli.verbose);
    }
}
