//! Command definitions for the pomodoro-bar CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{Args, Parser, Subcommand};

use crate::hooks::DEFAULT_TIMEOUT_SECONDS;
use crate::output::{Template, TemplateError};
use crate::types::{MAX_CYCLES, MAX_DURATION_MINUTES, MAX_START_SESSION};

// ============================================================================
// CLI Structure
// ============================================================================

/// pomodoro-bar - A pausable Pomodoro timer for status bars
#[derive(Parser, Debug)]
#[command(
    name = "pomodoro-bar",
    version,
    about = "A pausable Pomodoro timer that prints one status line per second",
    long_about = "A Pomodoro timer for polybar, xmobar and other status bars.\n\
                  Prints one status line per second to stdout.\n\
                  Send SIGUSR1 to pause/resume and SIGUSR2 to skip a break.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Subcommand to execute; runs the timer when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Timer options
    #[command(flatten)]
    pub timer: TimerArgs,

    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Timer Arguments
// ============================================================================

/// Arguments for the timer loop
#[derive(Args, Debug, Clone)]
pub struct TimerArgs {
    /// Minutes per work session
    #[arg(
        short,
        long,
        value_name = "MIN",
        default_value = "25",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DURATION_MINUTES))
    )]
    pub work: u32,

    /// Minutes per short break
    #[arg(
        short = 'b',
        long,
        value_name = "MIN",
        default_value = "5",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DURATION_MINUTES))
    )]
    pub short_break: u32,

    /// Minutes per long break
    #[arg(
        short,
        long,
        value_name = "MIN",
        default_value = "15",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DURATION_MINUTES))
    )]
    pub long_break: u32,

    /// Work sessions before a long break
    #[arg(
        short,
        long,
        value_name = "NUM",
        default_value = "4",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_CYCLES))
    )]
    pub cycles: u32,

    /// Session number on start
    #[arg(
        short,
        long,
        value_name = "NUM",
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_START_SESSION))
    )]
    pub session: u32,

    /// Status line template. Placeholders: {phase} {label} {time}
    /// {remaining} {minutes} {seconds} {session} {cycle} {progress}
    #[arg(
        short,
        long,
        value_name = "TEMPLATE",
        default_value = Template::DEFAULT,
        value_parser = parse_template,
        conflicts_with = "json"
    )]
    pub format: Template,

    /// Print each status as a JSON object instead of a template
    #[arg(long)]
    pub json: bool,

    /// Shell command to run when a work session ends (e.g. "xset dpms force off")
    #[arg(long, value_name = "CMD")]
    pub cmd_work: Option<String>,

    /// Like --cmd-work but for a break that was not skipped
    #[arg(long, value_name = "CMD")]
    pub cmd_break: Option<String>,

    /// Seconds a hook command may run before it is killed
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECONDS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub hook_timeout: u64,

    /// Stop after this many ticks
    #[arg(long, hide = true, value_name = "N")]
    pub max_ticks: Option<u64>,

    /// Milliseconds per tick
    #[arg(
        long,
        hide = true,
        value_name = "MS",
        default_value = "1000",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_millis: u64,
}

impl Default for TimerArgs {
    fn default() -> Self {
        Self {
            work: 25,
            short_break: 5,
            long_break: 15,
            cycles: 4,
            session: 1,
            format: Template::default(),
            json: false,
            cmd_work: None,
            cmd_break: None,
            hook_timeout: DEFAULT_TIMEOUT_SECONDS,
            max_ticks: None,
            tick_millis: 1000,
        }
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Parses the status line template.
fn parse_template(s: &str) -> Result<Template, TemplateError> {
    Template::parse(s)
}

// ============================================================================
// Tests
// ============================================================================
