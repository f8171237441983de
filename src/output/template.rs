//! Status line templates.
//!
//! A template is parsed once at startup into literal text and placeholders,
//! so a malformed format string is rejected before the timer starts.
//! `{{` and `}}` produce literal braces.

use std::str::FromStr;

use thiserror::Error;

use super::format::{format_hhmmss, progress_bar};
use crate::types::StatusSnapshot;

/// Errors that can occur while parsing a template.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The placeholder name is not recognised.
    #[error(
        "unknown placeholder '{{{0}}}' (expected one of: {names})",
        names = Placeholder::NAMES.join(", ")
    )]
    UnknownPlaceholder(String),

    /// A `{` is never closed.
    #[error("unclosed '{{' at byte {0}")]
    UnclosedBrace(usize),

    /// A `}` has no opening brace.
    #[error("unmatched '}}' at byte {0}")]
    UnmatchedBrace(usize),
}

/// Values a template can interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Phase name, e.g. `short_break`
    Phase,
    /// Upper-case phase label, e.g. `BREAK`
    Label,
    /// Remaining time as `MM:SS` or `HH:MM:SS`
    Time,
    /// Remaining seconds
    Remaining,
    /// Whole remaining minutes, zero padded
    Minutes,
    /// Seconds part of the remaining time, zero padded
    Seconds,
    /// Session number
    Session,
    /// Completed work intervals
    Cycle,
    /// Cycle progress bar
    Progress,
}

impl Placeholder {
    /// Every accepted placeholder name, in documentation order.
    pub const NAMES: [&'static str; 9] = [
        "phase",
        "label",
        "time",
        "remaining",
        "minutes",
        "seconds",
        "session",
        "cycle",
        "progress",
    ];

    fn render(self, snapshot: &StatusSnapshot) -> String {
        let remaining = snapshot.remaining_seconds;
        match self {
            Placeholder::Phase => snapshot.phase.as_str().to_string(),
            Placeholder::Label => snapshot.phase.label().to_string(),
            Placeholder::Time => format_hhmmss(remaining),
            Placeholder::Remaining => remaining.to_string(),
            Placeholder::Minutes => format!("{:02}", remaining / 60),
            Placeholder::Seconds => format!("{:02}", remaining % 60),
            Placeholder::Session => snapshot.session.to_string(),
            Placeholder::Cycle => snapshot.cycle_count.to_string(),
            Placeholder::Progress => progress_bar(snapshot),
        }
    }
}

impl FromStr for Placeholder {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phase" => Ok(Placeholder::Phase),
            "label" => Ok(Placeholder::Label),
            "time" => Ok(Placeholder::Time),
            "remaining" => Ok(Placeholder::Remaining),
            "minutes" => Ok(Placeholder::Minutes),
            "seconds" => Ok(Placeholder::Seconds),
            "session" => Ok(Placeholder::Session),
            "cycle" => Ok(Placeholder::Cycle),
            "progress" => Ok(Placeholder::Progress),
            other => Err(TemplateError::UnknownPlaceholder(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Placeholder),
}

/// A parsed status line template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Template used when none is configured.
    pub const DEFAULT: &'static str = "[{session}] {label} {time}";

    /// Parses a format string.
    ///
    /// # Errors
    ///
    /// Returns an error on unknown placeholders or unbalanced braces.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, ch)) => name.push(ch),
                            None => return Err(TemplateError::UnclosedBrace(pos)),
                        }
                    }
                    let placeholder = name.trim().parse::<Placeholder>()?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(placeholder));
                }
                '}' => return Err(TemplateError::UnmatchedBrace(pos)),
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    /// Renders the template for one tick.
    pub fn render(&self, snapshot: &StatusSnapshot) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(placeholder) => out.push_str(&placeholder.render(snapshot)),
            }
        }
        out
    }

    /// Returns the placeholders used, in order of appearance.
    #[cfg(test)]
    pub fn placeholders(&self) -> Vec<Placeholder> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Field(placeholder) => Some(*placeholder),
                Segment::Literal(_) => None,
            })
            .collect()
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::parse(Self::DEFAULT).unwrap_or_else(|_| Self {
            segments: Vec::new(),
        })
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PomodoroConfig, TimerState};

    fn snapshot_with_remaining(seconds: u32) -> StatusSnapshot {
        let mut state = TimerState::new(PomodoroConfig::default());
        state.remaining_seconds = seconds;
        state.snapshot()
    }

    mod parse_tests {
        use super::*;

        #[test]
        fn test_default_template_parses() {
            let template = Template::default();
            assert_eq!(
                template.placeholders(),
                vec![Placeholder::Session, Placeholder::Label, Placeholder::Time]
            );
        }

        #[test]
        fn test_all_names_parse() {
            for name in Placeholder::NAMES {
                assert!(name.parse::<Placeholder>().is_ok(), "{} should parse", name);
            }
        }

        #[test]
        fn test_whitespace_inside_braces() {
            let template = Template::parse("{ time }").unwrap();
            assert_eq!(template.placeholders(), vec![Placeholder::Time]);
        }

        #[test]
        fn test_unknown_placeholder() {
            let err = Template::parse("{session} {bogus}").unwrap_err();
            assert_eq!(err, TemplateError::UnknownPlaceholder("bogus".to_string()));
            assert!(err.to_string().contains("{bogus}"));
            assert!(err.to_string().contains("progress"));
        }

        #[test]
        fn test_unclosed_brace() {
            let err = Template::parse("abc {time").unwrap_err();
            assert_eq!(err, TemplateError::UnclosedBrace(4));
        }

        #[test]
        fn test_unmatched_closing_brace() {
            let err = Template::parse("time}").unwrap_err();
            assert_eq!(err, TemplateError::UnmatchedBrace(4));
        }

        #[test]
        fn test_literal_only() {
            let template = Template::parse("POMODORO").unwrap();
            assert!(template.placeholders().is_empty());
        }
    }

    mod render_tests {
        use super::*;

        #[test]
        fn test_default_render() {
            let template = Template::default();
            assert_eq!(template.render(&snapshot_with_remaining(1500)), "[1] WORK 25:00");
        }

        #[test]
        fn test_escaped_braces() {
            let template = Template::parse("{{{time}}}").unwrap();
            assert_eq!(template.render(&snapshot_with_remaining(61)), "{01:01}");
        }

        #[test]
        fn test_minutes_and_seconds_fields() {
            let template = Template::parse("{minutes}m{seconds}s ({remaining})").unwrap();
            assert_eq!(template.render(&snapshot_with_remaining(3725)), "62m05s (3725)");
        }

        #[test]
        fn test_phase_cycle_progress_fields() {
            let mut state = TimerState::new(PomodoroConfig::default());
            state.complete_phase();
            let template = Template::parse("{phase}|{cycle}|{progress}").unwrap();
            assert_eq!(
                template.render(&state.snapshot()),
                "short_break|1|w-[b]-w-b-w-b-w-l"
            );
        }

        #[test]
        fn test_paused_label() {
            let mut state = TimerState::new(PomodoroConfig::default());
            state.pause();
            let template = Template::parse("{label} {phase}").unwrap();
            assert_eq!(template.render(&state.snapshot()), "PAUSE paused");
        }

        #[test]
        fn test_escaped_polybar_markup() {
            let template = Template::parse("%{{F#e06c75}}{time}%{{F-}}").unwrap();
            assert_eq!(
                template.render(&snapshot_with_remaining(90)),
                "%{F#e06c75}01:30%{F-}"
            );
        }
    }
}
