//! Status line emission.
//!
//! Every status is written as exactly one line and flushed right away, so a
//! status bar reading the pipe never waits on a buffer.

use std::io::Write;

use anyhow::{Context, Result};

use super::template::Template;
use crate::types::StatusSnapshot;

/// How status lines are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Render through a user template
    Template(Template),
    /// Serialize the snapshot as one JSON object per line
    Json,
}

impl Default for OutputMode {
    fn default() -> Self {
        OutputMode::Template(Template::default())
    }
}

/// Writes rendered status lines to a sink, normally stdout.
pub struct StatusEmitter<W: Write> {
    writer: W,
    mode: OutputMode,
    lines_written: u64,
}

impl<W: Write> StatusEmitter<W> {
    /// Creates an emitter over the given writer.
    pub fn new(writer: W, mode: OutputMode) -> Self {
        Self {
            writer,
            mode,
            lines_written: 0,
        }
    }

    /// Renders a snapshot without writing it.
    pub fn render(&self, snapshot: &StatusSnapshot) -> Result<String> {
        match &self.mode {
            OutputMode::Template(template) => Ok(template.render(snapshot)),
            OutputMode::Json => {
                serde_json::to_string(snapshot).context("Failed to serialize status snapshot")
            }
        }
    }

    /// Writes one status line and flushes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer is closed, e.g. the reading end of a
    /// pipe went away.
    pub fn emit(&mut self, snapshot: &StatusSnapshot) -> Result<()> {
        let line = self.render(snapshot)?;
        writeln!(self.writer, "{}", line).context("Failed to write status line")?;
        self.writer.flush().context("Failed to flush status line")?;
        self.lines_written += 1;
        Ok(())
    }

    /// Number of lines written so far.
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Consumes the emitter, returning the writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
