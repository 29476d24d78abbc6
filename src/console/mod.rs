//! Interactive command loop
//!
//! Reads commands from a [`LineSource`] and prints the matching report until
//! the user quits or input runs out.

pub mod input;

pub use input::{EditorSource, LineSource, ReaderSource, ScriptSource};

use crate::cli::Command;
use crate::compare::{Comparison, Side};
use crate::report::{OutputFormat, Reporter};
use anyhow::{Context as _, Result};
use std::io::Write;
use tracing::{debug, warn};

/// Prompt shown before each command
pub const PROMPT: &str = ">> ";

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs commands against a loaded comparison
pub struct Console<'src> {
    comparison: &'src Comparison,
    reporter: Reporter,
    format: OutputFormat,
}

impl<'src> Console<'src> {
    #[must_use]
    #[inline]
    pub const fn new(comparison: &'src Comparison, format: OutputFormat) -> Self {
        Self {
            comparison,
            reporter: Reporter::new(format),
            format,
        }
    }

    /// Run a single command
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written
    #[inline]
    pub fn execute(&self, command: Command, out: &mut dyn Write) -> Result<Flow> {
        debug!("Executing {command:?}");

        match command {
            Command::Help => self.reporter.help(out)?,
            Command::Stats => self.reporter.stats(out, &self.comparison.stats())?,
            Command::Shared(kind) => {
                let movies = self.comparison.shared(kind);
                self.reporter.shared(out, kind, &movies)?;
            }
            Command::Cross(pair) => {
                for side in Side::BOTH {
                    let (from, to) = self.comparison.oriented(side);
                    let movies = self.comparison.cross(side, pair);
                    self.reporter
                        .cross(out, &from.name, &to.name, pair, &movies)?;
                }
            }
            Command::Quit => {
                if self.format == OutputFormat::Text {
                    writeln!(out, "bye!").context("Failed to write output")?;
                }
                return Ok(Flow::Quit);
            }
        }

        Ok(Flow::Continue)
    }

    /// Read and run commands until `quit` or end of input
    ///
    /// Unknown commands print a hint and the loop carries on.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read or output cannot be written
    #[inline]
    pub fn run(&self, input: &mut dyn LineSource, out: &mut dyn Write) -> Result<()> {
        loop {
            let Some(line) = input.read_line(PROMPT)? else {
                debug!("End of input");
                return Ok(());
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    let flow = self.execute(command, out)?;
                    out.flush().context("Failed to flush output")?;
                    if flow == Flow::Quit {
                        return Ok(());
                    }
                }
                Err(hint) => {
                    if self.format == OutputFormat::Text {
                        writeln!(out, "{hint}").context("Failed to write output")?;
                    } else {
                        warn!("{hint}");
                    }
                }
            }
        }
    }

    /// Run a fixed list of already parsed commands, stopping at `quit`
    ///
    /// # Errors
    ///
    /// Returns an error if output cannot be written
    #[inline]
    pub fn run_commands(&self, commands: &[Command], out: &mut dyn Write) -> Result<()> {
        for command in commands {
            if self.execute(*command, out)? == Flow::Quit {
                break;
            }
        }
        out.flush().context("Failed to flush output")?;
        Ok(())
    }
}
