//! Line sources for the console

use anyhow::{Context as _, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;
use std::io::BufRead;
use tracing::debug;

/// Somewhere console input comes from
pub trait LineSource {
    /// Read the next line, or `None` once input is exhausted or interrupted
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input fails
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive terminal input with line editing and history
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    /// Set up a line editor on the current terminal
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized
    #[inline]
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("Failed to initialize line editor")?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    #[inline]
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty()
                    && let Err(err) = self.editor.add_history_entry(line.as_str())
                {
                    debug!("Failed to record history entry: {err}");
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                debug!("Input interrupted or closed");
                Ok(None)
            }
            Err(err) => Err(err).context("Failed to read console input"),
        }
    }
}

/// Plain buffered input, used when stdin is not a terminal
///
/// No prompt is echoed so piped output contains only reports.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    #[inline]
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    #[inline]
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read console input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// A fixed list of lines, used for `--command` and in tests
#[derive(Debug, Clone, Default)]
pub struct ScriptSource {
    lines: VecDeque<String>,
}

impl ScriptSource {
    #[inline]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptSource {
    #[inline]
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
