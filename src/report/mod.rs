//! Report rendering
//!
//! Reports are written to any `io::Write` so the console, one-shot mode and
//! tests share the same code. Text output mirrors what a person reads at the
//! prompt; JSON output carries the same data for scripting.

use crate::compare::{CrossPair, ListKind, Stats};
use crate::export::Movie;
use anyhow::{Context as _, Result};
use core::str::FromStr;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;

/// Console help text
pub const HELP: &str = "\
Options:
h/help - show this help
s/stats - show stats

m/movies - list shared watched movies
l/liked - list shared liked movies
w/watchlist - list shared movies in watchlist

ml/movies_liked - list movies that one person watched and the other liked
mw/movies_watchlist - list movies that one person watched and the other watchlisted
lw/liked_watchlist - list movies that one person liked and the other watchlisted

q/quit - quit";

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON document per report
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {s}. Use 'text' or 'json'")),
        }
    }
}

/// A list of movies with the sentence that introduces it
#[derive(Debug, Serialize)]
struct ListReport<'src> {
    heading: String,
    count: usize,
    movies: Vec<&'src Movie>,
}

impl<'src> ListReport<'src> {
    fn new(heading: String, movies: &'src BTreeSet<Movie>) -> Self {
        Self {
            heading,
            count: movies.len(),
            movies: movies.iter().collect(),
        }
    }
}

/// Renders reports in one output format
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    #[must_use]
    #[inline]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Write the command overview
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written
    #[inline]
    pub fn help(&self, out: &mut dyn Write) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{HELP}").context("Failed to write help")?,
            OutputFormat::Json => {
                let commands: Vec<&str> = HELP
                    .lines()
                    .skip(1)
                    .filter(|line| !line.is_empty())
                    .collect();
                write_json(out, &serde_json::json!({ "commands": commands }))?;
            }
        }
        Ok(())
    }

    /// Write list sizes and overlap counts
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written
    #[inline]
    pub fn stats(&self, out: &mut dyn Write, stats: &Stats) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                write_stats_text(out, stats).context("Failed to write stats")
            }
            OutputFormat::Json => write_json(out, stats),
        }
    }

    /// Write the movies both people have on the same list
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written
    #[inline]
    pub fn shared(
        &self,
        out: &mut dyn Write,
        kind: ListKind,
        movies: &BTreeSet<Movie>,
    ) -> Result<()> {
        let heading = format!("you both share {} {kind} movies", movies.len());
        self.list(out, ListReport::new(heading, movies))
    }

    /// Write the movies `from_name` has on `pair.from` and `to_name` on `pair.to`
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written
    #[inline]
    pub fn cross(
        &self,
        out: &mut dyn Write,
        from_name: &str,
        to_name: &str,
        pair: CrossPair,
        movies: &BTreeSet<Movie>,
    ) -> Result<()> {
        let heading = format!(
            "{from_name} {} {} movies that {to_name} {}",
            pair.from,
            movies.len(),
            pair.to
        );
        self.list(out, ListReport::new(heading, movies))
    }

    fn list(&self, out: &mut dyn Write, report: ListReport<'_>) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(out, "-> {}", report.heading).context("Failed to write report")?;
                for movie in &report.movies {
                    writeln!(out, "{movie}").context("Failed to write report")?;
                }
                Ok(())
            }
            OutputFormat::Json => write_json(out, &report),
        }
    }
}

fn write_stats_text(out: &mut dyn Write, stats: &Stats) -> std::io::Result<()> {
    writeln!(out, "loaded info:")?;
    for person in &stats.people {
        writeln!(out, "    -> {}:", person.name)?;
        writeln!(out, "        watched {} movies", person.watched)?;
        writeln!(out, "        liked {} movies", person.liked)?;
        writeln!(out, "        watchlisted {} movies", person.watchlist)?;
    }

    writeln!(out)?;
    writeln!(out, "shared info:")?;
    writeln!(out, "    -> share {} watched movies", stats.shared.watched)?;
    writeln!(out, "    -> share {} liked movies", stats.shared.liked)?;
    writeln!(out, "    -> share {} movies in watchlist", stats.shared.watchlist)?;

    for pair in stats.cross.chunks(2) {
        writeln!(out)?;
        for count in pair {
            writeln!(
                out,
                "    -> {} {} {} movies that {} {}",
                count.from_person, count.from_list, count.count, count.to_person, count.to_list
            )?;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to serialize report")?;
    writeln!(out).context("Failed to write report")?;
    Ok(())
}
