//! CSV parsing for export lists
//!
//! Export lists are small comma-separated files with a header row. Titles
//! are quoted whenever they contain a comma or a quote; the `csv` reader
//! takes care of quoting, so this module only maps columns to movies.

use crate::error::MatchError;
use crate::export::movie::Movie;
use anyhow::Result;
use csv::{ReaderBuilder, StringRecord};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Column holding the movie title
const NAME_COLUMN: &str = "Name";

/// Column holding the release year
const YEAR_COLUMN: &str = "Year";

/// Parse an export list into its set of movies
///
/// The header row decides which columns hold the title and the year.
/// Blank and whitespace-only lines are skipped. `source` names the list in
/// error messages.
///
/// # Errors
///
/// Returns an error if:
/// - The text is not valid CSV
/// - The header has no `Name` column
/// - A record is too short to hold a title
#[inline]
pub fn parse_movies(text: &str, source: &str) -> Result<BTreeSet<Movie>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut movies = BTreeSet::new();
    if text.trim().is_empty() {
        warn!("{source} is empty");
        return Ok(movies);
    }

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let header = reader
        .headers()
        .map_err(|e| csv_error(source, &e))?
        .clone();

    let name_index = column_index(&header, NAME_COLUMN).ok_or_else(|| {
        MatchError::parse(format!(
            "{source}: header has no '{NAME_COLUMN}' column (found: {})",
            header.iter().collect::<Vec<_>>().join(", ")
        ))
    })?;
    let year_index = column_index(&header, YEAR_COLUMN);
    if year_index.is_none() {
        debug!("{source} has no '{YEAR_COLUMN}' column, years left empty");
    }

    for result in reader.records() {
        let record = result.map_err(|e| csv_error(source, &e))?;
        let line = record.position().map_or(0, csv::Position::line);

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let Some(title) = record.get(name_index) else {
            return Err(MatchError::parse(format!(
                "{source}: line {line}: expected at least {} fields, found {}",
                name_index + 1,
                record.len()
            ))
            .into());
        };

        if title.trim().is_empty() {
            warn!("{source}: line {line}: skipping entry without a title");
            continue;
        }

        let year = year_index
            .and_then(|index| record.get(index))
            .unwrap_or("");

        movies.insert(Movie::new(title, year));
    }

    debug!("Parsed {} movies from {source}", movies.len());
    Ok(movies)
}

/// Find a header column by name, ignoring case and surrounding whitespace
fn column_index(header: &StringRecord, column: &str) -> Option<usize> {
    header
        .iter()
        .position(|field| field.trim().eq_ignore_ascii_case(column))
}

fn csv_error(source: &str, err: &csv::Error) -> MatchError {
    match err.position() {
        Some(position) => MatchError::parse(format!(
            "{source}: line {}: {err}",
            position.line()
        )),
        None => MatchError::parse(format!("{source}: {err}")),
    }
}
