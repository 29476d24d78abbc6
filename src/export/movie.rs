//! Normalized movie identifier

use core::fmt;
use serde::Serialize;

/// A movie as it appears in an export list
///
/// Two entries are the same movie when both title and release year match.
/// Ordering is by title first, then year, which is also the order reports
/// list movies in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Movie {
    pub title: String,
    pub year: String,
}

impl Movie {
    /// Build a movie from raw CSV fields, trimming surrounding whitespace
    #[must_use]
    #[inline]
    pub fn new(title: &str, year: &str) -> Self {
        Self {
            title: title.trim().to_owned(),
            year: year.trim().to_owned(),
        }
    }
}

impl fmt::Display for Movie {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{} ({})", self.title, self.year)
        }
    }
}
