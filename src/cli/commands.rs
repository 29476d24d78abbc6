//! Console commands

use crate::compare::{CrossPair, ListKind};
use core::str::FromStr;

/// One thing the console can be asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Command {
    Help,
    Stats,
    /// Same list for both people
    Shared(ListKind),
    /// Two different lists, reported in both directions
    Cross(CrossPair),
    Quit,
}

impl FromStr for Command {
    type Err = String;

    /// Parse console input, ignoring case and surrounding whitespace
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "help" => Ok(Self::Help),
            "s" | "stats" => Ok(Self::Stats),
            "m" | "movies" => Ok(Self::Shared(ListKind::Watched)),
            "l" | "liked" => Ok(Self::Shared(ListKind::Liked)),
            "w" | "watchlist" => Ok(Self::Shared(ListKind::Watchlist)),
            "ml" | "movies_liked" => Ok(Self::Cross(CrossPair::WATCHED_LIKED)),
            "mw" | "movies_watchlist" => Ok(Self::Cross(CrossPair::WATCHED_WATCHLIST)),
            "lw" | "liked_watchlist" => Ok(Self::Cross(CrossPair::LIKED_WATCHLIST)),
            "q" | "quit" => Ok(Self::Quit),
            other => Err(format!(
                "Unknown command '{other}'. Type 'h' for the list of commands"
            )),
        }
    }
}
