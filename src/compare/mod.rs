//! Overlap computation between two profiles
//!
//! Every report is an intersection of one list from each person: either the
//! same list on both sides ("shared") or two different lists ("cross").

use crate::export::{Movie, Profile};
use core::fmt;
use serde::Serialize;
use std::collections::BTreeSet;

/// The three lists in an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ListKind {
    Watched,
    Liked,
    Watchlist,
}

impl ListKind {
    /// Verb used in report lines ("watched", "liked", "watchlisted")
    #[must_use]
    #[inline]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Watched => "watched",
            Self::Liked => "liked",
            Self::Watchlist => "watchlisted",
        }
    }
}

impl fmt::Display for ListKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Which of the two people a cross report starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Both sides, first person first
    pub const BOTH: [Self; 2] = [Self::First, Self::Second];
}

/// A pairing of two different lists, read as "X `from` movies Y `to`"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossPair {
    pub from: ListKind,
    pub to: ListKind,
}

impl CrossPair {
    /// One watched, the other liked
    pub const WATCHED_LIKED: Self = Self {
        from: ListKind::Watched,
        to: ListKind::Liked,
    };

    /// One watched, the other watchlisted
    pub const WATCHED_WATCHLIST: Self = Self {
        from: ListKind::Watched,
        to: ListKind::Watchlist,
    };

    /// One liked, the other watchlisted
    pub const LIKED_WATCHLIST: Self = Self {
        from: ListKind::Liked,
        to: ListKind::Watchlist,
    };

    /// The pairings reported by `stats`, in display order
    pub const ALL: [Self; 3] = [
        Self::WATCHED_LIKED,
        Self::WATCHED_WATCHLIST,
        Self::LIKED_WATCHLIST,
    ];
}

/// Two loaded profiles side by side
#[derive(Debug, Clone)]
pub struct Comparison {
    pub first: Profile,
    pub second: Profile,
}

impl Comparison {
    #[must_use]
    #[inline]
    pub const fn new(first: Profile, second: Profile) -> Self {
        Self { first, second }
    }

    /// The profile on `side` followed by the other one
    #[must_use]
    #[inline]
    pub const fn oriented(&self, side: Side) -> (&Profile, &Profile) {
        match side {
            Side::First => (&self.first, &self.second),
            Side::Second => (&self.second, &self.first),
        }
    }

    /// Movies on the same list for both people
    #[must_use]
    #[inline]
    pub fn shared(&self, kind: ListKind) -> BTreeSet<Movie> {
        intersect(self.first.list(kind), self.second.list(kind))
    }

    /// Movies on `pair.from` for the person on `side` and on `pair.to` for the other
    #[must_use]
    #[inline]
    pub fn cross(&self, side: Side, pair: CrossPair) -> BTreeSet<Movie> {
        let (from, to) = self.oriented(side);
        intersect(from.list(pair.from), to.list(pair.to))
    }

    /// Counts for every list and every overlap
    #[must_use]
    #[inline]
    pub fn stats(&self) -> Stats {
        let shared = SharedCounts {
            watched: self.shared(ListKind::Watched).len(),
            liked: self.shared(ListKind::Liked).len(),
            watchlist: self.shared(ListKind::Watchlist).len(),
        };

        let mut cross = Vec::with_capacity(CrossPair::ALL.len() * Side::BOTH.len());
        for pair in CrossPair::ALL {
            for side in Side::BOTH {
                let (from, to) = self.oriented(side);
                cross.push(CrossCount {
                    from_person: from.name.clone(),
                    from_list: pair.from,
                    to_person: to.name.clone(),
                    to_list: pair.to,
                    count: self.cross(side, pair).len(),
                });
            }
        }

        Stats {
            people: vec![
                PersonCounts::of(&self.first),
                PersonCounts::of(&self.second),
            ],
            shared,
            cross,
        }
    }
}

fn intersect(a: &BTreeSet<Movie>, b: &BTreeSet<Movie>) -> BTreeSet<Movie> {
    a.intersection(b).cloned().collect()
}

/// Summary of both profiles and their overlaps
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub people: Vec<PersonCounts>,
    pub shared: SharedCounts,
    pub cross: Vec<CrossCount>,
}

/// List sizes for one person
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonCounts {
    pub name: String,
    pub watched: usize,
    pub liked: usize,
    pub watchlist: usize,
}

impl PersonCounts {
    fn of(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            watched: profile.watched.len(),
            liked: profile.liked.len(),
            watchlist: profile.watchlist.len(),
        }
    }
}

/// Sizes of the same-list intersections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SharedCounts {
    pub watched: usize,
    pub liked: usize,
    pub watchlist: usize,
}

/// Size of one directed cross intersection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossCount {
    pub from_person: String,
    pub from_list: ListKind,
    pub to_person: String,
    pub to_list: ListKind,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies(titles: &[&str]) -> BTreeSet<Movie> {
        titles.iter().map(|title| Movie::new(title, "2000")).collect()
    }

    fn comparison() -> Comparison {
        let alice = Profile {
            name: "alice".to_owned(),
            watched: movies(&["A", "B", "C", "D"]),
            liked: movies(&["A", "B"]),
            watchlist: movies(&["X", "Y"]),
        };
        let bob = Profile {
            name: "bob".to_owned(),
            watched: movies(&["B", "C", "X"]),
            liked: movies(&["B", "D"]),
            watchlist: movies(&["A", "Y", "Z"]),
        };
        Comparison::new(alice, bob)
    }

    #[test]
    fn shared_lists() {
        let cmp = comparison();
        assert_eq!(cmp.shared(ListKind::Watched), movies(&["B", "C"]));
        assert_eq!(cmp.shared(ListKind::Liked), movies(&["B"]));
        assert_eq!(cmp.shared(ListKind::Watchlist), movies(&["Y"]));
    }

    #[test]
    fn cross_is_directional() {
        let cmp = comparison();
        // alice watched, bob liked
        assert_eq!(
            cmp.cross(Side::First, CrossPair::WATCHED_LIKED),
            movies(&["B", "D"])
        );
        // bob watched, alice liked
        assert_eq!(
            cmp.cross(Side::Second, CrossPair::WATCHED_LIKED),
            movies(&["B"])
        );
        assert_eq!(
            cmp.cross(Side::Second, CrossPair::WATCHED_WATCHLIST),
            movies(&["X"])
        );
        assert_eq!(
            cmp.cross(Side::First, CrossPair::LIKED_WATCHLIST),
            movies(&["A"])
        );
        assert!(cmp.cross(Side::Second, CrossPair::LIKED_WATCHLIST).is_empty());
    }

    #[test]
    fn year_distinguishes_movies() {
        let mut cmp = comparison();
        cmp.second.watched.insert(Movie::new("A", "1990"));
        assert!(!cmp.shared(ListKind::Watched).contains(&Movie::new("A", "1990")));
    }

    #[test]
    fn stats_counts_everything() {
        let stats = comparison().stats();
        assert_eq!(stats.people[0].watched, 4);
        assert_eq!(stats.people[1].watchlist, 3);
        assert_eq!(
            stats.shared,
            SharedCounts {
                watched: 2,
                liked: 1,
                watchlist: 1
            }
        );
        let counts: Vec<usize> = stats.cross.iter().map(|c| c.count).collect();
        assert_eq!(counts, [2, 1, 1, 1, 1, 0]);
        assert_eq!(stats.cross[1].from_person, "bob");
        assert_eq!(stats.cross[1].to_person, "alice");
    }

    #[test]
    fn verbs() {
        assert_eq!(ListKind::Watchlist.to_string(), "watchlisted");
        assert_eq!(ListKind::Watched.verb(), "watched");
    }
}
