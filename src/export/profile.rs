//! A person's three movie lists

use crate::compare::ListKind;
use crate::error::MatchError;
use crate::export::archive::{ExportArchive, ExportLayout};
use crate::export::csv::parse_movies;
use crate::export::movie::Movie;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

/// Everything loaded from one person's export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub watched: BTreeSet<Movie>,
    pub liked: BTreeSet<Movie>,
    pub watchlist: BTreeSet<Movie>,
}

impl Profile {
    /// Load a profile from an export archive on disk
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The archive does not exist or cannot be read
    /// - The archive is missing one of the lists in `layout`
    /// - One of the lists cannot be parsed
    #[inline]
    pub fn load(
        system: &dyn System,
        name: &str,
        path: &Path,
        layout: &ExportLayout,
    ) -> Result<Self> {
        info!("loading {name} from {}", path.display());

        if !system.is_file(path) {
            return Err(MatchError::archive(format!(
                "Export archive not found: {}",
                path.display()
            ))
            .into());
        }

        let bytes = system
            .read(path)
            .map_err(|e| MatchError::io(format!("Failed to read {}: {e}", path.display())))?;

        let label = path.display().to_string();
        let mut archive = ExportArchive::open(bytes, &label)?;

        let profile = Self::from_archive(name, &mut archive, layout)
            .with_context(|| format!("Failed to load {name}'s export"))?;

        debug!(
            "{name}: {} watched, {} liked, {} watchlisted",
            profile.watched.len(),
            profile.liked.len(),
            profile.watchlist.len()
        );

        Ok(profile)
    }

    /// Parse the three lists out of an already opened archive
    ///
    /// # Errors
    ///
    /// Returns an error if any list is missing or malformed
    #[inline]
    pub fn from_archive(
        name: &str,
        archive: &mut ExportArchive,
        layout: &ExportLayout,
    ) -> Result<Self> {
        let mut read_list = |member: &str| -> Result<BTreeSet<Movie>> {
            let text = archive.read_text(member)?;
            parse_movies(&text, member)
        };

        Ok(Self {
            name: name.to_owned(),
            watched: read_list(&layout.watched)?,
            liked: read_list(&layout.liked)?,
            watchlist: read_list(&layout.watchlist)?,
        })
    }

    /// Get one of the three lists
    #[must_use]
    #[inline]
    pub const fn list(&self, kind: ListKind) -> &BTreeSet<Movie> {
        match kind {
            ListKind::Watched => &self.watched,
            ListKind::Liked => &self.liked,
            ListKind::Watchlist => &self.watchlist,
        }
    }
}
