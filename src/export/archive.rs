//! Zip access for export archives

use crate::error::MatchError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Read as _};
use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipError;

/// Where each list lives inside an export archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportLayout {
    /// Every movie the user logged as watched
    pub watched: String,
    /// Movies the user liked
    pub liked: String,
    /// Movies the user wants to see
    pub watchlist: String,
}

impl Default for ExportLayout {
    #[inline]
    fn default() -> Self {
        Self {
            watched: "watched.csv".to_owned(),
            liked: "likes/films.csv".to_owned(),
            watchlist: "watchlist.csv".to_owned(),
        }
    }
}

/// An export archive held in memory
pub struct ExportArchive {
    label: String,
    zip: ZipArchive<Cursor<Vec<u8>>>,
}

impl ExportArchive {
    /// Open an archive from its raw bytes
    ///
    /// `label` names the archive in error messages, usually its path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The bytes are not a zip archive
    #[inline]
    pub fn open(bytes: Vec<u8>, label: &str) -> Result<Self> {
        let zip = ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
            MatchError::archive(format!("{label} is not a readable zip archive: {e}"))
        })?;
        debug!("Opened {label} ({} entries)", zip.len());

        Ok(Self {
            label: label.to_owned(),
            zip,
        })
    }

    /// Read one member as text, replacing invalid UTF-8 sequences
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The archive has no such member
    /// - The member cannot be decompressed
    #[inline]
    pub fn read_text(&mut self, member: &str) -> Result<String> {
        let mut file = match self.zip.by_name(member) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => {
                return Err(MatchError::archive(format!(
                    "{} has no '{member}'. Is it a complete export?",
                    self.label
                ))
                .into());
            }
            Err(e) => {
                return Err(MatchError::archive(format!(
                    "Failed to open '{member}' in {}: {e}",
                    self.label
                ))
                .into());
            }
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            MatchError::archive(format!(
                "Failed to decompress '{member}' in {}: {e}",
                self.label
            ))
        })?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
