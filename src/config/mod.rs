//! Configuration management module
//!
//! Decides who is being compared and how their exports are laid out, either
//! from positional arguments or from a YAML configuration file, then applies
//! command-line overrides on top.

pub mod validation;
pub mod yaml;

use crate::cli::Args;
use crate::error::MatchError;
use crate::export::ExportLayout;
use crate::system::System;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Usage line printed when the two people are missing
pub const USAGE: &str =
    "Usage: cinematch <name person 1> <zip person 1> <name person 2> <zip person 2>";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The two people to compare, in display order
    pub people: Vec<PersonConfig>,

    /// Member paths inside each export archive
    #[serde(default)]
    pub layout: ExportLayout,
}

/// One person and the export archive holding their lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonConfig {
    pub name: String,
    pub export: String,
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, malformed or invalid
    #[inline]
    pub fn load_from_file(system: &dyn System, path: &str) -> Result<Self> {
        yaml::load_config(system, path)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not describe exactly two
    /// people with usable exports
    #[inline]
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    /// Build the configuration for a run from command-line arguments
    ///
    /// Positional people win over `--config`. Layout flags override whatever
    /// layout the configuration file declared.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Neither positional people nor a configuration file are given
    /// - The positional arguments are not exactly four
    /// - The configuration file cannot be loaded
    /// - The merged configuration is invalid
    #[inline]
    pub fn from_args(args: &Args, system: &dyn System) -> Result<Self> {
        let mut config = if !args.people.is_empty() {
            Self::from_positionals(&args.people)?
        } else if let Some(path) = args.config.as_deref() {
            debug!("Loading people from {path}");
            Self::load_from_file(system, path)?
        } else {
            return Err(MatchError::usage(USAGE).into());
        };

        if let Some(watched) = args.watched_file.as_ref() {
            config.layout.watched.clone_from(watched);
        }
        if let Some(liked) = args.liked_file.as_ref() {
            config.layout.liked.clone_from(liked);
        }
        if let Some(watchlist) = args.watchlist_file.as_ref() {
            config.layout.watchlist.clone_from(watchlist);
        }

        config.validate()?;
        Ok(config)
    }

    fn from_positionals(values: &[String]) -> Result<Self> {
        let [first_name, first_export, second_name, second_export] = values else {
            return Err(MatchError::usage(format!(
                "expected 4 arguments, got {}\n{USAGE}",
                values.len()
            ))
            .into());
        };

        Ok(Self {
            people: vec![
                PersonConfig {
                    name: first_name.clone(),
                    export: first_export.clone(),
                },
                PersonConfig {
                    name: second_name.clone(),
                    export: second_export.clone(),
                },
            ],
            layout: ExportLayout::default(),
        })
    }
}
