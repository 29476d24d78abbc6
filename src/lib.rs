//! `cinematch` - A CLI tool for comparing two film-diary exports
//!
//! This library loads two people's zipped exports (watched, liked and
//! watchlist lists), computes where the lists overlap and reports the
//! overlaps through an interactive console or one-shot commands.

pub mod cli;
pub mod compare;
pub mod config;
pub mod console;
pub mod error;
pub mod export;
pub mod report;
pub mod system;

use anyhow::Result;
use cli::{Args, Command};
use compare::Comparison;
use config::Config;
use console::{Console, EditorSource, ReaderSource};
use error::MatchError;
use export::Profile;
use report::OutputFormat;
use std::io::{self, IsTerminal as _};
use std::path::Path;
use system::System;

/// Main entry point for the cinematch library
///
/// # Errors
///
/// Returns an error if the arguments are unusable, an export cannot be
/// loaded, or console input/output fails
#[inline]
pub fn run(args: &Args, system: &dyn System) -> Result<()> {
    let format = args
        .output_format
        .parse::<OutputFormat>()
        .map_err(MatchError::usage)?;

    let commands = args
        .commands
        .iter()
        .map(|command| command.parse::<Command>().map_err(MatchError::usage))
        .collect::<Result<Vec<_>, _>>()?;

    let config = Config::from_args(args, system)?;
    let comparison = load_comparison(system, &config)?;
    let console = Console::new(&comparison, format);
    let mut out = io::stdout();

    if !commands.is_empty() {
        return console.run_commands(&commands, &mut out);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        let mut source = EditorSource::new()?;
        console.run(&mut source, &mut out)
    } else {
        let mut source = ReaderSource::new(stdin.lock());
        console.run(&mut source, &mut out)
    }
}

/// Load both people named in the configuration
///
/// # Errors
///
/// Returns an error if either export cannot be loaded
#[inline]
pub fn load_comparison(system: &dyn System, config: &Config) -> Result<Comparison> {
    let (first, second) = config::validation::people_pair(config)?;

    let load = |person: &config::PersonConfig| {
        Profile::load(system, &person.name, Path::new(&person.export), &config.layout)
    };

    Ok(Comparison::new(load(first)?, load(second)?))
}
