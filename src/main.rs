//! # `cinematch`
//!
//! `cinematch` compares the film-diary exports of two people and lists the
//! movies they have in common: watched by both, liked by both, on both
//! watchlists, or watched by one and liked or watchlisted by the other.
//!
//! ## Usage
//!
//! **Interactive console:**
//! ```sh
//! cinematch alice ./alice-export.zip bob ./bob-export.zip
//! >> s
//! ```
//!
//! **One-shot commands:**
//! ```sh
//! cinematch -c stats -c movies_liked alice ./alice.zip bob ./bob.zip
//! ```
//!
//! **With config:**
//! ```sh
//! cinematch --config cinematch.yaml
//! ```
//!
//! Type `h` at the prompt for the list of commands.
//!
//! ---
//! © 2024 `cinematch` Authors. MIT or Apache-2.0 licensed.

use anyhow::Result;
use cinematch::cli::Args;
use cinematch::error::MatchError;
use cinematch::system::RealSystem;
use clap::Parser as _;
use std::io::IsTerminal as _;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Only errors are logged alongside JSON output
    let log_level = if args.output_format.eq_ignore_ascii_case("json") {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let system = RealSystem::new();
    match cinematch::run(&args, &system) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{err:#}");
            std::process::exit(
                err.downcast_ref::<MatchError>()
                    .map_or(1, MatchError::exit_code),
            );
        }
    }
}
