//! Command-line interface module
//!
//! Handles argument parsing and console commands

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
