//! Export archive module
//!
//! Reads a person's zipped export and turns its CSV lists into sets of movies

pub mod archive;
pub mod csv;
pub mod movie;
pub mod profile;

pub use archive::{ExportArchive, ExportLayout};
pub use movie::Movie;
pub use profile::Profile;
