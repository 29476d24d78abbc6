//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for cinematch operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatchError {
    /// Usage Error - the two people to compare were not given
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// Configuration Error - missing or invalid configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Archive Error - export archive unreadable or missing a list
    #[error("Archive error: {message}")]
    Archive { message: String },

    /// Parse Error - a list inside the export is malformed
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// IO Error - reading input or writing a report failed
    #[error("IO error: {message}")]
    Io { message: String },
}

impl MatchError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Usage { .. } => 1,
            Self::Configuration { .. } => 2,
            Self::Archive { .. } => 3,
            Self::Parse { .. } => 4,
            Self::Io { .. } => 5,
        }
    }

    /// Create a usage error
    #[inline]
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an archive error
    #[inline]
    pub fn archive<S: Into<String>>(message: S) -> Self {
        Self::Archive {
            message: message.into(),
        }
    }

    /// Create a parse error
    #[inline]
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an IO error
    #[inline]
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}
