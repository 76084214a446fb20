//! Error types for meetslot.
//!
//! Library crates use [`MeetslotError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all meetslot operations.
///
/// The consolidation core itself never fails; every variant here comes from
/// the I/O adapters around it.
#[derive(Debug, thiserror::Error)]
pub enum MeetslotError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed CSV (bad quoting, invalid UTF-8, ...).
    #[error("parse error: {message}")]
    Parse { message: String },

    /// An input record without exactly two fields.
    #[error("wrong number of fields in line {line}: expected 2, found {found}")]
    Format { line: usize, found: usize },

    /// Serializing an output artifact failed.
    #[error("render error: {0}")]
    Render(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MeetslotError>;

impl MeetslotError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a field-count error for the record at `line` (zero-based).
    pub fn format(line: usize, found: usize) -> Self {
        Self::Format { line, found }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
