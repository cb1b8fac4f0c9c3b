//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers every
//! failure the library can surface. Line-level irregularities in a transcript
//! (malformed headers, misattributed system lines, media placeholders) are
//! *not* errors: they are classifications reported through
//! [`LineClass`](crate::reassembly::LineClass) and tallied in
//! [`ReassemblyStats`](crate::reassembly::ReassemblyStats).
//!
//! The only fatal conditions are I/O failures and invalid configuration.
//! Both abort processing of a single chat file; batch callers keep going.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::reassembly::Reassembly;
///
/// fn my_function() -> Result<Option<Reassembly>> {
///     // ... operations that may fail
///     Ok(None)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred without a known path.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The chat transcript could not be opened or read.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The file is not valid UTF-8
    #[error("Failed to read chat {}: {source}", path.display())]
    Input {
        /// The transcript being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An output artifact could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Output {
        /// The artifact being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A path could not be used as an input or output location.
    #[error("Invalid path {}: {message}", path.display())]
    InvalidPath {
        /// The offending path
        path: PathBuf,
        /// Description of what's wrong
        message: String,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// The configuration field
        field: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Chart rendering or encoding error.
    #[cfg(feature = "charts")]
    #[error("Chart error: {0}")]
    Image(#[from] image::ImageError),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates an input error for a transcript path.
    pub fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatstatsError::Input {
            path: path.into(),
            source,
        }
    }

    /// Creates an output error for an artifact path.
    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatstatsError::Output {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid path error.
    pub fn invalid_path(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Returns `true` if this error came from reading or writing a file.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ChatstatsError::Io(_) | ChatstatsError::Input { .. } | ChatstatsError::Output { .. }
        )
    }

    /// Returns `true` if the transcript itself could not be read.
    pub fn is_input(&self) -> bool {
        matches!(self, ChatstatsError::Input { .. })
    }

    /// Returns `true` if an output artifact could not be written.
    pub fn is_output(&self) -> bool {
        matches!(self, ChatstatsError::Output { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ChatstatsError::InvalidConfig { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
