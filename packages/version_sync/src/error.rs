// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while reading, checking or rewriting version files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a synchronization run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyncError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The manifest could not be written back.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The manifest is not valid JSON.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Manifest path.
        path: PathBuf,
        /// Parser diagnostic.
        source: serde_json::Error,
    },

    /// The manifest parsed, but its top-level value is not an object.
    #[error("{} does not contain a JSON object", path.display())]
    NotAnObject {
        /// Manifest path.
        path: PathBuf,
    },

    /// The updated manifest could not be serialized.
    #[error("failed to serialize {}: {source}", path.display())]
    Serialize {
        /// Manifest path.
        path: PathBuf,
        /// Serializer diagnostic.
        source: serde_json::Error,
    },

    /// The `VERSION` file is blank once whitespace is trimmed.
    #[error("VERSION file is empty: {}", path.display())]
    EmptyVersion {
        /// Version file path.
        path: PathBuf,
    },

    /// The `VERSION` file does not hold an `X.Y.Z` version.
    #[error("invalid version format: {version}; version must be in format: X.Y.Z (e.g., 2.0.7)")]
    InvalidFormat {
        /// The rejected, trimmed content.
        version: String,
    },
}

/// Coarse classification of [`SyncError`] for callers that only care about
/// what went wrong, not where.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A file was missing, unreadable or unwritable.
    Io,
    /// The manifest was not valid JSON or not a JSON object, or could not be
    /// serialized back.
    Parse,
    /// The version file was blank.
    EmptyVersion,
    /// The version file did not match `X.Y.Z`.
    InvalidFormat,
}

impl SyncError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } | Self::Write { .. } => ErrorKind::Io,
            Self::Parse { .. } | Self::NotAnObject { .. } | Self::Serialize { .. } => {
                ErrorKind::Parse
            }
            Self::EmptyVersion { .. } => ErrorKind::EmptyVersion,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
        }
    }
}

/// Result alias for synchronization operations.
pub type Result<T, E = SyncError> = std::result::Result<T, E>;
