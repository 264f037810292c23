//! # Decode Errors
//!
//! The only conditions that stop a decode. Malformed content never does;
//! it is reported as diagnostics instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a file from being decoded at all.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The source file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension names neither dialect.
    #[error("Unknown object file type: {} (expected .csv or .b3d)", path.display())]
    UnknownDialect { path: PathBuf },
}

impl DecodeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_dialect(path: impl Into<PathBuf>) -> Self {
        Self::UnknownDialect { path: path.into() }
    }
}
