//! Error types for stagevis operations.
//!
//! This module provides the main error type [`StagevisError`]. Every variant
//! is fatal: rendering stops at the first error and no output is written.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for stagevis operations.
#[derive(Debug, Error)]
pub enum StagevisError {
    /// An input could not be read or the output could not be written.
    #[error("I/O error on `{}`: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// An input document is not valid JSON or lacks a required field.
    #[error("Failed to parse `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A placement has no instrument in the problem's `musicians` list.
    #[error("Placement {index} has no instrument: the problem lists {musicians} musician(s)")]
    MissingInstrument { index: usize, musicians: usize },

    /// The style configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StagevisError {
    /// Create a new `Io` error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new `Parse` error for the given path.
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
