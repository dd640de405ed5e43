//! Error types for loading the record store.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading the record collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the data file.
    #[error("failed to read data file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The data file is not valid JSON or not an array of records.
    #[error("failed to parse data file {path}: {source}")]
    ParseJson {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON parse error.
        source: serde_json::Error,
    },

    /// A record in the array has no title under any accepted key.
    #[error("record at index {index} has no title")]
    MissingTitle {
        /// Zero-based position of the record in the source array.
        index: usize,
    },
}
