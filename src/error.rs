//! Error types for the phonolex library.
//!
//! All fallible operations report a [`PhonolexError`]. Lookup misses and
//! absent spelling candidates are not errors; they are ordinary values that
//! drive the fallback chain in the resolver.
//!
//! # Examples
//!
//! ```
//! use phonolex::error::{PhonolexError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PhonolexError::invalid_operation("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use anyhow;
use thiserror::Error;

/// The main error type for phonolex operations.
#[derive(Error, Debug)]
pub enum PhonolexError {
    /// The pronunciation corpus could not be opened or read. Fatal to
    /// dictionary construction; no partial store is produced.
    #[error("corpus unavailable: {path}: {source}")]
    CorpusUnavailable {
        /// Path to the corpus that failed to load.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// Corpus-level errors other than availability
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// I/O errors outside corpus loading
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PhonolexError.
pub type Result<T> = std::result::Result<T, PhonolexError>;

impl PhonolexError {
    /// Create a corpus-unavailable error for the given path.
    pub fn corpus_unavailable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        PhonolexError::CorpusUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        PhonolexError::Corpus(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        PhonolexError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PhonolexError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = PhonolexError::corpus("bad header");
        assert_eq!(error.to_string(), "Corpus error: bad header");

        let error = PhonolexError::invalid_operation("no such command");
        assert_eq!(error.to_string(), "Invalid operation: no such command");
    }

    #[test]
    fn test_corpus_unavailable_carries_path() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = PhonolexError::corpus_unavailable("cmudict.txt", io_error);
        assert!(error.to_string().contains("cmudict.txt"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = PhonolexError::from(io_error);

        match error {
            PhonolexError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
