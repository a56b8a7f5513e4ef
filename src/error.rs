//! Error types for the Sentitok library.
//!
//! All errors are represented by the [`SentitokError`] enum. Failures raised
//! by a segmenter or stemmer are passed through unchanged, so a custom
//! implementation can return any error through the [`SentitokError::Anyhow`]
//! variant.
//!
//! # Examples
//!
//! ```
//! use sentitok::error::{Result, SentitokError};
//!
//! fn load() -> Result<()> {
//!     Err(SentitokError::resource_unavailable("stopword list not found"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sentitok operations.
#[derive(Error, Debug)]
pub enum SentitokError {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (segmentation, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A resource needed at construction time (stopword list, stemmer) could not be loaded
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// Invalid argument passed by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Errors raised by user-supplied collaborators
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SentitokError.
pub type Result<T> = std::result::Result<T, SentitokError>;

impl SentitokError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SentitokError::Analysis(msg.into())
    }

    /// Create a new resource-unavailable error.
    pub fn resource_unavailable<S: Into<String>>(msg: S) -> Self {
        SentitokError::ResourceUnavailable(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SentitokError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SentitokError::Other(msg.into())
    }

    /// Whether this error signals a missing construction-time resource.
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(self, SentitokError::ResourceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SentitokError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = SentitokError::resource_unavailable("english.txt");
        assert_eq!(error.to_string(), "Resource unavailable: english.txt");
        assert!(error.is_resource_unavailable());

        let error = SentitokError::invalid_argument("empty language name");
        assert_eq!(error.to_string(), "Invalid argument: empty language name");
        assert!(!error.is_resource_unavailable());

        let error = SentitokError::other("stemmer rejected token");
        assert_eq!(error.to_string(), "Error: stemmer rejected token");
        assert!(matches!(error, SentitokError::Other(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SentitokError::from(io_error);

        match error {
            SentitokError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let error = SentitokError::from(anyhow::anyhow!("segmenter exploded"));
        assert_eq!(error.to_string(), "Anyhow error: segmenter exploded");
    }
}
