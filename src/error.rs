//! Error types for the nlprep library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`NlprepError`] enum.
//!
//! # Examples
//!
//! ```
//! use nlprep::error::{NlprepError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NlprepError::invalid_config("max_rate must be within [0, 1]"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for nlprep operations.
#[derive(Error, Debug)]
pub enum NlprepError {
    /// A token index does not point into the document's original tokens.
    #[error("Index out of range: index {index} for a document with {len} tokens")]
    IndexOutOfRange { index: usize, len: usize },

    /// The external NLP toolkit failed to process its input.
    #[error("Toolkit error: {0}")]
    Toolkit(String),

    /// A property or split function produced an unusable result.
    #[error("Property error: {0}")]
    Property(String),

    /// Tokenization failed.
    #[error("Tokenize error: {0}")]
    Tokenize(String),

    /// Pipeline or filter configuration is inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors (reading configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors raised by toolkit adapters built on `anyhow`
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with NlprepError.
pub type Result<T> = std::result::Result<T, NlprepError>;

impl NlprepError {
    /// Create a new index-out-of-range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        NlprepError::IndexOutOfRange { index, len }
    }

    /// Create a new toolkit error.
    pub fn toolkit<S: Into<String>>(msg: S) -> Self {
        NlprepError::Toolkit(msg.into())
    }

    /// Create a new property error.
    pub fn property<S: Into<String>>(msg: S) -> Self {
        NlprepError::Property(msg.into())
    }

    /// Create a new tokenize error.
    pub fn tokenize<S: Into<String>>(msg: S) -> Self {
        NlprepError::Tokenize(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        NlprepError::InvalidConfig(msg.into())
    }
}
