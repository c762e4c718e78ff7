// src/error.rs
use std::io;

use thiserror::Error;

/// Error type covering page lookup, raw-document parsing and numeric
/// coercion failures.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// An expected markup element is missing from a fetched page.
    #[error("lookup failed: {0}")]
    Lookup(String),
    /// A raw results document does not have the expected fixed-width shape.
    #[error("malformed document: {0}")]
    Malformed(String),
    /// A value in a numeric column cannot be parsed as an integer.
    #[error("column '{column}': value '{value}' is not an integer")]
    Coercion { column: String, value: String },
    #[error("http: {0}")]
    Http(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
