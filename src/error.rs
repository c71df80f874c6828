//! Error types for decoding operations

use std::io;

use thiserror::Error;

/// Main error type for decoding and copying byte streams
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The requested encoding label is not known to the charset registry
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),
    /// The byte source could not be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Strict decoding hit a byte sequence that is invalid for the encoding
    #[error("Malformed {encoding} input at byte offset {offset}")]
    Malformed {
        encoding: &'static str,
        offset: u64,
    },
    /// A character has no representation in the target encoding
    #[error("Character {ch:?} cannot be encoded as {encoding}")]
    Unmappable { encoding: &'static str, ch: char },
    /// The text sink rejected decoded output
    #[error("Failed to write decoded text")]
    Write,
}

impl From<std::fmt::Error> for DecodeError {
    fn from(_: std::fmt::Error) -> Self {
        DecodeError::Write
    }
}

/// A specialized `Result` type for decoding operations
pub type Result<T> = std::result::Result<T, DecodeError>;
