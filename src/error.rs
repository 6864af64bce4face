//! Error types for the jnse library

use std::io;
use thiserror::Error;

/// Main error type for jnse operations
#[derive(Debug, Error)]
pub enum JnseError {
    /// IO error occurred while writing a buffer or file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Record is shorter than its fixed layout, or a decoded payload does
    /// not match the capacity it is decoded into
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Packed file carries a tag with no decoder (e.g. "pk")
    #[error("Unsupported pack format: {0:?}")]
    UnsupportedPackFormat(String),

    /// Point list cannot be fitted to a routing frame
    #[error("Invalid routing input: {0}")]
    InvalidRoutingInput(String),

    /// A list or field does not fit its fixed on-disk capacity
    #[error("{field}: {len} exceeds capacity {capacity}")]
    CapacityExceeded {
        field: &'static str,
        len: usize,
        capacity: usize,
    },

    /// Archive entry name the ZIP writer cannot store (non-ASCII)
    #[error("Invalid archive entry name: {0:?}")]
    InvalidEntryName(String),
}

impl JnseError {
    /// Shorthand for a `MalformedRecord` describing a short buffer.
    pub(crate) fn short_record(what: &str, len: usize, expected: usize) -> Self {
        JnseError::MalformedRecord(format!(
            "{what} record is {len} bytes, expected at least {expected}"
        ))
    }
}

/// Result type alias for jnse operations
pub type Result<T> = std::result::Result<T, JnseError>;
