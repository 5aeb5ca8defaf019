//! Error types for succinct data structures.

use thiserror::Error;

/// Error variants for succinct data structure operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A serialized structure failed validation during decoding.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
}

/// A specialized Result type for succinct operations.
pub type Result<T> = std::result::Result<T, Error>;
