//! Error taxonomy for the ISCC kernel.
//!
//! Modelled as a single plain `enum` with a hand-written [`std::fmt::Display`]
//! and [`std::error::Error`] impl — the same shape the codebase uses for its
//! other domain error types — rather than a derive-macro error crate, so the
//! kernel stays usable with nothing beyond `xxhash-rust`, `sha2` and the two
//! Unicode crates pulled in.

use std::fmt;

/// Errors the kernel can return. Never includes retry state or logging side
/// effects — callers decide what to do with a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsccError {
    /// A code string's length was not one of the legal lengths (2, 11, 13
    /// for base58; see [`crate::codec`] for the exact legal set).
    InvalidCodeLength { actual: usize },
    /// A code string contained a character outside the codec's alphabet.
    InvalidCodeCharacter { character: char },
    /// A digest did not have one of the legal lengths (1, 8, 9 bytes).
    InvalidDigestLength { actual: usize },
    /// Hamming distance was requested between codes with different headers
    /// (main type, sub type, version, or length) and `mixed` was not set.
    HeaderMismatch,
    /// The underlying image surface could not be decoded or was degenerate
    /// (e.g. zero width/height).
    ImageDecode(String),
    /// An identifier version other than the one this crate implements (0)
    /// was requested.
    UnsupportedVersion { requested: u32 },
    /// Wraps an I/O failure encountered while streaming chunker/Merkle input.
    Io(String),
}

impl fmt::Display for IsccError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsccError::InvalidCodeLength { actual } => {
                write!(f, "code must be 2, 11 or 13 characters, not {actual}")
            }
            IsccError::InvalidCodeCharacter { character } => {
                write!(f, "character {character:?} is not in the codec alphabet")
            }
            IsccError::InvalidDigestLength { actual } => {
                write!(f, "digest must be 1, 8 or 9 bytes, not {actual}")
            }
            IsccError::HeaderMismatch => {
                write!(f, "code headers do not match (main type, sub type, version or length)")
            }
            IsccError::ImageDecode(msg) => write!(f, "image decoding error: {msg}"),
            IsccError::UnsupportedVersion { requested } => {
                write!(f, "unsupported ISCC version: {requested} (only version 0 is implemented)")
            }
            IsccError::Io(msg) => write!(f, "i/o error: {msg}"),
        }
    }
}

impl std::error::Error for IsccError {}

impl From<std::io::Error> for IsccError {
    fn from(e: std::io::Error) -> Self {
        IsccError::Io(e.to_string())
    }
}

/// Convenience alias used throughout the kernel.
pub type Result<T> = std::result::Result<T, IsccError>;
