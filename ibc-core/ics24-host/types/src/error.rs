//! Errors raised while parsing host identifiers and paths.

use displaydoc::Display;
use ibc_primitives::prelude::*;

/// Errors that arise when parsing identifiers.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// identifier `{id}` has invalid length `{length}`, must be between `{min}`-`{max}` characters
    InvalidLength {
        id: String,
        length: u64,
        min: u64,
        max: u64,
    },
    /// identifier `{id}` must only contain alphanumeric characters or `.`, `_`, `+`, `-`, `#`, `[`, `]`, `<`, `>`
    InvalidCharacter { id: String },
    /// identifier `{id}` is not of the form `{prefix}-<u64>`
    InvalidPrefix { id: String, prefix: String },
    /// identifier prefix `{prefix}` is invalid
    InvalidClientType { prefix: String },
    /// string `{value}` cannot be converted to packet sequence: `{reason}`
    InvalidStringAsSequence { value: String, reason: String },
}

#[cfg(feature = "std")]
impl std::error::Error for IdentifierError {}
