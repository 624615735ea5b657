//! Defines the client error type

use displaydoc::Display;
use ibc_core_host_types::identifiers::ClientId;
use ibc_primitives::prelude::*;

use crate::height::Height;

/// Encodes all the possible client errors
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// consensus state not found for client `{client_id}` at height `{height}`
    ConsensusStateNotFound { client_id: ClientId, height: Height },
    /// invalid height; cannot be zero
    InvalidHeight,
    /// other error: `{description}`
    Other { description: String },
}

impl From<&'static str> for ClientError {
    fn from(s: &'static str) -> Self {
        Self::Other {
            description: s.to_string(),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClientError {}
