//! Defines the connection error type

use displaydoc::Display;
use ibc_core_host_types::identifiers::ConnectionId;
use ibc_primitives::prelude::*;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// no connection was found for the connection id `{connection_id}`
    ConnectionNotFound { connection_id: ConnectionId },
    /// invalid connection state: expected `{expected}`, actual `{actual}`
    InvalidState { expected: String, actual: String },
}

#[cfg(feature = "std")]
impl std::error::Error for ConnectionError {}
