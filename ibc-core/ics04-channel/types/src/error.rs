//! Defines the main channel and packet error types

use displaydoc::Display;
use ibc_core_commitment_types::error::CommitmentError;
use ibc_core_host_types::error::IdentifierError;
use ibc_core_host_types::identifiers::{ChannelId, PortId, Sequence};
use ibc_primitives::prelude::*;

use super::channel::{Counterparty, State};

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// identifier error: `{0}`
    InvalidIdentifier(IdentifierError),
    /// non-existent channel end: (`{port_id}`, `{channel_id}`)
    ChannelNotFound {
        port_id: PortId,
        channel_id: ChannelId,
    },
    /// channel (`{port_id}`, `{channel_id}`) is in state `{state}` instead of OPEN
    ChannelNotOpen {
        port_id: PortId,
        channel_id: ChannelId,
        state: State,
    },
    /// packet was not sent by the channel's counterparty: expected `{expected}`, actual `{actual}`
    PacketRoutingMismatch {
        expected: Counterparty,
        actual: Counterparty,
    },
    /// failed to verify the commitment proof of packet `{sequence}`: `{error}`
    InvalidProof {
        sequence: Sequence,
        error: CommitmentError,
    },
    /// invalid connection hops length: expected `{expected}`, actual `{actual}`
    InvalidConnectionHopsLength { expected: u64, actual: u64 },
    /// unknown channel order type `{type_id}`
    UnknownOrderType { type_id: String },
    /// unknown channel state `{state}`
    UnknownState { state: i32 },
    /// invalid channel version `{version}`: must be printable ASCII without surrounding whitespace
    InvalidVersion { version: String },
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum PacketError {
    /// channel error: `{0}`
    Channel(ChannelError),
    /// invalid identifier: `{0}`
    InvalidIdentifier(IdentifierError),
    /// packet sequence `{given}` does not match the next expected receive sequence `{expected}`
    UnexpectedSequence { given: Sequence, expected: Sequence },
    /// packet `{sequence}` was already received
    PacketAlreadyReceived { sequence: Sequence },
    /// missing next receive sequence for (`{port_id}`, `{channel_id}`)
    MissingNextRecvSeq {
        port_id: PortId,
        channel_id: ChannelId,
    },
    /// missing next send sequence for (`{port_id}`, `{channel_id}`)
    MissingNextSendSeq {
        port_id: PortId,
        channel_id: ChannelId,
    },
    /// no commitment stored for packet `{sequence}`
    PacketCommitmentNotFound { sequence: Sequence },
}

impl From<IdentifierError> for ChannelError {
    fn from(err: IdentifierError) -> Self {
        Self::InvalidIdentifier(err)
    }
}

impl From<IdentifierError> for PacketError {
    fn from(err: IdentifierError) -> Self {
        Self::InvalidIdentifier(err)
    }
}

impl From<ChannelError> for PacketError {
    fn from(err: ChannelError) -> Self {
        Self::Channel(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PacketError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Channel(e) => Some(e),
            Self::InvalidIdentifier(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChannelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::InvalidIdentifier(e) => Some(e),
            Self::InvalidProof { error: e, .. } => Some(e),
            _ => None,
        }
    }
}
