//! Store paths under which a host keeps the state read and written by the
//! packet admission pipeline, laid out as in the
//! [ICS-24 path space](https://github.com/cosmos/ibc/tree/main/spec/core/ics-024-host-requirements#path-space).
//!
//! Every path type renders its key through `Display`; [`Path`] parses keys
//! back with `FromStr`.

use core::str::FromStr;

use derive_more::{Display, From};
use displaydoc::Display as DisplayDoc;
use ibc_primitives::prelude::*;

use crate::identifiers::{ChannelId, ClientId, ConnectionId, PortId, Sequence};

pub const CLIENT_PREFIX: &str = "clients";
pub const CONSENSUS_STATE_PREFIX: &str = "consensusStates";
pub const CONNECTION_PREFIX: &str = "connections";
pub const CHANNEL_PREFIX: &str = "channels";
pub const CHANNEL_END_PREFIX: &str = "channelEnds";
pub const PORT_PREFIX: &str = "ports";
pub const SEQUENCE_PREFIX: &str = "sequences";
pub const NEXT_SEQ_SEND_PREFIX: &str = "nextSequenceSend";
pub const NEXT_SEQ_RECV_PREFIX: &str = "nextSequenceRecv";
pub const PACKET_COMMITMENT_PREFIX: &str = "commitments";
pub const PACKET_RECEIPT_PREFIX: &str = "receipts";

/// Any of the paths known to the admission pipeline.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, From, Display)]
pub enum Path {
    ClientConsensusState(ClientConsensusStatePath),
    Connection(ConnectionPath),
    ChannelEnd(ChannelEndPath),
    SeqSend(SeqSendPath),
    SeqRecv(SeqRecvPath),
    Commitment(CommitmentPath),
    Receipt(ReceiptPath),
}

impl Path {
    /// Returns the key bytes under which the path is stored.
    pub fn into_bytes(self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

/// Location of the consensus state (and thus the verified root) that a
/// client recorded for the counterparty at a given height.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(
    fmt = "{CLIENT_PREFIX}/{client_id}/{CONSENSUS_STATE_PREFIX}/{revision_number}-{revision_height}"
)]
pub struct ClientConsensusStatePath {
    pub client_id: ClientId,
    pub revision_number: u64,
    pub revision_height: u64,
}

impl ClientConsensusStatePath {
    pub fn new(client_id: ClientId, revision_number: u64, revision_height: u64) -> Self {
        Self {
            client_id,
            revision_number,
            revision_height,
        }
    }

    /// Returns the parent under which all consensus states of the client
    /// live: `clients/{client_id}/consensusStates`.
    pub fn parent(&self) -> String {
        format!("{CLIENT_PREFIX}/{}/{CONSENSUS_STATE_PREFIX}", self.client_id)
    }
}

#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From)]
#[display(fmt = "{CONNECTION_PREFIX}/{_0}")]
pub struct ConnectionPath(pub ConnectionId);

impl ConnectionPath {
    pub fn new(connection_id: &ConnectionId) -> Self {
        Self(connection_id.clone())
    }
}

#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{CHANNEL_END_PREFIX}/{PORT_PREFIX}/{_0}/{CHANNEL_PREFIX}/{_1}")]
pub struct ChannelEndPath(pub PortId, pub ChannelId);

impl ChannelEndPath {
    pub fn new(port_id: &PortId, channel_id: &ChannelId) -> Self {
        Self(port_id.clone(), channel_id.clone())
    }

    /// Prefix of every commitment stored for this channel.
    pub fn commitments_path(&self) -> String {
        format!(
            "{PACKET_COMMITMENT_PREFIX}/{PORT_PREFIX}/{}/{CHANNEL_PREFIX}/{}/{SEQUENCE_PREFIX}",
            self.0, self.1
        )
    }

    /// Prefix of every receipt stored for this channel.
    pub fn receipts_path(&self) -> String {
        format!(
            "{PACKET_RECEIPT_PREFIX}/{PORT_PREFIX}/{}/{CHANNEL_PREFIX}/{}/{SEQUENCE_PREFIX}",
            self.0, self.1
        )
    }
}

#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{NEXT_SEQ_SEND_PREFIX}/{PORT_PREFIX}/{_0}/{CHANNEL_PREFIX}/{_1}")]
pub struct SeqSendPath(pub PortId, pub ChannelId);

impl SeqSendPath {
    pub fn new(port_id: &PortId, channel_id: &ChannelId) -> Self {
        Self(port_id.clone(), channel_id.clone())
    }
}

#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{NEXT_SEQ_RECV_PREFIX}/{PORT_PREFIX}/{_0}/{CHANNEL_PREFIX}/{_1}")]
pub struct SeqRecvPath(pub PortId, pub ChannelId);

impl SeqRecvPath {
    pub fn new(port_id: &PortId, channel_id: &ChannelId) -> Self {
        Self(port_id.clone(), channel_id.clone())
    }
}

#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(
    fmt = "{PACKET_COMMITMENT_PREFIX}/{PORT_PREFIX}/{port_id}/{CHANNEL_PREFIX}/{channel_id}/{SEQUENCE_PREFIX}/{sequence}"
)]
pub struct CommitmentPath {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub sequence: Sequence,
}

impl CommitmentPath {
    pub fn new(port_id: &PortId, channel_id: &ChannelId, sequence: Sequence) -> Self {
        Self {
            port_id: port_id.clone(),
            channel_id: channel_id.clone(),
            sequence,
        }
    }
}

#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(
    fmt = "{PACKET_RECEIPT_PREFIX}/{PORT_PREFIX}/{port_id}/{CHANNEL_PREFIX}/{channel_id}/{SEQUENCE_PREFIX}/{sequence}"
)]
pub struct ReceiptPath {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub sequence: Sequence,
}

impl ReceiptPath {
    pub fn new(port_id: &PortId, channel_id: &ChannelId, sequence: Sequence) -> Self {
        Self {
            port_id: port_id.clone(),
            channel_id: channel_id.clone(),
            sequence,
        }
    }
}

#[derive(Debug, DisplayDoc, Clone, PartialEq, Eq)]
pub enum PathError {
    /// `{path}` could not be parsed into a Path
    ParseFailure { path: String },
}

#[cfg(feature = "std")]
impl std::error::Error for PathError {}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<&str> = s.split('/').collect();

        parse_path(&components).ok_or_else(|| PathError::ParseFailure { path: s.to_owned() })
    }
}

fn parse_path(components: &[&str]) -> Option<Path> {
    match components {
        [CLIENT_PREFIX, client_id, CONSENSUS_STATE_PREFIX, height] => {
            let (revision_number, revision_height) = height.split_once('-')?;
            Some(
                ClientConsensusStatePath::new(
                    ClientId::from_str(client_id).ok()?,
                    revision_number.parse().ok()?,
                    revision_height.parse().ok()?,
                )
                .into(),
            )
        }
        [CONNECTION_PREFIX, connection_id] => {
            Some(ConnectionPath(ConnectionId::from_str(connection_id).ok()?).into())
        }
        [prefix, PORT_PREFIX, port_id, CHANNEL_PREFIX, channel_id] => {
            let port_id = PortId::from_str(port_id).ok()?;
            let channel_id = ChannelId::from_str(channel_id).ok()?;
            match *prefix {
                CHANNEL_END_PREFIX => Some(ChannelEndPath(port_id, channel_id).into()),
                NEXT_SEQ_SEND_PREFIX => Some(SeqSendPath(port_id, channel_id).into()),
                NEXT_SEQ_RECV_PREFIX => Some(SeqRecvPath(port_id, channel_id).into()),
                _ => None,
            }
        }
        [prefix, PORT_PREFIX, port_id, CHANNEL_PREFIX, channel_id, SEQUENCE_PREFIX, sequence] => {
            let port_id = PortId::from_str(port_id).ok()?;
            let channel_id = ChannelId::from_str(channel_id).ok()?;
            let sequence = Sequence::from_str(sequence).ok()?;
            match *prefix {
                PACKET_COMMITMENT_PREFIX => Some(
                    CommitmentPath {
                        port_id,
                        channel_id,
                        sequence,
                    }
                    .into(),
                ),
                PACKET_RECEIPT_PREFIX => Some(
                    ReceiptPath {
                        port_id,
                        channel_id,
                        sequence,
                    }
                    .into(),
                ),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn port() -> PortId {
        PortId::from_str("testportid").expect("valid port id")
    }

    fn client() -> ClientId {
        ClientId::from_str("07-tendermint-0").expect("valid client id")
    }

    #[rstest]
    #[case(
        "clients/07-tendermint-0/consensusStates/0-31",
        Path::ClientConsensusState(ClientConsensusStatePath::new(client(), 0, 31))
    )]
    #[case(
        "connections/connection-0",
        Path::Connection(ConnectionPath(ConnectionId::zero()))
    )]
    #[case(
        "channelEnds/ports/testportid/channels/channel-0",
        Path::ChannelEnd(ChannelEndPath(port(), ChannelId::zero()))
    )]
    #[case(
        "nextSequenceSend/ports/testportid/channels/channel-0",
        Path::SeqSend(SeqSendPath(port(), ChannelId::zero()))
    )]
    #[case(
        "nextSequenceRecv/ports/testportid/channels/channel-0",
        Path::SeqRecv(SeqRecvPath(port(), ChannelId::zero()))
    )]
    #[case(
        "commitments/ports/testportid/channels/channel-0/sequences/7",
        Path::Commitment(CommitmentPath::new(&port(), &ChannelId::zero(), 7.into()))
    )]
    #[case(
        "receipts/ports/testportid/channels/channel-0/sequences/7",
        Path::Receipt(ReceiptPath::new(&port(), &ChannelId::zero(), 7.into()))
    )]
    fn parse_and_display(#[case] key: &str, #[case] path: Path) {
        assert_eq!(Path::from_str(key), Ok(path.clone()));
        assert_eq!(path.to_string(), key);
    }

    #[rstest]
    #[case("")]
    #[case("clients/07-tendermint-0/consensusStates/31")]
    #[case("clients/07-tendermint-0/clientState")]
    #[case("channelEnds/ports/testportid/channels/testchannel")]
    #[case("nextSequenceAck/ports/testportid/channels/channel-0")]
    #[case("commitments/ports/testportid/channels/channel-0/sequences/x")]
    #[case("acks/ports/testportid/channels/channel-0/sequences/1")]
    fn parse_failure(#[case] key: &str) {
        assert_eq!(
            Path::from_str(key),
            Err(PathError::ParseFailure {
                path: key.to_owned()
            })
        );
    }

    #[test]
    fn channel_sub_store_prefixes() {
        let path = ChannelEndPath::new(&port(), &ChannelId::new(3));
        assert_eq!(
            path.commitments_path(),
            "commitments/ports/testportid/channels/channel-3/sequences"
        );
        assert_eq!(
            path.receipts_path(),
            "receipts/ports/testportid/channels/channel-3/sequences"
        );
    }
}
