//! Types for the IBC events emitted by the channels module.

use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId, Sequence};
use ibc_primitives::prelude::*;

use super::channel::Order;
use super::timeout::TimeoutHeight;
use crate::packet::Packet;

/// Packet event types
const RECEIVE_PACKET_EVENT: &str = "recv_packet";

/// Packet event attribute keys, matching ibc-go's:
/// https://github.com/cosmos/ibc-go/blob/c4413c5877f9ef883494da1721cb18caaba7f7f5/modules/core/04-channel/types/events.go#L21-L35
pub const PKT_DATA_HEX_ATTRIBUTE_KEY: &str = "packet_data_hex";
pub const PKT_TIMEOUT_HEIGHT_ATTRIBUTE_KEY: &str = "packet_timeout_height";
pub const PKT_SEQ_ATTRIBUTE_KEY: &str = "packet_sequence";
pub const PKT_SRC_PORT_ATTRIBUTE_KEY: &str = "packet_src_port";
pub const PKT_SRC_CHANNEL_ATTRIBUTE_KEY: &str = "packet_src_channel";
pub const PKT_DST_PORT_ATTRIBUTE_KEY: &str = "packet_dst_port";
pub const PKT_DST_CHANNEL_ATTRIBUTE_KEY: &str = "packet_dst_channel";
pub const PKT_CHANNEL_ORDERING_ATTRIBUTE_KEY: &str = "packet_channel_ordering";
pub const PKT_CONNECTION_ID_ATTRIBUTE_KEY: &str = "packet_connection";

/// Emitted when a packet passes admission on the receiving chain.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceivePacket {
    packet: Packet,
    channel_ordering: Order,
    conn_id_on_b: ConnectionId,
}

impl ReceivePacket {
    pub fn new(packet: Packet, channel_ordering: Order, dst_connection_id: ConnectionId) -> Self {
        Self {
            packet,
            channel_ordering,
            conn_id_on_b: dst_connection_id,
        }
    }

    pub fn packet_data(&self) -> &[u8] {
        &self.packet.data
    }

    pub fn timeout_height_on_b(&self) -> &TimeoutHeight {
        &self.packet.timeout_height_on_b
    }

    pub fn seq_on_a(&self) -> &Sequence {
        &self.packet.seq_on_a
    }

    pub fn port_id_on_a(&self) -> &PortId {
        &self.packet.port_id_on_a
    }

    pub fn chan_id_on_a(&self) -> &ChannelId {
        &self.packet.chan_id_on_a
    }

    pub fn port_id_on_b(&self) -> &PortId {
        &self.packet.port_id_on_b
    }

    pub fn chan_id_on_b(&self) -> &ChannelId {
        &self.packet.chan_id_on_b
    }

    pub fn channel_ordering(&self) -> &Order {
        &self.channel_ordering
    }

    pub fn conn_id_on_b(&self) -> &ConnectionId {
        &self.conn_id_on_b
    }

    pub fn event_type(&self) -> &str {
        RECEIVE_PACKET_EVENT
    }

    /// Key-value attributes in the order ibc-go emits them.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            (PKT_DATA_HEX_ATTRIBUTE_KEY, hex::encode(self.packet_data())),
            (
                PKT_TIMEOUT_HEIGHT_ATTRIBUTE_KEY,
                match self.timeout_height_on_b() {
                    TimeoutHeight::At(height) => height.to_string(),
                    TimeoutHeight::Never => "0-0".to_string(),
                },
            ),
            (PKT_SEQ_ATTRIBUTE_KEY, self.seq_on_a().to_string()),
            (PKT_SRC_PORT_ATTRIBUTE_KEY, self.port_id_on_a().to_string()),
            (PKT_SRC_CHANNEL_ATTRIBUTE_KEY, self.chan_id_on_a().to_string()),
            (PKT_DST_PORT_ATTRIBUTE_KEY, self.port_id_on_b().to_string()),
            (PKT_DST_CHANNEL_ATTRIBUTE_KEY, self.chan_id_on_b().to_string()),
            (
                PKT_CHANNEL_ORDERING_ATTRIBUTE_KEY,
                self.channel_ordering().to_string(),
            ),
            (PKT_CONNECTION_ID_ATTRIBUTE_KEY, self.conn_id_on_b().to_string()),
        ]
    }
}
