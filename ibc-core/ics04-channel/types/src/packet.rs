//! Defines the packet type
use ibc_core_host_types::identifiers::{ChannelId, PortId, Sequence};
use ibc_primitives::prelude::*;

use super::timeout::TimeoutHeight;

/// Packet receipt, used over unordered channels.
///
/// `None` is what a host reports for a sequence it never received.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Receipt {
    Ok,
    None,
}

impl Receipt {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// The packet type; this is what applications send to one another.
///
/// Each application defines the structure of the `data` field.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Hash, PartialEq, Eq)]
pub struct Packet {
    pub seq_on_a: Sequence,
    pub port_id_on_a: PortId,
    pub chan_id_on_a: ChannelId,
    pub port_id_on_b: PortId,
    pub chan_id_on_b: ChannelId,
    pub data: Vec<u8>,
    pub timeout_height_on_b: TimeoutHeight,
}

struct PacketData<'a>(&'a [u8]);

impl core::fmt::Debug for PacketData<'_> {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(formatter, "{:?}", self.0)
    }
}

impl core::fmt::Debug for Packet {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        // Remember: if you alter the definition of `Packet`,
        // 1. update the formatter debug struct builder calls (return object of
        //    this function)
        // 2. update this destructuring assignment accordingly
        let Packet {
            seq_on_a: _,
            port_id_on_a: _,
            chan_id_on_a: _,
            port_id_on_b: _,
            chan_id_on_b: _,
            data,
            timeout_height_on_b: _,
        } = self;
        let data_wrapper = PacketData(data);

        formatter
            .debug_struct("Packet")
            .field("sequence", &self.seq_on_a)
            .field("source_port", &self.port_id_on_a)
            .field("source_channel", &self.chan_id_on_a)
            .field("destination_port", &self.port_id_on_b)
            .field("destination_channel", &self.chan_id_on_b)
            .field("data", &data_wrapper)
            .field("timeout_height", &self.timeout_height_on_b)
            .finish()
    }
}

/// Custom debug output to omit the packet data
impl core::fmt::Display for Packet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(
            f,
            "seq:{}, path:{}/{}->{}/{}, toh:{}",
            self.seq_on_a,
            self.chan_id_on_a,
            self.port_id_on_a,
            self.chan_id_on_b,
            self.port_id_on_b,
            self.timeout_height_on_b,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packet(data: Vec<u8>) -> Packet {
        let port_id = PortId::new("testportid".to_string()).expect("valid port");
        Packet {
            seq_on_a: Sequence::from(7),
            port_id_on_a: port_id.clone(),
            chan_id_on_a: ChannelId::new(1),
            port_id_on_b: port_id,
            chan_id_on_b: ChannelId::zero(),
            data,
            timeout_height_on_b: TimeoutHeight::Never,
        }
    }

    #[test]
    fn display_omits_data() {
        assert_eq!(
            packet(vec![1, 2, 3]).to_string(),
            "seq:7, path:channel-1/testportid->channel-0/testportid, toh:no timeout"
        );
    }
}
