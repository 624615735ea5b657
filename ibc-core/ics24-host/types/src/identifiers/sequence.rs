use core::str::FromStr;

use derive_more::{Display, From, Into};
use ibc_primitives::prelude::*;

use crate::error::IdentifierError;

/// The sequence number of a packet enforces ordering among packets from the
/// same source channel.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Display)]
pub struct Sequence(u64);

impl Sequence {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the next sequence number.
    ///
    /// Saturates at `u64::MAX`; a channel that reached it can no longer
    /// admit packets in order.
    pub fn increment(&self) -> Sequence {
        Sequence(self.0.saturating_add(1))
    }

    /// Big-endian encoding, as stored under the sequence paths.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_be_bytes().to_vec()
    }
}

impl FromStr for Sequence {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|e| IdentifierError::InvalidStringAsSequence {
                value: s.to_owned(),
                reason: e.to_string(),
            })
    }
}
