//! Types and utilities related to packet commitments.

use ibc_primitives::prelude::*;

use crate::timeout::TimeoutHeight;

/// Leading byte of the commitment preimage. Bumped whenever the layout
/// changes, since both chains recompute commitments independently.
pub const PACKET_COMMITMENT_LAYOUT_VERSION: u8 = 0x01;

/// Value stored under a receipt path once an unordered packet is received.
pub const RECEIPT_COMMITMENT: &[u8] = &[0x01];

/// Packet commitment
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PacketCommitment(Vec<u8>);

impl PacketCommitment {
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for PacketCommitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for PacketCommitment {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Maps packet content to the bytes the sending chain stores under the
/// packet's commitment path.
///
/// Implementations must be pure: the receiving chain recomputes the value and
/// proves it against the sender's root.
pub trait PacketCommitter {
    fn commit_packet(&self, data: &[u8], timeout_height: &TimeoutHeight) -> PacketCommitment;
}

/// The default committer:
///
/// `sha256(0x01 || timeout.revision_number || timeout.revision_height || sha256(data))`
///
/// with both revision fields as big-endian `u64`. A missing timeout height
/// commits as `0-0`, the value ibc-go uses for "no timeout height".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256Committer;

impl PacketCommitter for Sha256Committer {
    fn commit_packet(&self, data: &[u8], timeout_height: &TimeoutHeight) -> PacketCommitment {
        compute_packet_commitment(data, timeout_height)
    }
}

/// Compute the commitment for a packet with the default layout.
pub fn compute_packet_commitment(
    packet_data: &[u8],
    timeout_height: &TimeoutHeight,
) -> PacketCommitment {
    let mut hash_input = [0; 1 + 8 * 2 + 32];

    hash_input[0] = PACKET_COMMITMENT_LAYOUT_VERSION;
    hash_input[1..9].copy_from_slice(&timeout_height.commitment_revision_number().to_be_bytes());
    hash_input[9..17].copy_from_slice(&timeout_height.commitment_revision_height().to_be_bytes());
    hash_input[17..].copy_from_slice(&hash(packet_data));

    hash(&hash_input).to_vec().into()
}

/// Helper function to hash a byte slice using SHA256.
///
/// Note that computing commitments with anything other than SHA256 will
/// break the Merkle proofs of the IBC provable store.
fn hash(data: &[u8]) -> [u8; 32] {
    use sha2::Digest;

    sha2::Sha256::digest(data).into()
}

#[cfg(test)]
mod test {
    use ibc_core_client_types::Height;

    use super::*;

    #[test]
    fn test_compute_packet_commitment() {
        let expected: [u8; 32] = [
            0x7b, 0xb6, 0x6e, 0xb7, 0xdd, 0x1a, 0x44, 0x37, 0x15, 0x2d, 0x62, 0xcf, 0x5d, 0x59,
            0xca, 0x56, 0x1f, 0xf6, 0xac, 0xf5, 0x68, 0xb2, 0x39, 0xc4, 0xc1, 0x67, 0xb1, 0x16,
            0x24, 0x57, 0x07, 0x41,
        ];
        let actual = Sha256Committer.commit_packet(
            b"packet data",
            &TimeoutHeight::At(Height::new(42, 24).expect("non-zero height")),
        );
        assert_eq!(&expected[..], actual.as_ref());
    }

    #[test]
    fn test_compute_packet_commitment_without_timeout() {
        let expected: [u8; 32] = [
            0xae, 0x61, 0x80, 0x1c, 0xa0, 0xfd, 0x6e, 0x28, 0xc6, 0xa9, 0x26, 0xc3, 0x9d, 0x5c,
            0x5f, 0x32, 0xc1, 0x0d, 0xc3, 0x2d, 0xba, 0x0a, 0xaf, 0x80, 0x6b, 0x53, 0xef, 0xb4,
            0xfd, 0x9f, 0x35, 0x68,
        ];
        let actual = compute_packet_commitment(b"packet data", &TimeoutHeight::Never);
        assert_eq!(&expected[..], actual.as_ref());
    }

    #[test]
    fn commitment_depends_on_timeout() {
        let data = b"packet data";
        let never = compute_packet_commitment(data, &TimeoutHeight::Never);
        let at = compute_packet_commitment(
            data,
            &TimeoutHeight::At(Height::new(0, 1).expect("non-zero height")),
        );
        assert_ne!(never, at);
    }
}
