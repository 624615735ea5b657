use ibc_core_client_types::Height;
use ibc_core_commitment_types::commitment::CommitmentProofBytes;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::error::ChannelError;
use crate::packet::Packet;

///
/// Message definition for the "packet receiving" datagram.
///
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgRecvPacket {
    /// The packet to be received
    pub packet: Packet,
    /// Proof of packet commitment on the sending chain
    pub proof_commitment_on_a: CommitmentProofBytes,
    /// Height at which the commitment proof in this message were taken
    pub proof_height_on_a: Height,
    /// The signer of the message
    pub signer: Signer,
}

impl MsgRecvPacket {
    /// Assembles the message from the proof bytes a relayer submitted.
    ///
    /// Proof bytes that cannot carry a proof fail as
    /// [`ChannelError::InvalidProof`], the same outcome as a proof that does
    /// not verify.
    pub fn new(
        packet: Packet,
        proof_commitment_on_a: Vec<u8>,
        proof_height_on_a: Height,
        signer: Signer,
    ) -> Result<Self, ChannelError> {
        let proof_commitment_on_a =
            CommitmentProofBytes::try_from(proof_commitment_on_a).map_err(|error| {
                ChannelError::InvalidProof {
                    sequence: packet.seq_on_a,
                    error,
                }
            })?;

        Ok(Self {
            packet,
            proof_commitment_on_a,
            proof_height_on_a,
            signer,
        })
    }
}

#[cfg(test)]
mod test {
    use ibc_core_commitment_types::error::CommitmentError;
    use ibc_core_host_types::identifiers::{ChannelId, PortId, Sequence};

    use super::*;
    use crate::timeout::TimeoutHeight;

    fn dummy_packet() -> Packet {
        let port_id = PortId::new("testportid".to_string()).expect("valid port");
        Packet {
            seq_on_a: Sequence::from(3),
            port_id_on_a: port_id.clone(),
            chan_id_on_a: ChannelId::new(1),
            port_id_on_b: port_id,
            chan_id_on_b: ChannelId::zero(),
            data: b"hello".to_vec(),
            timeout_height_on_b: TimeoutHeight::Never,
        }
    }

    #[test]
    fn empty_proof_is_an_invalid_proof() {
        let res = MsgRecvPacket::new(
            dummy_packet(),
            vec![],
            Height::new(0, 10).expect("non-zero height"),
            Signer::from("relayer"),
        );

        assert_eq!(
            res,
            Err(ChannelError::InvalidProof {
                sequence: Sequence::from(3),
                error: CommitmentError::EmptyMerkleProof,
            })
        );
    }

    #[test]
    fn non_empty_proof_is_accepted() {
        let msg = MsgRecvPacket::new(
            dummy_packet(),
            vec![0x0a, 0x00],
            Height::new(0, 10).expect("non-zero height"),
            Signer::from("relayer"),
        )
        .expect("non-empty proof");

        assert_eq!(msg.proof_commitment_on_a.as_bytes(), &[0x0a, 0x00]);
    }
}
