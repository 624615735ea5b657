//! Static configuration of the packet admission pipeline.

use ibc_core_channel_types::commitment::{PacketCommitter, Sha256Committer};
use ibc_core_commitment_types::specs::ProofSpecs;

/// Settings shared by every `recvPacket` admission on a host.
///
/// Built once when the host starts and passed by reference into each call.
/// Both chains of a channel must agree on the committer and on the shape of
/// the sender's store, or no proof will ever verify.
#[derive(Clone, Debug, PartialEq)]
pub struct AdmissionConfig<C = Sha256Committer> {
    proof_specs: ProofSpecs,
    committer: C,
}

impl<C: PacketCommitter> AdmissionConfig<C> {
    pub fn new(proof_specs: ProofSpecs, committer: C) -> Self {
        Self {
            proof_specs,
            committer,
        }
    }

    /// ICS-23 specs of the counterparty's store, innermost first.
    pub fn proof_specs(&self) -> &ProofSpecs {
        &self.proof_specs
    }

    pub fn committer(&self) -> &C {
        &self.committer
    }
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self::new(ProofSpecs::cosmos(), Sha256Committer)
    }
}

#[cfg(test)]
mod tests {
    use ibc_core_channel_types::commitment::{compute_packet_commitment, PacketCommitment};
    use ibc_core_channel_types::timeout::TimeoutHeight;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct RawCommitter;

    impl PacketCommitter for RawCommitter {
        fn commit_packet(&self, data: &[u8], _: &TimeoutHeight) -> PacketCommitment {
            data.to_vec().into()
        }
    }

    #[test]
    fn default_config_uses_cosmos_specs() {
        let config = AdmissionConfig::default();

        assert_eq!(config.proof_specs(), &ProofSpecs::cosmos());
        assert_eq!(
            config
                .committer()
                .commit_packet(b"data", &TimeoutHeight::Never),
            compute_packet_commitment(b"data", &TimeoutHeight::Never)
        );
    }

    #[test]
    fn custom_committer_is_used() {
        let config = AdmissionConfig::new(ProofSpecs::cosmos(), RawCommitter);

        assert_eq!(
            config
                .committer()
                .commit_packet(b"data", &TimeoutHeight::Never)
                .into_vec(),
            b"data".to_vec()
        );
    }
}
