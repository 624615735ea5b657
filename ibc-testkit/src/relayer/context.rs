use ibc_core::channel::config::AdmissionConfig;
use ibc_core::channel::handler::Admitted;
use ibc_core::channel::types::commitment::PacketCommitter;
use ibc_core::channel::types::msgs::MsgRecvPacket;
use ibc_core::channel::types::packet::Packet;
use ibc_core::client::types::Height;
use ibc_core::handler::types::error::ContextError;
use ibc_core::host::types::identifiers::ClientId;
use ibc_core::host::types::path::{ClientConsensusStatePath, CommitmentPath};
use ibc_core::host::ExecutionContext;
use ibc_core::primitives::Signer;
use tracing::debug;

use crate::context::MockContext;
use crate::fixtures::core::signer::dummy_account_id;

/// A relayer context that allows interaction between two [`MockContext`]s:
/// packets are sent on `ctx_a` and received on `ctx_b`.
#[derive(Debug)]
pub struct RelayerContext {
    ctx_a: MockContext,
    ctx_b: MockContext,
    signer: Signer,
}

impl RelayerContext {
    pub fn new(ctx_a: MockContext, ctx_b: MockContext) -> Self {
        Self {
            ctx_a,
            ctx_b,
            signer: dummy_account_id(),
        }
    }

    pub fn get_ctx_a(&self) -> &MockContext {
        &self.ctx_a
    }

    pub fn get_ctx_b(&self) -> &MockContext {
        &self.ctx_b
    }

    pub fn get_ctx_a_mut(&mut self) -> &mut MockContext {
        &mut self.ctx_a
    }

    pub fn get_ctx_b_mut(&mut self) -> &mut MockContext {
        &mut self.ctx_b
    }

    pub fn into_contexts(self) -> (MockContext, MockContext) {
        (self.ctx_a, self.ctx_b)
    }

    /// Commits `packet` on chain A, as its sending handler would, and
    /// advances A by one block so that the commitment becomes provable.
    pub fn send_packet_on_a<C: PacketCommitter>(&mut self, committer: &C, packet: &Packet) {
        let commitment_path =
            CommitmentPath::new(&packet.port_id_on_a, &packet.chan_id_on_a, packet.seq_on_a);
        let commitment = committer.commit_packet(&packet.data, &packet.timeout_height_on_b);

        self.ctx_a
            .ibc_store_mut()
            .store_packet_commitment(&commitment_path, commitment)
            .expect("error writing to store");
        self.ctx_a.advance_block();

        debug!(path = %commitment_path, height = %self.ctx_a.latest_height(), "packet sent");
    }

    /// Records on chain B the root of the latest block of chain A, as an
    /// update of `client_id_on_b` would. Returns the height of that block.
    pub fn update_client_on_b(&mut self, client_id_on_b: &ClientId) -> Height {
        let height_of_a = self.ctx_a.latest_height();
        let consensus_state_path = ClientConsensusStatePath::new(
            client_id_on_b.clone(),
            height_of_a.revision_number(),
            height_of_a.revision_height(),
        );

        self.ctx_b
            .ibc_store_mut()
            .store_consensus_state(consensus_state_path, self.ctx_a.latest_consensus_state())
            .expect("error writing to store");
        self.ctx_b.advance_block();

        height_of_a
    }

    /// Builds the `MsgRecvPacket` for `packet`, proving its commitment on
    /// chain A at `proof_height_on_a`.
    pub fn build_msg_recv_packet(&self, packet: Packet, proof_height_on_a: Height) -> MsgRecvPacket {
        let commitment_path =
            CommitmentPath::new(&packet.port_id_on_a, &packet.chan_id_on_a, packet.seq_on_a);
        let proof_commitment_on_a = self
            .ctx_a
            .prove(commitment_path, proof_height_on_a)
            .expect("packet commitment exists");

        MsgRecvPacket {
            packet,
            proof_commitment_on_a,
            proof_height_on_a,
            signer: self.signer.clone(),
        }
    }

    /// Sends `packet` on A, updates the client of A on B, and delivers the
    /// packet to B.
    pub fn relay_packet<C: PacketCommitter>(
        &mut self,
        config: &AdmissionConfig<C>,
        client_id_on_b: &ClientId,
        packet: Packet,
    ) -> Result<Admitted, ContextError> {
        self.send_packet_on_a(config.committer(), &packet);
        let proof_height_on_a = self.update_client_on_b(client_id_on_b);
        let msg = self.build_msg_recv_packet(packet, proof_height_on_a);
        self.ctx_b.deliver(config, msg)
    }
}
