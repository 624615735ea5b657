use core::fmt::Debug;

use ibc_core::channel::config::AdmissionConfig;
use ibc_core::channel::handler::Admitted;
use ibc_core::channel::types::channel::ChannelEnd;
use ibc_core::channel::types::commitment::{PacketCommitment, PacketCommitter};
use ibc_core::channel::types::msgs::MsgRecvPacket;
use ibc_core::client::types::{ConsensusState, Height};
use ibc_core::commitment_types::commitment::CommitmentProofBytes;
use ibc_core::commitment_types::merkle::MerkleProof;
use ibc_core::connection::types::ConnectionEnd;
use ibc_core::entrypoint::{admit, admit_in_overlay};
use ibc_core::handler::types::error::{ContextError, ModuleError};
use ibc_core::handler::types::events::IbcEvent;
use ibc_core::host::types::identifiers::{ChannelId, ClientId, ConnectionId, PortId, Sequence};
use ibc_core::host::types::path::{
    ChannelEndPath, ClientConsensusStatePath, CommitmentPath, Path, SeqRecvPath, SeqSendPath,
};
use ibc_core::host::{ExecutionContext, ValidationContext};
use ibc_core::primitives::prelude::*;
use ibc_testkit_store::context::ProvableStore;
use ibc_testkit_store::impls::InMemoryStore;
use ibc_testkit_store::types::Path as StorePath;
use tracing::debug;

use crate::fixtures::core::context::MockContextConfig;
use crate::hosts::{MockBlock, MockHost};
use crate::testapp::ibc::core::types::MockIbcStore;

/// A context implementing the dependencies necessary for testing any IBC module.
///
/// Every block commits the IBC store first, then records its root in the
/// main store under the commitment prefix. Proofs of IBC paths therefore
/// carry two steps: the path within the IBC store, then the IBC store within
/// the main store whose root the block commits to.
#[derive(Debug)]
pub struct MockGenericContext<S>
where
    S: ProvableStore + Debug,
{
    /// The main store of the context.
    pub main_store: S,

    /// The type of host chain underlying this mock context.
    pub host: MockHost,

    /// An object that stores all IBC related data.
    pub ibc_store: MockIbcStore<S>,
}

pub type MockStore = InMemoryStore;
pub type MockContext = MockGenericContext<MockStore>;

/// Returns a MockContext with bare minimum initialization: no clients, no connections and no channels are
/// present, and the chain has Height(5). This should be used sparingly, mostly for testing the
/// creation of new domain objects.
impl<S> Default for MockGenericContext<S>
where
    S: ProvableStore + Debug + Default,
{
    fn default() -> Self {
        MockContextConfig::builder().build()
    }
}

/// Implementation of internal interface for use in testing. The methods in this interface should
/// _not_ be accessible to any Ics handler.
impl<S> MockGenericContext<S>
where
    S: ProvableStore + Debug,
{
    pub fn ibc_store(&self) -> &MockIbcStore<S> {
        &self.ibc_store
    }

    pub fn ibc_store_mut(&mut self) -> &mut MockIbcStore<S> {
        &mut self.ibc_store
    }

    pub fn host_block(&self, target_height: &Height) -> Option<MockBlock> {
        self.host.get_block(target_height)
    }

    pub fn latest_height(&self) -> Height {
        self.host.latest_height()
    }

    /// The consensus state a counterparty client records for this chain at
    /// its latest block.
    pub fn latest_consensus_state(&self) -> ConsensusState {
        self.host.latest_block().into_consensus_state()
    }

    pub fn advance_block_up_to(mut self, target_height: Height) -> Self {
        if target_height.revision_number() != self.host.revision_number {
            panic!("Cannot advance history of the chain to a different revision number!")
        } else if target_height.revision_height() < self.host.latest_revision_height() {
            panic!("Cannot rewind history of the chain to a smaller revision height!")
        } else {
            // Repeatedly advance the host chain height till we hit the desired height
            while self.host.latest_revision_height() < target_height.revision_height() {
                self.advance_block()
            }
        }
        self
    }

    pub fn end_block(&mut self) {
        // commit ibc store
        let ibc_store_commitment = self.ibc_store.end_block().expect("no error");

        // commit ibc store commitment in main store
        self.main_store
            .set(self.ibc_store_key(), ibc_store_commitment)
            .expect("no error");
    }

    pub fn produce_block(&mut self) {
        // commit main store
        let main_store_commitment = self.main_store.commit().expect("no error");
        // generate a new block
        self.host.push_block(main_store_commitment);
    }

    pub fn advance_block(&mut self) {
        self.end_block();
        self.produce_block();
        debug!(height = %self.latest_height(), "advanced block");
    }

    /// Builds the proof that `path` held its value in the state committed by
    /// the block at `height`.
    pub fn prove(&self, path: impl Into<Path>, height: Height) -> Option<CommitmentProofBytes> {
        let ibc_proof = self.ibc_store.get_proof(height, &path.into())?;
        let main_proof = self
            .main_store
            .get_proof(height.revision_height().into(), &self.ibc_store_key())?;

        MerkleProof {
            proofs: vec![ibc_proof, main_proof],
        }
        .try_into()
        .ok()
    }

    fn ibc_store_key(&self) -> StorePath {
        self.ibc_store
            .commitment_prefix()
            .as_bytes()
            .try_into()
            .expect("valid utf8 prefix")
    }

    /// Associates a connection to this context.
    pub fn with_connection(
        mut self,
        connection_id: ConnectionId,
        connection_end: ConnectionEnd,
    ) -> Self {
        self.ibc_store
            .store_connection(&connection_id, connection_end)
            .expect("error writing to store");
        self
    }

    /// Records `consensus_state` as the root the client `client_id` trusts
    /// for its counterparty at `height`.
    pub fn with_consensus_state(
        mut self,
        client_id: &ClientId,
        height: Height,
        consensus_state: ConsensusState,
    ) -> Self {
        let consensus_state_path = ClientConsensusStatePath::new(
            client_id.clone(),
            height.revision_number(),
            height.revision_height(),
        );
        self.ibc_store
            .store_consensus_state(consensus_state_path, consensus_state)
            .expect("error writing to store");
        self
    }

    /// Associates a channel (in an arbitrary state) to this context.
    pub fn with_channel(
        mut self,
        port_id: PortId,
        chan_id: ChannelId,
        channel_end: ChannelEnd,
    ) -> Self {
        let channel_end_path = ChannelEndPath::new(&port_id, &chan_id);
        self.ibc_store
            .store_channel(&channel_end_path, channel_end)
            .expect("error writing to store");
        self
    }

    pub fn with_send_sequence(
        mut self,
        port_id: PortId,
        chan_id: ChannelId,
        seq_number: Sequence,
    ) -> Self {
        let seq_send_path = SeqSendPath::new(&port_id, &chan_id);
        self.ibc_store
            .store_next_sequence_send(&seq_send_path, seq_number)
            .expect("error writing to store");
        self
    }

    pub fn with_recv_sequence(
        mut self,
        port_id: PortId,
        chan_id: ChannelId,
        seq_number: Sequence,
    ) -> Self {
        let seq_recv_path = SeqRecvPath::new(&port_id, &chan_id);
        self.ibc_store
            .store_next_sequence_recv(&seq_recv_path, seq_number)
            .expect("error writing to store");
        self
    }

    pub fn with_packet_commitment(
        mut self,
        port_id: PortId,
        chan_id: ChannelId,
        seq: Sequence,
        data: PacketCommitment,
    ) -> Self {
        let commitment_path = CommitmentPath::new(&port_id, &chan_id, seq);
        self.ibc_store
            .store_packet_commitment(&commitment_path, data)
            .expect("error writing to store");
        self
    }

    /// A `MsgRecvPacket` passes from the relayer to the IBC module (on host chain).
    ///
    /// The packet is admitted against the IBC store and, on success, a new
    /// block is created.
    pub fn deliver<C: PacketCommitter>(
        &mut self,
        config: &AdmissionConfig<C>,
        msg: MsgRecvPacket,
    ) -> Result<Admitted, ContextError> {
        let admitted = admit(&mut self.ibc_store, config, msg)?;
        // Create a new block.
        self.advance_block();
        Ok(admitted)
    }

    /// Same as [`Self::deliver`], with the admission and the receiving
    /// application's callback staged in one overlay.
    pub fn deliver_in_overlay<C, F>(
        &mut self,
        config: &AdmissionConfig<C>,
        msg: MsgRecvPacket,
        on_recv: F,
    ) -> Result<Admitted, ContextError>
    where
        C: PacketCommitter,
        F: FnOnce(&mut dyn ExecutionContext, &Admitted) -> Result<(), ModuleError>,
    {
        let admitted = admit_in_overlay(&mut self.ibc_store, config, msg, on_recv)?;
        self.advance_block();
        Ok(admitted)
    }

    pub fn get_events(&self) -> Vec<IbcEvent> {
        self.ibc_store.events()
    }

    pub fn get_logs(&self) -> Vec<String> {
        self.ibc_store.logs()
    }
}
