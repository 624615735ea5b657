//! Implementation of a global context mock. Used in testing handlers of all IBC modules.

use alloc::sync::Arc;

use ibc_core::channel::types::channel::ChannelEnd;
use ibc_core::channel::types::commitment::PacketCommitment;
use ibc_core::client::types::{ConsensusState, Height};
use ibc_core::commitment_types::commitment::CommitmentPrefix;
use ibc_core::commitment_types::ics23::CommitmentProof;
use ibc_core::connection::types::ConnectionEnd;
use ibc_core::handler::types::error::ContextError;
use ibc_core::handler::types::events::IbcEvent;
use ibc_core::host::types::identifiers::{ConnectionId, Sequence};
use ibc_core::host::types::path::{
    ChannelEndPath, ClientConsensusStatePath, CommitmentPath, ConnectionPath, Path, ReceiptPath,
    SeqRecvPath, SeqSendPath,
};
use ibc_core::primitives::prelude::*;
use ibc_testkit_store::context::{ProvableStore, Store};
use ibc_testkit_store::error::StoreError;
use ibc_testkit_store::impls::InMemoryStore;
use ibc_testkit_store::types::{BinStore, JsonStore};
use parking_lot::Mutex;

use super::core_ctx::store_error;

/// Key of the IBC sub-store inside a chain's main store.
pub const DEFAULT_COMMITMENT_PREFIX: &str = "ibc";

pub(crate) type ChannelEndStore = JsonStore<ChannelEndPath, ChannelEnd>;
pub(crate) type ConnectionEndStore = JsonStore<ConnectionPath, ConnectionEnd>;
pub(crate) type ConsensusStateStore = JsonStore<ClientConsensusStatePath, ConsensusState>;
pub(crate) type NextSequenceSendStore = JsonStore<SeqSendPath, Sequence>;
pub(crate) type NextSequenceRecvStore = JsonStore<SeqRecvPath, Sequence>;
pub(crate) type PacketCommitmentStore = BinStore<CommitmentPath, PacketCommitment>;
pub(crate) type PacketReceiptStore = BinStore<ReceiptPath, Vec<u8>>;

/// Lengths of the shared event and log buffers when an overlay was opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Journal {
    pub(crate) events: usize,
    pub(crate) logs: usize,
}

/// An object that stores all IBC related data.
///
/// The same type backs a chain's IBC store and every overlay opened over it:
/// an overlay wraps an [`OverlayStore`](ibc_testkit_store::impls::OverlayStore)
/// and appends to the event and log buffers of its parent.
#[derive(Debug)]
pub struct MockIbcStore<S: Store> {
    /// The underlying key-value store.
    pub store: S,

    /// Prefix under which the counterparty finds this store.
    pub commitment_prefix: CommitmentPrefix,

    /// Emitted IBC events in order
    pub events: Arc<Mutex<Vec<IbcEvent>>>,

    /// Logs of the IBC module
    pub logs: Arc<Mutex<Vec<String>>>,

    /// Set on overlays only.
    pub(crate) journal: Option<Journal>,
}

pub type DefaultIbcStore = MockIbcStore<InMemoryStore>;

impl<S: Store> MockIbcStore<S> {
    pub fn new(store: S, commitment_prefix: CommitmentPrefix) -> Self {
        Self {
            store,
            commitment_prefix,
            events: Arc::new(Mutex::new(Vec::new())),
            logs: Arc::new(Mutex::new(Vec::new())),
            journal: None,
        }
    }

    /// Records the connection `conn_id` of this chain.
    pub fn store_connection(
        &mut self,
        conn_id: &ConnectionId,
        connection_end: ConnectionEnd,
    ) -> Result<(), ContextError> {
        ConnectionEndStore::set(&mut self.store, ConnectionPath::new(conn_id), connection_end)
            .map_err(store_error)?;
        Ok(())
    }

    /// Records the root a client of this chain trusts for its counterparty
    /// at the height named by `consensus_state_path`.
    pub fn store_consensus_state(
        &mut self,
        consensus_state_path: ClientConsensusStatePath,
        consensus_state: ConsensusState,
    ) -> Result<(), ContextError> {
        ConsensusStateStore::set(&mut self.store, consensus_state_path, consensus_state)
            .map_err(store_error)?;
        Ok(())
    }

    pub fn events(&self) -> Vec<IbcEvent> {
        self.events.lock().clone()
    }

    pub fn logs(&self) -> Vec<String> {
        self.logs.lock().clone()
    }
}

impl<S: ProvableStore> MockIbcStore<S> {
    /// Commits the pending state and returns its root.
    pub fn end_block(&mut self) -> Result<Vec<u8>, StoreError> {
        self.store.commit()
    }

    /// Returns the existence proof of `path` in the state committed at
    /// `height`, if the path was set at that height.
    pub fn get_proof(&self, height: Height, path: &Path) -> Option<CommitmentProof> {
        self.store
            .get_proof(height.revision_height().into(), &path.clone().into())
    }
}

impl<S: Store + Default> Default for MockIbcStore<S> {
    fn default() -> Self {
        let commitment_prefix = DEFAULT_COMMITMENT_PREFIX
            .as_bytes()
            .to_vec()
            .try_into()
            .expect("Never fails");
        Self::new(S::default(), commitment_prefix)
    }
}
