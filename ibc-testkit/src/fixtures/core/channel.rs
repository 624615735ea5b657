use ibc_core::channel::config::AdmissionConfig;
use ibc_core::channel::types::channel::{ChannelEnd, Counterparty, Order, State};
use ibc_core::channel::types::commitment::Sha256Committer;
use ibc_core::channel::types::packet::Packet;
use ibc_core::channel::types::timeout::TimeoutHeight;
use ibc_core::channel::types::Version;
use ibc_core::client::types::Height;
use ibc_core::commitment_types::commitment::CommitmentPrefix;
use ibc_core::commitment_types::specs::ProofSpecs;
use ibc_core::connection::types::{
    ConnectionEnd, Counterparty as ConnectionCounterparty, State as ConnectionState,
};
use ibc_core::host::types::identifiers::{ChannelId, ClientId, ConnectionId, PortId, Sequence};
use ibc_core::primitives::prelude::*;
use ibc_testkit_store::avl::get_proof_spec;
use typed_builder::TypedBuilder;

/// Returns the `AdmissionConfig` under which packets proven by a
/// [`MockContext`](crate::context::MockContext) verify: one AVL step for the
/// IBC store, one for the main store.
pub fn mock_admission_config() -> AdmissionConfig {
    let proof_specs =
        ProofSpecs::try_from(vec![get_proof_spec(), get_proof_spec()]).expect("Never fails");
    AdmissionConfig::new(proof_specs, Sha256Committer)
}

pub fn transfer_port() -> PortId {
    PortId::new("transfer".to_string()).expect("Never fails")
}

/// Returns a dummy `Packet`, for testing purposes only!
///
/// The packet travels from (`transfer`, `channel-1`) on the sending chain to
/// (`transfer`, `channel-0`) on the receiving chain.
#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Packet))]
pub struct PacketConfig {
    #[builder(default = 1u64.into())]
    seq_on_a: Sequence,
    #[builder(default = transfer_port())]
    port_id_on_a: PortId,
    #[builder(default = ChannelId::new(1))]
    chan_id_on_a: ChannelId,
    #[builder(default = transfer_port())]
    port_id_on_b: PortId,
    #[builder(default = ChannelId::zero())]
    chan_id_on_b: ChannelId,
    #[builder(default = b"packet data".to_vec())]
    data: Vec<u8>,
    #[builder(default = TimeoutHeight::At(Height::new(0, 100).expect("Never fails")))]
    timeout_height_on_b: TimeoutHeight,
}

impl From<PacketConfig> for Packet {
    fn from(config: PacketConfig) -> Self {
        Packet {
            seq_on_a: config.seq_on_a,
            port_id_on_a: config.port_id_on_a,
            chan_id_on_a: config.chan_id_on_a,
            port_id_on_b: config.port_id_on_b,
            chan_id_on_b: config.chan_id_on_b,
            data: config.data,
            timeout_height_on_b: config.timeout_height_on_b,
        }
    }
}

/// Returns a dummy `ChannelEnd` over `connection-0`, for testing purposes only!
pub fn dummy_channel_end(state: State, ordering: Order, remote: Counterparty) -> ChannelEnd {
    ChannelEnd::new(
        state,
        ordering,
        remote,
        vec![ConnectionId::zero()],
        Version::new("ics20-1".to_string()),
    )
    .expect("Never fails")
}

/// Returns a dummy open `ConnectionEnd`, for testing purposes only!
///
/// `client_id` tracks the counterparty, which commits its packets under
/// `prefix_on_a`.
pub fn dummy_connection_end(client_id: ClientId, prefix_on_a: CommitmentPrefix) -> ConnectionEnd {
    ConnectionEnd::new(
        ConnectionState::Open,
        client_id.clone(),
        ConnectionCounterparty::new(client_id, Some(ConnectionId::zero()), prefix_on_a),
    )
}
