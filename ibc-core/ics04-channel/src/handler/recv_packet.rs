use ibc_core_channel_types::channel::{Counterparty, Order};
use ibc_core_channel_types::commitment::PacketCommitter;
use ibc_core_channel_types::error::{ChannelError, PacketError};
use ibc_core_channel_types::events::ReceivePacket;
use ibc_core_channel_types::msgs::MsgRecvPacket;
use ibc_core_channel_types::packet::{Packet, Receipt};
use ibc_core_commitment_types::ics23::HostFunctionsManager;
use ibc_core_commitment_types::verify::verify_membership;
use ibc_core_handler_types::error::ContextError;
use ibc_core_handler_types::events::{IbcEvent, MessageEvent};
use ibc_core_host::types::identifiers::ConnectionId;
use ibc_core_host::types::path::{
    ClientConsensusStatePath, CommitmentPath, Path, ReceiptPath, SeqRecvPath,
};
use ibc_core_host::{ExecutionContext, ValidationContext};
use ibc_primitives::prelude::*;
use tracing::debug;

use crate::config::AdmissionConfig;
use crate::context::ChannelRegistry;

/// A packet that passed admission on the receiving chain, together with the
/// channel context it was admitted under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Admitted {
    pub packet: Packet,
    pub ordering: Order,
    pub connection_id: ConnectionId,
}

/// Checks that `msg` may be admitted, without touching host state.
///
/// A packet is admissible once its commitment is proven against the
/// counterparty root recorded at `proof_height_on_a`, and the channel's
/// ordering rule accepts its sequence.
pub fn recv_packet_validate<Ctx, C>(
    ctx_b: &Ctx,
    config: &AdmissionConfig<C>,
    msg: &MsgRecvPacket,
) -> Result<(), ContextError>
where
    Ctx: ValidationContext,
    C: PacketCommitter,
{
    let packet = &msg.packet;
    debug!(
        port_id = %packet.port_id_on_b,
        channel_id = %packet.chan_id_on_b,
        sequence = %packet.seq_on_a,
        proof_height = %msg.proof_height_on_a,
        "validating packet receive"
    );

    validate(ctx_b, config, msg).map_err(|e| {
        debug!(
            port_id = %packet.port_id_on_b,
            channel_id = %packet.chan_id_on_b,
            sequence = %packet.seq_on_a,
            error = %e,
            "packet rejected"
        );
        e
    })
}

/// Applies the state changes of an admission validated by
/// [`recv_packet_validate`] and records its audit trail.
pub fn recv_packet_execute<Ctx>(ctx_b: &mut Ctx, msg: MsgRecvPacket) -> Result<Admitted, ContextError>
where
    Ctx: ExecutionContext,
{
    let packet = msg.packet;
    let chan_end_on_b = ctx_b.require_open(&packet.port_id_on_b, &packet.chan_id_on_b)?;
    let conn_id_on_b = ctx_b.connection_hops(&chan_end_on_b)?.clone();

    // state changes
    match chan_end_on_b.ordering {
        Order::Ordered => {
            let seq_recv_path_on_b = SeqRecvPath::new(&packet.port_id_on_b, &packet.chan_id_on_b);
            let next_seq_recv = ctx_b.get_next_sequence_recv(&seq_recv_path_on_b)?;
            ctx_b.store_next_sequence_recv(&seq_recv_path_on_b, next_seq_recv.increment())?;
        }
        Order::Unordered => {
            let receipt_path_on_b =
                ReceiptPath::new(&packet.port_id_on_b, &packet.chan_id_on_b, packet.seq_on_a);
            ctx_b.store_packet_receipt(&receipt_path_on_b, Receipt::Ok)?;
        }
    }

    // emit events and logs
    {
        ctx_b.log_message("success: packet receive".to_string())?;

        let event = IbcEvent::ReceivePacket(ReceivePacket::new(
            packet.clone(),
            chan_end_on_b.ordering,
            conn_id_on_b.clone(),
        ));
        ctx_b.emit_ibc_event(IbcEvent::Message(MessageEvent::Channel))?;
        ctx_b.emit_ibc_event(event)?;
    }

    debug!(
        port_id = %packet.port_id_on_b,
        channel_id = %packet.chan_id_on_b,
        sequence = %packet.seq_on_a,
        "packet admitted"
    );

    Ok(Admitted {
        packet,
        ordering: chan_end_on_b.ordering,
        connection_id: conn_id_on_b,
    })
}

fn validate<Ctx, C>(
    ctx_b: &Ctx,
    config: &AdmissionConfig<C>,
    msg: &MsgRecvPacket,
) -> Result<(), ContextError>
where
    Ctx: ValidationContext,
    C: PacketCommitter,
{
    let packet = &msg.packet;

    ctx_b.validate_message_signer(&msg.signer)?;

    let chan_end_on_b = ctx_b.require_open(&packet.port_id_on_b, &packet.chan_id_on_b)?;

    // The packet must come from the channel's counterparty.
    let source = Counterparty::new(packet.port_id_on_a.clone(), Some(packet.chan_id_on_a.clone()));
    if chan_end_on_b.counterparty() != &source {
        return Err(ChannelError::PacketRoutingMismatch {
            expected: chan_end_on_b.counterparty().clone(),
            actual: source,
        }
        .into());
    }

    // Verify proofs
    {
        let conn_id_on_b = ctx_b.connection_hops(&chan_end_on_b)?;
        let client_id_on_b = ctx_b.client_id_of(conn_id_on_b)?;
        let prefix_on_a = ctx_b.counterparty_prefix(conn_id_on_b)?;

        let client_cons_state_path_on_b = ClientConsensusStatePath::new(
            client_id_on_b,
            msg.proof_height_on_a.revision_number(),
            msg.proof_height_on_a.revision_height(),
        );
        let consensus_state_of_a_on_b = ctx_b.consensus_state(&client_cons_state_path_on_b)?;

        let expected_commitment_on_a = config
            .committer()
            .commit_packet(&packet.data, &packet.timeout_height_on_b);
        let commitment_path_on_a =
            CommitmentPath::new(&packet.port_id_on_a, &packet.chan_id_on_a, packet.seq_on_a);

        verify_membership::<HostFunctionsManager>(
            config.proof_specs(),
            &prefix_on_a,
            &msg.proof_commitment_on_a,
            consensus_state_of_a_on_b.root(),
            Path::Commitment(commitment_path_on_a),
            expected_commitment_on_a.into_vec(),
        )
        .map_err(|error| ChannelError::InvalidProof {
            sequence: packet.seq_on_a,
            error,
        })?;
    }

    match chan_end_on_b.ordering {
        Order::Ordered => {
            let seq_recv_path_on_b = SeqRecvPath::new(&packet.port_id_on_b, &packet.chan_id_on_b);
            let next_seq_recv = ctx_b.get_next_sequence_recv(&seq_recv_path_on_b)?;
            if packet.seq_on_a != next_seq_recv {
                return Err(PacketError::UnexpectedSequence {
                    given: packet.seq_on_a,
                    expected: next_seq_recv,
                }
                .into());
            }
        }
        Order::Unordered => {
            let receipt_path_on_b =
                ReceiptPath::new(&packet.port_id_on_b, &packet.chan_id_on_b, packet.seq_on_a);
            if ctx_b.get_packet_receipt(&receipt_path_on_b)?.is_ok() {
                return Err(PacketError::PacketAlreadyReceived {
                    sequence: packet.seq_on_a,
                }
                .into());
            }
        }
    }

    Ok(())
}
