//! Host contexts of the mock IBC store.

use ibc_core::channel::types::channel::ChannelEnd;
use ibc_core::channel::types::commitment::{PacketCommitment, RECEIPT_COMMITMENT};
use ibc_core::channel::types::error::{ChannelError, PacketError};
use ibc_core::channel::types::packet::Receipt;
use ibc_core::client::types::error::ClientError;
use ibc_core::client::types::{ConsensusState, Height};
use ibc_core::commitment_types::commitment::CommitmentPrefix;
use ibc_core::connection::types::error::ConnectionError;
use ibc_core::connection::types::ConnectionEnd;
use ibc_core::handler::types::error::ContextError;
use ibc_core::handler::types::events::IbcEvent;
use ibc_core::host::types::identifiers::{ConnectionId, Sequence};
use ibc_core::host::types::path::{
    ChannelEndPath, ClientConsensusStatePath, CommitmentPath, ConnectionPath, ReceiptPath,
    SeqRecvPath, SeqSendPath,
};
use ibc_core::host::{ExecutionContext, ValidationContext};
use ibc_core::primitives::prelude::*;
use ibc_core::primitives::Signer;
use ibc_testkit_store::context::Store;
use ibc_testkit_store::error::StoreError;
use ibc_testkit_store::types::Height as StoreHeight;

use super::types::{
    ChannelEndStore, ConnectionEndStore, ConsensusStateStore, MockIbcStore,
    NextSequenceRecvStore, NextSequenceSendStore, PacketCommitmentStore, PacketReceiptStore,
};

pub(crate) fn store_error(e: StoreError) -> ContextError {
    ClientError::Other {
        description: e.to_string(),
    }
    .into()
}

impl<S: Store> ValidationContext for MockIbcStore<S> {
    fn connection_end(&self, conn_id: &ConnectionId) -> Result<ConnectionEnd, ContextError> {
        Ok(ConnectionEndStore::get(
            &self.store,
            StoreHeight::Pending,
            &ConnectionPath::new(conn_id),
        )
        .ok_or(ConnectionError::ConnectionNotFound {
            connection_id: conn_id.clone(),
        })?)
    }

    fn consensus_state(
        &self,
        client_cons_state_path: &ClientConsensusStatePath,
    ) -> Result<ConsensusState, ContextError> {
        match ConsensusStateStore::get(&self.store, StoreHeight::Pending, client_cons_state_path) {
            Some(consensus_state) => Ok(consensus_state),
            None => {
                let height = Height::new(
                    client_cons_state_path.revision_number,
                    client_cons_state_path.revision_height,
                )?;
                Err(ClientError::ConsensusStateNotFound {
                    client_id: client_cons_state_path.client_id.clone(),
                    height,
                }
                .into())
            }
        }
    }

    fn commitment_prefix(&self) -> CommitmentPrefix {
        self.commitment_prefix.clone()
    }

    fn channel_end(&self, chan_end_path: &ChannelEndPath) -> Result<ChannelEnd, ContextError> {
        Ok(
            ChannelEndStore::get(&self.store, StoreHeight::Pending, chan_end_path).ok_or(
                ChannelError::ChannelNotFound {
                    port_id: chan_end_path.0.clone(),
                    channel_id: chan_end_path.1.clone(),
                },
            )?,
        )
    }

    fn get_next_sequence_send(
        &self,
        seq_send_path: &SeqSendPath,
    ) -> Result<Sequence, ContextError> {
        Ok(
            NextSequenceSendStore::get(&self.store, StoreHeight::Pending, seq_send_path).ok_or(
                PacketError::MissingNextSendSeq {
                    port_id: seq_send_path.0.clone(),
                    channel_id: seq_send_path.1.clone(),
                },
            )?,
        )
    }

    fn get_next_sequence_recv(
        &self,
        seq_recv_path: &SeqRecvPath,
    ) -> Result<Sequence, ContextError> {
        Ok(
            NextSequenceRecvStore::get(&self.store, StoreHeight::Pending, seq_recv_path).ok_or(
                PacketError::MissingNextRecvSeq {
                    port_id: seq_recv_path.0.clone(),
                    channel_id: seq_recv_path.1.clone(),
                },
            )?,
        )
    }

    fn get_packet_commitment(
        &self,
        commitment_path: &CommitmentPath,
    ) -> Result<PacketCommitment, ContextError> {
        Ok(
            PacketCommitmentStore::get(&self.store, StoreHeight::Pending, commitment_path).ok_or(
                PacketError::PacketCommitmentNotFound {
                    sequence: commitment_path.sequence,
                },
            )?,
        )
    }

    fn get_packet_receipt(&self, receipt_path: &ReceiptPath) -> Result<Receipt, ContextError> {
        match PacketReceiptStore::get(&self.store, StoreHeight::Pending, receipt_path) {
            Some(_) => Ok(Receipt::Ok),
            None => Ok(Receipt::None),
        }
    }

    fn validate_message_signer(&self, _signer: &Signer) -> Result<(), ContextError> {
        Ok(())
    }
}

impl<S: Store> ExecutionContext for MockIbcStore<S> {
    fn store_packet_commitment(
        &mut self,
        commitment_path: &CommitmentPath,
        commitment: PacketCommitment,
    ) -> Result<(), ContextError> {
        PacketCommitmentStore::set(&mut self.store, commitment_path.clone(), commitment)
            .map_err(store_error)?;
        Ok(())
    }

    fn store_packet_receipt(
        &mut self,
        receipt_path: &ReceiptPath,
        receipt: Receipt,
    ) -> Result<(), ContextError> {
        // a receipt is never cleared
        if receipt.is_ok() {
            PacketReceiptStore::set(
                &mut self.store,
                receipt_path.clone(),
                RECEIPT_COMMITMENT.to_vec(),
            )
            .map_err(store_error)?;
        }
        Ok(())
    }

    fn store_channel(
        &mut self,
        channel_end_path: &ChannelEndPath,
        channel_end: ChannelEnd,
    ) -> Result<(), ContextError> {
        ChannelEndStore::set(&mut self.store, channel_end_path.clone(), channel_end)
            .map_err(store_error)?;
        Ok(())
    }

    fn store_next_sequence_send(
        &mut self,
        seq_send_path: &SeqSendPath,
        seq: Sequence,
    ) -> Result<(), ContextError> {
        NextSequenceSendStore::set(&mut self.store, seq_send_path.clone(), seq)
            .map_err(store_error)?;
        Ok(())
    }

    fn store_next_sequence_recv(
        &mut self,
        seq_recv_path: &SeqRecvPath,
        seq: Sequence,
    ) -> Result<(), ContextError> {
        NextSequenceRecvStore::set(&mut self.store, seq_recv_path.clone(), seq)
            .map_err(store_error)?;
        Ok(())
    }

    fn emit_ibc_event(&mut self, event: IbcEvent) -> Result<(), ContextError> {
        self.events.lock().push(event);
        Ok(())
    }

    fn log_message(&mut self, message: String) -> Result<(), ContextError> {
        self.logs.lock().push(message);
        Ok(())
    }
}
