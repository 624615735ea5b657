//! ICS4 (channel) context.

use ibc_core_channel_types::channel::ChannelEnd;
use ibc_core_channel_types::error::ChannelError;
use ibc_core_commitment_types::commitment::CommitmentPrefix;
use ibc_core_handler_types::error::ContextError;
use ibc_core_host::types::identifiers::{ChannelId, ClientId, ConnectionId, PortId};
use ibc_core_host::types::path::ChannelEndPath;
use ibc_core_host::ValidationContext;

/// Read-only channel lookups needed by packet admission, to be implemented by
/// the host through its `ValidationContext`.
pub trait ChannelRegistry {
    /// Returns the `ChannelEnd` stored for `port_id` and `channel_id`.
    fn get_channel(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<ChannelEnd, ContextError>;

    /// Returns the `ChannelEnd` for `port_id` and `channel_id`, provided it is
    /// in the `Open` state.
    fn require_open(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<ChannelEnd, ContextError>;

    /// Returns the connection the channel is built upon.
    fn connection_hops<'c>(
        &self,
        channel_end: &'c ChannelEnd,
    ) -> Result<&'c ConnectionId, ContextError>;

    /// Returns the local client tracking the counterparty of `conn_id`.
    fn client_id_of(&self, conn_id: &ConnectionId) -> Result<ClientId, ContextError>;

    /// Returns the store prefix under which the counterparty of `conn_id`
    /// commits its packets.
    fn counterparty_prefix(&self, conn_id: &ConnectionId)
        -> Result<CommitmentPrefix, ContextError>;
}

impl<T> ChannelRegistry for T
where
    T: ValidationContext,
{
    fn get_channel(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<ChannelEnd, ContextError> {
        self.channel_end(&ChannelEndPath::new(port_id, channel_id))
    }

    fn require_open(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<ChannelEnd, ContextError> {
        let chan_end = self.get_channel(port_id, channel_id)?;

        if !chan_end.is_open() {
            return Err(ChannelError::ChannelNotOpen {
                port_id: port_id.clone(),
                channel_id: channel_id.clone(),
                state: *chan_end.state(),
            }
            .into());
        }

        Ok(chan_end)
    }

    fn connection_hops<'c>(
        &self,
        channel_end: &'c ChannelEnd,
    ) -> Result<&'c ConnectionId, ContextError> {
        channel_end.verify_connection_hops_length()?;

        channel_end.connection_hops().first().ok_or_else(|| {
            ChannelError::InvalidConnectionHopsLength {
                expected: 1,
                actual: 0,
            }
            .into()
        })
    }

    fn client_id_of(&self, conn_id: &ConnectionId) -> Result<ClientId, ContextError> {
        Ok(self.connection_end(conn_id)?.client_id().clone())
    }

    fn counterparty_prefix(
        &self,
        conn_id: &ConnectionId,
    ) -> Result<CommitmentPrefix, ContextError> {
        Ok(self.connection_end(conn_id)?.counterparty().prefix().clone())
    }
}
