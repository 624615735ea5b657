//! A receiving application used to exercise the transactional delivery of
//! packets.

use ibc_core::channel::handler::Admitted;
use ibc_core::handler::types::error::{ContextError, ModuleError};
use ibc_core::handler::types::events::{IbcEvent, MessageEvent};
use ibc_core::host::ExecutionContext;
use ibc_core::primitives::prelude::*;

pub const MOCK_MODULE_NAME: &str = "mock";

/// Records every packet it receives in the host's event and log buffers, then
/// accepts it, unless configured to reject it.
#[derive(Clone, Debug, Default)]
pub struct MockApp {
    rejection: Option<String>,
}

impl MockApp {
    /// An application that records the packet, then rejects it with
    /// `description`.
    pub fn rejecting(description: impl Into<String>) -> Self {
        Self {
            rejection: Some(description.into()),
        }
    }

    pub fn on_recv_packet(
        &self,
        ctx: &mut dyn ExecutionContext,
        admitted: &Admitted,
    ) -> Result<(), ModuleError> {
        ctx.emit_ibc_event(IbcEvent::Message(MessageEvent::Module(
            MOCK_MODULE_NAME.to_string(),
        )))
        .map_err(callback_error)?;
        ctx.log_message(format!(
            "{MOCK_MODULE_NAME}: received packet {}",
            admitted.packet.seq_on_a
        ))
        .map_err(callback_error)?;

        match &self.rejection {
            Some(description) => Err(ModuleError::Callback {
                description: description.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn callback_error(e: ContextError) -> ModuleError {
    ModuleError::Callback {
        description: e.to_string(),
    }
}
