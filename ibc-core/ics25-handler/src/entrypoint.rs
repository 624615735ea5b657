use ibc_core_channel::config::AdmissionConfig;
use ibc_core_channel::handler::{recv_packet_execute, recv_packet_validate, Admitted};
use ibc_core_channel::types::commitment::PacketCommitter;
use ibc_core_channel::types::msgs::MsgRecvPacket;
use ibc_core_handler_types::error::{ContextError, ModuleError};
use ibc_core_host::{ExecutionContext, OverlayHandle, TransactionalContext, ValidationContext};
use tracing::debug;

/// Entrypoint which performs both validation and execution of a received
/// packet.
///
/// Nothing is written to `ctx` unless validation succeeds.
pub fn admit<Ctx, C>(
    ctx: &mut Ctx,
    config: &AdmissionConfig<C>,
    msg: MsgRecvPacket,
) -> Result<Admitted, ContextError>
where
    Ctx: ExecutionContext,
    C: PacketCommitter,
{
    validate(ctx, config, &msg)?;
    execute(ctx, msg)
}

/// Entrypoint which only performs validation of a received packet.
///
/// If a transaction contains `n` messages `m_1` ... `m_n`, then
/// they MUST be processed as follows:
///     validate(m_1), execute(m_1), ..., validate(m_n), execute(m_n)
/// That is, the state transition of message `i` must be applied before
/// message `i+1` is validated. This is equivalent to calling
/// `admit()` on each successively.
pub fn validate<Ctx, C>(
    ctx: &Ctx,
    config: &AdmissionConfig<C>,
    msg: &MsgRecvPacket,
) -> Result<(), ContextError>
where
    Ctx: ValidationContext,
    C: PacketCommitter,
{
    recv_packet_validate(ctx, config, msg)
}

/// Entrypoint which only performs execution of a received packet.
///
/// `msg` must have been validated beforehand.
pub fn execute<Ctx>(ctx: &mut Ctx, msg: MsgRecvPacket) -> Result<Admitted, ContextError>
where
    Ctx: ExecutionContext,
{
    recv_packet_execute(ctx, msg)
}

/// Admits `msg` inside an overlay over `ctx` and hands the admitted packet to
/// the receiving application through `on_recv`.
///
/// The overlay is committed only if both the admission and `on_recv`
/// succeed. Otherwise it is discarded, leaving `ctx` exactly as it was, and
/// the same message may be submitted again.
pub fn admit_in_overlay<Ctx, C, F>(
    ctx: &mut Ctx,
    config: &AdmissionConfig<C>,
    msg: MsgRecvPacket,
    on_recv: F,
) -> Result<Admitted, ContextError>
where
    Ctx: TransactionalContext,
    C: PacketCommitter,
    F: FnOnce(&mut dyn ExecutionContext, &Admitted) -> Result<(), ModuleError>,
{
    let mut overlay = ctx.begin_overlay();

    let outcome = match admit(&mut overlay, config, msg) {
        Ok(admitted) => match on_recv(&mut overlay, &admitted) {
            Ok(()) => Ok(admitted),
            Err(e) => Err(ContextError::from(e)),
        },
        Err(e) => Err(e),
    };

    match outcome {
        Ok(admitted) => {
            overlay.commit()?;
            Ok(admitted)
        }
        Err(e) => {
            debug!(error = %e, "discarding packet receive overlay");
            overlay.discard();
            Err(e)
        }
    }
}
