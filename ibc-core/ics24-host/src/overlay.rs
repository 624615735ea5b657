//! Transactional overlays over a host's IBC state.
//!
//! A handler that must leave no trace on failure runs against an overlay:
//! every write lands in the overlay, and reaches the host only once the
//! overlay is committed.

use ibc_core_handler_types::error::ContextError;

use crate::context::ExecutionContext;

/// Outcome of a staged set of writes.
///
/// Dropping a handle without calling [`OverlayHandle::commit`] has the same
/// effect as [`OverlayHandle::discard`].
pub trait OverlayHandle {
    /// Applies every staged write, event and log message to the parent context.
    fn commit(self) -> Result<(), ContextError>;

    /// Drops every staged write, event and log message.
    fn discard(self);
}

/// A host context able to stage writes in a copy-on-write overlay.
///
/// Reads through the overlay observe its own staged writes first, then the
/// parent state.
pub trait TransactionalContext: ExecutionContext {
    type Overlay<'a>: ExecutionContext + OverlayHandle
    where
        Self: 'a;

    /// Opens an overlay. The parent stays mutably borrowed until the overlay
    /// is committed or discarded.
    fn begin_overlay(&mut self) -> Self::Overlay<'_>;
}
