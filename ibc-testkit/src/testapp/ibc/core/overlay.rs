//! Transactional overlays over the mock IBC store.

use ibc_core::handler::types::error::ContextError;
use ibc_core::host::{OverlayHandle, TransactionalContext};
use ibc_testkit_store::context::Store;
use ibc_testkit_store::impls::OverlayStore;
use tracing::trace;

use super::core_ctx::store_error;
use super::types::{Journal, MockIbcStore};

impl<S: Store> TransactionalContext for MockIbcStore<S> {
    type Overlay<'a> = MockIbcStore<OverlayStore<'a, S>> where Self: 'a;

    fn begin_overlay(&mut self) -> Self::Overlay<'_> {
        let journal = Journal {
            events: self.events.lock().len(),
            logs: self.logs.lock().len(),
        };
        trace!(?journal, "opening overlay");

        MockIbcStore {
            store: OverlayStore::new(&mut self.store),
            commitment_prefix: self.commitment_prefix.clone(),
            events: self.events.clone(),
            logs: self.logs.clone(),
            journal: Some(journal),
        }
    }
}

impl<S: Store> OverlayHandle for MockIbcStore<OverlayStore<'_, S>> {
    fn commit(mut self) -> Result<(), ContextError> {
        trace!(staged = self.store.staged(), "committing overlay");
        self.store.apply().map_err(store_error)?;
        self.journal = None;
        Ok(())
    }

    fn discard(self) {}
}

impl<S: Store> MockIbcStore<S> {
    fn rollback(&mut self, journal: Journal) {
        trace!(?journal, "overlay discarded");
        self.store.reset();
        self.events.lock().truncate(journal.events);
        self.logs.lock().truncate(journal.logs);
    }
}

impl<S: Store> Drop for MockIbcStore<S> {
    fn drop(&mut self) {
        if let Some(journal) = self.journal.take() {
            self.rollback(journal);
        }
    }
}
