use std::collections::BTreeMap;

use tracing::trace;

use crate::context::Store;
use crate::error::StoreError;
use crate::types::{Height, Path, RawHeight};

/// A copy-on-write layer over a parent store.
///
/// Writes are staged in memory until [`Store::apply`] flushes them into the
/// parent's pending state, and only there: a parent that is itself an overlay
/// keeps them staged. Reads at [`Height::Pending`] observe staged writes
/// first; reads at any other height go to the parent.
#[derive(Debug)]
pub struct OverlayStore<'a, S> {
    parent: &'a mut S,
    pending: BTreeMap<Path, Vec<u8>>,
}

impl<'a, S: Store> OverlayStore<'a, S> {
    pub fn new(parent: &'a mut S) -> Self {
        Self {
            parent,
            pending: BTreeMap::new(),
        }
    }

    /// Number of staged writes.
    pub fn staged(&self) -> usize {
        self.pending.len()
    }
}

impl<S: Store> Store for OverlayStore<'_, S> {
    fn set(&mut self, path: Path, value: Vec<u8>) -> Result<Option<Vec<u8>>, StoreError> {
        trace!("stage at path = {}", path);
        let prev = self.get(Height::Pending, &path);
        self.pending.insert(path, value);
        Ok(prev)
    }

    fn get(&self, height: Height, path: &Path) -> Option<Vec<u8>> {
        match height {
            Height::Pending => self
                .pending
                .get(path)
                .cloned()
                .or_else(|| self.parent.get(height, path)),
            _ => self.parent.get(height, path),
        }
    }

    fn commit(&mut self) -> Result<Vec<u8>, StoreError> {
        self.apply()?;
        self.parent.commit()
    }

    fn apply(&mut self) -> Result<(), StoreError> {
        trace!("applying {} staged writes", self.pending.len());
        for (path, value) in std::mem::take(&mut self.pending) {
            self.parent.set(path, value)?;
        }
        Ok(())
    }

    fn reset(&mut self) {
        trace!("dropping {} staged writes", self.pending.len());
        self.pending.clear();
    }

    fn current_height(&self) -> RawHeight {
        self.parent.current_height()
    }

    fn get_keys(&self, key_prefix: &Path) -> Vec<Path> {
        let mut keys = self.parent.get_keys(key_prefix);
        keys.extend(
            self.pending
                .keys()
                .filter(|key| key.starts_with(key_prefix))
                .cloned(),
        );
        keys.sort();
        keys.dedup();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::InMemoryStore;

    fn parent() -> InMemoryStore {
        let mut store = InMemoryStore::default();
        store.set("seq/recv".into(), vec![1]).expect("infallible");
        store.commit().expect("infallible");
        store
    }

    #[test]
    fn staged_writes_shadow_parent() {
        let mut parent = parent();
        let mut overlay = OverlayStore::new(&mut parent);

        let prev = overlay.set("seq/recv".into(), vec![2]).expect("infallible");

        assert_eq!(prev, Some(vec![1]));
        assert_eq!(overlay.get(Height::Pending, &"seq/recv".into()), Some(vec![2]));
        assert_eq!(overlay.get(Height::Latest, &"seq/recv".into()), Some(vec![1]));
    }

    #[test]
    fn reset_leaves_parent_untouched() {
        let mut parent = parent();
        {
            let mut overlay = OverlayStore::new(&mut parent);
            overlay.set("seq/recv".into(), vec![2]).expect("infallible");
            overlay.set("receipt/1".into(), vec![1]).expect("infallible");
            overlay.reset();
            assert_eq!(overlay.staged(), 0);
        }
        assert_eq!(parent.get(Height::Pending, &"seq/recv".into()), Some(vec![1]));
        assert_eq!(parent.get(Height::Pending, &"receipt/1".into()), None);
    }

    #[test]
    fn dropped_overlay_writes_nothing() {
        let mut parent = parent();
        {
            let mut overlay = OverlayStore::new(&mut parent);
            overlay.set("receipt/1".into(), vec![1]).expect("infallible");
        }
        assert_eq!(parent.get(Height::Pending, &"receipt/1".into()), None);
    }

    #[test]
    fn apply_flushes_into_parent_pending() {
        let mut parent = parent();
        {
            let mut overlay = OverlayStore::new(&mut parent);
            overlay.set("receipt/1".into(), vec![1]).expect("infallible");
            overlay.apply().expect("infallible");
        }
        assert_eq!(parent.get(Height::Pending, &"receipt/1".into()), Some(vec![1]));
        assert_eq!(parent.get(Height::Latest, &"receipt/1".into()), None);
        assert_eq!(parent.current_height(), 1);
    }

    #[test]
    fn nested_apply_stops_at_the_enclosing_overlay() {
        let mut parent = parent();
        {
            let mut outer = OverlayStore::new(&mut parent);
            {
                let mut inner = OverlayStore::new(&mut outer);
                inner.set("receipt/1".into(), vec![1]).expect("infallible");
                inner.apply().expect("infallible");
            }
            assert_eq!(outer.staged(), 1);
        }
        assert_eq!(parent.get(Height::Pending, &"receipt/1".into()), None);
    }

    #[test]
    fn keys_merge_staged_and_parent() {
        let mut parent = parent();
        let mut overlay = OverlayStore::new(&mut parent);
        overlay.set("seq/send".into(), vec![1]).expect("infallible");
        overlay.set("seq/recv".into(), vec![3]).expect("infallible");

        assert_eq!(
            overlay.get_keys(&"seq".into()),
            vec![Path::from("seq/recv"), Path::from("seq/send")]
        );
    }
}
