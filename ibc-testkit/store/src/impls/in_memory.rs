use ics23::CommitmentProof;
use tracing::trace;

use crate::avl::{AsBytes, AvlTree};
use crate::context::{ProvableStore, Store};
use crate::error::StoreError;
use crate::types::{Height, Path, RawHeight, State};

/// An in-memory store backed by an AvlTree.
#[derive(Clone, Debug)]
pub struct InMemoryStore {
    /// collection of states corresponding to every committed block height
    store: Vec<State>,
    /// pending block state
    pending: State,
}

impl InMemoryStore {
    #[inline]
    fn get_state(&self, height: Height) -> Option<&State> {
        match height {
            Height::Pending => Some(&self.pending),
            Height::Latest => self.store.last(),
            Height::Stable(height) => {
                let index = usize::try_from(height).ok()?.checked_sub(1)?;
                self.store.get(index)
            }
        }
    }
}

impl Default for InMemoryStore {
    /// The store starts out with an empty state. We also initialize the pending location as empty.
    fn default() -> Self {
        Self {
            store: vec![],
            pending: AvlTree::new(),
        }
    }
}

impl Store for InMemoryStore {
    fn set(&mut self, path: Path, value: Vec<u8>) -> Result<Option<Vec<u8>>, StoreError> {
        trace!("set at path = {}", path);
        Ok(self.pending.insert(path, value))
    }

    fn get(&self, height: Height, path: &Path) -> Option<Vec<u8>> {
        trace!("get at path = {} at height = {}", path, height);
        self.get_state(height).and_then(|v| v.get(path).cloned())
    }

    fn commit(&mut self) -> Result<Vec<u8>, StoreError> {
        trace!("committing height: {}", self.store.len() + 1);
        self.store.push(self.pending.clone());
        Ok(self.root_hash())
    }

    fn current_height(&self) -> RawHeight {
        self.store.len() as RawHeight
    }

    fn get_keys(&self, key_prefix: &Path) -> Vec<Path> {
        let key_prefix = key_prefix.as_bytes();
        self.pending
            .get_keys()
            .into_iter()
            .filter(|&key| key.as_bytes().as_ref().starts_with(key_prefix.as_ref()))
            .cloned()
            .collect()
    }
}

impl ProvableStore for InMemoryStore {
    fn root_hash(&self) -> Vec<u8> {
        self.pending
            .root_hash()
            .map_or_else(|| vec![0u8; 32], |hash| hash.to_vec())
    }

    fn get_proof(&self, height: Height, key: &Path) -> Option<CommitmentProof> {
        trace!("get proof at path = {} at height = {}", key, height);
        self.get_state(height).and_then(|v| v.get_proof(key))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn store_with_two_blocks() -> InMemoryStore {
        let mut store = InMemoryStore::default();
        store.set("a".into(), vec![1]).expect("infallible");
        store.commit().expect("infallible");
        store.set("a".into(), vec![2]).expect("infallible");
        store.set("b".into(), vec![3]).expect("infallible");
        store.commit().expect("infallible");
        store
    }

    #[test]
    fn committed_heights_keep_their_snapshot() {
        let store = store_with_two_blocks();

        assert_eq!(store.current_height(), 2);
        assert_eq!(store.get(Height::Stable(1), &"a".into()), Some(vec![1]));
        assert_eq!(store.get(Height::Stable(1), &"b".into()), None);
        assert_eq!(store.get(Height::Stable(2), &"a".into()), Some(vec![2]));
        assert_eq!(store.get(Height::Latest, &"b".into()), Some(vec![3]));
    }

    #[rstest]
    #[case(Height::Stable(0))]
    #[case(Height::Stable(3))]
    #[case(Height::Stable(u64::MAX))]
    fn unknown_heights_read_nothing(#[case] height: Height) {
        let store = store_with_two_blocks();
        assert_eq!(store.get(height, &"a".into()), None);
        assert!(store.get_proof(height, &"a".into()).is_none());
    }

    #[test]
    fn empty_store_has_zero_root() {
        assert_eq!(InMemoryStore::default().root_hash(), vec![0u8; 32]);
    }

    #[test]
    fn keys_are_filtered_by_prefix() {
        let mut store = InMemoryStore::default();
        store.set("receipts/1".into(), vec![1]).expect("infallible");
        store.set("receipts/2".into(), vec![1]).expect("infallible");
        store.set("commitments/1".into(), vec![1]).expect("infallible");

        let keys = store.get_keys(&"receipts".into());
        assert_eq!(keys, vec![Path::from("receipts/1"), Path::from("receipts/2")]);
    }

    #[test]
    fn committed_keys_are_provable() {
        let store = store_with_two_blocks();
        assert!(store.get_proof(Height::Stable(2), &"b".into()).is_some());
        assert!(store.get_proof(Height::Stable(1), &"b".into()).is_none());
    }
}
