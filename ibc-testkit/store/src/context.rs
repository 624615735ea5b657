use ics23::CommitmentProof;

use crate::error::StoreError;
use crate::types::{Height, Path, RawHeight};

/// Store trait - maybe provableStore or privateStore
pub trait Store {
    /// Set `value` for `path`, returning the value it replaces
    fn set(&mut self, path: Path, value: Vec<u8>) -> Result<Option<Vec<u8>>, StoreError>;

    /// Get associated `value` for `path` at specified `height`
    fn get(&self, height: Height, path: &Path) -> Option<Vec<u8>>;

    /// Commit `Pending` block to canonical chain and create new `Pending`
    fn commit(&mut self) -> Result<Vec<u8>, StoreError>;

    /// Apply accumulated changes to `Pending`
    fn apply(&mut self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Reset accumulated changes
    fn reset(&mut self) {}

    /// Return the current height of the chain
    fn current_height(&self) -> RawHeight;

    /// Return all keys of the pending state that start with the specified prefix
    fn get_keys(&self, key_prefix: &Path) -> Vec<Path>;
}

/// ProvableStore trait
pub trait ProvableStore: Store {
    /// Return a vector commitment
    fn root_hash(&self) -> Vec<u8>;

    /// Return proof of existence for key
    fn get_proof(&self, height: Height, key: &Path) -> Option<CommitmentProof>;
}
