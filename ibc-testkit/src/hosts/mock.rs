use ibc_core::client::types::{ConsensusState, Height};
use ibc_core::commitment_types::commitment::CommitmentRoot;
use ibc_core::primitives::prelude::*;
use typed_builder::TypedBuilder;

/// A block of the mock host chain: its height and the root of the state it
/// commits to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockBlock {
    pub height: Height,
    pub root: CommitmentRoot,
}

impl MockBlock {
    /// The consensus state a client tracking this chain records for the block.
    pub fn into_consensus_state(self) -> ConsensusState {
        ConsensusState::new(self.root)
    }
}

/// The block history of a mock host chain, in ascending height order.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct MockHost {
    #[builder(default)]
    pub revision_number: u64,
    #[builder(default)]
    pub history: Vec<MockBlock>,
}

impl MockHost {
    /// Height of the latest block, or 0 before genesis.
    pub fn latest_revision_height(&self) -> u64 {
        self.history
            .last()
            .map_or(0, |block| block.height.revision_height())
    }

    pub fn latest_block(&self) -> MockBlock {
        self.history.last().cloned().expect("Never fails")
    }

    pub fn latest_height(&self) -> Height {
        self.latest_block().height
    }

    pub fn get_block(&self, target_height: &Height) -> Option<MockBlock> {
        self.history
            .iter()
            .find(|block| block.height == *target_height)
            .cloned()
    }

    /// Appends the block committing to `root` on top of the history.
    pub fn push_block(&mut self, root: Vec<u8>) {
        let height = Height::new(self.revision_number, self.latest_revision_height() + 1)
            .expect("Never fails");
        self.history.push(MockBlock {
            height,
            root: CommitmentRoot::from(root),
        });
    }

    /// Checks that the history is a gap-free sequence of heights starting at 1.
    pub fn validate(&self) -> Result<(), String> {
        for (i, block) in self.history.iter().enumerate() {
            let expected = Height::new(self.revision_number, i as u64 + 1)
                .map_err(|e| e.to_string())?;
            if block.height != expected {
                return Err(format!(
                    "block {i} has height {} instead of {expected}",
                    block.height
                ));
            }
        }
        Ok(())
    }
}
