use ibc_core_commitment_types::commitment::CommitmentRoot;

/// The subset of a client's consensus state consulted during packet
/// admission: the counterparty's commitment root at the recorded height.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusState {
    pub root: CommitmentRoot,
}

impl ConsensusState {
    pub fn new(root: CommitmentRoot) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &CommitmentRoot {
        &self.root
    }
}

impl From<CommitmentRoot> for ConsensusState {
    fn from(root: CommitmentRoot) -> Self {
        Self::new(root)
    }
}
