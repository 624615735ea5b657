//! Defines proof specs, which encode the structure of proofs

use ibc_primitives::prelude::*;
use ics23::{InnerSpec, ProofSpec};

use crate::error::CommitmentError;

/// An ordered list of proof specifications, innermost store first.
///
/// The relayed Merkle proof must carry exactly one sub-proof per spec. The
/// default, [`ProofSpecs::cosmos`], describes an IAVL sub-store nested in a
/// Tendermint simple Merkle tree.
#[derive(Clone, Debug, PartialEq)]
pub struct ProofSpecs(Vec<ProofSpec>);

impl ProofSpecs {
    /// Returns the specification for Cosmos-SDK proofs
    pub fn cosmos() -> Self {
        Self(vec![
            ics23::iavl_spec(),       // Format of proofs-iavl (iavl merkle proofs)
            ics23::tendermint_spec(), // Format of proofs-tendermint (crypto/ merkle SimpleProof)
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ProofSpec> {
        self.0.iter()
    }

    pub fn validate(&self) -> Result<(), CommitmentError> {
        if self.is_empty() {
            return Err(CommitmentError::EmptyProofSpecs);
        }
        self.0.iter().try_for_each(validate_proof_spec)
    }
}

impl Default for ProofSpecs {
    fn default() -> Self {
        Self::cosmos()
    }
}

impl TryFrom<Vec<ProofSpec>> for ProofSpecs {
    type Error = CommitmentError;

    fn try_from(specs: Vec<ProofSpec>) -> Result<Self, Self::Error> {
        let specs = Self(specs);
        specs.validate()?;
        Ok(specs)
    }
}

impl From<ProofSpecs> for Vec<ProofSpec> {
    fn from(specs: ProofSpecs) -> Self {
        specs.0
    }
}

fn validate_proof_spec(spec: &ProofSpec) -> Result<(), CommitmentError> {
    // A non-positive `min_depth` or `max_depth` indicates no limit on the respective bound.
    if 0 < spec.min_depth && 0 < spec.max_depth && spec.max_depth < spec.min_depth {
        return Err(CommitmentError::InvalidDepthRange(
            spec.min_depth,
            spec.max_depth,
        ));
    }

    spec.inner_spec
        .as_ref()
        .map_or(Ok(()), validate_inner_spec)
}

fn validate_inner_spec(inner_spec: &InnerSpec) -> Result<(), CommitmentError> {
    if inner_spec.child_size <= 0 {
        return Err(CommitmentError::InvalidChildSize(inner_spec.child_size));
    }

    if inner_spec.max_prefix_length < inner_spec.min_prefix_length
        || inner_spec.min_prefix_length < 0
        || inner_spec.max_prefix_length < 0
    {
        return Err(CommitmentError::InvalidPrefixLengthRange(
            inner_spec.min_prefix_length,
            inner_spec.max_prefix_length,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn mock_proof_spec(min_depth: i32, max_depth: i32) -> ProofSpec {
        ProofSpec {
            leaf_spec: None,
            inner_spec: None,
            max_depth,
            min_depth,
            prehash_key_before_comparison: false,
        }
    }

    fn mock_inner_spec(min_prefix_length: i32, max_prefix_length: i32) -> InnerSpec {
        InnerSpec {
            child_order: vec![1],
            child_size: 2,
            min_prefix_length,
            max_prefix_length,
            empty_child: vec![],
            hash: 1,
        }
    }

    #[test]
    fn cosmos_specs_are_valid() {
        let specs = ProofSpecs::cosmos();
        assert_eq!(specs.len(), 2);
        assert!(specs.validate().is_ok());
    }

    #[test]
    fn empty_specs_are_rejected() {
        assert_eq!(
            ProofSpecs::try_from(vec![]),
            Err(CommitmentError::EmptyProofSpecs)
        );
    }

    #[rstest]
    #[case(5, 6)]
    #[case(-3, 3)]
    #[case(2, -6)]
    #[case(-2, -6)]
    #[case(-6, -2)]
    fn proof_spec_depth_ok(#[case] min_depth: i32, #[case] max_depth: i32) {
        assert!(ProofSpecs::try_from(vec![mock_proof_spec(min_depth, max_depth)]).is_ok())
    }

    #[rstest]
    #[case(5, 3)]
    fn proof_spec_depth_err(#[case] min_depth: i32, #[case] max_depth: i32) {
        assert_eq!(
            ProofSpecs::try_from(vec![mock_proof_spec(min_depth, max_depth)]),
            Err(CommitmentError::InvalidDepthRange(min_depth, max_depth))
        )
    }

    #[rstest]
    #[case(1, 2)]
    fn inner_spec_ok(#[case] min_prefix_length: i32, #[case] max_prefix_length: i32) {
        assert!(validate_inner_spec(&mock_inner_spec(min_prefix_length, max_prefix_length)).is_ok())
    }

    #[rstest]
    #[case(2, 1)]
    #[case(-2, 1)]
    #[case(2, -1)]
    #[case(-2, -1)]
    #[case(-1, -2)]
    fn inner_spec_err(#[case] min_prefix_length: i32, #[case] max_prefix_length: i32) {
        assert!(
            validate_inner_spec(&mock_inner_spec(min_prefix_length, max_prefix_length)).is_err()
        )
    }
}
