//! # ICS23 Proof
//!
//! The ICS23 proof spec matching the proofs produced by [`AvlTree`](super::AvlTree).
use ics23::{HashOp, InnerSpec, LeafOp, LengthOp, ProofSpec};

/// Prepended to `key || value` when hashing a node's own entry.
pub const LEAF_PREFIX: [u8; 64] = [0; 64];

/// Leaf operation shared by every existence proof of the tree.
pub(crate) fn leaf_op() -> LeafOp {
    LeafOp {
        hash: HashOp::Sha256.into(),
        prehash_key: HashOp::NoHash.into(),
        prehash_value: HashOp::NoHash.into(),
        length: LengthOp::NoPrefix.into(),
        prefix: LEAF_PREFIX.to_vec(),
    }
}

/// Return the `ProofSpec` of the AVL tree.
///
/// An inner node hashes `left.merkle_hash? || hash || right.merkle_hash?`,
/// so a step up the path carries at most two 32-byte siblings.
pub fn get_proof_spec() -> ProofSpec {
    ProofSpec {
        leaf_spec: Some(leaf_op()),
        inner_spec: Some(InnerSpec {
            child_order: vec![0, 1, 2],
            child_size: 32,
            min_prefix_length: 0,
            max_prefix_length: 64,
            empty_child: vec![0, 32],
            hash: HashOp::Sha256.into(),
        }),
        max_depth: 0,
        min_depth: 0,
        prehash_key_before_comparison: false,
    }
}
