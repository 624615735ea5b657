//! # AVL Tree
//!
//! A simple AVL Merkle tree supporting `get` and `insert`. Committed state is
//! never deleted from, so there is no `remove`.
//!
//! Proofs of existence follow [ICS23](https://github.com/cosmos/ics23); see
//! [`get_proof_spec`] for the matching proof spec.
//!
//! Keys must implement `Ord` and [`AsBytes`], values `Borrow<[u8]>`.

pub use as_bytes::{AsBytes, ByteSlice};
pub use node::{AvlNode, Hash};
pub use proof::get_proof_spec;
pub use tree::AvlTree;

mod as_bytes;
mod node;
mod proof;
mod tree;
