//! A provable key-value store for mock IBC hosts.
//!
//! Committed states are kept as AVL Merkle trees, one per block height, and
//! can produce ICS-23 existence proofs for any committed key. Writes can be
//! staged in an [`OverlayStore`](impls::OverlayStore) and applied or dropped
//! as a unit.
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

pub mod avl;
pub mod context;
pub mod error;
pub mod impls;
pub mod types;
pub mod utils;
