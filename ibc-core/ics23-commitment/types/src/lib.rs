//! ICS-23: vector commitment types and the Merkle proof verification that
//! gates packet admission.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub mod commitment;
pub mod error;
pub mod merkle;
pub mod specs;
pub mod verify;

/// Re-exports the `ics23` crate so that hosts build proofs against the same version.
pub use ics23;
