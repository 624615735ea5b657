//! Mock host chains, relayer helpers and fixtures for testing packet
//! admission against real ICS-23 proofs.
//!
//! Each [`MockContext`](context::MockContext) is a chain whose IBC state lives
//! in a provable AVL store. Packet commitments written on one chain can be
//! proven at any of its committed heights, and the resulting proofs are
//! accepted by the admission pipeline of another chain that recorded the
//! matching root.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod context;
pub mod fixtures;
pub mod hosts;
pub mod relayer;
pub mod testapp;
