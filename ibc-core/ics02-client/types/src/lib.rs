//! ICS-02: Client types the packet admission pipeline relies on to look up
//! the counterparty state root a proof is checked against.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

mod consensus_state;
mod height;

pub use consensus_state::*;
pub use height::*;

pub mod error;
