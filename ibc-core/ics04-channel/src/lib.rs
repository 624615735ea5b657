//! ICS-04: Channel and Packet Semantics implementation to admit incoming data
//! packets. Exports the channel registry, the admission configuration and the
//! `recvPacket` handler of the IBC core channel module.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod context;
pub mod handler;

/// Re-exports ICS-04 data structures from the `ibc-core-channel-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_core_channel_types::*;
}
