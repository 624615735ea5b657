//! ICS-24: Host defines the minimal set of interfaces that a state machine
//! hosting an IBC-enabled chain must implement to admit packets.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub(crate) mod context;
pub(crate) mod overlay;

pub use context::*;
pub use overlay::*;

/// Re-exports ICS-24 data structures from the `ibc-core-host-types` crate
pub mod types {
    #[doc(inline)]
    pub use ibc_core_host_types::*;
}
