//! Exposes IBC handler entry points for admitting incoming packets. These
//! entry points validate a relayed `MsgRecvPacket` against the host context
//! and, when it is admissible, execute the resulting state changes.
//!
//! If any method in this library returns an error, the runtime is expected to
//! rollback all state modifications made to the context (e.g.
//! [`ExecutionContext`](ibc_core_host::ExecutionContext)) while processing the
//! message. [`entrypoint::admit_in_overlay`] does so on the host's behalf for
//! contexts implementing
//! [`TransactionalContext`](ibc_core_host::TransactionalContext).
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod entrypoint;

/// Re-export IBC handler types from `ibc-core-handler-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_core_handler_types::*;
}
