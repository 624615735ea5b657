//! Re-exports the `alloc` items that `std` would otherwise bring into scope,
//! so that `no_std` crates can write the same code as `std` ones.

pub use alloc::borrow::ToOwned;
pub use alloc::boxed::Box;
pub use alloc::string::{String, ToString};
pub use alloc::vec::Vec;
pub use alloc::{format, vec};
pub use core::prelude::v1::*;
