//! Formatting helpers.

mod pretty;

pub use pretty::PrettySlice;
