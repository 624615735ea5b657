//! Defines the packet timeout types

mod height;

pub use height::*;
