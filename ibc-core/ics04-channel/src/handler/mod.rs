//! This module implements the processing logic for ICS4 (channel) messages.
mod recv_packet;

pub use recv_packet::*;
