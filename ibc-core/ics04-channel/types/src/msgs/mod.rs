//! Message definitions for the ICS-04 packet datagrams handled by this host.

mod recv_packet;

pub use recv_packet::*;
