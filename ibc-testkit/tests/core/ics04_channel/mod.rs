pub mod admit_in_overlay;
pub mod recv_packet;
