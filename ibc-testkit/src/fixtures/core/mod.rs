pub mod channel;
pub mod context;
pub mod signer;
