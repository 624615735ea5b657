mod signer;

pub use signer::Signer;
