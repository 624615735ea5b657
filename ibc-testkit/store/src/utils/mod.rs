pub(crate) mod codec;
mod macros;

pub use codec::{BinCodec, Codec, JsonCodec};
