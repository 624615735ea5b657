use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A trait that defines how types are decoded/encoded.
pub trait Codec {
    type Type;
    type Encoded: AsRef<[u8]>;

    fn encode(d: &Self::Type) -> Option<Self::Encoded>;

    fn decode(bytes: &[u8]) -> Option<Self::Type>;
}

/// A JSON codec that uses `serde_json` to encode/decode as a JSON string
#[derive(Clone, Debug)]
pub struct JsonCodec<T>(PhantomData<T>);

impl<T> Codec for JsonCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Type = T;
    type Encoded = String;

    fn encode(d: &Self::Type) -> Option<Self::Encoded> {
        serde_json::to_string(d).ok()
    }

    fn decode(bytes: &[u8]) -> Option<Self::Type> {
        serde_json::from_slice(bytes).ok()
    }
}

/// A binary codec that stores the raw bytes of the value, for values whose
/// bytes must be provable as-is (e.g. packet commitments).
#[derive(Clone, Debug)]
pub struct BinCodec<T>(PhantomData<T>);

impl<T> Codec for BinCodec<T>
where
    T: AsRef<[u8]> + From<Vec<u8>>,
{
    type Type = T;
    type Encoded = Vec<u8>;

    fn encode(d: &Self::Type) -> Option<Self::Encoded> {
        Some(d.as_ref().to_vec())
    }

    fn decode(bytes: &[u8]) -> Option<Self::Type> {
        Some(bytes.to_vec().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_rejects_foreign_bytes() {
        assert_eq!(JsonCodec::<u64>::encode(&7).as_deref(), Some("7"));
        assert_eq!(JsonCodec::<u64>::decode(b"7"), Some(7));
        assert_eq!(JsonCodec::<u64>::decode(&[0xff]), None);
    }

    #[test]
    fn bin_keeps_bytes_verbatim() {
        let bytes = vec![0x01, 0x02];
        assert_eq!(BinCodec::<Vec<u8>>::encode(&bytes), Some(bytes.clone()));
        assert_eq!(BinCodec::<Vec<u8>>::decode(&bytes), Some(bytes));
    }
}
