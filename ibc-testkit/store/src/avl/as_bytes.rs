//! # AsBytes trait definition
//!
//! The AVL tree hashes keys as raw bytes. Any key type that can be viewed as
//! a byte slice, borrowed or freshly rendered, can be used.

pub enum ByteSlice<'a> {
    Slice(&'a [u8]),
    Vector(Vec<u8>),
}

impl AsRef<[u8]> for ByteSlice<'_> {
    fn as_ref(&self) -> &[u8] {
        match self {
            ByteSlice::Slice(s) => s,
            ByteSlice::Vector(v) => v.as_slice(),
        }
    }
}

/// A trait for objects that can be interpreted as a slice of bytes.
pub trait AsBytes {
    fn as_bytes(&self) -> ByteSlice<'_>;
}

impl AsBytes for Vec<u8> {
    fn as_bytes(&self) -> ByteSlice<'_> {
        ByteSlice::Slice(self)
    }
}

impl AsBytes for [u8] {
    fn as_bytes(&self) -> ByteSlice<'_> {
        ByteSlice::Slice(self)
    }
}

impl AsBytes for str {
    fn as_bytes(&self) -> ByteSlice<'_> {
        ByteSlice::Slice(str::as_bytes(self))
    }
}

impl AsBytes for &str {
    fn as_bytes(&self) -> ByteSlice<'_> {
        ByteSlice::Slice(str::as_bytes(self))
    }
}

impl AsBytes for String {
    fn as_bytes(&self) -> ByteSlice<'_> {
        ByteSlice::Slice(String::as_bytes(self))
    }
}

impl<const N: usize> AsBytes for [u8; N] {
    fn as_bytes(&self) -> ByteSlice<'_> {
        ByteSlice::Slice(self)
    }
}
