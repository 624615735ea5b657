use derive_more::Display;

use crate::prelude::*;

/// Address of the account that submitted the current transaction, usually a
/// relayer.
///
/// The admission pipeline never interprets the address; it is carried through
/// to events and logs so that every admission can be attributed.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Signer(String);

impl Signer {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Signer {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Signer {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for Signer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_signer() {
        assert!(Signer::new_empty().is_empty());
        assert!(!Signer::from("cosmos1relayer").is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_is_transparent_string() {
        let signer = Signer::new("cosmos1relayer");
        let json = serde_json::to_string(&signer).expect("serializable");
        assert_eq!(json, r#""cosmos1relayer""#);
    }
}
