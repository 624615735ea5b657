use core::str::Utf8Error;

use displaydoc::Display;

/// Errors raised by the store implementations.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// failed to encode value for path `{path}`
    Encoding { path: String },
    /// path isn't a valid string: `{0}`
    MalformedPath(Utf8Error),
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedPath(e) => Some(e),
            Self::Encoding { .. } => None,
        }
    }
}
