use std::fmt::{Display, Formatter};
use std::str::from_utf8;

use ibc_core_host_types::path::Path as IbcPath;

use crate::avl::{AsBytes, ByteSlice};
use crate::error::StoreError;

/// A `/`-separated store key, e.g. `nextSequenceRecv/ports/transfer/channels/channel-0`.
///
/// Ordered segment by segment, so every key sharing a prefix sorts together.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Hash)]
pub struct Path(Vec<String>);

impl Path {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Self(s.split('/').map(ToOwned::to_owned).collect())
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl TryFrom<&[u8]> for Path {
    type Error = StoreError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let s = from_utf8(value).map_err(StoreError::MalformedPath)?;
        Ok(Self::from(s))
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

impl AsBytes for Path {
    fn as_bytes(&self) -> ByteSlice<'_> {
        ByteSlice::Vector(self.to_string().into_bytes())
    }
}

impl From<IbcPath> for Path {
    fn from(ibc_path: IbcPath) -> Self {
        Self::from(ibc_path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use ibc_core_host_types::identifiers::{ChannelId, PortId, Sequence};
    use ibc_core_host_types::path::{CommitmentPath, SeqRecvPath};

    use super::*;

    fn port() -> PortId {
        PortId::new("transfer".to_string()).expect("valid port")
    }

    #[test]
    fn ibc_paths_keep_their_key_layout() {
        let path = Path::from(CommitmentPath::new(&port(), &ChannelId::zero(), Sequence::from(3)));
        assert_eq!(
            path.to_string(),
            "commitments/ports/transfer/channels/channel-0/sequences/3"
        );
        assert_eq!(path.get(0), Some("commitments"));
    }

    #[test]
    fn prefix_matches_whole_segments() {
        let path = Path::from(SeqRecvPath::new(&port(), &ChannelId::zero()));
        assert!(path.starts_with(&Path::from("nextSequenceRecv/ports")));
        assert!(!path.starts_with(&Path::from("nextSequence")));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        assert!(matches!(
            Path::try_from([0xff, 0xfe].as_slice()),
            Err(StoreError::MalformedPath(_))
        ));
    }
}
