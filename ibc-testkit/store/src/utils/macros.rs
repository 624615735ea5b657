use ibc_core_host_types::path::{
    ChannelEndPath, ClientConsensusStatePath, CommitmentPath, ConnectionPath, ReceiptPath,
    SeqRecvPath, SeqSendPath,
};

use crate::types::Path;

macro_rules! impl_into_path_for {
    ($($path:ty),+) => {
        $(impl From<$path> for Path {
            fn from(ibc_path: $path) -> Self {
                Self::from(ibc_path.to_string())
            }
        })+
    };
}

impl_into_path_for!(
    ClientConsensusStatePath,
    ConnectionPath,
    ChannelEndPath,
    SeqSendPath,
    SeqRecvPath,
    CommitmentPath,
    ReceiptPath
);
