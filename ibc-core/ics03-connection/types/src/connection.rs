//! Defines the types that define a connection

use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_core_commitment_types::commitment::CommitmentPrefix;
use ibc_core_host_types::identifiers::{ClientId, ConnectionId};
use ibc_primitives::prelude::*;

use crate::error::ConnectionError;

/// The local end of a connection: the client verifying the counterparty
/// and the counterparty's own view of the connection.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionEnd {
    pub state: State,
    client_id: ClientId,
    counterparty: Counterparty,
}

impl ConnectionEnd {
    pub fn new(state: State, client_id: ClientId, counterparty: Counterparty) -> Self {
        Self {
            state,
            client_id,
            counterparty,
        }
    }

    /// Getter for the state of this connection end.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Getter for the client id on the local party of this connection end.
    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Getter for the counterparty.
    pub fn counterparty(&self) -> &Counterparty {
        &self.counterparty
    }

    /// Helper function to compare the state of this end with another state.
    pub fn state_matches(&self, other: &State) -> bool {
        self.state.eq(other)
    }

    pub fn is_open(&self) -> bool {
        self.state_matches(&State::Open)
    }
}

#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counterparty {
    client_id: ClientId,
    connection_id: Option<ConnectionId>,
    prefix: CommitmentPrefix,
}

impl Counterparty {
    pub fn new(
        client_id: ClientId,
        connection_id: Option<ConnectionId>,
        prefix: CommitmentPrefix,
    ) -> Self {
        Self {
            client_id,
            connection_id,
            prefix,
        }
    }

    /// Getter for the client id.
    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Getter for connection id.
    pub fn connection_id(&self) -> Option<&ConnectionId> {
        self.connection_id.as_ref()
    }

    /// Getter for the commitment prefix of the counterparty store.
    pub fn prefix(&self) -> &CommitmentPrefix {
        &self.prefix
    }
}

#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Uninitialized = 0isize,
    Init = 1isize,
    TryOpen = 2isize,
    Open = 3isize,
}

impl State {
    /// Yields the State as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "UNINITIALIZED",
            Self::Init => "INIT",
            Self::TryOpen => "TRYOPEN",
            Self::Open => "OPEN",
        }
    }

    /// Returns whether or not this connection state is `Open`.
    pub fn is_open(self) -> bool {
        self == State::Open
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<i32> for State {
    type Error = ConnectionError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Uninitialized),
            1 => Ok(Self::Init),
            2 => Ok(Self::TryOpen),
            3 => Ok(Self::Open),
            _ => Err(ConnectionError::InvalidState {
                expected: "Must be one of: 0, 1, 2, 3".to_string(),
                actual: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, State::Uninitialized)]
    #[case(1, State::Init)]
    #[case(2, State::TryOpen)]
    #[case(3, State::Open)]
    fn state_from_i32(#[case] raw: i32, #[case] expected: State) {
        assert_eq!(State::try_from(raw), Ok(expected));
    }

    #[test]
    fn unknown_state_is_rejected() {
        assert!(State::try_from(4).is_err());
    }

    #[test]
    fn connection_end_exposes_counterparty_prefix() {
        let client_id = ClientId::new("07-tendermint", 0).expect("valid client id");
        let prefix = CommitmentPrefix::try_from(b"ibc".to_vec()).expect("non-empty prefix");
        let conn = ConnectionEnd::new(
            State::Open,
            client_id.clone(),
            Counterparty::new(client_id.clone(), Some(ConnectionId::zero()), prefix.clone()),
        );

        assert!(conn.is_open());
        assert_eq!(conn.client_id(), &client_id);
        assert_eq!(conn.counterparty().prefix(), &prefix);
    }
}
