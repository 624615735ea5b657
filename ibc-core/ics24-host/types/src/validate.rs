use ibc_primitives::prelude::*;

use crate::error::IdentifierError as Error;
use crate::identifiers::{ChannelId, ConnectionId};

const VALID_SPECIAL_CHARS: &str = "._+-#[]<>";

/// Checks that the identifier only contains the characters allowed by
/// [ICS-24](https://github.com/cosmos/ibc/tree/main/spec/core/ics-024-host-requirements#paths-identifiers-separators).
pub fn validate_identifier_chars(id: &str) -> Result<(), Error> {
    if id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || VALID_SPECIAL_CHARS.contains(c))
    {
        Ok(())
    } else {
        Err(Error::InvalidCharacter { id: id.into() })
    }
}

/// Checks that the identifier length lies within `min..=max`. Empty
/// identifiers are always rejected.
pub fn validate_identifier_length(id: &str, min: u64, max: u64) -> Result<(), Error> {
    let min = min.max(1);
    let length = id.len() as u64;
    if (min..=max).contains(&length) {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            id: id.into(),
            length,
            min,
            max,
        })
    }
}

/// Checks that the identifier has the shape `{name}-{u64}` without leading
/// zeros, e.g. `channel-0` or `connection-12`.
pub fn validate_named_u64_index(id: &str, name: &str) -> Result<(), Error> {
    let invalid = || Error::InvalidPrefix {
        id: id.into(),
        prefix: name.into(),
    };

    let counter = id
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('-'))
        .ok_or_else(invalid)?;

    if counter.len() > 1 && counter.starts_with('0') {
        return Err(invalid());
    }

    counter.parse::<u64>().map(|_| ()).map_err(|_| invalid())
}

/// Client identifiers must be between 9-64 characters.
pub fn validate_client_identifier(id: &str) -> Result<(), Error> {
    validate_identifier_chars(id)?;
    validate_identifier_length(id, 9, 64)
}

/// Client types must leave room for a `-{u64}` suffix within the client
/// identifier bounds.
pub fn validate_client_type(client_type: &str) -> Result<(), Error> {
    validate_identifier_chars(client_type)?;
    // `{client_type}-0` is at least 2 and `{client_type}-{u64::MAX}` at most
    // 21 characters longer than the type itself.
    validate_identifier_length(client_type, 9 - 2, 64 - 21).map_err(|_| Error::InvalidClientType {
        prefix: client_type.into(),
    })
}

/// Connection identifiers must be between 10-64 characters and of the form
/// `connection-{N}`.
pub fn validate_connection_identifier(id: &str) -> Result<(), Error> {
    validate_identifier_chars(id)?;
    validate_identifier_length(id, 10, 64)?;
    validate_named_u64_index(id, ConnectionId::prefix())
}

/// Port identifiers must be between 2-128 characters.
pub fn validate_port_identifier(id: &str) -> Result<(), Error> {
    validate_identifier_chars(id)?;
    validate_identifier_length(id, 2, 128)
}

/// Channel identifiers must be between 8-64 characters and of the form
/// `channel-{N}`.
pub fn validate_channel_identifier(id: &str) -> Result<(), Error> {
    validate_identifier_chars(id)?;
    validate_identifier_length(id, 8, 64)?;
    validate_named_u64_index(id, ChannelId::prefix())
}
