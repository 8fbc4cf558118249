use thiserror::Error;
use twilight_model::channel::ChannelType;

use crate::configs::INJECTED_GROUP_PREFIX;

/// Upper bound on selection cardinality, matching the platform's 25-option
/// select-menu ceiling.
pub const MAX_SELECTABLE: i64 = 25;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    #[error("group ids may only contain lowercase letters, digits and underscores")]
    InvalidId,

    #[error("group ids starting with `{INJECTED_GROUP_PREFIX}` are reserved for runtime groups")]
    ReservedId,

    #[error("a group named `{0}` already exists")]
    DuplicateId(String),

    #[error("no group named `{0}`")]
    NotFound(String),

    #[error("min must be between 1 and {MAX_SELECTABLE}")]
    MinOutOfRange,

    #[error("max cannot exceed {MAX_SELECTABLE}; use a negative value for \"all options\"")]
    MaxOutOfRange,

    #[error("min cannot exceed max")]
    MinAboveMax,

    #[error("that channel is not a text channel")]
    NotTextChannel,

    #[error("that role is already an option of `{0}`")]
    DuplicateOption(String),

    #[error("that role is not an option of `{0}`")]
    UnknownOption(String),

    #[error("something went wrong, try again later")]
    Internal,
}

pub fn validate_group_id(id: &str) -> Result<(), GroupError> {
    if id.is_empty()
        || !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(GroupError::InvalidId);
    }
    if id.starts_with(INJECTED_GROUP_PREFIX) {
        return Err(GroupError::ReservedId);
    }
    Ok(())
}

/// `max < 0` means "all available options" and exempts the min/max relation
/// from checking.
pub fn validate_cardinality(min: i64, max: i64) -> Result<(), GroupError> {
    if !(1..=MAX_SELECTABLE).contains(&min) {
        return Err(GroupError::MinOutOfRange);
    }
    if max > MAX_SELECTABLE {
        return Err(GroupError::MaxOutOfRange);
    }
    if max >= 0 && min > max {
        return Err(GroupError::MinAboveMax);
    }
    Ok(())
}

pub fn is_text_channel(kind: ChannelType) -> bool {
    matches!(kind, ChannelType::GuildText | ChannelType::GuildAnnouncement)
}
