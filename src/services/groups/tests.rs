use twilight_model::channel::ChannelType;

use super::validate::*;

#[test]
fn test_group_id_accepts_snake_case() {
    assert_eq!(validate_group_id("degree"), Ok(()));
    assert_eq!(validate_group_id("year_1"), Ok(()));
    assert_eq!(validate_group_id("a"), Ok(()));
}

#[test]
fn test_group_id_rejects_bad_characters() {
    assert_eq!(validate_group_id(""), Err(GroupError::InvalidId));
    assert_eq!(validate_group_id("Degree"), Err(GroupError::InvalidId));
    assert_eq!(validate_group_id("my group"), Err(GroupError::InvalidId));
    assert_eq!(validate_group_id("group:1"), Err(GroupError::InvalidId));
    assert_eq!(validate_group_id("café"), Err(GroupError::InvalidId));
}

#[test]
fn test_group_id_rejects_reserved_prefix() {
    assert_eq!(validate_group_id("__tourist"), Err(GroupError::ReservedId));
    assert_eq!(validate_group_id("__x"), Err(GroupError::ReservedId));
    // a single underscore is not the reserved prefix
    assert_eq!(validate_group_id("_private"), Ok(()));
}

#[test]
fn test_cardinality_bounds() {
    assert_eq!(validate_cardinality(1, 1), Ok(()));
    assert_eq!(validate_cardinality(1, 25), Ok(()));
    assert_eq!(validate_cardinality(25, 25), Ok(()));

    assert_eq!(validate_cardinality(0, 1), Err(GroupError::MinOutOfRange));
    assert_eq!(validate_cardinality(26, 26), Err(GroupError::MinOutOfRange));
    assert_eq!(validate_cardinality(1, 26), Err(GroupError::MaxOutOfRange));
    assert_eq!(validate_cardinality(3, 2), Err(GroupError::MinAboveMax));
}

#[test]
fn test_negative_max_skips_relation_check() {
    assert_eq!(validate_cardinality(5, -1), Ok(()));
    assert_eq!(validate_cardinality(25, -7), Ok(()));
    assert_eq!(validate_cardinality(0, -1), Err(GroupError::MinOutOfRange));
}

#[test]
fn test_text_channel_kinds() {
    assert!(is_text_channel(ChannelType::GuildText));
    assert!(is_text_channel(ChannelType::GuildAnnouncement));
    assert!(!is_text_channel(ChannelType::GuildVoice));
    assert!(!is_text_channel(ChannelType::GuildCategory));
    assert!(!is_text_channel(ChannelType::GuildForum));
}
