use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use twilight_interactions::command::{CommandOption, CreateOption};

#[derive(
    CreateOption, CommandOption, Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum GroupMode {
    #[option(name = "Select menu", value = "menu")]
    #[default]
    Menu,

    #[option(name = "Button grid", value = "buttons")]
    Buttons,
}

/// One selectable option of a role group. Stored embedded in the group
/// document, so array order is rendering order.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RoleGroupOption {
    pub label: String,

    /// Menu sub-text in menu mode; button style keyword in button mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The role granted by this option. Unique within the group.
    pub value: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RoleGroup {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub group_id: String,
    pub mode: GroupMode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    pub message: String,
    pub guild_id: u64,
    pub channel_id: u64,

    /// `max_values < 0` means "as many as there are options".
    pub min_values: i64,
    pub max_values: i64,

    /// The last message this group was rendered as; None until the first
    /// render pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<u64>,

    #[serde(default)]
    pub options: Vec<RoleGroupOption>,
}

impl RoleGroup {
    pub fn option_values(&self) -> impl Iterator<Item = u64> + '_ {
        self.options.iter().map(|opt| opt.value)
    }
}
