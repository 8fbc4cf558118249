//! Pure message planning for role groups.
//!
//! Turning a group into components has no business touching the network,
//! so planning is separated from the render pass that sends or edits the
//! actual messages (see `RoleSelectionService::render_all`).

use thiserror::Error;
use twilight_model::channel::message::EmojiReactionType;
use twilight_model::channel::message::component::{
    ActionRow, Button, Component, SelectMenu, SelectMenuOption, SelectMenuType,
};

use crate::{
    dbs::mongo::models::role_group::{GroupMode, RoleGroup},
    utils::button_style::parse_button_style,
};

use super::custom_id::ComponentId;

pub const MAX_BUTTONS_PER_ROW: usize = 5;
pub const MAX_ROWS_PER_MESSAGE: usize = 5;
/// Platform hard limit of 25 components per message.
pub const MAX_BUTTONS_PER_MESSAGE: usize = MAX_BUTTONS_PER_ROW * MAX_ROWS_PER_MESSAGE;
/// Platform hard limit on select-menu options.
pub const MAX_MENU_OPTIONS: usize = 25;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error(
        "group `{group_id}` requires picking {required} but only has {options} options"
    )]
    NotEnoughOptions {
        group_id: String,
        options: usize,
        required: i64,
    },

    #[error(
        "group `{group_id}` has {count} buttons, exceeding the {limit}-component message limit"
    )]
    TooManyButtons {
        group_id: String,
        count: usize,
        limit: usize,
    },

    #[error("group `{group_id}` has {count} options, exceeding the {limit}-option menu limit")]
    TooManyMenuOptions {
        group_id: String,
        count: usize,
        limit: usize,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum RenderAction {
    Send,
    Edit,
    Skip,
}

/// Idempotence rule for one group: an intact previous message is left
/// alone unless the caller forces an in-place edit; a missing or
/// never-rendered message means sending a new one.
pub fn decide_action(message_exists: bool, force_edit: bool) -> RenderAction {
    if !message_exists {
        RenderAction::Send
    } else if force_edit {
        RenderAction::Edit
    } else {
        RenderAction::Skip
    }
}

/// What gets sent (or edited) for one group.
#[derive(Debug, Clone)]
pub struct RenderPlan {
    pub content: String,
    pub components: Vec<Component>,
}

pub fn plan(group: &RoleGroup) -> Result<RenderPlan, RenderError> {
    let components = match group.mode {
        GroupMode::Menu => plan_menu(group)?,
        GroupMode::Buttons => plan_buttons(group)?,
    };

    Ok(RenderPlan {
        content: group.message.clone(),
        components,
    })
}

fn emoji(raw: &Option<String>) -> Option<EmojiReactionType> {
    raw.as_ref()
        .map(|name| EmojiReactionType::Unicode { name: name.clone() })
}

fn plan_menu(group: &RoleGroup) -> Result<Vec<Component>, RenderError> {
    let option_count = group.options.len();

    // A menu demanding more selections than there are options can never be
    // satisfied; refuse to render it.
    if group.max_values >= 0 && option_count < group.max_values as usize {
        return Err(RenderError::NotEnoughOptions {
            group_id: group.group_id.clone(),
            options: option_count,
            required: group.max_values,
        });
    }
    if option_count > MAX_MENU_OPTIONS {
        return Err(RenderError::TooManyMenuOptions {
            group_id: group.group_id.clone(),
            count: option_count,
            limit: MAX_MENU_OPTIONS,
        });
    }

    let max_values = if group.max_values < 0 {
        option_count
    } else {
        group.max_values as usize
    };
    let min_values = group.min_values.clamp(0, option_count as i64) as usize;

    let options = group
        .options
        .iter()
        .map(|opt| SelectMenuOption {
            default: false,
            description: opt.description.clone(),
            emoji: emoji(&opt.emoji),
            label: opt.label.clone(),
            value: opt.value.to_string(),
        })
        .collect();

    let custom_id = ComponentId::Menu {
        group_id: group.group_id.clone(),
    };

    let menu = SelectMenu {
        channel_types: None,
        custom_id: custom_id.encode(),
        default_values: None,
        disabled: false,
        kind: SelectMenuType::Text,
        max_values: Some(max_values as u8),
        min_values: Some(min_values as u8),
        options: Some(options),
        placeholder: group.placeholder.clone(),
    };

    Ok(vec![Component::ActionRow(ActionRow {
        components: vec![Component::SelectMenu(menu)],
    })])
}

fn plan_buttons(group: &RoleGroup) -> Result<Vec<Component>, RenderError> {
    let count = group.options.len();
    if count > MAX_BUTTONS_PER_MESSAGE {
        return Err(RenderError::TooManyButtons {
            group_id: group.group_id.clone(),
            count,
            limit: MAX_BUTTONS_PER_MESSAGE,
        });
    }

    let rows = group
        .options
        .chunks(MAX_BUTTONS_PER_ROW)
        .map(|chunk| {
            let buttons = chunk
                .iter()
                .map(|opt| {
                    let custom_id = ComponentId::Button {
                        group_id: group.group_id.clone(),
                        role_id: opt.value,
                    };
                    Component::Button(Button {
                        custom_id: Some(custom_id.encode()),
                        disabled: false,
                        emoji: emoji(&opt.emoji),
                        label: Some(opt.label.clone()),
                        style: parse_button_style(opt.description.as_deref()),
                        url: None,
                        sku_id: None,
                    })
                })
                .collect();
            Component::ActionRow(ActionRow {
                components: buttons,
            })
        })
        .collect();

    Ok(rows)
}
