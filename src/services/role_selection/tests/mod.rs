mod custom_id;
mod injector;
mod renderer;
mod resolver;

use crate::dbs::mongo::models::role_group::{GroupMode, RoleGroup, RoleGroupOption};

use super::injector::EffectiveGroup;

pub fn option(label: &str, role_id: u64) -> RoleGroupOption {
    RoleGroupOption {
        label: label.to_string(),
        description: None,
        value: role_id,
        emoji: None,
    }
}

pub fn menu_group(group_id: &str, roles: &[u64], min: i64, max: i64) -> RoleGroup {
    RoleGroup {
        id: None,
        group_id: group_id.to_string(),
        mode: GroupMode::Menu,
        placeholder: Some(format!("Pick your {group_id}")),
        message: format!("Choose a {group_id}:"),
        guild_id: 1,
        channel_id: 100,
        min_values: min,
        max_values: max,
        message_id: None,
        options: roles
            .iter()
            .map(|role| option(&format!("role-{role}"), *role))
            .collect(),
    }
}

pub fn button_group(group_id: &str, count: usize) -> RoleGroup {
    let roles: Vec<u64> = (1..=count as u64).collect();
    let mut group = menu_group(group_id, &roles, 1, 1);
    group.mode = GroupMode::Buttons;
    group.placeholder = None;
    group
}

pub fn effective(group: RoleGroup) -> EffectiveGroup {
    EffectiveGroup::persisted(group)
}
