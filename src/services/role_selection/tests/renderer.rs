use twilight_model::channel::message::component::{ButtonStyle, Component};

use crate::services::role_selection::renderer::{
    self, MAX_BUTTONS_PER_MESSAGE, MAX_MENU_OPTIONS, RenderAction, RenderError,
};

use super::{button_group, menu_group};

#[test]
fn test_intact_message_is_skipped() {
    assert_eq!(renderer::decide_action(true, false), RenderAction::Skip);
}

#[test]
fn test_forced_pass_edits_in_place() {
    assert_eq!(renderer::decide_action(true, true), RenderAction::Edit);
}

#[test]
fn test_missing_message_is_sent() {
    assert_eq!(renderer::decide_action(false, false), RenderAction::Send);
    assert_eq!(renderer::decide_action(false, true), RenderAction::Send);
}

#[test]
fn test_menu_plan_shape() {
    let group = menu_group("degree", &[1, 2, 3], 1, 1);
    let plan = renderer::plan(&group).unwrap();

    assert_eq!(plan.content, "Choose a degree:");
    assert_eq!(plan.components.len(), 1);

    let Component::ActionRow(row) = &plan.components[0] else {
        panic!("expected an action row");
    };
    let Component::SelectMenu(menu) = &row.components[0] else {
        panic!("expected a select menu");
    };

    assert_eq!(menu.custom_id, "roles:degree");
    assert_eq!(menu.min_values, Some(1));
    assert_eq!(menu.max_values, Some(1));
    assert_eq!(menu.options.as_ref().unwrap().len(), 3);
    assert_eq!(menu.options.as_ref().unwrap()[0].value, "1");
}

#[test]
fn test_unbounded_menu_max_normalizes_to_option_count() {
    let group = menu_group("courses", &[1, 2, 3, 4], 0, -1);
    let plan = renderer::plan(&group).unwrap();

    let Component::ActionRow(row) = &plan.components[0] else {
        panic!("expected an action row");
    };
    let Component::SelectMenu(menu) = &row.components[0] else {
        panic!("expected a select menu");
    };

    assert_eq!(menu.min_values, Some(0));
    assert_eq!(menu.max_values, Some(4));
}

#[test]
fn test_menu_demanding_more_than_available_fails() {
    let group = menu_group("degree", &[1, 2], 1, 3);

    assert_eq!(
        renderer::plan(&group).unwrap_err(),
        RenderError::NotEnoughOptions {
            group_id: "degree".to_string(),
            options: 2,
            required: 3,
        }
    );
}

#[test]
fn test_menu_over_option_limit_fails() {
    let roles: Vec<u64> = (1..=26).collect();
    let group = menu_group("degree", &roles, 1, 1);

    assert_eq!(
        renderer::plan(&group).unwrap_err(),
        RenderError::TooManyMenuOptions {
            group_id: "degree".to_string(),
            count: 26,
            limit: MAX_MENU_OPTIONS,
        }
    );
}

#[test]
fn test_buttons_chunk_into_rows_of_five() {
    let group = button_group("colors", 12);
    let plan = renderer::plan(&group).unwrap();

    let row_sizes: Vec<usize> = plan
        .components
        .iter()
        .map(|component| {
            let Component::ActionRow(row) = component else {
                panic!("expected an action row");
            };
            row.components.len()
        })
        .collect();

    assert_eq!(row_sizes, vec![5, 5, 2]);
}

#[test]
fn test_full_grid_of_25_buttons_renders() {
    let group = button_group("colors", 25);
    let plan = renderer::plan(&group).unwrap();

    assert_eq!(plan.components.len(), 5);
}

#[test]
fn test_26_buttons_fail() {
    let group = button_group("colors", 26);

    assert_eq!(
        renderer::plan(&group).unwrap_err(),
        RenderError::TooManyButtons {
            group_id: "colors".to_string(),
            count: 26,
            limit: MAX_BUTTONS_PER_MESSAGE,
        }
    );
}

#[test]
fn test_button_custom_ids_and_styles() {
    let mut group = button_group("colors", 2);
    group.options[1].description = Some("DANGER".to_string());
    let plan = renderer::plan(&group).unwrap();

    let Component::ActionRow(row) = &plan.components[0] else {
        panic!("expected an action row");
    };
    let Component::Button(first) = &row.components[0] else {
        panic!("expected a button");
    };
    let Component::Button(second) = &row.components[1] else {
        panic!("expected a button");
    };

    assert_eq!(first.custom_id.as_deref(), Some("roles:colors:1"));
    assert_eq!(first.style, ButtonStyle::Primary);
    assert_eq!(second.custom_id.as_deref(), Some("roles:colors:2"));
    assert_eq!(second.style, ButtonStyle::Danger);
}
