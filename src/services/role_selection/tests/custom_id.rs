use crate::services::role_selection::custom_id::ComponentId;

#[test]
fn test_menu_custom_id_roundtrip() {
    let id = ComponentId::Menu {
        group_id: "degree".to_string(),
    };

    assert_eq!(id.encode(), "roles:degree");
    assert_eq!(ComponentId::parse("roles:degree"), Some(id));
}

#[test]
fn test_button_custom_id_roundtrip() {
    let id = ComponentId::Button {
        group_id: "__tourist".to_string(),
        role_id: 123456789,
    };

    assert_eq!(id.encode(), "roles:__tourist:123456789");
    assert_eq!(ComponentId::parse("roles:__tourist:123456789"), Some(id));
}

#[test]
fn test_group_id_accessor() {
    let menu = ComponentId::Menu {
        group_id: "year".to_string(),
    };
    let button = ComponentId::Button {
        group_id: "year".to_string(),
        role_id: 7,
    };

    assert_eq!(menu.group_id(), "year");
    assert_eq!(button.group_id(), "year");
}

#[test]
fn test_parse_ignores_foreign_custom_ids() {
    assert_eq!(ComponentId::parse("tickets:open"), None);
    assert_eq!(ComponentId::parse("rolesdegree"), None);
    assert_eq!(ComponentId::parse(""), None);
}

#[test]
fn test_parse_rejects_malformed_payloads() {
    assert_eq!(ComponentId::parse("roles:"), None);
    assert_eq!(ComponentId::parse("roles:degree:not-a-number"), None);
    assert_eq!(ComponentId::parse("roles:degree:-5"), None);
}
