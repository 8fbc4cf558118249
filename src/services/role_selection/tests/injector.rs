use crate::dbs::mongo::models::course::Course;
use crate::dbs::mongo::models::role_group::GroupMode;
use crate::services::role_selection::injector::{
    InjectError, MessageStore, TOURIST_GROUP_ID, TouristValues, course_group, tourist_group,
};

fn tourist_values() -> TouristValues {
    TouristValues {
        channel_id: Some("100".to_string()),
        role_id: Some("10".to_string()),
        label: Some("I'm just visiting".to_string()),
        message: Some("Welcome!\\nPick a button below.".to_string()),
        message_id: Some("5000".to_string()),
    }
}

fn course(acronym: &str, role_id: u64, year: u32) -> Course {
    Course {
        id: None,
        acronym: acronym.to_string(),
        name: format!("{acronym} (full name)"),
        role_id,
        year,
        guild_id: 1,
        channel_id: 200,
    }
}

#[test]
fn test_tourist_group_shape() {
    let effective = tourist_group(1, &tourist_values()).unwrap();
    let group = &effective.group;

    assert_eq!(group.group_id, TOURIST_GROUP_ID);
    assert_eq!(group.mode, GroupMode::Buttons);
    assert_eq!(group.channel_id, 100);
    assert_eq!(group.message, "Welcome!\nPick a button below.");
    assert_eq!(group.message_id, Some(5000));
    assert_eq!(group.options.len(), 1);
    assert_eq!(group.options[0].value, 10);
    assert_eq!(group.options[0].label, "I'm just visiting");
    assert_eq!(group.options[0].description.as_deref(), Some("SECONDARY"));

    assert!(effective.is_injected());
    assert_eq!(
        effective.store,
        MessageStore::ConfigKey {
            key: "tourist:message_id".to_string(),
        }
    );
}

#[test]
fn test_tourist_missing_keys_fail_one_by_one() {
    let mut values = tourist_values();
    values.role_id = None;
    assert_eq!(
        tourist_group(1, &values).unwrap_err(),
        InjectError::MissingKey("role_id")
    );

    let mut values = tourist_values();
    values.message = None;
    assert_eq!(
        tourist_group(1, &values).unwrap_err(),
        InjectError::MissingKey("message")
    );
}

#[test]
fn test_tourist_non_numeric_ids_fail() {
    let mut values = tourist_values();
    values.channel_id = Some("general".to_string());

    assert_eq!(
        tourist_group(1, &values).unwrap_err(),
        InjectError::BadValue("channel_id")
    );
}

#[test]
fn test_tourist_stale_message_id_degrades_to_none() {
    let mut values = tourist_values();
    values.message_id = Some("deleted".to_string());

    let effective = tourist_group(1, &values).unwrap();
    assert_eq!(effective.group.message_id, None);
}

#[test]
fn test_course_group_shape() {
    let courses = [course("ALG", 11, 2), course("CAL", 12, 2)];
    let effective = course_group(1, 200, 2, &courses, Some(7000));
    let group = &effective.group;

    assert_eq!(group.group_id, "__courses_200_2");
    assert_eq!(group.mode, GroupMode::Menu);
    assert_eq!(group.min_values, 0);
    assert_eq!(group.max_values, -1);
    assert_eq!(group.message_id, Some(7000));

    assert!(effective.is_injected());
    assert_eq!(
        effective.store,
        MessageStore::CoursePanel {
            channel_id: 200,
            year: 2,
        }
    );
}

#[test]
fn test_course_options_dedup_by_role_and_sort_by_label() {
    let courses = [
        course("CAL", 12, 1),
        course("ALG", 11, 1),
        course("ALG2", 11, 1),
    ];
    let effective = course_group(1, 200, 1, &courses, None);

    let labels: Vec<&str> = effective
        .group
        .options
        .iter()
        .map(|opt| opt.label.as_str())
        .collect();
    assert_eq!(labels, vec!["ALG", "CAL"]);
}
