use std::collections::HashSet;

use crate::services::role_selection::injector::TOURIST_GROUP_ID;
use crate::services::role_selection::resolver::{
    compute_roles, exclusive_group_ids, exclusivity_domain,
};

use super::{button_group, effective, menu_group};

#[test]
fn test_exclusive_list_defaults() {
    assert_eq!(exclusive_group_ids(None), vec!["degree", "year"]);
}

#[test]
fn test_exclusive_list_csv_override() {
    assert_eq!(
        exclusive_group_ids(Some("degree, campus ,,shift")),
        vec!["degree", "campus", "shift"]
    );
    assert!(exclusive_group_ids(Some("")).is_empty());
}

#[test]
fn test_plain_group_domain_is_its_own_options() {
    let groups = vec![
        effective(menu_group("degree", &[1, 2], 1, 1)),
        effective(menu_group("hobbies", &[30, 31], 0, 2)),
    ];
    let exclusive = exclusive_group_ids(None);

    let domain = exclusivity_domain("hobbies", &groups, &exclusive, &[30]).unwrap();
    assert_eq!(domain, HashSet::from([30, 31]));
}

#[test]
fn test_unknown_group_has_no_domain() {
    let groups = vec![effective(menu_group("degree", &[1, 2], 1, 1))];
    let exclusive = exclusive_group_ids(None);

    assert_eq!(exclusivity_domain("gone", &groups, &exclusive, &[1]), None);
}

#[test]
fn test_selection_replaces_within_domain_only() {
    // Member holds degree B plus an unrelated role; picking degree A must
    // swap A for B and leave the unrelated role alone.
    let groups = vec![effective(menu_group("degree", &[1, 2], 1, 1))];
    let exclusive = exclusive_group_ids(None);

    let domain = exclusivity_domain("degree", &groups, &exclusive, &[1]).unwrap();
    let next = compute_roles(&[2, 99], &[1], &domain).unwrap();

    assert_eq!(next, vec![1, 99]);
}

#[test]
fn test_tourist_selection_clears_exclusive_groups() {
    let mut tourist = button_group(TOURIST_GROUP_ID, 1);
    tourist.options[0].value = 10;
    let groups = vec![
        effective(menu_group("degree", &[1, 2], 1, 1)),
        effective(tourist),
    ];
    let exclusive = vec!["degree".to_string()];

    let domain = exclusivity_domain(TOURIST_GROUP_ID, &groups, &exclusive, &[10]).unwrap();
    let next = compute_roles(&[1, 99], &[10], &domain).unwrap();

    assert_eq!(next, vec![10, 99]);
}

#[test]
fn test_exclusive_group_selection_clears_tourist() {
    let mut tourist = button_group(TOURIST_GROUP_ID, 1);
    tourist.options[0].value = 10;
    let groups = vec![
        effective(menu_group("degree", &[1, 2], 1, 1)),
        effective(tourist),
    ];
    let exclusive = vec!["degree".to_string()];

    let domain = exclusivity_domain("degree", &groups, &exclusive, &[1]).unwrap();
    assert!(domain.contains(&10));

    let next = compute_roles(&[10, 99], &[1], &domain).unwrap();
    assert_eq!(next, vec![1, 99]);
}

#[test]
fn test_forged_values_are_rejected() {
    let groups = vec![effective(menu_group("degree", &[1, 2], 1, 1))];
    let exclusive = exclusive_group_ids(None);

    let domain = exclusivity_domain("degree", &groups, &exclusive, &[3]).unwrap();
    assert_eq!(compute_roles(&[2], &[3], &domain), None);
}

#[test]
fn test_multi_select_keeps_every_selected_role() {
    let groups = vec![effective(menu_group("hobbies", &[30, 31, 32], 0, 3))];
    let exclusive = exclusive_group_ids(None);

    let domain = exclusivity_domain("hobbies", &groups, &exclusive, &[30, 32]).unwrap();
    let next = compute_roles(&[31, 99], &[30, 32], &domain).unwrap();

    assert_eq!(next, vec![30, 32, 99]);
}

#[test]
fn test_empty_selection_strips_the_whole_domain() {
    let groups = vec![effective(menu_group("hobbies", &[30, 31], 0, 2))];
    let exclusive = exclusive_group_ids(None);

    let domain = exclusivity_domain("hobbies", &groups, &exclusive, &[]).unwrap();
    let next = compute_roles(&[30, 31, 99], &[], &domain).unwrap();

    assert_eq!(next, vec![99]);
}

#[test]
fn test_duplicate_roles_collapse() {
    let groups = vec![effective(menu_group("degree", &[1, 2], 1, 1))];
    let exclusive = exclusive_group_ids(None);

    let domain = exclusivity_domain("degree", &groups, &exclusive, &[1]).unwrap();
    let next = compute_roles(&[99, 99], &[1], &domain).unwrap();

    assert_eq!(next, vec![1, 99]);
}
