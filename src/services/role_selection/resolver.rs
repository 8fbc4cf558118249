//! Selection resolution.
//!
//! Given the group a member interacted with and the values they picked,
//! compute the member's next role set. The exclusivity domain of the
//! acting group decides which currently-held roles are stripped; roles
//! outside the domain are never touched. The pure parts live here so the
//! invariants are testable without a gateway.

use std::collections::HashSet;

use crate::configs::DEFAULT_EXCLUSIVE_GROUPS;

use super::injector::{EffectiveGroup, TOURIST_GROUP_ID};

/// Parses the `tourist:exclusive_groups` CSV override, falling back to the
/// compiled-in default list.
pub fn exclusive_group_ids(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(csv) => csv
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect(),
        None => DEFAULT_EXCLUSIVE_GROUPS
            .iter()
            .map(|id| id.to_string())
            .collect(),
    }
}

/// Resolves the set of role ids the acting group is allowed to grant and
/// obliged to strip.
///
/// - The tourist group's domain spans the selected values plus every option
///   of every group listed as exclusive, so taking the tourist role clears
///   those groups.
/// - A group listed as exclusive additionally owns the tourist role in its
///   domain, so selecting from it clears the tourist role.
/// - Any other group owns exactly its own option values.
///
/// Returns `None` when the group id does not resolve to any effective
/// group (stale component payloads).
pub fn exclusivity_domain(
    group_id: &str,
    groups: &[EffectiveGroup],
    exclusive_ids: &[String],
    selected: &[u64],
) -> Option<HashSet<u64>> {
    let acting = groups.iter().find(|g| g.group.group_id == group_id)?;

    let mut domain: HashSet<u64> = acting.group.option_values().collect();

    if group_id == TOURIST_GROUP_ID {
        domain.extend(selected.iter().copied());
        for group in groups {
            if exclusive_ids.iter().any(|id| *id == group.group.group_id) {
                domain.extend(group.group.option_values());
            }
        }
    } else if exclusive_ids.iter().any(|id| id == group_id) {
        if let Some(tourist) = groups
            .iter()
            .find(|g| g.group.group_id == TOURIST_GROUP_ID)
        {
            domain.extend(tourist.group.option_values());
        }
    }

    Some(domain)
}

/// Computes the member's next role set, or `None` when any selected value
/// falls outside the domain (the guard against forged or stale component
/// payloads). The result keeps the selected roles first, then every held
/// role that is not part of the domain, in their original order.
pub fn compute_roles(current: &[u64], selected: &[u64], domain: &HashSet<u64>) -> Option<Vec<u64>> {
    if selected.iter().any(|value| !domain.contains(value)) {
        return None;
    }

    let mut next = Vec::with_capacity(selected.len() + current.len());
    let mut seen = HashSet::new();
    for role in selected
        .iter()
        .chain(current.iter().filter(|role| !domain.contains(role)))
    {
        if seen.insert(*role) {
            next.push(*role);
        }
    }

    Some(next)
}
