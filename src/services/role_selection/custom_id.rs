//! Structured component identifiers.
//!
//! Everything the selection engine needs to route an interaction is carried
//! inside the component's custom id and decoded exactly once, at the
//! dispatch boundary. Menus encode the group only (the chosen values arrive
//! in the interaction payload); buttons encode group and role, since each
//! button press is an independent single-value event.

/// Leading segment that claims a custom id for the selection engine.
pub const COMPONENT_SCOPE: &str = "roles";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentId {
    Menu { group_id: String },
    Button { group_id: String, role_id: u64 },
}

impl ComponentId {
    pub fn group_id(&self) -> &str {
        match self {
            ComponentId::Menu { group_id } => group_id,
            ComponentId::Button { group_id, .. } => group_id,
        }
    }

    pub fn encode(&self) -> String {
        match self {
            ComponentId::Menu { group_id } => format!("{COMPONENT_SCOPE}:{group_id}"),
            ComponentId::Button { group_id, role_id } => {
                format!("{COMPONENT_SCOPE}:{group_id}:{role_id}")
            }
        }
    }

    /// Returns `None` for custom ids owned by other features or malformed
    /// payloads; the caller treats both the same way.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.splitn(3, ':');
        if parts.next()? != COMPONENT_SCOPE {
            return None;
        }

        let group_id = parts.next()?;
        if group_id.is_empty() {
            return None;
        }

        match parts.next() {
            None => Some(ComponentId::Menu {
                group_id: group_id.to_string(),
            }),
            Some(role) => role.parse().ok().map(|role_id| ComponentId::Button {
                group_id: group_id.to_string(),
                role_id,
            }),
        }
    }
}
