//! Runtime-injected groups.
//!
//! Two kinds of group exist only as projections of other data: the tourist
//! pseudo-group, parametrized by `tourist:*` config keys, and one group per
//! (course-selection channel, academic year) pair derived from the course
//! table. They are rebuilt from live data on every render or selection
//! call and are never written back as `RoleGroup` rows.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::{
    configs::{INJECTED_GROUP_PREFIX, TOURIST_SCOPE},
    context::Context,
    dbs::mongo::models::{
        course::Course,
        role_group::{GroupMode, RoleGroup, RoleGroupOption},
    },
    services::{config::ConfigService, courses::CourseService, groups::GroupService},
    utils::text::unescape_newlines,
};

pub const TOURIST_GROUP_ID: &str = "__tourist";

/// Where the rendered message id of a group is persisted. Persisted groups
/// own a `message_id` column; injected groups borrow storage elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStore {
    GroupRow { group_id: String },
    ConfigKey { key: String },
    CoursePanel { channel_id: u64, year: u32 },
}

/// A renderable, selectable group together with its message-id storage
/// path. The renderer and resolver never care whether the group came from
/// the repository or the injector.
#[derive(Debug, Clone)]
pub struct EffectiveGroup {
    pub group: RoleGroup,
    pub store: MessageStore,
}

impl EffectiveGroup {
    pub fn persisted(group: RoleGroup) -> Self {
        let store = MessageStore::GroupRow {
            group_id: group.group_id.clone(),
        };
        Self { group, store }
    }

    pub fn is_injected(&self) -> bool {
        !matches!(self.store, MessageStore::GroupRow { .. })
    }
}

/// Raw config-store values the tourist group is built from.
#[derive(Debug, Default, Clone)]
pub struct TouristValues {
    pub channel_id: Option<String>,
    pub role_id: Option<String>,
    pub label: Option<String>,
    pub message: Option<String>,
    pub message_id: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InjectError {
    #[error("missing required config key `{TOURIST_SCOPE}:{0}`")]
    MissingKey(&'static str),

    #[error("config key `{TOURIST_SCOPE}:{0}` is not a valid id")]
    BadValue(&'static str),
}

fn required_id(value: Option<&str>, key: &'static str) -> Result<u64, InjectError> {
    let raw = value.ok_or(InjectError::MissingKey(key))?;
    raw.parse().map_err(|_| InjectError::BadValue(key))
}

/// Builds the tourist pseudo-group: a single secondary button granting the
/// tourist role. Fails if any required key is missing, which skips this
/// group only.
pub fn tourist_group(guild_id: u64, values: &TouristValues) -> Result<EffectiveGroup, InjectError> {
    let channel_id = required_id(values.channel_id.as_deref(), "channel_id")?;
    let role_id = required_id(values.role_id.as_deref(), "role_id")?;
    let label = values
        .label
        .clone()
        .ok_or(InjectError::MissingKey("label"))?;
    let message = values
        .message
        .as_deref()
        .map(unescape_newlines)
        .ok_or(InjectError::MissingKey("message"))?;

    // Stale or malformed message ids degrade to "no previous message".
    let message_id = values.message_id.as_deref().and_then(|v| v.parse().ok());

    let group = RoleGroup {
        id: None,
        group_id: TOURIST_GROUP_ID.to_string(),
        mode: GroupMode::Buttons,
        placeholder: None,
        message,
        guild_id,
        channel_id,
        min_values: 1,
        max_values: 1,
        message_id,
        options: vec![RoleGroupOption {
            label,
            description: Some("SECONDARY".to_string()),
            value: role_id,
            emoji: None,
        }],
    };

    Ok(EffectiveGroup {
        group,
        store: MessageStore::ConfigKey {
            key: ConfigService::scoped(TOURIST_SCOPE, "message_id"),
        },
    })
}

/// Builds one course-selection group for a (channel, year) pair. Options
/// are deduplicated by role id and sorted by label; students take several
/// courses at once, so these render as unbounded multi-select menus.
pub fn course_group(
    guild_id: u64,
    channel_id: u64,
    year: u32,
    courses: &[Course],
    message_id: Option<u64>,
) -> EffectiveGroup {
    let mut seen = HashSet::new();
    let mut options: Vec<RoleGroupOption> = courses
        .iter()
        .filter(|course| seen.insert(course.role_id))
        .map(|course| RoleGroupOption {
            label: course.acronym.clone(),
            description: Some(course.name.clone()),
            value: course.role_id,
            emoji: None,
        })
        .collect();
    options.sort_by(|a, b| a.label.cmp(&b.label));

    let group = RoleGroup {
        id: None,
        group_id: format!("{INJECTED_GROUP_PREFIX}courses_{channel_id}_{year}"),
        mode: GroupMode::Menu,
        placeholder: Some(format!("Year {year} course selection")),
        message: format!("**Year {year}** — pick the courses you are taking:"),
        guild_id,
        channel_id,
        min_values: 0,
        max_values: -1,
        message_id,
        options,
    };

    EffectiveGroup {
        group,
        store: MessageStore::CoursePanel { channel_id, year },
    }
}

async fn tourist_values(ctx: &Arc<Context>) -> TouristValues {
    TouristValues {
        channel_id: ConfigService::get_scoped(ctx, TOURIST_SCOPE, "channel_id").await,
        role_id: ConfigService::get_scoped(ctx, TOURIST_SCOPE, "role_id").await,
        label: ConfigService::get_scoped(ctx, TOURIST_SCOPE, "label").await,
        message: ConfigService::get_scoped(ctx, TOURIST_SCOPE, "message").await,
        message_id: ConfigService::get_scoped(ctx, TOURIST_SCOPE, "message_id").await,
    }
}

/// Merges repository groups with every injected group that can currently be
/// built. A failed injection is logged and dropped; it never takes the
/// persisted groups or the other injections down with it. The merge is
/// recomputed on every call; injected groups are cheap projections of
/// live data and are deliberately never cached.
pub async fn build_effective_groups(ctx: &Arc<Context>, guild_id: u64) -> Vec<EffectiveGroup> {
    let mut effective: Vec<EffectiveGroup> = GroupService::list(ctx, guild_id)
        .await
        .into_iter()
        .map(EffectiveGroup::persisted)
        .collect();

    let values = tourist_values(ctx).await;
    match tourist_group(guild_id, &values) {
        Ok(group) => effective.push(group),
        Err(e) => {
            tracing::warn!(group_id = TOURIST_GROUP_ID, error = %e, "skipping tourist group injection");
        }
    }

    match CourseService::by_selection_channel(ctx, guild_id).await {
        Ok(grouped) => {
            for ((channel_id, year), courses) in grouped {
                let message_id = CourseService::panel_message(ctx, channel_id, year).await;
                effective.push(course_group(guild_id, channel_id, year, &courses, message_id));
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "skipping course group injection");
        }
    }

    effective
}
