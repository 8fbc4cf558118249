pub mod app;
pub mod discord;
pub mod mongo;
pub mod redis;

pub const CACHE_PREFIX: &str = "campus-bot";

/// Identifier prefix reserved for groups synthesized at runtime. User
/// created groups may never start with it, so the two id spaces cannot
/// collide.
pub const INJECTED_GROUP_PREFIX: &str = "__";

/// Config-store scope for the tourist pseudo-group.
pub const TOURIST_SCOPE: &str = "tourist";

/// Group ids that are mutually exclusive with the tourist role when the
/// config store carries no `tourist:exclusive_groups` override.
pub const DEFAULT_EXCLUSIVE_GROUPS: [&str; 2] = ["degree", "year"];
