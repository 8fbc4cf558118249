use std::sync::LazyLock;

use crate::utils::env::{parse_env, parse_env_opt};

pub struct DiscordConfigs {
    pub discord_token: String,
    /// When set, slash commands are registered for this guild only instead
    /// of globally. Guild commands propagate instantly, which is what a
    /// single-server bot wants.
    pub guild_id: Option<u64>,
}

pub static DISCORD_CONFIGS: LazyLock<DiscordConfigs> = LazyLock::new(|| DiscordConfigs {
    discord_token: parse_env("DISCORD_TOKEN", ""),
    guild_id: parse_env_opt("GUILD_ID"),
});
