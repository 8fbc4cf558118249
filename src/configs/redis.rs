use std::sync::LazyLock;

use crate::utils::env::parse_env;

pub struct RedisConfigs {
    pub url: String,
}

pub static REDIS_CONFIGS: LazyLock<RedisConfigs> = LazyLock::new(|| RedisConfigs {
    url: parse_env("REDIS_URL", "redis://127.0.0.1:6379"),
});
