use std::sync::LazyLock;

use crate::utils::env::{parse_env, parse_env_opt};

pub struct MongoConfigs {
    pub auth_source: String,
    pub database: String,
    pub password: String,
    pub ssl: bool,
    pub uri: String,
    pub username: String,
    pub ca_file_path: Option<String>,
    pub cert_key_file_path: Option<String>,
    pub allow_invalid_certificates: Option<bool>,
}

pub static MONGO_CONFIGS: LazyLock<MongoConfigs> = LazyLock::new(|| MongoConfigs {
    auth_source: parse_env("MONGO_AUTH_SOURCE", "admin"),
    database: parse_env("MONGO_DATABASE", "campus"),
    password: parse_env("MONGO_PASSWORD", "secret"),
    ssl: parse_env("MONGO_SSL", "false"),
    uri: parse_env("MONGO_URI", "mongodb://mongo:27017"),
    username: parse_env("MONGO_USERNAME", "campus"),
    ca_file_path: parse_env_opt("MONGO_TLS_CA_FILE"),
    cert_key_file_path: parse_env_opt("MONGO_TLS_CERT_KEY_FILE"),
    allow_invalid_certificates: parse_env_opt("MONGO_TLS_INSECURE"),
});
