use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const DEFAULT_TEACHER_PASSWORD: &str = "password";

/// Runtime configuration, sourced from `HANDRAISE_`-prefixed environment
/// variables layered over the defaults below. `.env` files are honored via
/// `dotenvy` before the first access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub loglevel: String,
    pub teacher_username: String,
    pub teacher_password: String,
    /// Secret used to derive the session-cookie key; at least 32 bytes.
    /// When unset a fresh key is generated at startup.
    pub session_secret: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:handraise.db".to_string(),
            bind_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            teacher_username: "teacher".to_string(),
            teacher_password: DEFAULT_TEACHER_PASSWORD.to_string(),
            session_secret: None,
        }
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(Env::prefixed("HANDRAISE_"))
        .extract()
        .expect("invalid HANDRAISE_* configuration")
});
