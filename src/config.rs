use std::env;

use tracing::{info, warn};

/// Runtime configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// Whether the session cookie carries the `Secure` attribute. Off by
    /// default so plain-HTTP development works.
    pub session_secure: bool,
}

impl Config {
    pub fn load() -> Self {
        Self {
            database_url: var_or("DATABASE_URL", "sqlite://scarlet.db?mode=rwc"),
            bind_addr: var_or("BIND_ADDR", "127.0.0.1:3000"),
            session_secure: flag("SESSION_SECURE"),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn flag(key: &str) -> bool {
    match env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            warn!("invalid {key} value `{value}`, expected true/false; using false");
            false
        }),
        Err(_) => false,
    }
}
