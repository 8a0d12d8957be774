use std::{env, str::FromStr, time::Duration};

use tracing::warn;

/// Reads `key` from the environment, falling back to `default` when it is
/// unset or does not parse.
pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(key, env::var(key).ok(), default)
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> T {
    match value {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring unparsable value {:?} for {}", value, key);
            default
        }),
        None => default,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupConfig {
    pub interval: Duration,
    pub completed_timeout: Duration,
    pub active_timeout: Duration,
}

impl CleanupConfig {
    pub fn from_env() -> Self {
        Self {
            interval: Duration::from_secs(env_or("CLEANUP_INTERVAL_SECONDS", 60)),
            completed_timeout: Duration::from_secs(env_or("COMPLETED_GAME_TIMEOUT_SECONDS", 600)),
            active_timeout: Duration::from_secs(env_or("ACTIVE_GAME_TIMEOUT_SECONDS", 86400)),
        }
    }
}
