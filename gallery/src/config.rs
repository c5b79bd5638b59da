use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub roster_path: String,
    pub review_delay_ms: u64,
    pub passphrase: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("GALLERY_PORT", "8080"),
            roster_path: try_load("ROSTER_PATH", "roster.json"),
            review_delay_ms: try_load("REVIEW_DELAY_MS", "300"),
            passphrase: load_passphrase("GALLERY_PASSPHRASE"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

/// Env var first for local runs, then the Docker-style secrets file.
/// The value itself is never logged.
fn load_passphrase(key: &str) -> String {
    if let Ok(value) = env::var(key) {
        return value;
    }

    let path = format!("/run/secrets/{key}");
    info!("{key} not set, reading {path}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {key} from {path}: {e}");
        })
        .expect("Passphrase misconfigured!")
}
