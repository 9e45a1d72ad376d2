use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub token_days: i64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "5000"),
            database_url: try_load("DATABASE_URL", "sqlite://salonconnect.db?mode=rwc"),
            jwt_secret: load_secret("JWT_SECRET", "dev-secret"),
            token_days: try_load("JWT_EXPIRES_DAYS", "7"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
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

/// Secrets-file first (`/run/secrets/<name>`), then the environment, then
/// the development default. The default is only acceptable for local runs.
fn load_secret(secret_name: &str, default: &str) -> String {
    let path = format!("/run/secrets/{secret_name}");

    if let Ok(contents) = read_to_string(&path) {
        return contents.trim().to_string();
    }

    var(secret_name).unwrap_or_else(|_| {
        warn!("{secret_name} falling back to the development default");
        default.to_string()
    })
}
