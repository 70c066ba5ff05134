// Runtime configuration read from the environment.
//
// Notes
// - Every setting has a default except the admin password; without it the login gate is off.
// - A value that is present but malformed is an error, never silently replaced by the default.

use chrono::TimeDelta;
use std::{env, fmt::Display, num::NonZeroUsize, str::FromStr};
use thiserror::Error;
use tracing::{info, warn};

pub const HOST: &str = "DROPLOG_HOST";
pub const PORT: &str = "DROPLOG_PORT";
pub const PAGE_SIZE: &str = "DROPLOG_PAGE_SIZE";
pub const SESSION_TTL_SECS: &str = "DROPLOG_SESSION_TTL_SECS";
pub const ADMIN_PASSWORD: &str = "DROPLOG_ADMIN_PASSWORD";
pub const COLLECTION: &str = "DROPLOG_COLLECTION";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} value `{value}`: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub page_size: NonZeroUsize,
    pub session_ttl: TimeDelta,
    pub admin_password: Option<String>,
    pub collection: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            page_size: NonZeroUsize::new(10).unwrap_or(NonZeroUsize::MIN),
            session_ttl: TimeDelta::seconds(1800),
            admin_password: None,
            collection: "delivery_log".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let default_ttl_secs = defaults.session_ttl.num_seconds() as u32;
        let ttl_secs: u32 = try_load(&lookup, SESSION_TTL_SECS, default_ttl_secs)?;

        let admin_password = lookup(ADMIN_PASSWORD).filter(|password| !password.is_empty());
        if admin_password.is_none() {
            warn!("{ADMIN_PASSWORD} not set, login gate disabled");
        }

        Ok(Self {
            host: try_load(&lookup, HOST, defaults.host)?,
            port: try_load(&lookup, PORT, defaults.port)?,
            page_size: try_load(&lookup, PAGE_SIZE, defaults.page_size)?,
            session_ttl: TimeDelta::seconds(i64::from(ttl_secs)),
            admin_password,
            collection: try_load(&lookup, COLLECTION, defaults.collection)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
        Some(value) => value.trim().parse().map_err(|error: T::Err| {
            warn!("Invalid {key} value: {error}");
            ConfigError::Invalid {
                key,
                value,
                reason: error.to_string(),
            }
        }),
    }
}
