//! Runtime configuration read from the environment (optionally a `.env` file).

use std::net::SocketAddr;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_pool_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub leeway_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load from process environment, reading `.env` first if present.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Used by `from_env` and tests.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = required(&lookup, "DATABASE_URL")?;
        if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://")
        {
            return Err(AppError::ValidationError(
                "DATABASE_URL must start with postgres:// or postgresql://".to_string(),
            ));
        }

        let max_pool_size = optional_parsed::<u32, _>(&lookup, "DATABASE_MAX_POOL_SIZE")?;
        if max_pool_size == Some(0) {
            return Err(AppError::ValidationError(
                "DATABASE_MAX_POOL_SIZE must be positive".to_string(),
            ));
        }

        let jwt_secret = required(&lookup, "JWT_SECRET")?;
        let leeway_secs = optional_parsed::<u64, _>(&lookup, "JWT_LEEWAY_SECS")?.unwrap_or(0);

        let bind_address = optional_parsed::<SocketAddr, _>(&lookup, "BIND_ADDRESS")?
            .unwrap_or_else(|| {
                DEFAULT_BIND_ADDRESS
                    .parse()
                    .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8000)))
            });

        Ok(Self {
            database: DatabaseConfig {
                url: database_url,
                max_pool_size,
            },
            auth: AuthConfig {
                jwt_secret,
                leeway_secs,
            },
            server: ServerConfig { bind_address },
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> AppResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::ValidationError(format!(
            "{} environment variable not set",
            key
        ))),
    }
}

fn optional_parsed<T, F>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::ValidationError(format!("{} has an invalid value", key))),
        _ => Ok(None),
    }
}
