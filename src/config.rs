// src/config.rs
//
// Store configuration
//
// Resolution order for `from_env`:
// 1. BREWBUDDY_DB_PATH / BREWBUDDY_MAX_CONNECTIONS / BREWBUDDY_CURRENCY
// 2. Defaults: {APP_DATA}/brewbuddy/brewbuddy.db, 15 connections, GBP

use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

pub const ENV_DB_PATH: &str = "BREWBUDDY_DB_PATH";
pub const ENV_MAX_CONNECTIONS: &str = "BREWBUDDY_MAX_CONNECTIONS";
pub const ENV_CURRENCY: &str = "BREWBUDDY_CURRENCY";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Upper bound of the r2d2 pool
    pub max_connections: u32,

    /// SQLite busy timeout
    pub busy_timeout_ms: u32,

    /// ISO 4217 code used when formatting prices
    pub currency_code: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("brewbuddy.db"),
            max_connections: 15,
            busy_timeout_ms: 5000,
            currency_code: "GBP".to_string(),
        }
    }
}

impl StoreConfig {
    /// Config pointing at an explicit database file
    pub fn at(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            ..Self::default()
        }
    }

    /// Default database location
    ///
    /// Path structure: {APP_DATA}/brewbuddy/brewbuddy.db
    pub fn default_database_path() -> AppResult<PathBuf> {
        let app_data_dir = dirs::data_dir()
            .ok_or_else(|| AppError::Config("Could not determine app data directory".to_string()))?;

        Ok(app_data_dir.join("brewbuddy").join("brewbuddy.db"))
    }

    /// Build from the process environment, falling back to defaults
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, a settings map, ...)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match lookup(ENV_DB_PATH) {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => Self::default_database_path()?,
        };

        let max_connections = match lookup(ENV_MAX_CONNECTIONS) {
            Some(raw) => raw.trim().parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                AppError::Config(format!("{} must be a positive integer, got {:?}", ENV_MAX_CONNECTIONS, raw))
            })?,
            None => Self::default().max_connections,
        };

        let currency_code = lookup(ENV_CURRENCY)
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| Self::default().currency_code);

        Ok(Self {
            database_path,
            max_connections,
            currency_code,
            ..Self::default()
        })
    }

    /// Parse a JSON settings blob; missing keys take their defaults
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.max_connections == 0 {
            return Err(AppError::Config("max_connections must be at least 1".to_string()));
        }
        Ok(config)
    }
}
