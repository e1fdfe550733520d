use crate::error::{AppError, Result};
use dashmap::DashMap;
use std::env;
use std::sync::Arc;

/// Configuration service
///
/// A string key/value store seeded from the process environment.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::from_vars(env::vars())
    }

    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let service = Self::default();
        for (key, value) in vars {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

/// Typed settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Where the user routes are mounted; always starts with `/`.
    pub base_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            base_path: "/".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_service(&ConfigService::new())
    }

    pub fn from_service(config: &ConfigService) -> Result<Self> {
        let defaults = Self::default();

        let port = match config.get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Internal(format!("invalid PORT {raw:?}: {e}")))?,
            None => defaults.port,
        };

        Ok(Self {
            host: config.get("HOST").unwrap_or(defaults.host),
            port,
            base_path: normalize_base_path(
                &config.get("USERS_BASE_PATH").unwrap_or(defaults.base_path),
            ),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}
