use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::{info, warn};

use dashboard_domain::{DbConfig, RuntimeConfig};

use crate::config::validation::validate_database_url;

pub const DEFAULT_DB_PORT: u16 = 3306;

/// Service configuration. The database keys also accept the upper-case
/// spelling used by a secrets file (`DB_HOST = "..."`).
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    #[serde(alias = "DB_HOST")]
    pub db_host: Option<String>,
    #[serde(alias = "DB_PORT")]
    pub db_port: Option<u16>,
    #[serde(alias = "DB_USER")]
    pub db_user: Option<String>,
    #[serde(alias = "DB_PASS")]
    pub db_pass: Option<String>,
    #[serde(alias = "DB_NAME")]
    pub db_name: Option<String>,
    #[serde(alias = "DATABASE_URL")]
    pub database_url: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub trend_chart_width: u32,
    pub trend_chart_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let runtime = RuntimeConfig::default();
        Self {
            bind_addr: runtime.bind_addr,
            db_host: None,
            db_port: None,
            db_user: None,
            db_pass: None,
            db_name: None,
            database_url: None,
            max_body_bytes: runtime.max_body_bytes,
            request_timeout_seconds: runtime.request_timeout_seconds,
            trend_chart_width: runtime.trend_chart_width,
            trend_chart_height: runtime.trend_chart_height,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            info!(path = %path.display(), "loaded .env");
        }
        let path = env::var("ALTWATCH_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        Self::load_from(Path::new(&path), |key| env::var(key).ok()).await
    }

    /// Reads `file_path` (defaults when missing), then fills and overrides
    /// from `lookup`, which stands in for the process environment.
    pub async fn load_from<F>(file_path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml_str(&content)?
        } else {
            warn!(path = %file_path.display(), "config file not found, using defaults");
            AppConfig::default()
        };
        config.apply_env_fallbacks(&lookup);
        config.apply_env_overrides(&lookup);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: AppConfig = toml::from_str(content)?;
        config.normalize();
        Ok(config)
    }

    pub fn normalize(&mut self) {
        for value in [
            &mut self.db_host,
            &mut self.db_user,
            &mut self.db_pass,
            &mut self.db_name,
            &mut self.database_url,
        ] {
            if value.as_deref().map(str::trim).unwrap_or_default().is_empty() {
                *value = None;
            }
        }
        // The password is kept verbatim; surrounding spaces may be part of it.
        for value in [
            &mut self.db_host,
            &mut self.db_user,
            &mut self.db_name,
            &mut self.database_url,
        ] {
            if let Some(inner) = value.as_mut() {
                *inner = inner.trim().to_string();
            }
        }
        self.bind_addr = self.bind_addr.trim().to_string();
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.db_port == Some(0) {
            return Err(anyhow!("db_port must be greater than 0"));
        }
        if self.trend_chart_width == 0 || self.trend_chart_height == 0 {
            return Err(anyhow!("trend chart dimensions must be greater than 0"));
        }
        if let Some(url) = &self.database_url {
            validate_database_url(url)?;
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            trend_chart_width: self.trend_chart_width,
            trend_chart_height: self.trend_chart_height,
        }
    }

    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            host: self.db_host.clone(),
            port: self.db_port.unwrap_or(DEFAULT_DB_PORT),
            user: self.db_user.clone(),
            password: self.db_pass.clone(),
            database: self.db_name.clone(),
            database_url: self.database_url.clone(),
        }
    }

    /// Database settings: the file wins, the environment only fills gaps.
    fn apply_env_fallbacks<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if self.db_host.is_none() {
            self.db_host = non_empty("DB_HOST");
        }
        if self.db_user.is_none() {
            self.db_user = non_empty("DB_USER");
        }
        if self.db_pass.is_none() {
            self.db_pass = non_empty("DB_PASS");
        }
        if self.db_name.is_none() {
            self.db_name = non_empty("DB_NAME");
        }
        if self.database_url.is_none() {
            self.database_url = non_empty("DATABASE_URL");
        }
        if self.db_port.is_none() {
            self.db_port = non_empty("DB_PORT").and_then(|value| value.trim().parse().ok());
        }
    }

    /// Server settings: the environment wins.
    fn apply_env_overrides<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("ALTWATCH_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("ALTWATCH_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Some(value) = lookup("ALTWATCH_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}
