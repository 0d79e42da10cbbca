// Runtime configuration handed to the application layer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub trend_chart_width: u32,
    pub trend_chart_height: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8501".to_string(),
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 15,
            trend_chart_width: 720,
            trend_chart_height: 240,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: Option<String>,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    /// Full connection URL; takes precedence over the discrete fields.
    pub database_url: Option<String>,
}
