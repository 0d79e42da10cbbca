use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use dashboard_application::{AppState, Metrics};
use dashboard_infrastructure::{AppConfig, SqlStore};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Self::from_config(&config)
    }

    /// Wires the store into both ports. No connection is opened here; each
    /// repository call connects on its own.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config();

        info!(
            bind_addr = %runtime_config.bind_addr,
            db_host = db_config.host.as_deref().unwrap_or("localhost"),
            db_port = db_config.port,
            db_name = db_config.database.as_deref().unwrap_or(""),
            db_pass_set = db_config.password.is_some(),
            database_url_set = db_config.database_url.is_some(),
            "dashboard config loaded"
        );

        let store = Arc::new(SqlStore::new(&db_config)?);
        let state = AppState {
            config: runtime_config,
            report_repo: store.clone(),
            guild_repo: store,
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
