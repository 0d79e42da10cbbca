use std::sync::Arc;

use dashboard_domain::ports::{GuildConfigRepository, ReportRepository};
use dashboard_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub report_repo: Arc<dyn ReportRepository>,
    pub guild_repo: Arc<dyn GuildConfigRepository>,
    pub metrics: Arc<Metrics>,
}
