use async_trait::async_trait;

use crate::entities::{GuildConfigUpdate, PlayerStats, TrendPoint};

#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn fetch_stats(&self) -> anyhow::Result<PlayerStats>;
    /// Daily event counts, ascending by date. Empty when there is no history.
    async fn fetch_trend(&self) -> anyhow::Result<Vec<TrendPoint>>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait GuildConfigRepository: Send + Sync {
    /// Returns the number of rows the statement touched.
    async fn update_server_name(&self, update: &GuildConfigUpdate) -> anyhow::Result<u64>;
}
