//! In-memory port fakes for tests in this crate and the HTTP layer.

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;

use dashboard_domain::{
    GuildConfigRepository, GuildConfigUpdate, PlayerStats, ReportRepository, RuntimeConfig,
    TrendPoint,
};

use crate::{AppState, Metrics};

#[derive(Default)]
pub struct FakeReportRepo {
    pub stats: PlayerStats,
    pub trend: Vec<TrendPoint>,
    pub fail: bool,
    pub ping_fails: bool,
}

#[async_trait]
impl ReportRepository for FakeReportRepo {
    async fn fetch_stats(&self) -> anyhow::Result<PlayerStats> {
        if self.fail {
            return Err(anyhow!("connection refused"));
        }
        Ok(self.stats)
    }

    async fn fetch_trend(&self) -> anyhow::Result<Vec<TrendPoint>> {
        if self.fail {
            return Err(anyhow!("connection refused"));
        }
        Ok(self.trend.clone())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        if self.ping_fails {
            return Err(anyhow!("connection refused"));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeGuildRepo {
    pub calls: Mutex<Vec<GuildConfigUpdate>>,
    pub rows_affected: u64,
    pub fail: bool,
}

impl FakeGuildRepo {
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

#[async_trait]
impl GuildConfigRepository for FakeGuildRepo {
    async fn update_server_name(&self, update: &GuildConfigUpdate) -> anyhow::Result<u64> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(update.clone());
        }
        if self.fail {
            return Err(anyhow!("Table 'guild_configs' doesn't exist"));
        }
        Ok(self.rows_affected)
    }
}

pub fn state_with(report_repo: Arc<FakeReportRepo>, guild_repo: Arc<FakeGuildRepo>) -> AppState {
    AppState {
        config: RuntimeConfig::default(),
        report_repo,
        guild_repo,
        metrics: Arc::new(Metrics::default()),
    }
}
