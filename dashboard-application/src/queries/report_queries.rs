use tracing::error;

use crate::{AppError, AppState, DashboardSnapshot};
use dashboard_domain::{PlayerStats, TrendPoint};

pub async fn fetch_stats(state: &AppState) -> Result<PlayerStats, AppError> {
    let stats = state.report_repo.fetch_stats().await.map_err(|err| {
        error!("failed to fetch player stats: {:#}", err);
        state.metrics.record_report_error();
        AppError::Internal(err)
    })?;
    Ok(stats)
}

pub async fn fetch_trend_data(state: &AppState) -> Result<Vec<TrendPoint>, AppError> {
    let trend = state.report_repo.fetch_trend().await.map_err(|err| {
        error!("failed to fetch trend data: {:#}", err);
        state.metrics.record_report_error();
        AppError::Internal(err)
    })?;
    Ok(trend)
}

/// Everything the page shows, fetched in page order: stats first, then trend.
pub async fn load_dashboard(state: &AppState) -> Result<DashboardSnapshot, AppError> {
    let stats = fetch_stats(state).await?;
    let trend = fetch_trend_data(state).await?;
    state.metrics.record_page_render();
    Ok(DashboardSnapshot { stats, trend })
}
