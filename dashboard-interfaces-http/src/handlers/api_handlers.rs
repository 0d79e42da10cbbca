use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use dashboard_application::commands::guild_config_commands;
use dashboard_application::queries::report_queries;
use dashboard_application::{AppState, ServerNamePayload, UpdateStatus};
use dashboard_domain::{PlayerStats, TrendPoint};

use crate::error::HttpError;

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<PlayerStats>, HttpError> {
    let stats = report_queries::fetch_stats(&state).await?;
    Ok(Json(stats))
}

pub async fn get_trend(State(state): State<AppState>) -> Result<Json<Vec<TrendPoint>>, HttpError> {
    let trend = report_queries::fetch_trend_data(&state).await?;
    Ok(Json(trend))
}

/// A store failure is still a well-formed `UpdateStatus`, sent with 502.
pub async fn put_guild_config(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
    Json(payload): Json<ServerNamePayload>,
) -> Result<(StatusCode, Json<UpdateStatus>), HttpError> {
    let status =
        guild_config_commands::put_guild_config(&state, &guild_id, &payload.server_name).await?;
    let code = match status {
        UpdateStatus::Updated { .. } => StatusCode::OK,
        UpdateStatus::Failed { .. } => StatusCode::BAD_GATEWAY,
    };
    Ok((code, Json(status)))
}
