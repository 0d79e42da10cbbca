use axum::routing::{get, post, put};
use axum::Router;

use dashboard_application::AppState;

use crate::handlers::{api_handlers, dashboard_handlers, ops_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard_handlers::show_dashboard))
        .route("/guild-config", post(dashboard_handlers::submit_guild_config))
        .route("/api/v1/stats", get(api_handlers::get_stats))
        .route("/api/v1/trend", get(api_handlers::get_trend))
        .route(
            "/api/v1/guild-configs/:guild_id",
            put(api_handlers::put_guild_config),
        )
        .route("/ops/health/live", get(ops_handlers::health_live))
        .route("/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
