use axum::extract::State;
use axum::response::Html;
use axum::Form;

use dashboard_application::commands::guild_config_commands;
use dashboard_application::queries::report_queries;
use dashboard_application::{AppState, FormFeedback, GuildConfigForm};

use crate::error::HttpError;
use crate::views::{render_dashboard, DashboardView};

pub async fn show_dashboard(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    let snapshot = report_queries::load_dashboard(&state).await?;
    Ok(Html(render_dashboard(&DashboardView {
        snapshot: &snapshot,
        feedback: None,
        form: None,
        chart_width: state.config.trend_chart_width,
        chart_height: state.config.trend_chart_height,
    })))
}

/// Runs the update (if the form passes the presence guard) and re-renders
/// the page so the counts reflect the new state.
pub async fn submit_guild_config(
    State(state): State<AppState>,
    Form(form): Form<GuildConfigForm>,
) -> Result<Html<String>, HttpError> {
    let feedback = guild_config_commands::submit_guild_config_form(&state, &form).await;
    let snapshot = report_queries::load_dashboard(&state).await?;
    let echo = matches!(feedback, FormFeedback::ValidationError(_)).then_some(&form);
    Ok(Html(render_dashboard(&DashboardView {
        snapshot: &snapshot,
        feedback: Some(&feedback),
        form: echo,
        chart_width: state.config.trend_chart_width,
        chart_height: state.config.trend_chart_height,
    })))
}
