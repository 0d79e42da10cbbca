use tracing::{error, info, warn};

use crate::{
    AppError, AppState, FormFeedback, GuildConfigForm, UpdateStatus, MISSING_FIELDS_MESSAGE,
    UPDATE_SUCCESS_MESSAGE,
};
use dashboard_domain::{GuildConfigUpdate, GuildId};

/// Runs the keyed update. Store errors are caught and turned into
/// `UpdateStatus::Failed`; a zero-row update still counts as success.
pub async fn update_guild_config(state: &AppState, update: GuildConfigUpdate) -> UpdateStatus {
    match state.guild_repo.update_server_name(&update).await {
        Ok(rows_affected) => {
            state.metrics.record_guild_update();
            if rows_affected == 0 {
                warn!(
                    guild_id = %update.guild_id,
                    "guild config update matched no rows"
                );
            } else {
                info!(
                    guild_id = %update.guild_id,
                    rows_affected,
                    "guild config updated"
                );
            }
            UpdateStatus::Updated { rows_affected }
        }
        Err(err) => {
            error!(guild_id = %update.guild_id, "guild config update failed: {:#}", err);
            state.metrics.record_guild_update_failure();
            UpdateStatus::Failed {
                message: format!("Error updating config: {:#}", err),
            }
        }
    }
}

/// Form-submit event. Both fields must be non-empty before the updater runs.
pub async fn submit_guild_config_form(state: &AppState, form: &GuildConfigForm) -> FormFeedback {
    let Some(update) = parse_update(&form.guild_id, &form.server_name) else {
        state.metrics.record_form_rejection();
        return FormFeedback::ValidationError(MISSING_FIELDS_MESSAGE.to_string());
    };
    match update_guild_config(state, update).await {
        UpdateStatus::Updated { .. } => FormFeedback::Success(UPDATE_SUCCESS_MESSAGE.to_string()),
        UpdateStatus::Failed { message } => FormFeedback::UpdateError(message),
    }
}

pub async fn put_guild_config(
    state: &AppState,
    guild_id: &str,
    server_name: &str,
) -> Result<UpdateStatus, AppError> {
    let Some(update) = parse_update(guild_id, server_name) else {
        state.metrics.record_form_rejection();
        return Err(AppError::BadRequest(
            "guild_id and server_name must not be empty".to_string(),
        ));
    };
    Ok(update_guild_config(state, update).await)
}

/// Presence check only; values reach the store exactly as submitted.
fn parse_update(guild_id: &str, server_name: &str) -> Option<GuildConfigUpdate> {
    let guild_id = GuildId::parse(guild_id)?;
    if server_name.is_empty() {
        return None;
    }
    Some(GuildConfigUpdate {
        guild_id,
        server_name: server_name.to_string(),
    })
}
