use serde::{Deserialize, Serialize};

use dashboard_domain::{PlayerStats, TrendPoint};

pub const UPDATE_SUCCESS_MESSAGE: &str = "Guild configuration updated!";
pub const MISSING_FIELDS_MESSAGE: &str = "Please provide both Guild ID and New Server Name.";

/// Raw form input. Missing fields deserialize as empty strings so the
/// presence guard decides, not the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuildConfigForm {
    #[serde(default)]
    pub guild_id: String,
    #[serde(default)]
    pub server_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerNamePayload {
    #[serde(default)]
    pub server_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub stats: PlayerStats,
    pub trend: Vec<TrendPoint>,
}

/// Outcome of a keyed update. Store failures land in `Failed` instead of
/// being returned as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpdateStatus {
    Updated { rows_affected: u64 },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FormFeedback {
    Success(String),
    ValidationError(String),
    UpdateError(String),
}

impl FormFeedback {
    pub fn message(&self) -> &str {
        match self {
            FormFeedback::Success(message)
            | FormFeedback::ValidationError(message)
            | FormFeedback::UpdateError(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, FormFeedback::Success(_))
    }
}
