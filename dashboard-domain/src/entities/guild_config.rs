// Guild configuration entity
// The only row this system writes: a guild's server name, replaced by key

use serde::{Deserialize, Serialize};

use crate::value_objects::GuildId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildConfigUpdate {
    pub guild_id: GuildId,
    pub server_name: String,
}
