// Account flag value object
// One boolean marker column on the players table

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountFlag {
    /// Suspected secondary account.
    Alt,
    /// Under manual observation.
    Watchlisted,
    /// Excluded from flagging logic.
    Whitelisted,
}

impl AccountFlag {
    pub const ALL: [AccountFlag; 3] = [
        AccountFlag::Alt,
        AccountFlag::Watchlisted,
        AccountFlag::Whitelisted,
    ];

    /// Column name in the `players` table.
    pub fn column(&self) -> &'static str {
        match self {
            AccountFlag::Alt => "alt_flag",
            AccountFlag::Watchlisted => "watchlisted",
            AccountFlag::Whitelisted => "whitelist",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountFlag::Alt => "Flagged Accounts",
            AccountFlag::Watchlisted => "Watchlisted Accounts",
            AccountFlag::Whitelisted => "Whitelisted Accounts",
        }
    }
}
