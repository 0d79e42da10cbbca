// Player statistics entity
// Summary counts over the players table

use serde::{Deserialize, Serialize};

use crate::value_objects::AccountFlag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub total_players: u64,
    pub flagged_accounts: u64,
    pub watchlisted_accounts: u64,
    pub whitelisted_accounts: u64,
}

impl PlayerStats {
    pub fn flag_count(&self, flag: AccountFlag) -> u64 {
        match flag {
            AccountFlag::Alt => self.flagged_accounts,
            AccountFlag::Watchlisted => self.watchlisted_accounts,
            AccountFlag::Whitelisted => self.whitelisted_accounts,
        }
    }

    pub fn set_flag_count(&mut self, flag: AccountFlag, count: u64) {
        match flag {
            AccountFlag::Alt => self.flagged_accounts = count,
            AccountFlag::Watchlisted => self.watchlisted_accounts = count,
            AccountFlag::Whitelisted => self.whitelisted_accounts = count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_counts_are_independent() {
        let mut stats = PlayerStats::default();
        stats.set_flag_count(AccountFlag::Watchlisted, 3);
        assert_eq!(stats.flag_count(AccountFlag::Watchlisted), 3);
        assert_eq!(stats.flag_count(AccountFlag::Alt), 0);
        assert_eq!(stats.flag_count(AccountFlag::Whitelisted), 0);
    }

    #[test]
    fn serializes_with_dashboard_keys() {
        let stats = PlayerStats {
            total_players: 10,
            flagged_accounts: 2,
            watchlisted_accounts: 1,
            whitelisted_accounts: 4,
        };
        let value = serde_json::to_value(stats).expect("serialize stats");
        assert_eq!(value["total_players"], 10);
        assert_eq!(value["flagged_accounts"], 2);
        assert_eq!(value["watchlisted_accounts"], 1);
        assert_eq!(value["whitelisted_accounts"], 4);
    }
}
