// Domain entities
pub mod config;
pub mod guild_config;
pub mod player_stats;
pub mod trend;

pub use config::*;
pub use guild_config::*;
pub use player_stats::*;
pub use trend::*;
