pub mod guild_config_commands;
