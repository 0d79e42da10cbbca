use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use dashboard_bootstrap::logging::{init_logging, LogOptions};

#[derive(Parser, Debug)]
#[command(name = "altwatch-dashboard")]
#[command(about = "Alt Detection Dashboard", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Also write logs to a daily-rolling file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging(&LogOptions {
        json: args.log_json,
        dir: args.log_dir,
    })?;

    if let Some(config) = args.config {
        std::env::set_var("ALTWATCH_CONFIG", config);
    }

    dashboard_bootstrap::run_standalone().await
}
