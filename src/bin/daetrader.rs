//! DAETRADER - terminal menu
//!
//! Full-screen navigation menu of the trading tool.
//!
//! Usage:
//!   ./daetrader
//!   DAETRADER_CONFIG_PATH=my.yaml ./daetrader   # custom config file
//!   DAETRADER_LOG_FILE=logs/menu.log ./daetrader  # enable logging

use anyhow::Result;
use daetrader::bin_common::{load_config_from_env, run_navigator, RunConfig};
use daetrader::menu::{init_tracing_to_file, MenuConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("Alas, there's been an error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Load config (defaults when the file is absent)
    let config_path = load_config_from_env();
    let config = MenuConfig::load_or_default(&config_path)?;

    // Logging goes to a file only; the terminal belongs to the UI
    if let Some(log_file) = &config.log_file {
        init_tracing_to_file(log_file, &config.log_level)?;
    }
    config.log();

    let run_config = RunConfig::new("daetrader").with_tick_rate(config.tick_rate_ms);
    run_navigator(&run_config)
}
