//! CLI utilities for binaries
//!
//! Resolves the configuration file path from the environment. Command
//! line arguments are not read.

use std::path::PathBuf;

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "DAETRADER_CONFIG_PATH";

/// Config file used when `DAETRADER_CONFIG_PATH` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/daetrader.yaml";

/// Load configuration path from environment or use default
///
/// # Examples
/// ```
/// use daetrader::bin_common::load_config_from_env;
///
/// let path = load_config_from_env();
/// ```
pub fn load_config_from_env() -> PathBuf {
    resolve_config_path(std::env::var(CONFIG_PATH_ENV).ok())
}

fn resolve_config_path(from_env: Option<String>) -> PathBuf {
    from_env
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
        .into()
}
