//! DAETRADER - Main Library
//!
//! Terminal front-end of the trading tool.
//!
//! ## Architecture
//!
//! - **bin_common**: Common utilities for the binary (config path, runner)
//! - **menu**: Navigator, list widget, config and logging (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust,no_run
//! use daetrader::bin_common::{load_config_from_env, run_navigator, RunConfig};
//! use daetrader::menu::MenuConfig;
//!
//! let config = MenuConfig::load_or_default(load_config_from_env()).unwrap();
//! run_navigator(&RunConfig::new("daetrader").with_tick_rate(config.tick_rate_ms)).unwrap();
//! ```

// Re-export workspace libraries for convenience
pub use menu;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;
    pub mod runner;

    pub use cli::{load_config_from_env, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
    pub use runner::{run_navigator, RunConfig};
}
