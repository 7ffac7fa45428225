use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Environment variable overriding `log_file`
pub const LOG_FILE_ENV: &str = "DAETRADER_LOG_FILE";

const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Menu application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log destination. Logging is off when unset, since the terminal
    /// belongs to the UI while it runs.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Input poll interval of the event loop
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl MenuConfig {
    /// Load configuration from YAML file
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;
        let mut config = Self::from_yaml(&yaml_content)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        if config_path.exists() {
            return Self::load(config_path);
        }

        let mut config = Self::default();
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from YAML text without env overrides
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Apply overrides from a variable lookup (normally the process environment)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(log_file) = lookup(LOG_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            self.log_file = Some(log_file);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of: {}",
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        if self.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError(
                "tick_rate_ms must be greater than 0".to_string(),
            ));
        }

        if matches!(&self.log_file, Some(path) if path.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "log_file must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration summary
    pub fn log(&self) {
        info!("Configuration loaded:");
        info!("  Log level: {}", self.log_level);
        info!("  Log file: {}", self.log_file.as_deref().unwrap_or("<disabled>"));
        info!("  Tick rate: {} ms", self.tick_rate_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = MenuConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, None);
        assert_eq!(config.tick_rate_ms, 250);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = MenuConfig::from_yaml("log_level: debug\n").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(MenuConfig::from_yaml("").unwrap(), MenuConfig::default());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "log_level: trace\nlog_file: logs/menu.log\ntick_rate_ms: 100\n";
        let config = MenuConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.log_file.as_deref(), Some("logs/menu.log"));
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = MenuConfig::from_yaml("tick_rate_ms: [1, 2]").unwrap_err();
        assert!(matches!(err, ConfigError::YamlError(_)));
    }

    #[test]
    fn test_yaml_error_chain_prints_cause_once() {
        let err = MenuConfig::from_yaml("tick_rate_ms: [1, 2]").unwrap_err();
        let cause = std::error::Error::source(&err).unwrap().to_string();
        let report = format!("{:#}", anyhow::Error::from(err));

        assert!(report.starts_with("Failed to parse YAML: "));
        assert_eq!(report.matches(cause.as_str()).count(), 1);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = MenuConfig::default();
        config.log_level = "verbose".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let mut config = MenuConfig::default();
        config.tick_rate_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let mut config = MenuConfig::default();
        config.log_file = Some("  ".to_string());
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut config = MenuConfig::default();
        config.log_level = "WARN".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let mut config = MenuConfig::default();
        config.apply_overrides(|name| {
            (name == LOG_FILE_ENV).then(|| "/tmp/daetrader.log".to_string())
        });
        assert_eq!(config.log_file.as_deref(), Some("/tmp/daetrader.log"));

        let mut config = MenuConfig::default();
        config.apply_overrides(|_| Some(String::new()));
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level: warn").unwrap();
        writeln!(file, "tick_rate_ms: 50").unwrap();

        let config = MenuConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.tick_rate_ms, 50);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MenuConfig::load(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = MenuConfig::load_or_default(dir.path().join("missing.yaml")).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tick_rate_ms: 0").unwrap();
        assert!(matches!(
            MenuConfig::load(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
