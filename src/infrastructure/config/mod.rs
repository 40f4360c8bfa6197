//! Hierarchical configuration loading.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Directory holding project-local configuration.
pub const CONFIG_DIR: &str = ".revertnet";

/// Primary project config file, created by `revertnet init`.
pub const CONFIG_FILE: &str = ".revertnet/config.yaml";

/// Optional local override file, never created automatically.
pub const LOCAL_FILE: &str = ".revertnet/local.yaml";

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid window_hours: {0}. Must be at least 1")]
    InvalidWindowHours(i64),

    #[error("Invalid histogram bins: {0}. Must be at least 1")]
    InvalidBins(usize),

    #[error("Invalid bar_width: {0}. Must be at least 1")]
    InvalidBarWidth(usize),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults
    /// 2. `.revertnet/config.yaml` (project config, created by init)
    /// 3. `.revertnet/local.yaml` (local overrides, optional)
    /// 4. Environment variables (`REVERTNET_*` prefix)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(CONFIG_FILE))
            .merge(Yaml::file(LOCAL_FILE))
            .merge(Env::prefixed("REVERTNET_").split("__"))
            .extract()
            .context("Failed to extract configuration")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, skipping the hierarchy.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.analysis.window_hours < 1 {
            return Err(ConfigError::InvalidWindowHours(config.analysis.window_hours));
        }
        if config.histogram.bins == 0 {
            return Err(ConfigError::InvalidBins(config.histogram.bins));
        }
        if config.histogram.bar_width == 0 {
            return Err(ConfigError::InvalidBarWidth(config.histogram.bar_width));
        }
        match config.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(ConfigError::InvalidLogLevel(other.to_string())),
        }
        match config.logging.format.as_str() {
            "json" | "pretty" => {}
            other => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(ConfigLoader::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let config = Config {
            analysis: crate::domain::models::AnalysisConfig { window_hours: 0 },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidWindowHours(0))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_bins() {
        let config = Config {
            histogram: crate::domain::models::HistogramConfig {
                bins: 0,
                bar_width: 40,
            },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidBins(0))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let config = Config {
            logging: crate::domain::models::LoggingConfig {
                level: "loud".to_string(),
                format: "pretty".to_string(),
            },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_load_from_file_merges_over_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(file, "analysis:\n  window_hours: 48").unwrap();
        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(config.analysis.window_hours, 48);
        // Untouched sections keep their defaults.
        assert_eq!(config.histogram.bins, 10);
    }

    #[test]
    fn test_env_overrides_defaults() {
        temp_env::with_var("REVERTNET_ANALYSIS__WINDOW_HOURS", Some("12"), || {
            let config = ConfigLoader::load().unwrap();
            assert_eq!(config.analysis.window_hours, 12);
        });
    }
}
