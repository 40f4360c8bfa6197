use serde::{Deserialize, Serialize};

/// Main configuration structure for revertnet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Analysis parameters
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Histogram rendering parameters
    #[serde(default)]
    pub histogram: HistogramConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            histogram: HistogramConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Parameters of the AB-BA detection pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AnalysisConfig {
    /// Width of the reciprocal-response window, in hours
    #[serde(default = "default_window_hours")]
    pub window_hours: i64,
}

const fn default_window_hours() -> i64 {
    24
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_hours: default_window_hours(),
        }
    }
}

/// Parameters of the seniority-gap histogram rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HistogramConfig {
    /// Number of bins over the combined gap range
    #[serde(default = "default_bins")]
    pub bins: usize,

    /// Maximum bar width in terminal cells
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

const fn default_bins() -> usize {
    10
}

const fn default_bar_width() -> usize {
    40
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bins: default_bins(),
            bar_width: default_bar_width(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.analysis.window_hours, 24);
        assert_eq!(config.histogram.bins, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_round_trips_through_yaml() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.analysis.window_hours, config.analysis.window_hours);
        assert_eq!(back.histogram.bins, config.histogram.bins);
    }
}
