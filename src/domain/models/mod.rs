//! Domain models: raw log records, revert-network entities, configuration.

pub mod config;
pub mod log_record;
pub mod revert_edge;

pub use config::{AnalysisConfig, Config, HistogramConfig, LoggingConfig};
pub use log_record::LogRecord;
pub use revert_edge::{RevertEdge, RevertNetwork};
