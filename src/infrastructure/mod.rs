//! Infrastructure layer: file ingestion and configuration.

pub mod config;
pub mod ingest;

pub use config::{ConfigError, ConfigLoader};
pub use ingest::{load_log, parse_log, IngestError};
