//! Revertnet - Revert-Network Analyzer
//!
//! Revertnet reconstructs a directed revert network from a chronological
//! collaborative-edit log, detects AB-BA reciprocal revert sequences within
//! a time window, and compares the seniority-gap distributions of
//! reciprocal vs. non-reciprocal reverts.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): Pure models (log records, revert edges,
//!   configuration)
//! - **Service Layer** (`services`): The analytical core (seniority
//!   estimation, network construction, AB-BA detection, gap comparison)
//! - **Application Layer** (`application`): Pipeline orchestration
//! - **Infrastructure Layer** (`infrastructure`): Log ingestion and config
//!   loading
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```
//! use revertnet::application::AnalysisPipeline;
//!
//! let report = AnalysisPipeline::default().run(&[]);
//! assert_eq!(report.abba.count, 0);
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::{AnalysisPipeline, AnalysisReport};
pub use domain::models::{Config, LogRecord, RevertEdge, RevertNetwork};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::ingest::{load_log, parse_log, IngestError};
pub use services::{AbbaDetector, AbbaReport, GapAnalyzer, GapComparison, NetworkBuilder, SeniorityMap};
