//! Domain layer: pure models with no I/O or presentation concerns.

pub mod models;

pub use models::{Config, LogRecord, RevertEdge, RevertNetwork};
