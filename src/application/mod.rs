//! Application layer: use-case orchestration over the service layer.

pub mod pipeline;

pub use pipeline::{AnalysisPipeline, AnalysisReport};
