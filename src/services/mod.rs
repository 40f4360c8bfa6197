//! Service layer: the analytical core.
//!
//! Network construction, AB-BA detection, and seniority-gap comparison,
//! each as a small stateless service over in-memory data.

pub mod abba_detector;
pub mod gap_analyzer;
pub mod network_builder;
pub mod seniority;

pub use abba_detector::{AbbaDetector, AbbaReport};
pub use gap_analyzer::{GapAnalyzer, GapComparison};
pub use network_builder::NetworkBuilder;
pub use seniority::SeniorityMap;
