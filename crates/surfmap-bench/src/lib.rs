//! # surfmap-bench
//!
//! Benchmark suite for the surface projection engine.
//!
//! Provides 3 procedural measurement scenarios, metric collection,
//! and CSV export for regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
