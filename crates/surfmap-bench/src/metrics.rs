//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    pub source_vertices: usize,
    pub source_triangles: usize,
    pub target_vertices: usize,
    pub target_triangles: usize,
    /// Number of timed measurements.
    pub repetitions: u32,
    /// Total wall-clock time over all repetitions (seconds).
    pub total_wall_time: f64,
    /// Average time of one symmetric measurement (seconds).
    pub avg_run_time: f64,
    pub min_run_time: f64,
    pub max_run_time: f64,
    /// Point projections per second (both directions counted).
    pub projections_per_second: f64,
    /// Measured symmetric surface distance.
    pub symmetric_distance: f64,
    /// Analytic distance, where the scenario has one.
    pub expected_distance: Option<f64>,
    /// Whether batch projection ran on the rayon pool.
    pub parallel: bool,
}

impl BenchmarkMetrics {
    /// Format as a CSV row (header + data).
    pub fn to_csv_header() -> String {
        "scenario,source_vertices,source_triangles,target_vertices,target_triangles,repetitions,total_wall_time_s,avg_run_ms,min_run_ms,max_run_ms,projections_per_s,symmetric_distance,expected_distance,parallel".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        let expected = self
            .expected_distance
            .map(|d| format!("{d:.6e}"))
            .unwrap_or_default();
        format!(
            "{},{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.1},{:.6e},{},{}",
            self.scenario,
            self.source_vertices,
            self.source_triangles,
            self.target_vertices,
            self.target_triangles,
            self.repetitions,
            self.total_wall_time,
            self.avg_run_time * 1000.0,
            self.min_run_time * 1000.0,
            self.max_run_time * 1000.0,
            self.projections_per_second,
            self.symmetric_distance,
            expected,
            self.parallel,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }

    /// Absolute error against the analytic distance, if any.
    pub fn distance_error(&self) -> Option<f64> {
        self.expected_distance
            .map(|e| (self.symmetric_distance - e).abs())
    }
}
