//! Benchmark runner: times surface distance measurements and collects metrics.

use std::time::Instant;

use surfmap_projection::{surface_distance, Surface};
use surfmap_types::SurfmapResult;
use tracing::info;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario.
    ///
    /// Topology is built once; only the measurement itself is timed.
    pub fn run(scenario: &Scenario) -> SurfmapResult<BenchmarkMetrics> {
        let source = Surface::from_mesh(&scenario.source)?;
        let target = Surface::from_mesh(&scenario.target)?;
        let repetitions = scenario.repetitions.max(1);

        let mut run_times: Vec<f64> = Vec::with_capacity(repetitions as usize);
        let mut symmetric = 0.0;

        let total_start = Instant::now();
        for _ in 0..repetitions {
            let start = Instant::now();
            let distance = surface_distance(source.view(), target.view(), &scenario.config)?;
            run_times.push(start.elapsed().as_secs_f64());
            symmetric = distance.symmetric;
        }
        let total_wall_time = total_start.elapsed().as_secs_f64();

        let avg_run = run_times.iter().sum::<f64>() / run_times.len() as f64;
        let min_run = run_times.iter().copied().fold(f64::MAX, f64::min);
        let max_run = run_times.iter().copied().fold(0.0, f64::max);

        let projections = (scenario.source.vertex_count() + scenario.target.vertex_count()) as f64;
        let projections_per_second = if avg_run > 0.0 { projections / avg_run } else { 0.0 };

        info!(
            scenario = scenario.kind.name(),
            repetitions,
            avg_run_ms = avg_run * 1000.0,
            symmetric,
            "benchmark scenario finished"
        );

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            source_vertices: scenario.source.vertex_count(),
            source_triangles: scenario.source.triangle_count(),
            target_vertices: scenario.target.vertex_count(),
            target_triangles: scenario.target.triangle_count(),
            repetitions,
            total_wall_time,
            avg_run_time: avg_run,
            min_run_time: min_run,
            max_run_time: max_run,
            projections_per_second,
            symmetric_distance: symmetric,
            expected_distance: scenario.expected_distance,
            parallel: scenario.config.parallel,
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> SurfmapResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind);
            results.push(Self::run(&scenario)?);
        }
        Ok(results)
    }
}
