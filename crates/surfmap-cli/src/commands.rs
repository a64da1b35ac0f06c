//! CLI command implementations.

use surfmap_bench::metrics::BenchmarkMetrics;
use surfmap_bench::runner::BenchmarkRunner;
use surfmap_bench::scenarios::{Scenario, ScenarioKind};
use surfmap_io::contract::{MeasurementInput, ProjectionInput};
use surfmap_io::files::{load_config, load_mesh, read_json, write_json};
use surfmap_io::validator::validate_input;
use surfmap_io::{run_measurement, run_projection};
use surfmap_projection::{find_close_points, ProjectionConfig};
use surfmap_render::{DeviationExporter, DeviationFrame, DeviationSink};

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn fmt_distance(d: Option<f64>) -> String {
    d.map_or_else(|| "unprojected".to_string(), |d| format!("{d:.6e}"))
}

/// Measure source ↔ target surface distance.
pub fn measure(
    source_path: &str,
    target_path: &str,
    config_path: Option<&str>,
    output_path: Option<&str>,
    export_path: Option<&str>,
) -> CliResult {
    println!("surfmap Surface Distance");
    println!("════════════════════════");
    println!();

    let config = match config_path {
        Some(path) => load_config(path)?,
        None => ProjectionConfig::default(),
    };
    let input = MeasurementInput {
        source: load_mesh(source_path)?,
        target: load_mesh(target_path)?,
        config,
    };

    println!(
        "Source: {source_path} ({} verts, {} tris)",
        input.source.vertex_count(),
        input.source.triangle_count()
    );
    println!(
        "Target: {target_path} ({} verts, {} tris)",
        input.target.vertex_count(),
        input.target.triangle_count()
    );
    println!();

    let report = run_measurement(&input)?;

    println!("  Source → target max:   {}", fmt_distance(report.forward_max));
    println!("  Source → target mean:  {}", fmt_distance(report.forward_mean));
    println!("  Target → source max:   {}", fmt_distance(report.backward_max));
    println!("  Target → source mean:  {}", fmt_distance(report.backward_mean));
    println!("  Symmetric:             {}", fmt_distance(report.symmetric));
    println!("  Wall time:             {:.3}s", report.wall_time_seconds);
    println!();

    if let Some(path) = export_path {
        let distances: Vec<f64> = report
            .source_deviation
            .iter()
            .map(|d| d.unwrap_or(f64::INFINITY))
            .collect();
        let max = report.forward_max.unwrap_or(0.0);
        let mut exporter = DeviationExporter::new(path);
        exporter.init(&input.source)?;
        exporter.submit_frame(&DeviationFrame::from_mesh(0, &input.source, distances, max))?;
        exporter.finalize()?;
        println!("Deviation written to: {path}");
    }

    if let Some(path) = output_path {
        write_json(path, &report)?;
        println!("Report written to: {path}");
    }

    Ok(())
}

/// Project query points from a JSON input file.
pub fn project(input_path: &str, output_path: Option<&str>) -> CliResult {
    println!("surfmap Point Projection");
    println!("────────────────────────");
    println!();

    let input: ProjectionInput = read_json(input_path)?;
    let report = run_projection(&input)?;

    println!("Points:     {}", report.projections.len());
    println!("Unprojected: {}", report.invalid_count);

    match output_path {
        Some(path) => {
            write_json(path, &report)?;
            println!("Projections written to: {path}");
        }
        None => {
            println!();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// List vertex pairs closer than `threshold`.
pub fn close_points(mesh_path: &str, threshold: f64) -> CliResult {
    println!("surfmap Close Points");
    println!("────────────────────");
    println!();

    let mesh = load_mesh(mesh_path)?;
    mesh.validate()?;
    let pairs = find_close_points(&mesh.positions(), threshold)?;

    println!("Vertices:  {}", mesh.vertex_count());
    println!("Threshold: {threshold}");
    println!("Pairs:     {}", pairs.len());
    for [a, b] in &pairs {
        println!("  {a} {b}");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(scenario_name: &str, output_path: Option<&str>, sequential: bool) -> CliResult {
    println!("surfmap Benchmark Suite");
    println!("═══════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                eprintln!("Unknown scenario: {scenario_name}");
                eprintln!("Available: {}, all", available.join(", "));
                return Err("Unknown scenario".into());
            }
        }
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let mut scenario = Scenario::from_kind(kind);
        if sequential {
            scenario = scenario.with_config(ProjectionConfig::sequential());
        }

        println!(
            "Running: {} ({} + {} verts, {} + {} tris, {} runs)",
            kind.name(),
            scenario.source.vertex_count(),
            scenario.target.vertex_count(),
            scenario.source.triangle_count(),
            scenario.target.triangle_count(),
            scenario.repetitions,
        );

        let metrics = BenchmarkRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg run:       {:.3}ms", metrics.avg_run_time * 1000.0);
        println!("  Throughput:    {:.0} proj/s", metrics.projections_per_second);
        println!("  Symmetric:     {:.6e}", metrics.symmetric_distance);
        if let Some(err) = metrics.distance_error() {
            println!("  Error:         {err:.3e}");
        }
        println!();

        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        let csv = BenchmarkMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Validate a mesh, measurement input or projection config.
pub fn validate(path: &str) -> CliResult {
    println!("surfmap Validator");
    println!("─────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        match load_config(path) {
            Ok(_) => println!("✅ Config is valid."),
            Err(e) => {
                println!("❌ Config validation failed: {e}");
                return Err(e.into());
            }
        }
    } else if path.ends_with(".json") {
        let value: serde_json::Value = read_json(path)?;
        if value.get("source").is_some() && value.get("target").is_some() {
            println!("Validating measurement input: {path}");
            let input: MeasurementInput = serde_json::from_value(value)?;
            match validate_input(&input) {
                Ok(()) => println!("✅ Measurement input is valid."),
                Err(e) => {
                    println!("❌ Measurement input validation failed: {e}");
                    return Err(e.into());
                }
            }
        } else {
            println!("Validating mesh: {path}");
            let mesh: surfmap_mesh::TriangleMesh = serde_json::from_value(value)?;
            match mesh.validate() {
                Ok(()) => println!("✅ Mesh is valid ({} verts, {} tris).", mesh.vertex_count(), mesh.triangle_count()),
                Err(e) => {
                    println!("❌ Mesh validation failed: {e}");
                    return Err(e.into());
                }
            }
        }
    } else {
        println!("❌ Unsupported file format. Use .toml (config) or .json (mesh or measurement input).");
        return Err(format!("unsupported file format: {path}").into());
    }

    Ok(())
}
