//! Integration tests for surfmap-io.

use surfmap_io::contract::{MeasurementInput, ProjectionInput};
use surfmap_io::files::{load_config, load_mesh, read_json, write_json};
use surfmap_io::validator::{validate_input, validate_projection_input};
use surfmap_io::{run_measurement, run_projection, MeasurementReport};
use surfmap_mesh::generators::{quad_grid, translated, uv_sphere};
use surfmap_mesh::TriangleMesh;
use surfmap_projection::ProjectionConfig;
use surfmap_types::SurfmapError;

fn make_valid_input() -> MeasurementInput {
    let mesh = quad_grid(4, 4, 1.0, 1.0);
    MeasurementInput {
        target: translated(&mesh, 0.0, 0.0, 0.1),
        source: mesh,
        config: ProjectionConfig::default(),
    }
}

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn measurement_input_round_trip() {
    let input = make_valid_input();
    let json = serde_json::to_string(&input).unwrap();
    let recovered: MeasurementInput = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.source, input.source);
    assert_eq!(recovered.config, input.config);
}

#[test]
fn missing_config_uses_defaults() {
    let mesh = serde_json::to_value(quad_grid(1, 1, 1.0, 1.0)).unwrap();
    let doc = serde_json::json!({ "source": mesh, "target": mesh });
    let input: MeasurementInput = serde_json::from_value(doc).unwrap();
    assert_eq!(input.config, ProjectionConfig::default());
}

// ─── Validator Tests ──────────────────────────────────────────

#[test]
fn valid_input_passes() {
    assert!(validate_input(&make_valid_input()).is_ok());
}

#[test]
fn broken_source_rejected() {
    let mut input = make_valid_input();
    input.source.indices.push(999);
    assert!(matches!(validate_input(&input), Err(SurfmapError::InvalidMesh(_))));
}

#[test]
fn empty_target_rejected() {
    let mut input = make_valid_input();
    input.target = TriangleMesh::default();
    assert!(matches!(validate_input(&input), Err(SurfmapError::EmptyMesh(_))));
}

#[test]
fn bad_epsilon_rejected() {
    let mut input = make_valid_input();
    input.config.degenerate_epsilon = 2.0;
    assert!(matches!(validate_input(&input), Err(SurfmapError::InvalidConfig(_))));
}

#[test]
fn non_finite_query_point_rejected() {
    let input = ProjectionInput {
        mesh: quad_grid(1, 1, 1.0, 1.0),
        points: vec![[0.0, 0.0, 0.0], [f64::NAN, 0.0, 0.0]],
        triangles: None,
        config: ProjectionConfig::default(),
    };
    assert!(validate_projection_input(&input).is_err());
}

// ─── Run Tests ────────────────────────────────────────────────

#[test]
fn measurement_report_of_offset_plane() {
    let report = run_measurement(&make_valid_input()).unwrap();
    assert_eq!(report.source_vertices, 25);
    assert_eq!(report.target_triangles, 32);
    assert!((report.symmetric.unwrap() - 0.1).abs() < 1e-9);
    assert!((report.forward_mean.unwrap() - 0.1).abs() < 1e-9);
    assert_eq!(report.source_deviation.len(), 25);
    assert!(report.wall_time_seconds >= 0.0);
}

#[test]
fn sphere_measurement_is_small() {
    let input = MeasurementInput {
        source: uv_sphere(1.0, 8, 12),
        target: uv_sphere(1.0, 16, 24),
        config: ProjectionConfig::sequential(),
    };
    let report = run_measurement(&input).unwrap();
    let d = report.symmetric.unwrap();
    assert!(d > 0.0 && d < 0.2, "symmetric = {d}");
}

#[test]
fn projection_run_reports_points() {
    let input = ProjectionInput {
        mesh: quad_grid(2, 2, 2.0, 2.0),
        points: vec![[0.25, 0.25, 1.0], [0.9, -0.3, -2.0]],
        triangles: None,
        config: ProjectionConfig::default(),
    };
    let report = run_projection(&input).unwrap();
    assert_eq!(report.invalid_count, 0);
    assert_eq!(report.projections.len(), 2);

    let first = &report.projections[0];
    assert!((first.distance.unwrap() - 1.0).abs() < 1e-9);
    let p = first.point.unwrap();
    assert!((p[0] - 0.25).abs() < 1e-9 && (p[1] - 0.25).abs() < 1e-9 && p[2].abs() < 1e-9);
}

#[test]
fn restricted_projection_run_with_empty_subset() {
    let input = ProjectionInput {
        mesh: quad_grid(2, 2, 2.0, 2.0),
        points: vec![[0.0, 0.0, 1.0]],
        triangles: Some(Vec::new()),
        config: ProjectionConfig::default(),
    };
    let report = run_projection(&input).unwrap();
    assert_eq!(report.invalid_count, 1);
    assert!(report.projections[0].triangle.is_none());
}

// ─── File Tests ───────────────────────────────────────────────

#[test]
fn mesh_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mesh.json");
    let mesh = uv_sphere(0.5, 4, 6);
    write_json(&path, &mesh).unwrap();
    assert_eq!(load_mesh(&path).unwrap(), mesh);
}

#[test]
fn config_file_loads_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projection.toml");
    std::fs::write(&path, "constrained = false\nparallel_min_points = 8\n").unwrap();

    let config = load_config(&path).unwrap();
    assert!(!config.constrained);
    assert_eq!(config.parallel_min_points, 8);
    assert_eq!(config.degenerate_epsilon, 1e-12);
}

#[test]
fn invalid_files_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("bad.json");
    let toml_path = dir.path().join("bad.toml");
    std::fs::write(&json, "{ not json").unwrap();
    std::fs::write(&toml_path, "degenerate_epsilon = \"tiny\"").unwrap();

    assert!(matches!(load_mesh(&json), Err(SurfmapError::Serialization(_))));
    assert!(matches!(load_config(&toml_path), Err(SurfmapError::Serialization(_))));
    assert!(matches!(load_mesh(dir.path().join("missing.json")), Err(SurfmapError::Io(_))));
}

#[test]
fn report_serializes_infinite_as_null() {
    let report = MeasurementReport {
        symmetric: None,
        source_deviation: vec![Some(0.5), None],
        ..Default::default()
    };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    write_json(&path, &report).unwrap();

    let value: serde_json::Value = read_json(&path).unwrap();
    assert!(value["symmetric"].is_null());
    assert!(value["source_deviation"][1].is_null());
}
