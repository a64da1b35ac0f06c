//! Integration tests for surfmap-render.

use surfmap_mesh::generators::quad_grid;
use surfmap_render::{deviation_colors, hsl_to_rgb, DeviationExporter, DeviationFrame, DeviationSink, HeadlessSink};

fn assert_rgb(actual: [f64; 3], expected: [f64; 3]) {
    for i in 0..3 {
        assert!((actual[i] - expected[i]).abs() < 1e-9, "{actual:?} != {expected:?}");
    }
}

// ─── Colour Map Tests ─────────────────────────────────────────

#[test]
fn hsl_primaries() {
    assert_rgb(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
    assert_rgb(hsl_to_rgb(120.0, 1.0, 0.5), [0.0, 1.0, 0.0]);
    assert_rgb(hsl_to_rgb(240.0, 1.0, 0.5), [0.0, 0.0, 1.0]);
    assert_rgb(hsl_to_rgb(360.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
    assert_rgb(hsl_to_rgb(60.0, 1.0, 0.5), [1.0, 1.0, 0.0]);
}

#[test]
fn hsl_greys_and_extremes() {
    assert_rgb(hsl_to_rgb(77.0, 0.0, 0.3), [0.3, 0.3, 0.3]);
    assert_rgb(hsl_to_rgb(200.0, 1.0, 1.0), [1.0, 1.0, 1.0]);
    assert_rgb(hsl_to_rgb(200.0, 1.0, 0.0), [0.0, 0.0, 0.0]);
}

#[test]
fn deviation_ramp_endpoints() {
    let colors = deviation_colors(&[0.0, 1.0, 2.0, 0.5], 1.0);
    assert_rgb(colors[0], [0.0, 0.0, 1.0]);
    assert_rgb(colors[1], [1.0, 0.0, 0.0]);
    assert_rgb(colors[2], [1.0, 0.0, 0.0]);
    // Halfway is hue 120: green.
    assert_rgb(colors[3], [0.0, 1.0, 0.0]);
}

#[test]
fn deviation_ramp_special_cases() {
    let flat = deviation_colors(&[0.0, 3.0], 0.0);
    assert_rgb(flat[0], [0.0, 0.0, 1.0]);
    assert_rgb(flat[1], [0.0, 0.0, 1.0]);

    let missing = deviation_colors(&[f64::INFINITY, f64::NAN], 1.0);
    assert_rgb(missing[0], [1.0, 0.0, 0.0]);
    assert_rgb(missing[1], [1.0, 0.0, 0.0]);
}

// ─── Sink Tests ───────────────────────────────────────────────

#[test]
fn headless_counts_frames() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let mut sink = HeadlessSink::new();
    sink.init(&mesh).unwrap();
    assert_eq!(sink.name(), "headless");

    let frame = DeviationFrame::from_mesh(0, &mesh, vec![0.0; mesh.vertex_count()], 1.0);
    sink.submit_frame(&frame).unwrap();
    sink.submit_frame(&frame).unwrap();
    assert_eq!(sink.frame_count(), 2);
    sink.finalize().unwrap();
}

#[test]
fn exporter_writes_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deviation.json");
    let mesh = quad_grid(1, 1, 1.0, 1.0);

    let mut exporter = DeviationExporter::new(path.to_str().unwrap());
    exporter.init(&mesh).unwrap();
    let distances = vec![0.0, 0.5, 1.0, f64::INFINITY];
    exporter
        .submit_frame(&DeviationFrame::from_mesh(7, &mesh, distances, 1.0))
        .unwrap();
    assert_eq!(exporter.frame_count(), 1);
    exporter.finalize().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["vertex_count"], 4);
    assert_eq!(doc["triangle_count"], 2);
    assert_eq!(doc["indices"].as_array().unwrap().len(), 6);

    let frame = &doc["frames"][0];
    assert_eq!(frame["step"], 7);
    assert_eq!(frame["positions"].as_array().unwrap().len(), 12);
    assert_eq!(frame["colors"].as_array().unwrap().len(), 12);
    assert!(frame["distances"][3].is_null());
    assert_eq!(frame["distances"][1], 0.5);
}

#[test]
fn exporter_rejects_short_distances() {
    let mesh = quad_grid(1, 1, 1.0, 1.0);
    let mut exporter = DeviationExporter::new("unused.json");
    exporter.init(&mesh).unwrap();
    let frame = DeviationFrame::from_mesh(0, &mesh, vec![0.0], 1.0);
    assert!(exporter.submit_frame(&frame).is_err());
    assert_eq!(exporter.frame_count(), 0);
}
