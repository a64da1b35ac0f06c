//! Integration tests for surfmap-math.

use surfmap_math::{closest_on_segment, positions_from_soa, positions_to_interleaved, Vec3};

// ─── Segment Tests ────────────────────────────────────────────

#[test]
fn segment_interior_projection() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(2.0, 0.0, 0.0);
    let hit = closest_on_segment(Vec3::new(0.5, 3.0, 0.0), a, b).unwrap();
    assert!((hit.t - 0.25).abs() < 1e-12);
    assert!((hit.distance_sq - 9.0).abs() < 1e-12);
}

#[test]
fn segment_clamps_before_start() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(1.0, 0.0, 0.0);
    let hit = closest_on_segment(Vec3::new(-2.0, 0.0, 0.0), a, b).unwrap();
    assert_eq!(hit.t, 0.0);
    assert!((hit.distance_sq - 4.0).abs() < 1e-12);
}

#[test]
fn segment_clamps_past_end() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(1.0, 0.0, 0.0);
    let hit = closest_on_segment(Vec3::new(3.0, 1.0, 0.0), a, b).unwrap();
    assert_eq!(hit.t, 1.0);
    assert!((hit.distance_sq - 5.0).abs() < 1e-12);
}

#[test]
fn zero_length_segment_is_rejected() {
    let a = Vec3::new(1.0, 1.0, 1.0);
    assert!(closest_on_segment(Vec3::ZERO, a, a).is_none());
}

// ─── Buffer Conversion Tests ──────────────────────────────────

#[test]
fn soa_round_trip() {
    let positions = positions_from_soa(&[0.0, 1.0], &[2.0, 3.0], &[4.0, 5.0]);
    assert_eq!(positions, vec![Vec3::new(0.0, 2.0, 4.0), Vec3::new(1.0, 3.0, 5.0)]);
    assert_eq!(
        positions_to_interleaved(&positions),
        vec![0.0, 2.0, 4.0, 1.0, 3.0, 5.0]
    );
}
