//! # surfmap-math
//!
//! Linear algebra primitives for the surfmap projection engine.
//!
//! Provides:
//! - Re-exports of `glam` double-precision types (`DVec3` as [`Vec3`])
//! - Closest-point queries on finite segments
//! - Interleaved/SoA conversions for position buffers

pub mod segment;

// Re-export glam types as the canonical math types for surfmap.
pub use glam::DVec3 as Vec3;

pub use segment::{closest_on_segment, SegmentHit};

/// Packs separate coordinate channels into a `Vec3` array.
///
/// Extra entries in longer channels are ignored.
pub fn positions_from_soa(xs: &[f64], ys: &[f64], zs: &[f64]) -> Vec<Vec3> {
    xs.iter()
        .zip(ys)
        .zip(zs)
        .map(|((&x, &y), &z)| Vec3::new(x, y, z))
        .collect()
}

/// Flattens positions to `[x0, y0, z0, x1, y1, z1, ...]`.
pub fn positions_to_interleaved(positions: &[Vec3]) -> Vec<f64> {
    let mut flat = Vec::with_capacity(positions.len() * 3);
    for p in positions {
        flat.extend_from_slice(&[p.x, p.y, p.z]);
    }
    flat
}
