//! Closest-point queries on finite line segments.

use crate::Vec3;

/// Closest point on a segment `a → b` to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// Clamped segment parameter in `[0, 1]`; the point is `a + t (b - a)`.
    pub t: f64,
    /// Squared distance from the query point to the closest point.
    pub distance_sq: f64,
}

/// Projects `p` onto the segment `a → b`.
///
/// `t = clamp(dot(p - a, b - a) / |b - a|², 0, 1)`.
/// Returns `None` for a zero-length segment.
#[inline]
pub fn closest_on_segment(p: Vec3, a: Vec3, b: Vec3) -> Option<SegmentHit> {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= 0.0 {
        return None;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    Some(SegmentHit {
        t,
        distance_sq: p.distance_squared(closest),
    })
}
