//! Barycentric coordinate solver.
//!
//! For a triangle `(a, b, c)` and point `p`, with `e1 = b - a`,
//! `e2 = c - a` and `d = p - a`, solves the normal equations of the
//! projection of `d` onto the basis `{e1, e2}`:
//!
//! ```text
//! [e1·e1  e1·e2] [u]   [d·e1]
//! [e1·e2  e2·e2] [v] = [d·e2]
//! ```
//!
//! by Cramer's rule on `Δ = (e1·e1)(e2·e2) - (e1·e2)²`, giving
//! `(w0, w1, w2) = (1 - u - v, u, v)`.

use serde::{Deserialize, Serialize};
use surfmap_math::{closest_on_segment, Vec3};

/// Barycentric weights `(w0, w1, w2)` on a triangle's vertices, in slot order.
pub type Barycentric = [f64; 3];

/// Whether a solve is clamped into the closed triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BaryMode {
    /// Raw planar projection; weights may leave `[0, 1]`.
    Unconstrained,
    /// Weights clamped to the closest point of the closed triangle.
    #[default]
    Constrained,
}

/// Returns the normal-equation determinant and diagonal product, or `None`
/// when the triangle is degenerate under the relative threshold `epsilon`.
/// Negative or NaN thresholds act as zero, so a zero-area triangle is
/// always degenerate.
#[inline]
fn determinant(e1: Vec3, e2: Vec3, epsilon: f64) -> Option<(f64, f64, f64, f64)> {
    let d00 = e1.dot(e1);
    let d01 = e1.dot(e2);
    let d11 = e2.dot(e2);
    let scale = d00 * d11;
    let det = scale - d01 * d01;
    let epsilon = epsilon.max(0.0);
    // Δ / ((e1·e1)(e2·e2)) is sin² of the corner angle at `a`.
    if !det.is_finite() || scale <= 0.0 || det.abs() <= epsilon * scale {
        return None;
    }
    Some((d00, d01, d11, det))
}

/// True if the triangle has (near-)zero area and cannot support a solve.
pub fn is_degenerate(a: Vec3, b: Vec3, c: Vec3, epsilon: f64) -> bool {
    determinant(b - a, c - a, epsilon).is_none()
}

/// Unclamped barycentric coordinates of `p` in the plane of `(a, b, c)`.
///
/// Returns `None` for a degenerate triangle.
pub fn solve_unconstrained(p: Vec3, a: Vec3, b: Vec3, c: Vec3, epsilon: f64) -> Option<Barycentric> {
    let e1 = b - a;
    let e2 = c - a;
    let (d00, d01, d11, det) = determinant(e1, e2, epsilon)?;

    let d = p - a;
    let d20 = d.dot(e1);
    let d21 = d.dot(e2);

    let inv_det = 1.0 / det;
    let u = (d11 * d20 - d01 * d21) * inv_det;
    let v = (d00 * d21 - d01 * d20) * inv_det;
    Some([1.0 - u - v, u, v])
}

/// Barycentric coordinates of `p` with respect to `(a, b, c)`.
///
/// In [`BaryMode::Constrained`] an exterior solution is replaced by the
/// coordinates of the closest boundary point, found by projecting `p` onto
/// the edges `ab`, `bc`, `ca` in that order (first edge wins ties).
/// Returns `None` for a degenerate triangle.
pub fn solve(p: Vec3, a: Vec3, b: Vec3, c: Vec3, mode: BaryMode, epsilon: f64) -> Option<Barycentric> {
    let raw = solve_unconstrained(p, a, b, c, epsilon)?;
    match mode {
        BaryMode::Unconstrained => Some(raw),
        BaryMode::Constrained if is_inside(&raw) => Some(raw),
        BaryMode::Constrained => clamp_to_boundary(p, [a, b, c]),
    }
}

/// True if every weight lies in the closed interval `[0, 1]`.
#[inline]
pub fn is_inside(w: &Barycentric) -> bool {
    w.iter().all(|wi| (0.0..=1.0).contains(wi))
}

/// Reconstructs the point `w0 a + w1 b + w2 c`.
#[inline]
pub fn interpolate(w: &Barycentric, a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    a * w[0] + b * w[1] + c * w[2]
}

fn clamp_to_boundary(p: Vec3, corners: [Vec3; 3]) -> Option<Barycentric> {
    let mut best: Option<(f64, Barycentric)> = None;
    for (i, j) in [(0, 1), (1, 2), (2, 0)] {
        let Some(hit) = closest_on_segment(p, corners[i], corners[j]) else {
            continue;
        };
        if best.map_or(true, |(d, _)| hit.distance_sq < d) {
            let mut w = [0.0; 3];
            w[i] = 1.0 - hit.t;
            w[j] = hit.t;
            best = Some((hit.distance_sq, w));
        }
    }
    best.map(|(_, w)| w)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn right_triangle() -> (Vec3, Vec3, Vec3) {
        (Vec3::ZERO, Vec3::X, Vec3::Y)
    }

    #[test]
    fn corners_map_to_unit_weights() {
        let (a, b, c) = right_triangle();
        assert_eq!(solve_unconstrained(a, a, b, c, EPS).unwrap(), [1.0, 0.0, 0.0]);
        assert_eq!(solve_unconstrained(b, a, b, c, EPS).unwrap(), [0.0, 1.0, 0.0]);
        assert_eq!(solve_unconstrained(c, a, b, c, EPS).unwrap(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn off_plane_point_drops_normal_component() {
        let (a, b, c) = right_triangle();
        let w = solve_unconstrained(Vec3::new(0.25, 0.25, 7.0), a, b, c, EPS).unwrap();
        assert!((w[0] - 0.5).abs() < 1e-12);
        assert!((w[1] - 0.25).abs() < 1e-12);
        assert!((w[2] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn clamp_picks_nearest_edge() {
        let (a, b, c) = right_triangle();
        // Below edge ab.
        let w = solve(Vec3::new(0.3, -1.0, 0.0), a, b, c, BaryMode::Constrained, EPS).unwrap();
        assert!((w[0] - 0.7).abs() < 1e-12);
        assert!((w[1] - 0.3).abs() < 1e-12);
        assert_eq!(w[2], 0.0);
    }

    #[test]
    fn clamp_beyond_corner_snaps_to_vertex() {
        let (a, b, c) = right_triangle();
        let w = solve(Vec3::new(3.0, -1.0, 0.0), a, b, c, BaryMode::Constrained, EPS).unwrap();
        assert!((w[1] - 1.0).abs() < 1e-12);
        assert!(w[0].abs() < 1e-12 && w[2].abs() < 1e-12);
    }

    #[test]
    fn collinear_triangle_is_degenerate() {
        let a = Vec3::ZERO;
        let b = Vec3::X;
        let c = Vec3::new(2.0, 0.0, 0.0);
        assert!(is_degenerate(a, b, c, EPS));
        assert!(solve(Vec3::Y, a, b, c, BaryMode::Constrained, EPS).is_none());
    }

    #[test]
    fn negative_threshold_still_rejects_collinear() {
        let a = Vec3::ZERO;
        let b = Vec3::X;
        let c = Vec3::new(2.0, 0.0, 0.0);
        assert!(is_degenerate(a, b, c, -1.0));
        assert!(is_degenerate(a, b, c, f64::NAN));
        assert!(solve(Vec3::Y, a, b, c, BaryMode::Constrained, -1.0).is_none());
    }

    #[test]
    fn degeneracy_is_scale_invariant() {
        let (a, b, c) = right_triangle();
        let s = 1e-6;
        assert!(!is_degenerate(a * s, b * s, c * s, EPS));
        assert!(!is_degenerate(a * 1e6, b * 1e6, c * 1e6, EPS));
    }
}
