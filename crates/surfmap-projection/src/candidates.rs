//! Brute-force nearest-feature search.
//!
//! Three independent scans over a point set and a connectivity subset:
//! nearest vertex, nearest edge (finite segment) and nearest triangle
//! interior. Each returns the winning id with its **squared** distance.
//!
//! Ties keep the first candidate encountered, so with ascending input
//! order the lowest id wins. Features whose vertices have no position
//! are skipped rather than indexed out of bounds.

use surfmap_math::{closest_on_segment, Vec3};
use surfmap_types::{EdgeId, TriangleId, VertexId};

use crate::barycentric::{self, Barycentric};

/// Winner of a vertex or edge scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<I> {
    /// Id of the closest feature.
    pub id: I,
    /// Squared distance from the query point to the feature.
    pub distance_sq: f64,
}

/// Winner of a triangle-interior scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleCandidate {
    /// Id of the closest triangle whose plane projection lies inside it.
    pub id: TriangleId,
    /// Squared perpendicular distance to the triangle's plane.
    pub distance_sq: f64,
    /// Interior barycentric coordinates of the foot point.
    pub bary: Barycentric,
}

/// Closest vertex of `vertices` to `point`.
pub fn nearest_vertex<I>(point: Vec3, positions: &[Vec3], vertices: I) -> Option<Nearest<VertexId>>
where
    I: IntoIterator<Item = VertexId>,
{
    let mut best: Option<Nearest<VertexId>> = None;
    for v in vertices {
        let Some(&x) = positions.get(v.index()) else {
            continue;
        };
        let distance_sq = point.distance_squared(x);
        if best.map_or(true, |b| distance_sq < b.distance_sq) {
            best = Some(Nearest { id: v, distance_sq });
        }
    }
    best
}

/// Closest edge of `edges` to `point`, measured to the finite segment.
///
/// Zero-length edges are skipped.
pub fn nearest_edge<I>(point: Vec3, positions: &[Vec3], edges: I) -> Option<Nearest<EdgeId>>
where
    I: IntoIterator<Item = (EdgeId, [u32; 2])>,
{
    let mut best: Option<Nearest<EdgeId>> = None;
    for (e, [a, b]) in edges {
        let (Some(&pa), Some(&pb)) = (positions.get(a as usize), positions.get(b as usize)) else {
            continue;
        };
        let Some(hit) = closest_on_segment(point, pa, pb) else {
            continue;
        };
        if best.map_or(true, |n| hit.distance_sq < n.distance_sq) {
            best = Some(Nearest {
                id: e,
                distance_sq: hit.distance_sq,
            });
        }
    }
    best
}

/// Closest triangle whose plane projection of `point` falls inside it.
///
/// Triangles whose unconstrained solve leaves `[0, 1]` are skipped (their
/// closest point lies on an edge or vertex, covered by the other scans),
/// as are degenerate triangles.
pub fn nearest_triangle<I>(
    point: Vec3,
    positions: &[Vec3],
    triangles: I,
    epsilon: f64,
) -> Option<TriangleCandidate>
where
    I: IntoIterator<Item = (TriangleId, [u32; 3])>,
{
    let mut best: Option<TriangleCandidate> = None;
    for (t, tri) in triangles {
        let Some([a, b, c]) = corners(positions, tri) else {
            continue;
        };
        let Some(bary) = barycentric::solve_unconstrained(point, a, b, c, epsilon) else {
            continue;
        };
        if !barycentric::is_inside(&bary) {
            continue;
        }
        let foot = barycentric::interpolate(&bary, a, b, c);
        let distance_sq = point.distance_squared(foot);
        if best.map_or(true, |n| distance_sq < n.distance_sq) {
            best = Some(TriangleCandidate {
                id: t,
                distance_sq,
                bary,
            });
        }
    }
    best
}

/// Positions of a triangle's three vertices, if all exist.
#[inline]
pub(crate) fn corners(positions: &[Vec3], [a, b, c]: [u32; 3]) -> Option<[Vec3; 3]> {
    Some([
        *positions.get(a as usize)?,
        *positions.get(b as usize)?,
        *positions.get(c as usize)?,
    ])
}
