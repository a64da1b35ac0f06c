//! Projection resolver.
//!
//! Runs the three candidate scans over a triangle set and decides which
//! triangle owns the projection of a query point:
//!
//! - a triangle-interior hit wins when its distance is not larger than the
//!   best edge and vertex distances;
//! - otherwise the nearest edge wins over the nearest vertex on ties, and
//!   the owner is the first incident triangle in the candidate set;
//! - otherwise the nearest vertex's first incident candidate triangle.
//!
//! Degenerate triangles are removed before the scans, and edges/vertices
//! are induced only from the remaining triangles, so every winning feature
//! has an owner. Candidates are scanned in ascending id order; the lowest
//! id wins ties inside each scan, and a restricted projection over the
//! full triangle set reproduces the full-mesh result exactly.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use surfmap_math::Vec3;
use surfmap_types::{EdgeId, TriangleId, VertexId};
use tracing::{debug, trace};

use crate::barycentric::{self, BaryMode, Barycentric};
use crate::candidates::{self, corners};
use crate::config::ProjectionConfig;
use crate::surface::SurfaceView;

/// Mesh feature that was closest to the query point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feature {
    Vertex(VertexId),
    Edge(EdgeId),
    Triangle(TriangleId),
    /// No usable feature; only on invalid projections.
    None,
}

/// Result of projecting one point onto a surface.
///
/// When [`triangle`](Self::triangle) is [`TriangleId::INVALID`] the other
/// fields are unspecified and must not be read.
///
/// [`bary`](Self::bary) follows the configured [`BaryMode`]: in
/// unconstrained mode an edge or vertex winner leaves it holding the
/// extrapolated in-plane weights, which may be negative. The point the
/// distance is measured to is always given by
/// [`surface_bary`](Self::surface_bary), and [`point`](Self::point)
/// reconstructs from those, so `point(view).distance(p) == distance()`
/// in either mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Weights on the owning triangle's vertices, in slot order.
    pub bary: Barycentric,
    /// Weights of the closest surface point on the owning triangle, always
    /// within `[0, 1]`.
    pub surface_bary: Barycentric,
    /// Owning triangle, or the invalid sentinel.
    pub triangle: TriangleId,
    /// Squared distance from the query point to the winning feature.
    pub distance_sq: f64,
    /// Which feature kind won the resolution.
    pub feature: Feature,
}

impl Projection {
    /// The failure result.
    pub const INVALID: Projection = Projection {
        bary: [0.0; 3],
        surface_bary: [0.0; 3],
        triangle: TriangleId::INVALID,
        distance_sq: f64::INFINITY,
        feature: Feature::None,
    };

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.triangle.is_valid()
    }

    /// Distance to the surface (`INFINITY` when invalid).
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance_sq.sqrt()
    }

    /// Reconstructs the closest surface point from the surface's positions.
    pub fn point(&self, surface: SurfaceView<'_>) -> Option<Vec3> {
        if !self.is_valid() {
            return None;
        }
        let tri = *surface.topology().triangles.get(self.triangle.index())?;
        let [a, b, c] = corners(surface.positions(), tri)?;
        Some(barycentric::interpolate(&self.surface_bary, a, b, c))
    }
}

/// Sorted, deduplicated feature ids induced from usable triangles.
#[derive(Debug, Clone, Default)]
struct CandidateSet {
    triangles: Vec<u32>,
    edges: Vec<u32>,
    vertices: Vec<u32>,
}

impl CandidateSet {
    #[inline]
    fn contains_triangle(&self, t: u32) -> bool {
        self.triangles.binary_search(&t).is_ok()
    }
}

/// Stateless projector over one surface snapshot.
///
/// Holds only borrows and a copy of the config, so it is `Send + Sync`
/// and can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct PointProjector<'a> {
    surface: SurfaceView<'a>,
    config: ProjectionConfig,
}

impl<'a> PointProjector<'a> {
    /// Projector with the default (constrained) configuration.
    pub fn new(surface: SurfaceView<'a>) -> Self {
        Self::with_config(surface, ProjectionConfig::default())
    }

    pub fn with_config(surface: SurfaceView<'a>, config: ProjectionConfig) -> Self {
        Self { surface, config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Projects `point` onto the whole mesh.
    pub fn project(&self, point: Vec3) -> Projection {
        let set = self.full_set();
        self.resolve(point, &set)
    }

    /// Projects `point` onto the given triangle subset and the edges and
    /// vertices it induces. Out-of-range ids and duplicates are ignored.
    pub fn project_restricted(&self, point: Vec3, triangles: &[TriangleId]) -> Projection {
        let set = self.restricted_set(triangles);
        self.resolve(point, &set)
    }

    /// Projects every point onto the whole mesh, in input order.
    pub fn project_points(&self, points: &[Vec3]) -> Vec<Projection> {
        let set = self.full_set();
        self.resolve_batch(points, &set)
    }

    /// Batch form of [`project_restricted`](Self::project_restricted).
    pub fn project_points_restricted(&self, points: &[Vec3], triangles: &[TriangleId]) -> Vec<Projection> {
        let set = self.restricted_set(triangles);
        self.resolve_batch(points, &set)
    }

    fn resolve_batch(&self, points: &[Vec3], set: &CandidateSet) -> Vec<Projection> {
        let results: Vec<Projection> = if self.config.use_parallel(points.len()) {
            points.par_iter().map(|&p| self.resolve(p, set)).collect()
        } else {
            points.iter().map(|&p| self.resolve(p, set)).collect()
        };

        let invalid = results.iter().filter(|p| !p.is_valid()).count();
        if invalid > 0 {
            debug!(
                points = points.len(),
                invalid,
                candidate_triangles = set.triangles.len(),
                "batch projection left points unprojected"
            );
        }
        results
    }

    fn full_set(&self) -> CandidateSet {
        let count = self.surface.topology().triangle_count() as u32;
        self.build_set((0..count).collect())
    }

    fn restricted_set(&self, triangles: &[TriangleId]) -> CandidateSet {
        let count = self.surface.topology().triangle_count();
        let mut ids: Vec<u32> = triangles
            .iter()
            .filter(|t| t.index() < count)
            .map(|t| t.0)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        self.build_set(ids)
    }

    /// `triangles` must be sorted and unique.
    fn build_set(&self, mut triangles: Vec<u32>) -> CandidateSet {
        let topology = self.surface.topology();
        let positions = self.surface.positions();
        let eps = self.config.degenerate_epsilon;

        triangles.retain(|&t| {
            corners(positions, topology.triangles[t as usize])
                .is_some_and(|[a, b, c]| !barycentric::is_degenerate(a, b, c, eps))
        });

        let mut edges: Vec<u32> = triangles
            .iter()
            .flat_map(|&t| topology.triangle_edges[t as usize])
            .collect();
        edges.sort_unstable();
        edges.dedup();

        let mut vertices: Vec<u32> = triangles
            .iter()
            .flat_map(|&t| topology.triangles[t as usize])
            .collect();
        vertices.sort_unstable();
        vertices.dedup();

        CandidateSet {
            triangles,
            edges,
            vertices,
        }
    }

    fn resolve(&self, point: Vec3, set: &CandidateSet) -> Projection {
        if set.triangles.is_empty() {
            trace!("no usable triangles, projection invalid");
            return Projection::INVALID;
        }

        let topology = self.surface.topology();
        let positions = self.surface.positions();

        let tri_hit = candidates::nearest_triangle(
            point,
            positions,
            set.triangles
                .iter()
                .map(|&t| (TriangleId(t), topology.triangles[t as usize])),
            self.config.degenerate_epsilon,
        );
        let edge_hit = candidates::nearest_edge(
            point,
            positions,
            set.edges
                .iter()
                .map(|&e| (EdgeId(e), topology.edges[e as usize])),
        );
        let vertex_hit =
            candidates::nearest_vertex(point, positions, set.vertices.iter().map(|&v| VertexId(v)));

        let edge_d = edge_hit.map_or(f64::INFINITY, |h| h.distance_sq);
        let vertex_d = vertex_hit.map_or(f64::INFINITY, |h| h.distance_sq);

        if let Some(hit) = tri_hit {
            if hit.distance_sq <= edge_d && hit.distance_sq <= vertex_d {
                return Projection {
                    bary: hit.bary,
                    surface_bary: hit.bary,
                    triangle: hit.id,
                    distance_sq: hit.distance_sq,
                    feature: Feature::Triangle(hit.id),
                };
            }
        }

        if let Some(hit) = edge_hit {
            if hit.distance_sq <= vertex_d {
                let owner = first_candidate(topology.triangles_around_edge(hit.id), set);
                return self.solve_in(point, owner, hit.distance_sq, Feature::Edge(hit.id));
            }
        }

        if let Some(hit) = vertex_hit {
            let owner = first_candidate(topology.triangles_around_vertex(hit.id), set);
            return self.solve_in(point, owner, hit.distance_sq, Feature::Vertex(hit.id));
        }

        Projection::INVALID
    }

    fn solve_in(&self, point: Vec3, owner: Option<u32>, distance_sq: f64, feature: Feature) -> Projection {
        let Some(t) = owner else {
            return Projection::INVALID;
        };
        let tri = self.surface.topology().triangles[t as usize];
        let Some([a, b, c]) = corners(self.surface.positions(), tri) else {
            return Projection::INVALID;
        };
        let eps = self.config.degenerate_epsilon;
        let Some(raw) = barycentric::solve_unconstrained(point, a, b, c, eps) else {
            return Projection::INVALID;
        };
        let Some(surface) = barycentric::solve(point, a, b, c, BaryMode::Constrained, eps) else {
            return Projection::INVALID;
        };
        let bary = match self.config.mode() {
            BaryMode::Unconstrained => raw,
            BaryMode::Constrained => surface,
        };
        Projection {
            bary,
            surface_bary: surface,
            triangle: TriangleId(t),
            distance_sq,
            feature,
        }
    }
}

/// First adjacency entry that is part of the candidate set.
#[inline]
fn first_candidate(adjacent: &[u32], set: &CandidateSet) -> Option<u32> {
    adjacent.iter().copied().find(|&t| set.contains_triangle(t))
}
