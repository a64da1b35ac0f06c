//! Measurement input/output contract types.
//!
//! These types define the I/O boundary of the projection engine. They are
//! serializable for file transport and CLI use. JSON has no infinity, so
//! distances of unprojected vertices are written as `null`.

use serde::{Deserialize, Serialize};
use surfmap_mesh::TriangleMesh;
use surfmap_projection::{Projection, ProjectionConfig, SurfaceDistance};

/// Input of a surface distance measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// Mesh whose deviation is measured.
    pub source: TriangleMesh,
    /// Reference mesh.
    pub target: TriangleMesh,
    /// Projection parameters; defaults when omitted.
    #[serde(default)]
    pub config: ProjectionConfig,
}

/// Input of a point projection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Surface to project onto.
    pub mesh: TriangleMesh,
    /// Query points.
    pub points: Vec<[f64; 3]>,
    /// Optional triangle subset; the whole mesh when omitted.
    #[serde(default)]
    pub triangles: Option<Vec<u32>>,
    #[serde(default)]
    pub config: ProjectionConfig,
}

/// Result of a surface distance measurement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurementReport {
    pub source_vertices: usize,
    pub source_triangles: usize,
    pub target_vertices: usize,
    pub target_triangles: usize,
    /// Max distance from source vertices to the target surface.
    pub forward_max: Option<f64>,
    pub forward_mean: Option<f64>,
    /// Max distance from target vertices to the source surface.
    pub backward_max: Option<f64>,
    pub backward_mean: Option<f64>,
    /// Larger of both directions.
    pub symmetric: Option<f64>,
    /// Per source vertex distance to the target.
    pub source_deviation: Vec<Option<f64>>,
    /// Per target vertex distance to the source.
    pub target_deviation: Vec<Option<f64>>,
    /// Measurement wall-clock time (seconds).
    pub wall_time_seconds: f64,
}

impl MeasurementReport {
    /// Builds a report from a measured distance.
    pub fn from_distance(
        input: &MeasurementInput,
        distance: &SurfaceDistance,
        wall_time_seconds: f64,
    ) -> Self {
        Self {
            source_vertices: input.source.vertex_count(),
            source_triangles: input.source.triangle_count(),
            target_vertices: input.target.vertex_count(),
            target_triangles: input.target.triangle_count(),
            forward_max: finite(distance.source_to_target.max),
            forward_mean: finite(distance.source_to_target.mean),
            backward_max: finite(distance.target_to_source.max),
            backward_mean: finite(distance.target_to_source.mean),
            symmetric: finite(distance.symmetric),
            source_deviation: distance.source_to_target.per_vertex.iter().copied().map(finite).collect(),
            target_deviation: distance.target_to_source.per_vertex.iter().copied().map(finite).collect(),
            wall_time_seconds,
        }
    }
}

/// Result of a point projection run, one entry per query point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub projections: Vec<ProjectedPoint>,
    /// Number of points that could not be projected.
    pub invalid_count: usize,
}

/// One projected point. `triangle` is `None` when the projection failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub triangle: Option<u32>,
    /// Weights in the configured mode; may be negative when unconstrained.
    pub bary: [f64; 3],
    pub distance: Option<f64>,
    /// Closest point on the surface, `distance` away from the query.
    pub point: Option<[f64; 3]>,
}

impl ProjectedPoint {
    pub fn new(projection: &Projection, point: Option<[f64; 3]>) -> Self {
        if !projection.is_valid() {
            return Self {
                triangle: None,
                bary: [0.0; 3],
                distance: None,
                point: None,
            };
        }
        Self {
            triangle: Some(projection.triangle.0),
            bary: projection.bary,
            distance: Some(projection.distance()),
            point,
        }
    }
}

#[inline]
fn finite(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}
