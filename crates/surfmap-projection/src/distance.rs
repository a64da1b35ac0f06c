//! Surface distance measurement.
//!
//! The directed distance from a source vertex set to a target surface is
//! the maximum over source vertices of the distance to their projection
//! on the target. The symmetric distance is the larger of both
//! directions, a discrete Hausdorff distance restricted to vertices.

use serde::{Deserialize, Serialize};
use surfmap_math::Vec3;
use surfmap_types::{SurfmapError, SurfmapResult};
use tracing::{info, warn};

use crate::config::ProjectionConfig;
use crate::resolver::PointProjector;
use crate::surface::SurfaceView;

/// Deviation of a vertex set from a target surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectedDistance {
    /// Largest per-vertex distance.
    pub max: f64,
    /// Mean per-vertex distance.
    pub mean: f64,
    /// Distance of each source vertex to the target, in source order.
    /// `INFINITY` where the projection failed.
    pub per_vertex: Vec<f64>,
}

impl DirectedDistance {
    fn empty() -> Self {
        Self {
            max: 0.0,
            mean: 0.0,
            per_vertex: Vec::new(),
        }
    }

    /// Number of vertices whose projection failed.
    pub fn unprojected_count(&self) -> usize {
        self.per_vertex.iter().filter(|d| d.is_infinite()).count()
    }
}

/// Both directed distances between two surfaces plus their maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDistance {
    pub source_to_target: DirectedDistance,
    pub target_to_source: DirectedDistance,
    /// `max(source_to_target.max, target_to_source.max)`.
    pub symmetric: f64,
}

/// Distance from every source position to `target`.
///
/// An empty source yields zero. A target without triangles is an error,
/// since no projection could succeed, as is an invalid `config`.
pub fn directed_distance(
    source: &[Vec3],
    target: SurfaceView<'_>,
    config: &ProjectionConfig,
) -> SurfmapResult<DirectedDistance> {
    config.validate()?;
    if target.topology().triangle_count() == 0 {
        return Err(SurfmapError::EmptyMesh(
            "target surface has no triangles".into(),
        ));
    }
    if source.is_empty() {
        return Ok(DirectedDistance::empty());
    }

    let projector = PointProjector::with_config(target, *config);
    let per_vertex: Vec<f64> = projector
        .project_points(source)
        .iter()
        .map(|p| if p.is_valid() { p.distance() } else { f64::INFINITY })
        .collect();

    let max = per_vertex.iter().copied().fold(0.0, f64::max);
    let mean = per_vertex.iter().sum::<f64>() / per_vertex.len() as f64;

    let result = DirectedDistance {
        max,
        mean,
        per_vertex,
    };
    let unprojected = result.unprojected_count();
    if unprojected > 0 {
        warn!(
            unprojected,
            vertices = source.len(),
            "some source vertices could not be projected"
        );
    }
    Ok(result)
}

/// Symmetric distance between surfaces `a` and `b`.
pub fn surface_distance(
    a: SurfaceView<'_>,
    b: SurfaceView<'_>,
    config: &ProjectionConfig,
) -> SurfmapResult<SurfaceDistance> {
    let a_vertices = &a.positions()[..a.topology().vertex_count()];
    let b_vertices = &b.positions()[..b.topology().vertex_count()];
    info!(
        source_triangles = a.topology().triangle_count(),
        target_triangles = b.topology().triangle_count(),
        parallel = config.parallel,
        "measuring surface distance"
    );

    let source_to_target = directed_distance(a_vertices, b, config)?;
    let target_to_source = directed_distance(b_vertices, a, config)?;
    let symmetric = source_to_target.max.max(target_to_source.max);

    info!(
        source_vertices = a_vertices.len(),
        target_vertices = b_vertices.len(),
        forward = source_to_target.max,
        backward = target_to_source.max,
        symmetric,
        "surface distance measured"
    );

    Ok(SurfaceDistance {
        source_to_target,
        target_to_source,
        symmetric,
    })
}
