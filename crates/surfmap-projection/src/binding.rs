//! Surface binding.
//!
//! Stores the projection of a point set onto a surface so the points can
//! follow the surface when its vertices move: each point is rebuilt as
//! `w0·x_a + w1·x_b + w2·x_c` from the current positions of its owning
//! triangle's vertices.

use serde::{Deserialize, Serialize};
use surfmap_math::Vec3;
use surfmap_types::{SurfmapError, SurfmapResult, TriangleId};
use tracing::info;

use crate::barycentric::{self, Barycentric};
use crate::config::ProjectionConfig;
use crate::resolver::{PointProjector, Projection};
use crate::surface::SurfaceView;

/// Attachment of one point to one surface triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointBinding {
    pub triangle: TriangleId,
    /// Vertex ids of `triangle`, captured at bind time.
    pub vertices: [u32; 3],
    pub bary: Barycentric,
}

impl PointBinding {
    #[inline]
    fn evaluate(&self, values: &[Vec3]) -> Vec3 {
        let [a, b, c] = self.vertices.map(|v| values[v as usize]);
        barycentric::interpolate(&self.bary, a, b, c)
    }
}

/// Bindings for a whole point set against one surface topology.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBinding {
    bindings: Vec<PointBinding>,
    /// Vertex count of the surface the points were bound to.
    vertex_count: usize,
}

impl SurfaceBinding {
    /// Projects every point onto the full surface.
    pub fn bind(points: &[Vec3], surface: SurfaceView<'_>, config: &ProjectionConfig) -> SurfmapResult<Self> {
        config.validate()?;
        let projector = PointProjector::with_config(surface, *config);
        Self::from_projections(projector.project_points(points), surface)
    }

    /// Projects every point onto the given triangle subset.
    pub fn bind_restricted(
        points: &[Vec3],
        surface: SurfaceView<'_>,
        triangles: &[TriangleId],
        config: &ProjectionConfig,
    ) -> SurfmapResult<Self> {
        config.validate()?;
        let projector = PointProjector::with_config(surface, *config);
        Self::from_projections(projector.project_points_restricted(points, triangles), surface)
    }

    fn from_projections(
        projections: Vec<Projection>,
        surface: SurfaceView<'_>,
    ) -> SurfmapResult<Self> {
        let topology = surface.topology();
        let bindings = projections
            .iter()
            .enumerate()
            .map(|(index, p)| {
                if !p.is_valid() {
                    return Err(SurfmapError::UnboundPoint { index });
                }
                Ok(PointBinding {
                    triangle: p.triangle,
                    vertices: topology.triangle(p.triangle),
                    bary: p.bary,
                })
            })
            .collect::<SurfmapResult<Vec<_>>>()?;

        info!(
            points = bindings.len(),
            surface_vertices = topology.vertex_count(),
            surface_triangles = topology.triangle_count(),
            "surface binding created"
        );

        Ok(Self {
            bindings,
            vertex_count: topology.vertex_count(),
        })
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn bindings(&self) -> &[PointBinding] {
        &self.bindings
    }

    /// Point positions rebuilt from new surface vertex positions.
    pub fn apply(&self, positions: &[Vec3]) -> SurfmapResult<Vec<Vec3>> {
        self.check_len("surface positions", positions.len())?;
        Ok(self.bindings.iter().map(|b| b.evaluate(positions)).collect())
    }

    /// Per-point displacements interpolated from per-vertex displacements.
    pub fn apply_displacements(&self, displacements: &[Vec3]) -> SurfmapResult<Vec<Vec3>> {
        self.check_len("vertex displacements", displacements.len())?;
        Ok(self.bindings.iter().map(|b| b.evaluate(displacements)).collect())
    }

    fn check_len(&self, what: &'static str, actual: usize) -> SurfmapResult<()> {
        if actual != self.vertex_count {
            return Err(SurfmapError::LengthMismatch {
                what,
                expected: self.vertex_count,
                actual,
            });
        }
        Ok(())
    }
}
