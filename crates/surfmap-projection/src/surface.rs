//! Position + topology snapshots handed to the projection engine.

use surfmap_math::Vec3;
use surfmap_mesh::{Topology, TriangleMesh};
use surfmap_types::{SurfmapError, SurfmapResult};

/// Borrowed snapshot of a surface: positions plus connectivity.
///
/// Construction checks that every vertex the topology references has a
/// position, so queries never read past the position array.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceView<'a> {
    positions: &'a [Vec3],
    topology: &'a Topology,
}

impl<'a> SurfaceView<'a> {
    pub fn new(positions: &'a [Vec3], topology: &'a Topology) -> SurfmapResult<Self> {
        if positions.len() < topology.vertex_count() {
            return Err(SurfmapError::LengthMismatch {
                what: "surface positions",
                expected: topology.vertex_count(),
                actual: positions.len(),
            });
        }
        Ok(Self { positions, topology })
    }

    #[inline]
    pub fn positions(&self) -> &'a [Vec3] {
        self.positions
    }

    #[inline]
    pub fn topology(&self) -> &'a Topology {
        self.topology
    }
}

/// Owned surface built from a [`TriangleMesh`].
#[derive(Debug, Clone, Default)]
pub struct Surface {
    pub positions: Vec<Vec3>,
    pub topology: Topology,
}

impl Surface {
    /// Validates the mesh and precomputes its topology.
    pub fn from_mesh(mesh: &TriangleMesh) -> SurfmapResult<Self> {
        mesh.validate()?;
        Ok(Self {
            positions: mesh.positions(),
            topology: Topology::build(mesh),
        })
    }

    /// Replaces positions (e.g. a deformed configuration) keeping topology.
    pub fn set_positions(&mut self, positions: Vec<Vec3>) -> SurfmapResult<()> {
        if positions.len() != self.positions.len() {
            return Err(SurfmapError::LengthMismatch {
                what: "surface positions",
                expected: self.positions.len(),
                actual: positions.len(),
            });
        }
        self.positions = positions;
        Ok(())
    }

    pub fn view(&self) -> SurfaceView<'_> {
        SurfaceView {
            positions: &self.positions,
            topology: &self.topology,
        }
    }
}
