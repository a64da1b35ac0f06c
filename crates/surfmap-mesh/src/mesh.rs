//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! Connectivity lives in the flat `indices` buffer. Positions can be
//! swapped for a deformed configuration without touching topology.

use serde::{Deserialize, Serialize};
use surfmap_math::Vec3;
use surfmap_types::{SurfmapError, SurfmapResult};

/// A triangle mesh stored in Structure-of-Arrays layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// X coordinates of all vertices.
    pub pos_x: Vec<f64>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f64>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f64>,

    /// Triangle indices: each triangle is [v0, v1, v2].
    /// Stored flat: `[t0v0, t0v1, t0v2, t1v0, t1v1, t1v2, ...]`
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Collects all positions into an AoS buffer, the form the
    /// projection engine consumes.
    pub fn positions(&self) -> Vec<Vec3> {
        surfmap_math::positions_from_soa(&self.pos_x, &self.pos_y, &self.pos_z)
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Iterates over all triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }

    /// Sets the position of vertex `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        self.pos_x[i] = p.x;
        self.pos_y[i] = p.y;
        self.pos_z[i] = p.z;
    }

    /// Pushes a vertex and returns its index.
    pub fn push_vertex(&mut self, p: Vec3) -> u32 {
        let idx = self.pos_x.len() as u32;
        self.pos_x.push(p.x);
        self.pos_y.push(p.y);
        self.pos_z.push(p.z);
        idx
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    /// Builds a mesh from AoS positions and index triples, then validates it.
    pub fn from_triangles(positions: &[Vec3], triangles: &[[u32; 3]]) -> SurfmapResult<Self> {
        let mut mesh = Self::with_capacity(positions.len(), triangles.len());
        for &p in positions {
            mesh.push_vertex(p);
        }
        mesh.indices = triangles.iter().flatten().copied().collect();
        mesh.validate()?;
        Ok(mesh)
    }

    /// Constructs a mesh from interleaved AoS position data
    /// `[x0, y0, z0, x1, y1, z1, ...]`.
    pub fn from_interleaved(positions: &[f64], indices: &[u32]) -> SurfmapResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(SurfmapError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        let mut mesh = Self::with_capacity(n, indices.len() / 3);
        for chunk in positions.chunks_exact(3) {
            mesh.pos_x.push(chunk[0]);
            mesh.pos_y.push(chunk[1]);
            mesh.pos_z.push(chunk[2]);
        }
        mesh.indices = indices.to_vec();

        mesh.validate()?;
        Ok(mesh)
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All SoA arrays have the same length
    /// - Coordinates are finite
    /// - Triangle indices are within bounds
    /// - No triangle repeats a vertex index
    ///
    /// Geometrically degenerate (zero-area) triangles with distinct indices
    /// are allowed; the projection engine skips them.
    pub fn validate(&self) -> SurfmapResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(SurfmapError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }

        if let Some(i) = (0..n).find(|&i| !self.position(i).is_finite()) {
            return Err(SurfmapError::InvalidMesh(format!(
                "Vertex {} has a non-finite coordinate",
                i
            )));
        }

        if self.indices.len() % 3 != 0 {
            return Err(SurfmapError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(SurfmapError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for (t, [a, b, c]) in self.triangles().enumerate() {
            if a == b || b == c || a == c {
                return Err(SurfmapError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        Ok(())
    }
}
