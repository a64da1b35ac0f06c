//! Mesh topology queries.
//!
//! Builds adjacency data structures from the triangle index buffer,
//! enabling the neighbor queries the projection engine needs
//! (vertex → triangles, edge → triangles, triangle → edges).
//!
//! Everything is stored as plain index lists. Edge ids are assigned in
//! order of first appearance while scanning triangles, so the same index
//! buffer always yields the same edge numbering.

use std::collections::HashMap;

use surfmap_types::{EdgeId, TriangleId, VertexId};
use tracing::debug;

use crate::mesh::TriangleMesh;

/// Precomputed topology information for a triangle mesh.
///
/// Built once per connectivity version. Positions are not stored here:
/// the same topology can be queried against rest or deformed positions.
/// When connectivity changes, call [`Topology::rebuild`].
#[derive(Debug, Clone, Default)]
pub struct Topology {
    /// Triangle vertex triples, indexed by triangle id.
    pub triangles: Vec<[u32; 3]>,

    /// For each vertex, the list of triangles that contain it.
    pub vertex_triangles: Vec<Vec<u32>>,

    /// Unique edges as `[v_min, v_max]` pairs.
    pub edges: Vec<[u32; 2]>,

    /// For each edge, the adjacent triangles.
    /// Boundary edges have exactly 1, manifold interior edges 2.
    pub edge_triangles: Vec<Vec<u32>>,

    /// For each triangle, its edges in the order `(v0,v1)`, `(v1,v2)`, `(v2,v0)`.
    pub triangle_edges: Vec<[u32; 3]>,

    /// Canonical `(v_min, v_max)` → edge id.
    edge_lookup: HashMap<(u32, u32), u32>,
}

impl Topology {
    /// Build topology from a triangle mesh.
    pub fn build(mesh: &TriangleMesh) -> Self {
        let triangles: Vec<[u32; 3]> = mesh.triangles().collect();
        Self::from_triangles(mesh.vertex_count(), &triangles)
    }

    /// Build topology from raw index triples.
    ///
    /// The vertex table grows to cover any index beyond `vertex_count`,
    /// so adjacency queries never go out of bounds.
    pub fn from_triangles(vertex_count: usize, triangles: &[[u32; 3]]) -> Self {
        let max_index = triangles
            .iter()
            .flatten()
            .map(|&v| v as usize + 1)
            .max()
            .unwrap_or(0);
        let vertex_count = vertex_count.max(max_index);

        let mut vertex_triangles: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];
        let mut edges: Vec<[u32; 2]> = Vec::new();
        let mut edge_triangles: Vec<Vec<u32>> = Vec::new();
        let mut triangle_edges: Vec<[u32; 3]> = Vec::with_capacity(triangles.len());
        let mut edge_lookup: HashMap<(u32, u32), u32> = HashMap::new();

        for (t, &[a, b, c]) in triangles.iter().enumerate() {
            let t = t as u32;
            vertex_triangles[a as usize].push(t);
            vertex_triangles[b as usize].push(t);
            vertex_triangles[c as usize].push(t);

            let mut local = [0u32; 3];
            for (slot, (v0, v1)) in [(a, b), (b, c), (c, a)].into_iter().enumerate() {
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                let e = *edge_lookup.entry(key).or_insert_with(|| {
                    edges.push([key.0, key.1]);
                    edge_triangles.push(Vec::new());
                    (edges.len() - 1) as u32
                });
                edge_triangles[e as usize].push(t);
                local[slot] = e;
            }
            triangle_edges.push(local);
        }

        Self {
            triangles: triangles.to_vec(),
            vertex_triangles,
            edges,
            edge_triangles,
            triangle_edges,
            edge_lookup,
        }
    }

    /// Recomputes all adjacency after the mesh connectivity changed.
    ///
    /// Only needed when triangles are added, removed or re-indexed;
    /// moving vertices never invalidates topology.
    pub fn rebuild(&mut self, mesh: &TriangleMesh) {
        *self = Self::build(mesh);
        debug!(
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            triangles = self.triangle_count(),
            "topology rebuilt"
        );
    }

    /// Number of vertex slots covered by the adjacency tables.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_triangles.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    // Id-based accessors index directly and panic on out-of-range ids,
    // like slice indexing. Use the public fields with `.get()` for a checked lookup.

    /// Returns the vertex ids of triangle `t`.
    ///
    /// # Panics
    /// If `t >= triangle_count()`.
    #[inline]
    pub fn triangle(&self, t: TriangleId) -> [u32; 3] {
        self.triangles[t.index()]
    }

    /// Returns the canonical `[v_min, v_max]` vertex pair of edge `e`.
    ///
    /// # Panics
    /// If `e >= edge_count()`.
    #[inline]
    pub fn edge(&self, e: EdgeId) -> [u32; 2] {
        self.edges[e.index()]
    }

    /// Triangles incident to vertex `v` (empty for isolated vertices).
    ///
    /// # Panics
    /// If `v >= vertex_count()`.
    #[inline]
    pub fn triangles_around_vertex(&self, v: VertexId) -> &[u32] {
        &self.vertex_triangles[v.index()]
    }

    /// Triangles incident to edge `e`.
    ///
    /// # Panics
    /// If `e >= edge_count()`.
    #[inline]
    pub fn triangles_around_edge(&self, e: EdgeId) -> &[u32] {
        &self.edge_triangles[e.index()]
    }

    /// The three edges bounding triangle `t`.
    ///
    /// # Panics
    /// If `t >= triangle_count()`.
    #[inline]
    pub fn edges_in_triangle(&self, t: TriangleId) -> [u32; 3] {
        self.triangle_edges[t.index()]
    }

    /// Looks up the edge joining two vertices, in either order.
    pub fn edge_index(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        let key = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        self.edge_lookup.get(&key).copied().map(EdgeId)
    }

    /// Returns the number of boundary edges (edges with only 1 adjacent triangle).
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_triangles
            .iter()
            .filter(|tris| tris.len() == 1)
            .count()
    }

    /// Returns the number of edges shared by more than two triangles.
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_triangles
            .iter()
            .filter(|tris| tris.len() > 2)
            .count()
    }

    /// Returns true if the mesh is closed (no boundary edges).
    pub fn is_closed(&self) -> bool {
        self.boundary_edge_count() == 0
    }
}
