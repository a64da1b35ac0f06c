//! # surfmap-mesh
//!
//! Triangle mesh representation with Structure-of-Arrays (SoA) layout
//! and the read-only topology accessor the projection engine queries.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`]: Positions and triangle indices in contiguous SoA buffers.
//! - [`Topology`]: Adjacency queries (vertex → triangles, edge → triangles,
//!   triangle → edges), precomputed once per connectivity version.
//! - Procedural generators for test and benchmark meshes (quad grids, UV spheres).

pub mod generators;
pub mod mesh;
pub mod topology;

pub use mesh::TriangleMesh;
pub use topology::Topology;
