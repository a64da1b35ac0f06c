//! # surfmap-projection
//!
//! Maps points in 3D space onto the nearest location of a triangulated
//! surface and expresses that location as barycentric coordinates within
//! one surface triangle.
//!
//! The pipeline runs leaves first:
//! 1. **Candidate search** ([`candidates`]): brute-force nearest vertex,
//!    edge and triangle-interior queries, all returning squared distances.
//! 2. **Barycentric solver** ([`barycentric`]): Cramer solve of the
//!    2×2 normal equations, optionally clamped into the triangle.
//! 3. **Projection resolver** ([`resolver`]): decides which triangle owns
//!    the projection, over the full mesh or a caller-supplied subset.
//! 4. **Surface distance** ([`distance`]): directed and symmetric
//!    Hausdorff-style deviation between two meshes.
//!
//! Around the core: [`binding`] re-applies stored projections to deformed
//! positions, and [`close_points`] finds point pairs under a distance
//! threshold.
//!
//! Every query is stateless and reads an immutable snapshot of positions
//! and [`Topology`](surfmap_mesh::Topology); failure is reported through
//! [`TriangleId::INVALID`](surfmap_types::TriangleId::INVALID).

pub mod barycentric;
pub mod binding;
pub mod candidates;
pub mod close_points;
pub mod config;
pub mod distance;
pub mod resolver;
pub mod surface;

pub use barycentric::{BaryMode, Barycentric};
pub use binding::{PointBinding, SurfaceBinding};
pub use close_points::find_close_points;
pub use config::ProjectionConfig;
pub use distance::{directed_distance, surface_distance, DirectedDistance, SurfaceDistance};
pub use resolver::{Feature, PointProjector, Projection};
pub use surface::{Surface, SurfaceView};
