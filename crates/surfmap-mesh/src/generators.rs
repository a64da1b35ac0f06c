//! Procedural mesh generators for benchmarks and testing.
//!
//! These generators produce deterministic, resolution-configurable meshes
//! with consistent winding order.

use crate::mesh::TriangleMesh;

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0.
///
/// # Arguments
/// - `cols`: Number of quads along X (vertex count = cols + 1).
/// - `rows`: Number of quads along Y (vertex count = rows + 1).
/// - `width`: Total width.
/// - `height`: Total height.
///
/// # Example
/// ```
/// use surfmap_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f64, height: f64) -> TriangleMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;

    let mut mesh = TriangleMesh::with_capacity(verts_x * verts_y, cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f64 / cols as f64;
            let v = j as f64 / rows as f64;

            mesh.pos_x.push(-half_w + u * width);
            mesh.pos_y.push(half_h - v * height); // Top to bottom
            mesh.pos_z.push(0.0);
        }
    }

    // Two triangles per quad
    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            mesh.indices.extend_from_slice(&[top_left, bot_left, top_right]);
            mesh.indices.extend_from_slice(&[top_right, bot_left, bot_right]);
        }
    }

    mesh
}

/// Generates a UV sphere centered at the origin.
///
/// # Arguments
/// - `radius`: Sphere radius.
/// - `stacks`: Number of horizontal slices (latitude divisions).
/// - `slices`: Number of vertical slices (longitude divisions).
///
/// Pole caps use duplicated seam/pole vertices, so the result is not closed
/// topologically, but every triangle has non-zero area.
pub fn uv_sphere(radius: f64, stacks: usize, slices: usize) -> TriangleMesh {
    let vertex_count = (stacks + 1) * (slices + 1);
    let mut mesh = TriangleMesh::with_capacity(vertex_count, stacks * slices * 2);

    for i in 0..=stacks {
        let phi = std::f64::consts::PI * i as f64 / stacks as f64; // 0 to PI
        let (sin_phi, cos_phi) = phi.sin_cos();

        for j in 0..=slices {
            let theta = 2.0 * std::f64::consts::PI * j as f64 / slices as f64;
            let (sin_theta, cos_theta) = theta.sin_cos();

            mesh.pos_x.push(radius * sin_phi * cos_theta);
            mesh.pos_y.push(radius * cos_phi);
            mesh.pos_z.push(radius * sin_phi * sin_theta);
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * (slices + 1) + j) as u32;
            let b = a + (slices + 1) as u32;

            // Skip degenerate triangles at poles
            if i != 0 {
                mesh.indices.extend_from_slice(&[a, b, a + 1]);
            }
            if i != stacks - 1 {
                mesh.indices.extend_from_slice(&[a + 1, b, b + 1]);
            }
        }
    }

    mesh
}

/// Translates every vertex of `mesh` by `(dx, dy, dz)`.
pub fn translated(mesh: &TriangleMesh, dx: f64, dy: f64, dz: f64) -> TriangleMesh {
    let mut out = mesh.clone();
    out.pos_x.iter_mut().for_each(|x| *x += dx);
    out.pos_y.iter_mut().for_each(|y| *y += dy);
    out.pos_z.iter_mut().for_each(|z| *z += dz);
    out
}
