//! Integration tests for surfmap-mesh.

use surfmap_math::Vec3;
use surfmap_mesh::generators::{quad_grid, translated, uv_sphere};
use surfmap_mesh::topology::Topology;
use surfmap_mesh::TriangleMesh;
use surfmap_types::{EdgeId, TriangleId, VertexId};

// ─── TriangleMesh Tests ───────────────────────────────────────

fn make_single_triangle() -> TriangleMesh {
    TriangleMesh {
        pos_x: vec![0.0, 1.0, 0.0],
        pos_y: vec![0.0, 0.0, 1.0],
        pos_z: vec![0.0, 0.0, 0.0],
        indices: vec![0, 1, 2],
    }
}

/// Two triangles sharing the edge (1, 2).
fn make_quad() -> TriangleMesh {
    TriangleMesh::from_triangles(
        &[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ],
        &[[0, 1, 2], [2, 1, 3]],
    )
    .unwrap()
}

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn position_access() {
    let mut mesh = make_single_triangle();
    assert_eq!(mesh.position(1), Vec3::new(1.0, 0.0, 0.0));
    mesh.set_position(1, Vec3::new(2.0, 0.5, -1.0));
    assert_eq!(mesh.positions()[1], Vec3::new(2.0, 0.5, -1.0));
}

#[test]
fn triangle_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.triangle(0), [0, 1, 2]);
    assert_eq!(mesh.triangles().count(), 1);
}

#[test]
fn validate_ok() {
    assert!(make_single_triangle().validate().is_ok());
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut mesh = make_single_triangle();
    mesh.pos_y.push(99.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = make_single_triangle();
    mesh.indices[2] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_repeated_index() {
    let mut mesh = make_single_triangle();
    mesh.indices = vec![0, 0, 1];
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_non_finite() {
    let mut mesh = make_single_triangle();
    mesh.pos_z[2] = f64::NAN;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_allows_zero_area_triangle() {
    // Collinear but distinct indices: the projection engine skips it.
    let mesh = TriangleMesh::from_triangles(
        &[Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0)],
        &[[0, 1, 2]],
    );
    assert!(mesh.is_ok());
}

#[test]
fn from_interleaved() {
    let positions = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let mesh = TriangleMesh::from_interleaved(&positions, &[0, 1, 2]).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.pos_x, vec![0.0, 1.0, 0.0]);
    assert_eq!(mesh.pos_y, vec![0.0, 0.0, 1.0]);
}

#[test]
fn from_interleaved_rejects_ragged() {
    assert!(TriangleMesh::from_interleaved(&[0.0, 1.0], &[]).is_err());
}

#[test]
fn mesh_json_round_trip() {
    let mesh = make_quad();
    let json = serde_json::to_string(&mesh).unwrap();
    let recovered: TriangleMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, mesh);
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn topology_single_triangle() {
    let topo = Topology::build(&make_single_triangle());
    assert_eq!(topo.vertex_count(), 3);
    assert_eq!(topo.edge_count(), 3);
    assert_eq!(topo.triangle_count(), 1);
    assert_eq!(topo.boundary_edge_count(), 3);
    assert!(!topo.is_closed());
}

#[test]
fn topology_shared_edge() {
    let topo = Topology::build(&make_quad());
    assert_eq!(topo.edge_count(), 5);
    assert_eq!(topo.boundary_edge_count(), 4);

    let shared = topo.edge_index(VertexId(2), VertexId(1)).unwrap();
    assert_eq!(topo.edge(shared), [1, 2]);
    assert_eq!(topo.triangles_around_edge(shared), &[0, 1]);
    assert!(topo.edge_index(VertexId(0), VertexId(3)).is_none());
}

#[test]
fn topology_vertex_fans() {
    let topo = Topology::build(&make_quad());
    assert_eq!(topo.triangles_around_vertex(VertexId(0)), &[0]);
    assert_eq!(topo.triangles_around_vertex(VertexId(1)), &[0, 1]);
    assert_eq!(topo.triangles_around_vertex(VertexId(3)), &[1]);
}

#[test]
#[should_panic]
fn topology_vertex_fan_out_of_range_panics() {
    let topo = Topology::build(&make_quad());
    let _ = topo.triangles_around_vertex(VertexId(99));
}

#[test]
#[should_panic]
fn topology_triangle_out_of_range_panics() {
    let topo = Topology::build(&make_quad());
    let _ = topo.triangle(TriangleId(2));
}

#[test]
#[should_panic]
fn topology_edge_fan_out_of_range_panics() {
    let topo = Topology::build(&make_quad());
    let _ = topo.triangles_around_edge(EdgeId(topo.edge_count() as u32));
}

#[test]
fn topology_edges_in_triangle_match_vertices() {
    let mesh = quad_grid(3, 3, 1.0, 1.0);
    let topo = Topology::build(&mesh);
    for t in 0..topo.triangle_count() {
        let tid = TriangleId(t as u32);
        let [a, b, c] = topo.triangle(tid);
        let edges = topo.edges_in_triangle(tid);
        for (e, (v0, v1)) in edges.iter().zip([(a, b), (b, c), (c, a)]) {
            let [e0, e1] = topo.edge(EdgeId(*e));
            assert_eq!([e0, e1], [v0.min(v1), v0.max(v1)]);
            assert!(topo.triangles_around_edge(EdgeId(*e)).contains(&(t as u32)));
        }
    }
}

#[test]
fn topology_edge_numbering_is_deterministic() {
    let mesh = quad_grid(4, 4, 1.0, 1.0);
    let a = Topology::build(&mesh);
    let b = Topology::build(&mesh);
    assert_eq!(a.edges, b.edges);
    assert_eq!(a.triangle_edges, b.triangle_edges);
}

#[test]
fn topology_grid_edge_count() {
    // Grid of c×r quads: horizontal + vertical + diagonal edges.
    let mesh = quad_grid(3, 2, 1.0, 1.0);
    let topo = Topology::build(&mesh);
    let expected = 3 * 3 + 4 * 2 + 3 * 2;
    assert_eq!(topo.edge_count(), expected);
    assert_eq!(topo.non_manifold_edge_count(), 0);
}

#[test]
fn topology_rebuild_after_connectivity_change() {
    let mut mesh = make_quad();
    let mut topo = Topology::build(&mesh);
    assert_eq!(topo.triangle_count(), 2);

    mesh.indices.truncate(3);
    topo.rebuild(&mesh);
    assert_eq!(topo.triangle_count(), 1);
    assert_eq!(topo.edge_count(), 3);
    assert!(topo.triangles_around_vertex(VertexId(3)).is_empty());
}

#[test]
fn topology_from_triangles_grows_vertex_table() {
    let topo = Topology::from_triangles(0, &[[0, 1, 5]]);
    assert_eq!(topo.vertex_count(), 6);
    assert_eq!(topo.triangles_around_vertex(VertexId(5)), &[0]);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn quad_grid_2x2() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.triangle_count(), 8);
    assert!(mesh.validate().is_ok());
}

#[test]
fn quad_grid_dimensions() {
    let mesh = quad_grid(4, 4, 2.0, 2.0);
    assert!((mesh.pos_x[0] - (-1.0)).abs() < 1e-12);
    assert!((mesh.pos_y[0] - 1.0).abs() < 1e-12);
    assert!((mesh.pos_x[4] - 1.0).abs() < 1e-12);
}

#[test]
fn uv_sphere_radius() {
    let mesh = uv_sphere(2.5, 8, 16);
    assert!(mesh.validate().is_ok());
    for i in 0..mesh.vertex_count() {
        let dist = mesh.position(i).length();
        assert!((dist - 2.5).abs() < 1e-9, "Vertex {} at distance {}", i, dist);
    }
}

#[test]
fn translated_moves_every_vertex() {
    let mesh = quad_grid(1, 1, 1.0, 1.0);
    let moved = translated(&mesh, 0.0, 0.0, 0.25);
    assert_eq!(moved.indices, mesh.indices);
    assert!(moved.pos_z.iter().all(|&z| (z - 0.25).abs() < 1e-12));
}
