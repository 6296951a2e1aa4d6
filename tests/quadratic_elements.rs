mod util;

use hybrid_mesh::prelude::*;
use util::*;

fn midpoint(raw: &RawMesh, a: usize, b: usize) -> [f64; 2] {
    [
        0.5 * (raw.coords[a][0] + raw.coords[b][0]),
        0.5 * (raw.coords[a][1] + raw.coords[b][1]),
    ]
}

#[test]
fn quadratic_faces_carry_their_midside_node() {
    for shape in [
        ElementShape::Triangle6,
        ElementShape::Quadrilateral8,
        ElementShape::Quadrilateral9,
    ] {
        let raw = unit_square(2, shape).unwrap();
        let topo = MeshTopology::build(&raw, &TopologyOptions::strict()).unwrap();
        for f in 0..topo.num_faces() {
            let nodes = topo.face_vertices(f);
            assert_eq!(nodes.len(), 3, "{shape}: face {f}");
            let m = midpoint(&raw, nodes[0], nodes[1]);
            let c = raw.coords[nodes[2]];
            assert!(
                (m[0] - c[0]).abs() < 1e-12 && (m[1] - c[1]).abs() < 1e-12,
                "{shape}: face {f} midside node {} is not at the edge midpoint",
                nodes[2]
            );
        }
        assert_topology_properties(&raw, &topo);
    }
}

#[test]
fn midside_and_interior_nodes_stay_out_of_point_indices() {
    let raw = unit_square(1, ElementShape::Quadrilateral9).unwrap();
    let topo = MeshTopology::build(&raw, &TopologyOptions::strict()).unwrap();
    let corners = raw.elements[0].vertices().to_vec();
    for p in 0..raw.num_points() {
        let is_corner = corners.contains(&p);
        assert_eq!(topo.point_elements().degree(p), usize::from(is_corner));
        assert_eq!(topo.point_points().degree(p), if is_corner { 2 } else { 0 });
    }
    // the cell center is the only non-boundary point
    let center = raw.elements[0].nodes()[8];
    for p in 0..raw.num_points() {
        assert_eq!(topo.is_boundary_point(p), p != center);
    }
}

#[test]
fn reversed_quadratic_record_reverses_midside_nodes() {
    // 6-node triangle 0-1-2 with midside nodes 3 (0-1), 4 (1-2), 5 (2-0)
    let raw = RawMesh::new(
        vec![
            [0.0, 0.0],
            [2.0, 0.0],
            [0.0, 2.0],
            [1.0, 0.0],
            [1.0, 1.0],
            [0.0, 1.0],
        ],
        vec![elem(&[0, 1, 2, 3, 4, 5])],
        vec![
            BoundaryFaceRecord::new(vec![1, 0, 3], vec![1]),
            BoundaryFaceRecord::new(vec![1, 2, 4], vec![2]),
            BoundaryFaceRecord::new(vec![0, 2, 5], vec![3]),
        ],
    );
    let topo = MeshTopology::build(&raw, &TopologyOptions::strict()).unwrap();
    assert_eq!(topo.boundary_records()[0].nodes(), &[0, 1, 3]);
    assert_eq!(topo.boundary_records()[2].nodes(), &[2, 0, 5]);
    assert_eq!(topo.face_vertices(2), &[2, 0, 5]);
    assert_eq!(topo.boundary_tag(2, 0), Some(3));
    assert_eq!(topo.num_boundary_points(), 6);
}
