mod util;

use hybrid_mesh::prelude::*;
use util::*;

fn build(raw: &RawMesh) -> MeshTopology {
    MeshTopology::build(raw, &TopologyOptions::strict()).expect("build topology")
}

#[test]
fn two_triangles_share_the_diagonal() {
    let raw = scenario_a();
    let topo = build(&raw);
    assert_eq!(topo.num_boundary_faces(), 4);
    assert_eq!(topo.num_faces(), 5);
    assert_eq!(topo.num_interior_faces(), 1);

    // face 2 of element 0 is (2, 0), face 0 of element 1 is (0, 2)
    assert_eq!(topo.neighbor(0, 2), Neighbor::Interior(1));
    assert_eq!(topo.neighbor(1, 0), Neighbor::Interior(0));
    for (e, k) in [(0, 0), (0, 1), (1, 1), (1, 2)] {
        assert!(topo.neighbor(e, k).is_boundary(), "({e}, {k}) should be a ghost");
        assert!(topo.neighbor_id(e, k) >= topo.num_elements());
    }

    let diag = topo.global_face(0, 2);
    assert_eq!(diag, 4);
    assert_eq!(topo.face_elements(diag), (0, 1));
    assert_eq!(topo.face_vertices(diag), &[2, 0]);
    assert_eq!(topo.face_local_index(diag, FaceSide::Left), Some(2));
    assert_eq!(topo.face_local_index(diag, FaceSide::Right), Some(0));
    assert_eq!(topo.boundary_tag(diag, 0), None);

    assert_eq!(topo.point_points().row(0), &[1, 2, 3]);
    assert_eq!(topo.point_points().row(1), &[0, 2]);
    assert_eq!(topo.point_elements().row(2), &[0, 1]);
    assert_topology_properties(&raw, &topo);
}

#[test]
fn boundary_faces_are_numbered_in_element_order() {
    let topo = build(&scenario_a());
    let expected = [(0, 0, [0, 1]), (0, 1, [1, 2]), (1, 1, [2, 3]), (1, 2, [3, 0])];
    for (f, (e, k, verts)) in expected.into_iter().enumerate() {
        assert_eq!(topo.global_face(e, k), f);
        assert_eq!(topo.face_vertices(f), &verts);
        assert_eq!(topo.face_elements(f), (e, 2 + f));
        assert_eq!(topo.neighbor(e, k), Neighbor::Boundary(f));
        assert_eq!(topo.boundary_tag(f, 0), Some(f as i32 + 1));
        assert_eq!(topo.boundary_tag(f, 1), None);
    }
}

#[test]
fn single_quad_is_all_boundary() {
    let raw = scenario_b();
    let topo = build(&raw);
    assert_eq!(topo.num_boundary_faces(), 4);
    assert_eq!(topo.num_faces(), 4);
    for k in 0..4 {
        assert_eq!(topo.neighbor(0, k), Neighbor::Boundary(k));
        assert_eq!(topo.neighbor_id(0, k), 1 + k);
    }
    let pp = topo.point_points();
    assert_eq!(pp.row(0), &[1, 3]);
    assert_eq!(pp.row(1), &[0, 2]);
    assert_eq!(pp.row(2), &[1, 3]);
    assert_eq!(pp.row(3), &[0, 2]);
    assert_eq!(topo.num_boundary_points(), 4);
    assert_topology_properties(&raw, &topo);
}

#[test]
fn two_quads_share_one_edge() {
    let raw = scenario_c();
    let topo = build(&raw);
    assert_eq!(topo.num_boundary_faces(), 6);
    assert_eq!(topo.num_interior_faces(), 1);
    let f = topo.num_boundary_faces();
    assert_eq!(topo.face_elements(f), (0, 1));
    assert_eq!(topo.face_vertices(f), &[1, 4]);
    assert_eq!(topo.face_local_index(f, FaceSide::Left), Some(1));
    assert_eq!(topo.face_local_index(f, FaceSide::Right), Some(3));
    assert_eq!(topo.point_points().row(1), &[0, 2, 4]);
    assert_eq!(topo.point_points().row(4), &[1, 3, 5]);
    assert_topology_properties(&raw, &topo);
}

#[test]
fn quad_and_triangle_side_by_side() {
    // 3---4
    // |   | \
    // 0---1---2
    let raw = RawMesh::new(
        vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
        vec![elem(&[0, 1, 4, 3]), elem(&[1, 2, 4])],
        vec![
            BoundaryFaceRecord::linear(0, 1, vec![1]),
            BoundaryFaceRecord::linear(1, 2, vec![1]),
            BoundaryFaceRecord::linear(2, 4, vec![2]),
            BoundaryFaceRecord::linear(4, 3, vec![3]),
            BoundaryFaceRecord::linear(3, 0, vec![4]),
        ],
    );
    let topo = build(&raw);
    assert_eq!(topo.num_boundary_faces(), 5);
    assert_eq!(topo.num_faces(), 6);
    assert_eq!(topo.neighbor(0, 1), Neighbor::Interior(1));
    assert_eq!(topo.neighbor(1, 2), Neighbor::Interior(0));
    assert_eq!(topo.face_local_index(5, FaceSide::Right), Some(2));
    assert_eq!(topo.point_points().row(1), &[0, 2, 4]);
    assert_eq!(topo.point_points().row(4), &[1, 2, 3]);
    assert_topology_properties(&raw, &topo);
}

#[test]
fn clockwise_records_are_reoriented_without_touching_input() {
    let mut raw = scenario_a();
    raw.boundary_faces[1] = BoundaryFaceRecord::linear(2, 1, vec![2]);
    raw.boundary_faces[3] = BoundaryFaceRecord::linear(0, 3, vec![4]);
    let topo = build(&raw);
    assert_eq!(raw.boundary_faces[1].vertices(), (2, 1));
    assert_eq!(topo.boundary_records()[1].vertices(), (1, 2));
    assert_eq!(topo.boundary_records()[3].vertices(), (3, 0));
    let host = topo.boundary_hosts()[3].expect("record 3 has a host");
    assert_eq!((host.element, host.local_face), (1, 2));
    assert_eq!(topo.boundary_maps().face_of_record(1), Some(1));
    assert_eq!(topo.boundary_tag(1, 0), Some(2));
}

#[test]
fn record_order_does_not_change_face_order() {
    let raw = scenario_c();
    let mut shuffled = raw.clone();
    shuffled.boundary_faces.reverse();
    let a = build(&raw);
    let b = build(&shuffled);
    assert_eq!(a.faces().len(), b.faces().len());
    for f in 0..a.num_faces() {
        assert_eq!(a.face_vertices(f), b.face_vertices(f));
        assert_eq!(a.face_elements(f), b.face_elements(f));
        assert_eq!(a.boundary_tag(f, 0), b.boundary_tag(f, 0));
    }
    let n = raw.num_boundary_records();
    for r in 0..n {
        assert_eq!(
            a.boundary_maps().face_of_record(r),
            b.boundary_maps().face_of_record(n - 1 - r)
        );
    }
}

#[test]
fn building_twice_gives_identical_topology() {
    for raw in [scenario_a(), scenario_b(), scenario_c()] {
        assert_eq!(build(&raw), build(&raw));
    }
}

#[test]
fn lenient_matching_tolerates_a_missing_record() {
    let mut raw = scenario_b();
    raw.boundary_faces.remove(2);
    assert_eq!(
        MeshTopology::build(&raw, &TopologyOptions::strict()),
        Err(MeshError::MissingBoundaryRecord { face: 2 })
    );

    let topo = MeshTopology::build(&raw, &TopologyOptions::lenient()).unwrap();
    assert_eq!(topo.num_boundary_faces(), 4);
    assert!(!topo.boundary_maps().is_complete());
    assert_eq!(topo.boundary_maps().record_of_face(2), None);
    assert_eq!(topo.boundary_tag(2, 0), None);
    assert_eq!(topo.boundary_tag(3, 0), Some(4));
    // points 2 and 3 remain on the records of faces 1 and 3
    assert_eq!(topo.num_boundary_points(), 4);
}

#[test]
fn topology_is_shareable_across_threads() {
    let topo = std::sync::Arc::new(build(&scenario_c()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let t = std::sync::Arc::clone(&topo);
            std::thread::spawn(move || t.num_faces())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 7);
    }
}
