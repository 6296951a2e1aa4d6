#![allow(dead_code)]
use hybrid_mesh::prelude::*;

pub fn elem(nodes: &[usize]) -> Element {
    Element::from_nodes(nodes.to_vec()).unwrap()
}

/// Unit square split along 0-2 into two triangles.
pub fn scenario_a() -> RawMesh {
    RawMesh::new(
        vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        vec![elem(&[0, 1, 2]), elem(&[0, 2, 3])],
        vec![
            BoundaryFaceRecord::linear(0, 1, vec![1]),
            BoundaryFaceRecord::linear(1, 2, vec![2]),
            BoundaryFaceRecord::linear(2, 3, vec![3]),
            BoundaryFaceRecord::linear(3, 0, vec![4]),
        ],
    )
}

/// A single unit quadrilateral.
pub fn scenario_b() -> RawMesh {
    RawMesh::new(
        vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        vec![elem(&[0, 1, 2, 3])],
        vec![
            BoundaryFaceRecord::linear(0, 1, vec![1]),
            BoundaryFaceRecord::linear(1, 2, vec![2]),
            BoundaryFaceRecord::linear(2, 3, vec![3]),
            BoundaryFaceRecord::linear(3, 0, vec![4]),
        ],
    )
}

/// Two quadrilaterals sharing the edge 1-4.
pub fn scenario_c() -> RawMesh {
    RawMesh::new(
        vec![
            [0.0, 0.0],
            [1.0, 0.0],
            [2.0, 0.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [2.0, 1.0],
        ],
        vec![elem(&[0, 1, 4, 3]), elem(&[1, 2, 5, 4])],
        vec![
            BoundaryFaceRecord::linear(0, 1, vec![1]),
            BoundaryFaceRecord::linear(1, 2, vec![1]),
            BoundaryFaceRecord::linear(2, 5, vec![2]),
            BoundaryFaceRecord::linear(5, 4, vec![3]),
            BoundaryFaceRecord::linear(4, 3, vec![3]),
            BoundaryFaceRecord::linear(3, 0, vec![4]),
        ],
    )
}

/// Reorder elements: new element `i` is old element `perm[i]`.
pub fn permute_elements(raw: &RawMesh, perm: &[usize]) -> RawMesh {
    let mut out = raw.clone();
    out.elements = perm.iter().map(|&i| raw.elements[i].clone()).collect();
    if !raw.region_tags.is_empty() {
        out.region_tags = perm.iter().map(|&i| raw.region_tags[i].clone()).collect();
    }
    out
}

/// Check the structural properties every built topology must satisfy.
pub fn assert_topology_properties(raw: &RawMesh, topo: &MeshTopology) {
    let ne = topo.num_elements();
    let nb = topo.num_boundary_faces();
    assert_eq!(ne, raw.num_elements());
    assert_eq!(topo.num_faces(), nb + topo.num_interior_faces());

    // neighbor symmetry
    for e in 0..ne {
        for k in 0..raw.elements[e].num_faces() {
            match topo.neighbor(e, k) {
                Neighbor::Interior(j) => {
                    let back = (0..raw.elements[j].num_faces())
                        .filter(|&kj| topo.neighbor(j, kj) == Neighbor::Interior(e))
                        .count();
                    assert!(back >= 1, "element {j} does not see {e} back");
                    assert_eq!(topo.neighbor_id(e, k), j);
                }
                Neighbor::Boundary(b) => {
                    assert!(b < nb);
                    assert_eq!(topo.neighbor_id(e, k), ne + b);
                    assert_eq!(topo.global_face(e, k), b);
                }
            }
        }
    }

    // partition and left/right convention
    let mut uses = vec![0usize; topo.num_faces()];
    for e in 0..ne {
        for &f in topo.element_faces(e) {
            uses[f] += 1;
        }
    }
    for (f, face) in topo.faces().iter().enumerate() {
        let (left, right) = topo.face_elements(f);
        if f < nb {
            assert!(topo.is_boundary_face(f));
            assert_eq!(right, ne + f);
            assert_eq!(uses[f], 1);
            assert_eq!(topo.face_local_index(f, FaceSide::Right), None);
        } else {
            assert!(!topo.is_boundary_face(f));
            assert!(left < right && right < ne, "face {f}: {left} / {right}");
            assert_eq!(uses[f], 2);
            let rl = topo.face_local_index(f, FaceSide::Right).unwrap();
            assert_eq!(topo.global_face(right, rl), f);
            // the right element sees the same vertex pair reversed
            let (a, b) = face.vertices();
            assert_eq!(raw.elements[right].face_vertices(rl), (b, a));
        }
        let ll = topo.face_local_index(f, FaceSide::Left).unwrap();
        assert_eq!(topo.global_face(left, ll), f);
        assert_eq!(raw.elements[left].face_vertices(ll), face.vertices());
    }

    // boundary points agree with the records
    for p in 0..topo.num_points() {
        let on_record = raw.boundary_faces.iter().any(|r| r.nodes().contains(&p));
        assert_eq!(topo.is_boundary_point(p), on_record, "point {p}");
    }

    // point adjacency is symmetric and excludes self
    let pp = topo.point_points();
    for p in 0..topo.num_points() {
        for &q in pp.row(p) {
            assert_ne!(p, q);
            assert!(pp.row(q).binary_search(&p).is_ok(), "{p}-{q} one-sided");
        }
    }

    topo.validate_invariants().unwrap();
}
