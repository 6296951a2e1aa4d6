//! `MeshTopology`: the full connectivity of a 2D hybrid mesh.
//!
//! Built once from a [`RawMesh`] in a fixed phase order, then read-only:
//!
//! 1. input validation
//! 2. point→element index
//! 3. boundary-record orientation correction
//! 4. element→element neighbors
//! 5. canonical face enumeration
//! 6. boundary record ↔ face matching and tag propagation
//! 7. boundary-point flags and point→point adjacency
//!
//! Every phase completes before the next starts; nothing is mutated after
//! [`MeshTopology::build`] returns, so a topology can be shared across
//! threads by reference or behind an `Arc`.

use static_assertions::assert_impl_all;

use crate::algs::boundary::{boundary_point_flags, match_boundary_faces, BoundaryMaps};
use crate::algs::boundary_orientation::{correct_boundary_orientation, BoundaryHost};
use crate::algs::element_neighbors::resolve_element_neighbors;
use crate::algs::face_enumeration::{enumerate_faces, FaceTable};
use crate::algs::point_adjacency::build_point_adjacency;
use crate::algs::point_elements::build_point_elements;
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;
use crate::topology::csr::Csr;
use crate::topology::element::{BoundaryFaceRecord, ElemIdx, FaceIdx, PointIdx, RawMesh};
use crate::topology::face::{CanonicalFace, FaceSide};
use crate::topology::neighbor::Neighbor;
use crate::topology::options::TopologyOptions;
use crate::topology::validation::validate_raw_mesh;

/// Immutable connectivity of a mesh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeshTopology {
    num_points: usize,
    point_elements: Csr,
    point_points: Csr,
    faces: FaceTable,
    boundary_records: Vec<BoundaryFaceRecord>,
    boundary_hosts: Vec<Option<BoundaryHost>>,
    boundary_maps: BoundaryMaps,
    boundary_points: Vec<bool>,
}

assert_impl_all!(MeshTopology: Send, Sync);

impl MeshTopology {
    /// Run every topology phase on `raw`.
    pub fn build(raw: &RawMesh, opts: &TopologyOptions) -> Result<Self, MeshError> {
        validate_raw_mesh(raw)?;
        let num_points = raw.num_points();

        let point_elements = build_point_elements(&raw.elements, num_points);
        let oriented = correct_boundary_orientation(
            &raw.boundary_faces,
            &raw.elements,
            &point_elements,
            opts.boundary_matching,
        )?;
        let resolved = resolve_element_neighbors(&raw.elements, &point_elements)?;
        let mut faces = enumerate_faces(&raw.elements, &resolved)?;
        let boundary_maps =
            match_boundary_faces(&oriented.records, &mut faces, opts.boundary_matching)?;
        let boundary_points = boundary_point_flags(num_points, &oriented.records);
        let point_points = build_point_adjacency(&raw.elements, &point_elements);

        let topo = Self {
            num_points,
            point_elements,
            point_points,
            faces,
            boundary_records: oriented.records,
            boundary_hosts: oriented.hosts,
            boundary_maps,
            boundary_points,
        };
        if opts.check_invariants {
            topo.validate_invariants()?;
        }
        log::info!(
            "topology: {} points, {} elements, {} boundary faces, {} faces, {} boundary points",
            topo.num_points(),
            topo.num_elements(),
            topo.num_boundary_faces(),
            topo.num_faces(),
            topo.num_boundary_points()
        );
        Ok(topo)
    }

    // --- counts -----------------------------------------------------------

    #[inline]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    #[inline]
    pub fn num_elements(&self) -> usize {
        self.faces.num_elements()
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.num_faces()
    }

    #[inline]
    pub fn num_boundary_faces(&self) -> usize {
        self.faces.num_boundary_faces()
    }

    #[inline]
    pub fn num_interior_faces(&self) -> usize {
        self.faces.num_interior_faces()
    }

    /// Number of raw boundary records supplied with the mesh.
    #[inline]
    pub fn num_boundary_records(&self) -> usize {
        self.boundary_records.len()
    }

    pub fn num_boundary_points(&self) -> usize {
        self.boundary_points.iter().filter(|&&b| b).count()
    }

    // --- element queries --------------------------------------------------

    /// What lies across local face `face` of `elem`.
    #[inline]
    pub fn neighbor(&self, elem: ElemIdx, face: usize) -> Neighbor {
        self.faces.neighbor(elem, face)
    }

    /// Neighbor as a plain id: an element index, or the ghost id
    /// `num_elements + boundary_face_index` for boundary faces.
    #[inline]
    pub fn neighbor_id(&self, elem: ElemIdx, face: usize) -> usize {
        self.neighbor(elem, face).ghost_id(self.num_elements())
    }

    /// Canonical face in local slot `face` of `elem`.
    #[inline]
    pub fn global_face(&self, elem: ElemIdx, face: usize) -> FaceIdx {
        self.faces.global_face(elem, face)
    }

    /// Canonical faces of `elem` in local order.
    #[inline]
    pub fn element_faces(&self, elem: ElemIdx) -> &[FaceIdx] {
        self.faces.element_faces(elem)
    }

    // --- face queries -----------------------------------------------------

    #[inline]
    pub fn faces(&self) -> &[CanonicalFace] {
        self.faces.faces()
    }

    #[inline]
    pub fn face(&self, face: FaceIdx) -> &CanonicalFace {
        &self.faces.faces()[face]
    }

    /// `(left element, right element or ghost id)`.
    #[inline]
    pub fn face_elements(&self, face: FaceIdx) -> (ElemIdx, usize) {
        let f = self.face(face);
        (f.left(), f.right().ghost_id(self.num_elements()))
    }

    /// Low-order vertices followed by midside nodes.
    #[inline]
    pub fn face_vertices(&self, face: FaceIdx) -> &[PointIdx] {
        self.face(face).nodes()
    }

    #[inline]
    pub fn face_local_index(&self, face: FaceIdx, side: FaceSide) -> Option<usize> {
        self.face(face).local_index(side)
    }

    /// Tag `slot` of a boundary face; `None` for interior faces, unmatched
    /// boundary faces and slots beyond the tag width.
    #[inline]
    pub fn boundary_tag(&self, face: FaceIdx, slot: usize) -> Option<i32> {
        self.face(face).tags().get(slot).copied()
    }

    #[inline]
    pub fn is_boundary_face(&self, face: FaceIdx) -> bool {
        face < self.num_boundary_faces()
    }

    // --- boundary records -------------------------------------------------

    /// Boundary records, oriented along their owning elements.
    #[inline]
    pub fn boundary_records(&self) -> &[BoundaryFaceRecord] {
        &self.boundary_records
    }

    /// Owning element and local face of each boundary record; `None` for
    /// records skipped under the lenient matching policy.
    #[inline]
    pub fn boundary_hosts(&self) -> &[Option<BoundaryHost>] {
        &self.boundary_hosts
    }

    #[inline]
    pub fn boundary_maps(&self) -> &BoundaryMaps {
        &self.boundary_maps
    }

    // --- point queries ----------------------------------------------------

    #[inline]
    pub fn is_boundary_point(&self, p: PointIdx) -> bool {
        self.boundary_points[p]
    }

    /// Point→element adjacency (low-order vertices only).
    #[inline]
    pub fn point_elements(&self) -> &Csr {
        &self.point_elements
    }

    /// Point→point adjacency through element edges.
    #[inline]
    pub fn point_points(&self) -> &Csr {
        &self.point_points
    }
}

impl DebugInvariants for MeshTopology {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "MeshTopology");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        let violation = |msg: String| -> Result<(), MeshError> {
            Err(MeshError::InvariantViolation(msg))
        };
        let ne = self.num_elements();
        let nb = self.num_boundary_faces();

        // partition and orientation of the canonical list
        for (fi, f) in self.faces().iter().enumerate() {
            match (fi < nb, f.right()) {
                (true, Neighbor::Boundary(b)) if b == fi => {}
                (false, Neighbor::Interior(r)) if f.left() < r && r < ne => {}
                _ => return violation(format!("face {fi} has sides {} / {:?}", f.left(), f.right())),
            }
            if self.global_face(f.left(), f.left_local) != fi {
                return violation(format!("face {fi} is not recorded by its left element"));
            }
            if let (Neighbor::Interior(r), Some(rl)) = (f.right(), f.right_local) {
                if self.global_face(r, rl) != fi {
                    return violation(format!("face {fi} is not recorded by its right element"));
                }
            }
        }

        // neighbor symmetry and element→face consistency
        for e in 0..ne {
            for (k, &fi) in self.element_faces(e).iter().enumerate() {
                let f = self.face(fi);
                let on_face = (f.left() == e && f.left_local == k)
                    || (f.right() == Neighbor::Interior(e) && f.right_local == Some(k));
                if !on_face {
                    return violation(format!("element {e} slot {k} points at foreign face {fi}"));
                }
                if let Neighbor::Interior(j) = self.neighbor(e, k) {
                    let back = self
                        .element_faces(j)
                        .iter()
                        .position(|&g| g == fi)
                        .map(|kj| self.neighbor(j, kj));
                    if back != Some(Neighbor::Interior(e)) {
                        return violation(format!("neighbor of element {e} across face {k} is one-sided"));
                    }
                }
            }
        }

        // boundary-point flags mirror the records
        let mut expected = vec![false; self.num_points];
        for rec in &self.boundary_records {
            for &p in rec.nodes() {
                expected[p] = true;
            }
        }
        if expected != self.boundary_points {
            return violation("boundary-point flags disagree with boundary records".into());
        }

        // boundary maps are mutually inverse
        for r in 0..self.boundary_records.len() {
            if let Some(f) = self.boundary_maps.face_of_record(r) {
                if self.boundary_maps.record_of_face(f) != Some(r) {
                    return violation(format!("boundary record {r} and face {f} are not paired"));
                }
            }
        }
        Ok(())
    }
}
