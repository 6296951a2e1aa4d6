//! Canonical face list and element→face map.
//!
//! Two passes over the elements in index order:
//!
//! * **Boundary pass** – every face without a neighbor gets the next boundary
//!   index `0, 1, ..`, with its nodes copied in the owning element's
//!   orientation.
//! * **Interior pass** – every face whose neighbor index is strictly greater
//!   than the current element gets the next index after the boundary range.
//!   The lower-indexed element is the left side and supplies the orientation;
//!   the higher-indexed element skips the same face because its neighbor is
//!   smaller.
//!
//! Both passes fill the per-slot face id and the tagged [`Neighbor`] of each
//! element face. Midside node counts are taken from each element's shape and
//! are assumed to agree across neighbors.

use crate::algs::element_neighbors::ElementNeighbors;
use crate::mesh_error::MeshError;
use crate::topology::element::{ElemIdx, Element, FaceIdx};
use crate::topology::face::CanonicalFace;
use crate::topology::neighbor::Neighbor;

/// Output of face enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceTable {
    faces: Vec<CanonicalFace>,
    num_boundary_faces: usize,
    slot_offsets: Vec<usize>,
    element_faces: Vec<FaceIdx>,
    neighbors: Vec<Neighbor>,
}

impl FaceTable {
    #[inline]
    pub fn faces(&self) -> &[CanonicalFace] {
        &self.faces
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn num_boundary_faces(&self) -> usize {
        self.num_boundary_faces
    }

    #[inline]
    pub fn num_interior_faces(&self) -> usize {
        self.faces.len() - self.num_boundary_faces
    }

    /// Global face occupying local slot `face` of `elem`.
    #[inline]
    pub fn global_face(&self, elem: ElemIdx, face: usize) -> FaceIdx {
        self.element_faces[self.slot_offsets[elem] + face]
    }

    /// What lies across local slot `face` of `elem`.
    #[inline]
    pub fn neighbor(&self, elem: ElemIdx, face: usize) -> Neighbor {
        self.neighbors[self.slot_offsets[elem] + face]
    }

    /// Global faces of `elem` in local order.
    #[inline]
    pub fn element_faces(&self, elem: ElemIdx) -> &[FaceIdx] {
        &self.element_faces[self.slot_offsets[elem]..self.slot_offsets[elem + 1]]
    }

    #[inline]
    pub fn num_elements(&self) -> usize {
        self.slot_offsets.len() - 1
    }

    pub(crate) fn faces_mut(&mut self) -> &mut [CanonicalFace] {
        &mut self.faces
    }
}

/// Running state of the two enumeration passes.
struct FaceEnumerator<'a> {
    elements: &'a [Element],
    resolved: &'a ElementNeighbors,
    faces: Vec<CanonicalFace>,
    element_faces: Vec<Option<FaceIdx>>,
    neighbors: Vec<Option<Neighbor>>,
}

impl<'a> FaceEnumerator<'a> {
    fn new(elements: &'a [Element], resolved: &'a ElementNeighbors) -> Self {
        let nslots = resolved.slot_offsets()[elements.len()];
        Self {
            elements,
            resolved,
            faces: Vec::new(),
            element_faces: vec![None; nslots],
            neighbors: vec![None; nslots],
        }
    }

    #[inline]
    fn slot(&self, elem: ElemIdx, face: usize) -> usize {
        self.resolved.slot_offsets()[elem] + face
    }

    fn face_nodes(&self, elem: ElemIdx, face: usize) -> Vec<usize> {
        let e = &self.elements[elem];
        let (a, b) = e.face_vertices(face);
        let high = e.face_high_order_nodes(face);
        let mut nodes = Vec::with_capacity(2 + high.len());
        nodes.push(a);
        nodes.push(b);
        nodes.extend_from_slice(high);
        nodes
    }

    fn boundary_pass(&mut self) {
        for ie in 0..self.elements.len() {
            for (k, nb) in self.resolved.faces_of(ie).iter().enumerate() {
                if nb.is_some() {
                    continue;
                }
                let ib = self.faces.len();
                let face = CanonicalFace {
                    left: ie,
                    right: Neighbor::Boundary(ib),
                    left_local: k,
                    right_local: None,
                    nodes: self.face_nodes(ie, k),
                    tags: Vec::new(),
                };
                self.faces.push(face);
                let slot = self.slot(ie, k);
                self.element_faces[slot] = Some(ib);
                self.neighbors[slot] = Some(Neighbor::Boundary(ib));
            }
        }
    }

    fn interior_pass(&mut self) {
        for ie in 0..self.elements.len() {
            for (k, nb) in self.resolved.faces_of(ie).iter().enumerate() {
                let Some((je, jk)) = *nb else { continue };
                if je <= ie {
                    continue;
                }
                let iface = self.faces.len();
                let face = CanonicalFace {
                    left: ie,
                    right: Neighbor::Interior(je),
                    left_local: k,
                    right_local: Some(jk),
                    nodes: self.face_nodes(ie, k),
                    tags: Vec::new(),
                };
                self.faces.push(face);
                let (ls, rs) = (self.slot(ie, k), self.slot(je, jk));
                self.element_faces[ls] = Some(iface);
                self.element_faces[rs] = Some(iface);
                self.neighbors[ls] = Some(Neighbor::Interior(je));
                self.neighbors[rs] = Some(Neighbor::Interior(ie));
            }
        }
    }

    fn finish(self, num_boundary_faces: usize) -> Result<FaceTable, MeshError> {
        let slot_offsets = self.resolved.slot_offsets().to_vec();
        let unfilled = |slot: usize| {
            let elem = slot_offsets.partition_point(|&o| o <= slot) - 1;
            MeshError::InvariantViolation(format!(
                "local face {} of element {elem} received no canonical face",
                slot - slot_offsets[elem]
            ))
        };
        let element_faces = self
            .element_faces
            .iter()
            .enumerate()
            .map(|(s, f)| f.ok_or_else(|| unfilled(s)))
            .collect::<Result<Vec<_>, _>>()?;
        let neighbors = self
            .neighbors
            .iter()
            .enumerate()
            .map(|(s, n)| n.ok_or_else(|| unfilled(s)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FaceTable {
            faces: self.faces,
            num_boundary_faces,
            slot_offsets,
            element_faces,
            neighbors,
        })
    }
}

/// Enumerate canonical faces: boundary faces first, then interior faces.
pub fn enumerate_faces(
    elements: &[Element],
    resolved: &ElementNeighbors,
) -> Result<FaceTable, MeshError> {
    let mut fe = FaceEnumerator::new(elements, resolved);
    fe.boundary_pass();
    let num_boundary_faces = fe.faces.len();
    fe.interior_pass();
    let table = fe.finish(num_boundary_faces)?;
    log::info!(
        "face enumeration: {} boundary faces, {} faces in total",
        table.num_boundary_faces(),
        table.num_faces()
    );
    Ok(table)
}
