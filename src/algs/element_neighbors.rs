//! Elements surrounding elements: the neighbor across every local face.
//!
//! For local face `k` of element `ie` with vertices `(a, b)`, the candidates
//! are the elements incident to both `a` and `b` (a sorted-set intersection
//! of two point→element rows) minus `ie` itself. An empty set marks a domain
//! boundary face; exactly one candidate is the neighbor; more than one means
//! the mesh is not manifold.
//!
//! Each resolved face is written from both sides at once, together with the
//! neighbor's own local face index, so a slot already filled by a
//! lower-indexed element is not searched again.

use crate::mesh_error::MeshError;
use crate::topology::csr::{prefix_offsets, sorted_intersection_into, Csr};
use crate::topology::element::{ElemIdx, Element};

/// Neighbor table indexed by `(element, local face)`.
///
/// `None` marks a face on the domain boundary; `Some((j, kj))` says the face
/// is shared with element `j`, where it is local face `kj`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementNeighbors {
    slot_offsets: Vec<usize>,
    slots: Vec<Option<(ElemIdx, usize)>>,
}

impl ElementNeighbors {
    #[inline]
    pub fn num_elements(&self) -> usize {
        self.slot_offsets.len() - 1
    }

    /// Neighbor across local face `face` of `elem`.
    #[inline]
    pub fn get(&self, elem: ElemIdx, face: usize) -> Option<(ElemIdx, usize)> {
        self.slots[self.slot_offsets[elem] + face]
    }

    /// All face slots of `elem`, in local face order.
    #[inline]
    pub fn faces_of(&self, elem: ElemIdx) -> &[Option<(ElemIdx, usize)>] {
        &self.slots[self.slot_offsets[elem]..self.slot_offsets[elem + 1]]
    }

    /// Offsets of each element's first slot (length `num_elements + 1`).
    #[inline]
    pub(crate) fn slot_offsets(&self) -> &[usize] {
        &self.slot_offsets
    }

    /// Number of slots with no neighbor.
    pub fn num_exposed_faces(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }
}

/// Resolve the neighbor of every element face.
///
/// `point_elements` must be the point→element index of `elements`.
pub fn resolve_element_neighbors(
    elements: &[Element],
    point_elements: &Csr,
) -> Result<ElementNeighbors, MeshError> {
    let counts: Vec<usize> = elements.iter().map(Element::num_faces).collect();
    let slot_offsets = prefix_offsets(&counts);
    let mut slots: Vec<Option<(ElemIdx, usize)>> = vec![None; slot_offsets[elements.len()]];
    let mut shared: Vec<ElemIdx> = Vec::new();

    for (ie, elem) in elements.iter().enumerate() {
        for k in 0..elem.num_faces() {
            let slot = slot_offsets[ie] + k;
            if slots[slot].is_some() {
                continue;
            }
            let (a, b) = elem.face_vertices(k);
            sorted_intersection_into(point_elements.row(a), point_elements.row(b), &mut shared);
            shared.retain(|&e| e != ie);

            match *shared.as_slice() {
                [] => {}
                [je] => {
                    let inconsistent = MeshError::InconsistentNeighbor {
                        element: ie,
                        local_face: k,
                        neighbor: je,
                    };
                    let jk = elements[je]
                        .local_face_with_vertices(a, b)
                        .ok_or_else(|| inconsistent.clone())?;
                    let back = &mut slots[slot_offsets[je] + jk];
                    match *back {
                        None => *back = Some((ie, k)),
                        Some(prev) if prev == (ie, k) => {}
                        Some(_) => return Err(inconsistent),
                    }
                    slots[slot] = Some((je, jk));
                }
                _ => {
                    return Err(MeshError::MalformedTopology {
                        element: ie,
                        local_face: k,
                        candidates: shared.clone(),
                    });
                }
            }
        }
    }

    let neighbors = ElementNeighbors {
        slot_offsets,
        slots,
    };
    log::debug!(
        "element neighbors: {} elements, {} exposed faces",
        elements.len(),
        neighbors.num_exposed_faces()
    );
    Ok(neighbors)
}
