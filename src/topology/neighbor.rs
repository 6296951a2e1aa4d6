//! Tagged neighbor result across an element face.

use serde::{Deserialize, Serialize};

use crate::topology::element::ElemIdx;

/// What lies across a local face of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Neighbor {
    /// A genuine element of the mesh.
    Interior(ElemIdx),
    /// The domain exterior; the payload is the canonical boundary face index.
    Boundary(usize),
}

impl Neighbor {
    /// Uniform addressing: boundary faces map to the ghost id
    /// `num_elements + boundary_face_index`.
    #[inline]
    pub fn ghost_id(self, num_elements: usize) -> usize {
        match self {
            Neighbor::Interior(e) => e,
            Neighbor::Boundary(b) => num_elements + b,
        }
    }

    /// Inverse of [`Neighbor::ghost_id`].
    #[inline]
    pub fn from_ghost_id(id: usize, num_elements: usize) -> Self {
        if id < num_elements {
            Neighbor::Interior(id)
        } else {
            Neighbor::Boundary(id - num_elements)
        }
    }

    #[inline]
    pub fn element(self) -> Option<ElemIdx> {
        match self {
            Neighbor::Interior(e) => Some(e),
            Neighbor::Boundary(_) => None,
        }
    }

    #[inline]
    pub fn is_boundary(self) -> bool {
        matches!(self, Neighbor::Boundary(_))
    }
}
