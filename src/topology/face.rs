//! Canonical (deduplicated, oriented) faces.

use serde::{Deserialize, Serialize};

use crate::topology::element::{ElemIdx, PointIdx};
use crate::topology::neighbor::Neighbor;

/// Side of a face: left is the owning (lower-indexed) element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceSide {
    Left,
    Right,
}

/// One entry of the canonical face list.
///
/// Vertices follow the left element's orientation; `nodes` holds the two
/// low-order vertices followed by any midside nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalFace {
    pub(crate) left: ElemIdx,
    pub(crate) right: Neighbor,
    pub(crate) left_local: usize,
    pub(crate) right_local: Option<usize>,
    pub(crate) nodes: Vec<PointIdx>,
    pub(crate) tags: Vec<i32>,
}

impl CanonicalFace {
    #[inline]
    pub fn left(&self) -> ElemIdx {
        self.left
    }

    /// Right element, or the exterior for boundary faces.
    #[inline]
    pub fn right(&self) -> Neighbor {
        self.right
    }

    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.right.is_boundary()
    }

    /// Local face index within the element on `side`; `None` for the
    /// exterior side of a boundary face.
    #[inline]
    pub fn local_index(&self, side: FaceSide) -> Option<usize> {
        match side {
            FaceSide::Left => Some(self.left_local),
            FaceSide::Right => self.right_local,
        }
    }

    /// Ordered low-order vertex pair.
    #[inline]
    pub fn vertices(&self) -> (PointIdx, PointIdx) {
        (self.nodes[0], self.nodes[1])
    }

    /// Low-order vertices followed by midside nodes.
    #[inline]
    pub fn nodes(&self) -> &[PointIdx] {
        &self.nodes
    }

    /// Boundary tags; empty for interior faces and for boundary faces that
    /// no record was matched to.
    #[inline]
    pub fn tags(&self) -> &[i32] {
        &self.tags
    }
}
