//! Configuration for topology construction.

use serde::{Deserialize, Serialize};

/// How the boundary matcher treats records and faces it cannot pair up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryMatchPolicy {
    /// Any unmatched record, duplicate record or uncovered boundary face is an error.
    #[default]
    Strict,
    /// Log a warning and leave the map entry empty.
    Lenient,
}

/// How mesh readers treat element type codes with no supported shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnknownShapePolicy {
    /// Return [`MeshError::UnsupportedElementType`](crate::mesh_error::MeshError::UnsupportedElementType).
    #[default]
    Reject,
    /// Read the first three nodes as a linear triangle and log a warning.
    TreatAsLinearTriangle,
}

/// Options for building a [`MeshTopology`](crate::topology::mesh_topology::MeshTopology).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyOptions {
    pub boundary_matching: BoundaryMatchPolicy,
    pub unknown_shapes: UnknownShapePolicy,
    /// Run the full invariant check after construction.
    pub check_invariants: bool,
}

impl Default for TopologyOptions {
    fn default() -> Self {
        Self {
            boundary_matching: BoundaryMatchPolicy::Strict,
            unknown_shapes: UnknownShapePolicy::Reject,
            check_invariants: cfg!(debug_assertions),
        }
    }
}

impl TopologyOptions {
    /// Every check enabled, every recoverable problem fatal.
    pub fn strict() -> Self {
        Self {
            boundary_matching: BoundaryMatchPolicy::Strict,
            unknown_shapes: UnknownShapePolicy::Reject,
            check_invariants: true,
        }
    }

    /// Historic behavior: skip unmatched boundary records, read unknown
    /// element types as linear triangles.
    pub fn lenient() -> Self {
        Self {
            boundary_matching: BoundaryMatchPolicy::Lenient,
            unknown_shapes: UnknownShapePolicy::TreatAsLinearTriangle,
            check_invariants: false,
        }
    }
}
