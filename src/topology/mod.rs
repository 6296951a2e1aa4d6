//! Mesh topology types.
//!
//! - [`cell_type`]: element shape descriptors
//! - [`element`]: the raw input tables
//! - [`csr`]: compressed row adjacency
//! - [`neighbor`], [`face`]: neighbor slots and canonical faces
//! - [`mesh_topology`]: the assembled, read-only [`MeshTopology`]

pub mod cell_type;
pub mod csr;
pub mod element;
pub mod face;
pub mod mesh_topology;
pub mod neighbor;
pub mod options;
pub mod validation;

pub use cell_type::{ElementShape, ShapeFamily};
pub use csr::Csr;
pub use element::{BoundaryFaceRecord, ElemIdx, Element, FaceIdx, PointIdx, RawMesh};
pub use face::{CanonicalFace, FaceSide};
pub use mesh_topology::MeshTopology;
pub use neighbor::Neighbor;
pub use options::TopologyOptions;
