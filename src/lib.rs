#![cfg_attr(docsrs, feature(doc_cfg))]
//! # hybrid-mesh
//!
//! hybrid-mesh builds the connectivity of unstructured two-dimensional hybrid
//! meshes (triangles and quadrilaterals, linear or quadratic) for
//! finite-element and discontinuous Galerkin solvers.
//!
//! ## Features
//! - Point→element and point→point adjacency in compressed (CSR) form
//! - Element→element neighbors with explicit boundary markers
//! - A canonical, deduplicated face list: boundary faces first, each interior
//!   face owned by its lower-indexed element
//! - Boundary records oriented along their owning elements and matched to
//!   canonical faces, with tag propagation
//! - Gmsh 2.2 ASCII reading/writing and structured rectangle generators
//!
//! ## Usage
//!
//! ```
//! use hybrid_mesh::prelude::*;
//!
//! let raw = unit_square(2, ElementShape::Triangle3)?;
//! let topo = MeshTopology::build(&raw, &TopologyOptions::default())?;
//! assert_eq!(topo.num_faces(), 16);
//! assert_eq!(topo.num_boundary_faces(), 8);
//! # Ok::<(), hybrid_mesh::mesh_error::MeshError>(())
//! ```
//!
//! Topology is built once and is read-only afterwards; a [`MeshTopology`]
//! can be shared across threads.
//!
//! [`MeshTopology`]: topology::mesh_topology::MeshTopology

pub mod algs;
pub mod debug_invariants;
pub mod geometry;
pub mod io;
pub mod mesh;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::meshgen::{structured_rectangle, unit_square};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::metrics::MeshGeometry;
    pub use crate::io::gmsh::{GmshReader, GmshWriter};
    pub use crate::io::{MeshReader, MeshWriter};
    pub use crate::mesh::{Mesh, MeshStats};
    pub use crate::mesh_error::MeshError;
    pub use crate::topology::cell_type::ElementShape;
    pub use crate::topology::element::{BoundaryFaceRecord, Element, RawMesh};
    pub use crate::topology::face::{CanonicalFace, FaceSide};
    pub use crate::topology::mesh_topology::MeshTopology;
    pub use crate::topology::neighbor::Neighbor;
    pub use crate::topology::options::{BoundaryMatchPolicy, TopologyOptions, UnknownShapePolicy};
}
