//! Topology construction algorithms, in the order [`MeshTopology::build`]
//! runs them.
//!
//! [`MeshTopology::build`]: crate::topology::mesh_topology::MeshTopology::build

pub mod point_elements;
pub mod boundary_orientation;
pub mod element_neighbors;
pub mod face_enumeration;
pub mod boundary;
pub mod point_adjacency;
pub mod meshgen;

pub use boundary::BoundaryMaps;
pub use element_neighbors::ElementNeighbors;
pub use face_enumeration::FaceTable;
