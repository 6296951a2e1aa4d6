//! Mesh I/O.
//!
//! Readers produce a [`RawMesh`]; topology is always rebuilt from the raw
//! tables with [`MeshTopology::build`](crate::topology::mesh_topology::MeshTopology::build).

pub mod gmsh;

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::mesh_error::MeshError;
use crate::topology::element::RawMesh;

/// Trait for mesh readers that produce raw mesh tables.
pub trait MeshReader {
    /// Parse a mesh from a reader.
    fn read<R: Read>(&self, reader: R) -> Result<RawMesh, MeshError>;

    /// Open and parse the file at `path`.
    fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<RawMesh, MeshError> {
        self.read(File::open(path)?)
    }
}

/// Trait for mesh writers that serialize raw mesh tables.
pub trait MeshWriter {
    /// Write a mesh to a writer.
    fn write<W: Write>(&self, writer: W, mesh: &RawMesh) -> Result<(), MeshError>;

    /// Create (or truncate) the file at `path` and write `mesh` to it.
    fn write_path<P: AsRef<Path>>(&self, path: P, mesh: &RawMesh) -> Result<(), MeshError> {
        self.write(BufWriter::new(File::create(path)?), mesh)
    }
}
