//! `Mesh`: raw tables, topology and geometry in one value.
//!
//! [`Mesh::prepare`] runs the whole pipeline once; afterwards the mesh is
//! read-only and may be shared between threads.

use std::fmt;

use crate::geometry::metrics::MeshGeometry;
use crate::io::MeshReader;
use crate::io::gmsh::GmshReader;
use crate::mesh_error::MeshError;
use crate::topology::element::RawMesh;
use crate::topology::mesh_topology::MeshTopology;
use crate::topology::options::TopologyOptions;

/// A prepared mesh.
#[derive(Clone, Debug)]
pub struct Mesh {
    raw: RawMesh,
    topology: MeshTopology,
    geometry: MeshGeometry,
}

impl Mesh {
    /// Build topology and geometry for `raw`.
    pub fn prepare(raw: RawMesh, opts: &TopologyOptions) -> Result<Self, MeshError> {
        let topology = MeshTopology::build(&raw, opts)?;
        let geometry = MeshGeometry::compute(&raw, &topology);
        let mesh = Self {
            raw,
            topology,
            geometry,
        };
        log::info!("{}", mesh.stats());
        Ok(mesh)
    }

    /// Read a Gmsh 2.2 file and prepare it.
    pub fn from_gmsh<R: std::io::Read>(
        reader: R,
        opts: &TopologyOptions,
    ) -> Result<Self, MeshError> {
        let raw = GmshReader::new(opts.unknown_shapes).read(reader)?;
        Self::prepare(raw, opts)
    }

    #[inline]
    pub fn raw(&self) -> &RawMesh {
        &self.raw
    }

    #[inline]
    pub fn topology(&self) -> &MeshTopology {
        &self.topology
    }

    #[inline]
    pub fn geometry(&self) -> &MeshGeometry {
        &self.geometry
    }

    #[inline]
    pub fn coords(&self) -> &[[f64; 2]] {
        &self.raw.coords
    }

    /// Region tags of `elem`, empty when the mesh carries none.
    pub fn region_tags(&self, elem: usize) -> &[i32] {
        self.raw.region_tags.get(elem).map_or(&[][..], Vec::as_slice)
    }

    pub fn stats(&self) -> MeshStats {
        let elements = &self.raw.elements;
        MeshStats {
            num_points: self.raw.num_points(),
            num_elements: self.raw.num_elements(),
            num_boundary_records: self.raw.num_boundary_records(),
            num_faces: self.topology.num_faces(),
            num_boundary_faces: self.topology.num_boundary_faces(),
            num_boundary_points: self.topology.num_boundary_points(),
            max_nodes_per_element: elements.iter().map(|e| e.nodes().len()).max().unwrap_or(0),
            max_nodes_per_face: elements
                .iter()
                .map(|e| e.shape().nodes_per_face())
                .max()
                .unwrap_or(0),
            max_faces_per_element: elements.iter().map(|e| e.num_faces()).max().unwrap_or(0),
            geometric_degree: elements
                .iter()
                .map(|e| e.shape().order())
                .max()
                .unwrap_or(0),
            mesh_size: self.geometry.mesh_size_parameter(),
        }
    }
}

/// Summary counts of a prepared mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshStats {
    pub num_points: usize,
    pub num_elements: usize,
    pub num_boundary_records: usize,
    pub num_faces: usize,
    pub num_boundary_faces: usize,
    pub num_boundary_points: usize,
    pub max_nodes_per_element: usize,
    pub max_nodes_per_face: usize,
    pub max_faces_per_element: usize,
    /// Highest polynomial order of any element.
    pub geometric_degree: u8,
    /// Largest element diameter.
    pub mesh_size: f64,
}

impl fmt::Display for MeshStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mesh statistics:")?;
        writeln!(f, "  points:                {}", self.num_points)?;
        writeln!(f, "  elements:              {}", self.num_elements)?;
        writeln!(f, "  boundary faces (raw):  {}", self.num_boundary_records)?;
        writeln!(
            f,
            "  faces:                 {} ({} boundary)",
            self.num_faces, self.num_boundary_faces
        )?;
        writeln!(f, "  boundary points:       {}", self.num_boundary_points)?;
        writeln!(f, "  max nodes / element:   {}", self.max_nodes_per_element)?;
        writeln!(f, "  max nodes / face:      {}", self.max_nodes_per_face)?;
        writeln!(f, "  max faces / element:   {}", self.max_faces_per_element)?;
        writeln!(f, "  geometric degree:      {}", self.geometric_degree)?;
        write!(f, "  mesh size h:           {:.6e}", self.mesh_size)
    }
}
