//! Raw input tables: the element incidence table and the boundary-face records.
//!
//! These are produced once by a mesh reader (or generator) and never mutated
//! by topology construction.

use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshError;
use crate::topology::cell_type::ElementShape;

/// Index of a mesh point (node).
pub type PointIdx = usize;
/// Index of an element.
pub type ElemIdx = usize;
/// Index of a canonical face.
pub type FaceIdx = usize;

/// One row of the element incidence table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    shape: ElementShape,
    nodes: Vec<PointIdx>,
}

impl Element {
    /// Create an element, checking the node count against the shape.
    pub fn new(shape: ElementShape, nodes: Vec<PointIdx>) -> Result<Self, MeshError> {
        if nodes.len() != shape.num_nodes() {
            return Err(MeshError::ShapeNodeCount {
                shape,
                expected: shape.num_nodes(),
                found: nodes.len(),
            });
        }
        Ok(Self { shape, nodes })
    }

    /// Infer the shape from the node count.
    pub fn from_nodes(nodes: Vec<PointIdx>) -> Result<Self, MeshError> {
        let shape = ElementShape::from_node_count(nodes.len())
            .ok_or(MeshError::UnsupportedShape { nodes: nodes.len() })?;
        Ok(Self { shape, nodes })
    }

    #[inline]
    pub fn shape(&self) -> ElementShape {
        self.shape
    }

    /// All nodes, vertices first.
    #[inline]
    pub fn nodes(&self) -> &[PointIdx] {
        &self.nodes
    }

    /// The low-order (corner) vertices.
    #[inline]
    pub fn vertices(&self) -> &[PointIdx] {
        &self.nodes[..self.shape.num_vertices()]
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.shape.num_faces()
    }

    /// Global vertices `(start, end)` of local face `face` in this element's
    /// orientation.
    #[inline]
    pub fn face_vertices(&self, face: usize) -> (PointIdx, PointIdx) {
        let (a, b) = self.shape.face_vertices(face);
        (self.nodes[a], self.nodes[b])
    }

    /// Global midside nodes of local face `face`.
    #[inline]
    pub fn face_high_order_nodes(&self, face: usize) -> &[PointIdx] {
        &self.nodes[self.shape.face_high_order_nodes(face)]
    }

    /// Local position of global point `p` among the vertices.
    pub fn local_vertex(&self, p: PointIdx) -> Option<usize> {
        self.vertices().iter().position(|&v| v == p)
    }

    /// Local face whose two global vertices are `a` and `b` (either order).
    pub fn local_face_with_vertices(&self, a: PointIdx, b: PointIdx) -> Option<usize> {
        let la = self.local_vertex(a)?;
        let lb = self.local_vertex(b)?;
        self.shape.local_face_between(la, lb)
    }
}

/// One externally supplied boundary face: two low-order vertices, any
/// midside nodes, and a fixed-width tag vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryFaceRecord {
    nodes: Vec<PointIdx>,
    tags: Vec<i32>,
}

impl BoundaryFaceRecord {
    pub fn new(nodes: Vec<PointIdx>, tags: Vec<i32>) -> Self {
        Self { nodes, tags }
    }

    /// Record for a linear face.
    pub fn linear(a: PointIdx, b: PointIdx, tags: Vec<i32>) -> Self {
        Self::new(vec![a, b], tags)
    }

    #[inline]
    pub fn nodes(&self) -> &[PointIdx] {
        &self.nodes
    }

    /// The two low-order vertices in record order.
    #[inline]
    pub fn vertices(&self) -> (PointIdx, PointIdx) {
        (self.nodes[0], self.nodes[1])
    }

    #[inline]
    pub fn high_order_nodes(&self) -> &[PointIdx] {
        &self.nodes[2..]
    }

    #[inline]
    pub fn tags(&self) -> &[i32] {
        &self.tags
    }

    /// Reverse the orientation: swap the vertices and reverse the midside nodes.
    pub fn reversed(&self) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        nodes.push(self.nodes[1]);
        nodes.push(self.nodes[0]);
        nodes.extend(self.nodes[2..].iter().rev());
        Self {
            nodes,
            tags: self.tags.clone(),
        }
    }
}

/// The raw mesh as delivered by a reader: coordinates, incidence table,
/// boundary records and per-element region tags.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMesh {
    pub coords: Vec<[f64; 2]>,
    pub elements: Vec<Element>,
    pub boundary_faces: Vec<BoundaryFaceRecord>,
    /// Region tags per element; empty or one entry per element.
    pub region_tags: Vec<Vec<i32>>,
}

impl RawMesh {
    pub fn new(
        coords: Vec<[f64; 2]>,
        elements: Vec<Element>,
        boundary_faces: Vec<BoundaryFaceRecord>,
    ) -> Self {
        Self {
            coords,
            elements,
            boundary_faces,
            region_tags: Vec::new(),
        }
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn num_boundary_records(&self) -> usize {
        self.boundary_faces.len()
    }

    /// Width of the boundary tag vectors (taken from the first record).
    pub fn num_boundary_tags(&self) -> usize {
        self.boundary_faces.first().map_or(0, |r| r.tags().len())
    }
}
