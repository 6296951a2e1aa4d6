//! Shape descriptors for 2D mesh elements.
//!
//! Every supported element is a triangle or a quadrilateral of geometric order
//! one or two. Nodes are ordered vertices first, then the midside nodes of
//! each face in face order, then interior nodes. Local face `k` runs from local
//! vertex `k` to local vertex `(k + 1) % num_faces`.

use serde::{Deserialize, Serialize};

/// Supported element shapes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ElementShape {
    /// 3-node linear triangle.
    Triangle3,
    /// 6-node quadratic triangle.
    Triangle6,
    /// 4-node bilinear quadrilateral.
    Quadrilateral4,
    /// 8-node serendipity quadrilateral.
    Quadrilateral8,
    /// 9-node Lagrange quadrilateral (one interior node).
    Quadrilateral9,
}

/// Topological family of a shape, used for adjacency rules.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ShapeFamily {
    Triangle,
    Quadrilateral,
}

impl ElementShape {
    /// Look up a shape from its total node count.
    ///
    /// Node counts are unique across the supported shapes, so this is the
    /// inverse of [`ElementShape::num_nodes`].
    pub fn from_node_count(nodes: usize) -> Option<Self> {
        match nodes {
            3 => Some(ElementShape::Triangle3),
            6 => Some(ElementShape::Triangle6),
            4 => Some(ElementShape::Quadrilateral4),
            8 => Some(ElementShape::Quadrilateral8),
            9 => Some(ElementShape::Quadrilateral9),
            _ => None,
        }
    }

    /// Gmsh 2.x element type code.
    pub fn gmsh_type(self) -> u32 {
        match self {
            ElementShape::Triangle3 => 2,
            ElementShape::Quadrilateral4 => 3,
            ElementShape::Triangle6 => 9,
            ElementShape::Quadrilateral9 => 10,
            ElementShape::Quadrilateral8 => 16,
        }
    }

    /// Inverse of [`ElementShape::gmsh_type`].
    pub fn from_gmsh_type(code: u32) -> Option<Self> {
        match code {
            2 => Some(ElementShape::Triangle3),
            3 => Some(ElementShape::Quadrilateral4),
            9 => Some(ElementShape::Triangle6),
            10 => Some(ElementShape::Quadrilateral9),
            16 => Some(ElementShape::Quadrilateral8),
            _ => None,
        }
    }

    pub fn family(self) -> ShapeFamily {
        match self {
            ElementShape::Triangle3 | ElementShape::Triangle6 => ShapeFamily::Triangle,
            ElementShape::Quadrilateral4
            | ElementShape::Quadrilateral8
            | ElementShape::Quadrilateral9 => ShapeFamily::Quadrilateral,
        }
    }

    /// Total number of nodes, low- and high-order.
    pub fn num_nodes(self) -> usize {
        match self {
            ElementShape::Triangle3 => 3,
            ElementShape::Triangle6 => 6,
            ElementShape::Quadrilateral4 => 4,
            ElementShape::Quadrilateral8 => 8,
            ElementShape::Quadrilateral9 => 9,
        }
    }

    /// Number of corner vertices; equal to the number of faces in 2D.
    pub fn num_vertices(self) -> usize {
        match self.family() {
            ShapeFamily::Triangle => 3,
            ShapeFamily::Quadrilateral => 4,
        }
    }

    pub fn num_faces(self) -> usize {
        self.num_vertices()
    }

    /// Nodes that belong to no face.
    pub fn num_interior_nodes(self) -> usize {
        match self {
            ElementShape::Quadrilateral9 => 1,
            _ => 0,
        }
    }

    /// Geometric polynomial order.
    pub fn order(self) -> u8 {
        match self {
            ElementShape::Triangle3 | ElementShape::Quadrilateral4 => 1,
            _ => 2,
        }
    }

    /// Midside nodes carried by each face.
    pub fn high_order_nodes_per_face(self) -> usize {
        (self.num_nodes() - self.num_vertices() - self.num_interior_nodes()) / self.num_faces()
    }

    /// Total nodes on one face (two vertices plus midside nodes).
    pub fn nodes_per_face(self) -> usize {
        2 + self.high_order_nodes_per_face()
    }

    /// Local vertex indices `(start, end)` bounding local face `face`.
    #[inline]
    pub fn face_vertices(self, face: usize) -> (usize, usize) {
        let n = self.num_faces();
        (face, (face + 1) % n)
    }

    /// Local node indices of the midside nodes of local face `face`.
    pub fn face_high_order_nodes(self, face: usize) -> std::ops::Range<usize> {
        let nhigh = self.high_order_nodes_per_face();
        let start = self.num_faces() + face * nhigh;
        start..start + nhigh
    }

    /// Local face whose endpoints are the local vertices `a` and `b`, in
    /// either order.
    pub fn local_face_between(self, a: usize, b: usize) -> Option<usize> {
        (0..self.num_faces()).find(|&k| {
            let (s, e) = self.face_vertices(k);
            (s == a && e == b) || (s == b && e == a)
        })
    }

    /// Whether local vertices `a` and `b` are joined by an element edge.
    ///
    /// In a triangle every pair of distinct vertices is an edge; in a
    /// quadrilateral only cyclic neighbors are, never the diagonal.
    pub fn vertices_adjacent(self, a: usize, b: usize) -> bool {
        if a == b {
            return false;
        }
        match self.family() {
            ShapeFamily::Triangle => true,
            ShapeFamily::Quadrilateral => {
                let n = self.num_vertices();
                b == (a + 1) % n || a == (b + 1) % n
            }
        }
    }
}

impl std::fmt::Display for ElementShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.family() {
            ShapeFamily::Triangle => "triangle",
            ShapeFamily::Quadrilateral => "quadrilateral",
        };
        write!(f, "{}-node {name}", self.num_nodes())
    }
}
