//! Size metrics for elements and faces.
//!
//! Diameters use every node of an element, high-order nodes included. Areas
//! use the polygon through the low-order vertices, so curved quadratic edges
//! are measured by their chords.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::topology::element::{Element, RawMesh};
use crate::topology::face::CanonicalFace;
use crate::topology::mesh_topology::MeshTopology;

#[inline]
fn dist(a: [f64; 2], b: [f64; 2]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}

/// Largest distance between any two nodes of `elem`.
pub fn element_diameter(coords: &[[f64; 2]], elem: &Element) -> f64 {
    let nodes = elem.nodes();
    let mut diam: f64 = 0.0;
    for (i, &p) in nodes.iter().enumerate() {
        for &q in &nodes[i + 1..] {
            diam = diam.max(dist(coords[p], coords[q]));
        }
    }
    diam
}

/// Signed shoelace area of the vertex polygon; positive when the vertices
/// run counter-clockwise.
pub fn signed_area(coords: &[[f64; 2]], elem: &Element) -> f64 {
    let v = elem.vertices();
    let n = v.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let a = coords[v[i]];
            let b = coords[v[(i + 1) % n]];
            a[0] * b[1] - b[0] * a[1]
        })
        .sum();
    0.5 * twice
}

/// Unsigned area of `elem`.
#[inline]
pub fn element_area(coords: &[[f64; 2]], elem: &Element) -> f64 {
    signed_area(coords, elem).abs()
}

/// Length of the chord between a face's two low-order vertices.
#[inline]
pub fn face_length(coords: &[[f64; 2]], face: &CanonicalFace) -> f64 {
    let (a, b) = face.vertices();
    dist(coords[a], coords[b])
}

/// Per-element and per-face size data of a mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshGeometry {
    diameters: Vec<f64>,
    areas: Vec<f64>,
    face_lengths: Vec<f64>,
}

impl MeshGeometry {
    pub fn compute(raw: &RawMesh, topo: &MeshTopology) -> Self {
        let coords = raw.coords.as_slice();
        #[cfg(feature = "rayon")]
        let (diameters, areas, face_lengths) = (
            raw.elements
                .par_iter()
                .map(|e| element_diameter(coords, e))
                .collect(),
            raw.elements
                .par_iter()
                .map(|e| element_area(coords, e))
                .collect(),
            topo.faces()
                .par_iter()
                .map(|f| face_length(coords, f))
                .collect(),
        );
        #[cfg(not(feature = "rayon"))]
        let (diameters, areas, face_lengths) = (
            raw.elements
                .iter()
                .map(|e| element_diameter(coords, e))
                .collect(),
            raw.elements
                .iter()
                .map(|e| element_area(coords, e))
                .collect(),
            topo.faces()
                .iter()
                .map(|f| face_length(coords, f))
                .collect(),
        );
        Self {
            diameters,
            areas,
            face_lengths,
        }
    }

    #[inline]
    pub fn diameter(&self, elem: usize) -> f64 {
        self.diameters[elem]
    }

    #[inline]
    pub fn area(&self, elem: usize) -> f64 {
        self.areas[elem]
    }

    #[inline]
    pub fn face_length(&self, face: usize) -> f64 {
        self.face_lengths[face]
    }

    /// Total area of the mesh.
    pub fn total_area(&self) -> f64 {
        self.areas.iter().sum()
    }

    /// The mesh size parameter `h`: the largest element diameter.
    pub fn mesh_size_parameter(&self) -> f64 {
        self.diameters.iter().copied().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn unit_square_quad() {
        let coords = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let q = Element::from_nodes(vec![0, 1, 2, 3]).unwrap();
        assert!((element_area(&coords, &q) - 1.0).abs() < EPS);
        assert!((element_diameter(&coords, &q) - 2f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn clockwise_triangle_has_negative_signed_area() {
        let coords = [[0.0, 0.0], [1.0, 0.0], [0.0, 2.0]];
        let ccw = Element::from_nodes(vec![0, 1, 2]).unwrap();
        let cw = Element::from_nodes(vec![0, 2, 1]).unwrap();
        assert!((signed_area(&coords, &ccw) - 1.0).abs() < EPS);
        assert!((signed_area(&coords, &cw) + 1.0).abs() < EPS);
        assert!((element_area(&coords, &cw) - 1.0).abs() < EPS);
    }
}
