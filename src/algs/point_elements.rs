//! Elements surrounding each point.
//!
//! Two-pass counting construction over the low-order vertices of every
//! element: [`count_incidences`] produces the offsets, [`fill_incidences`]
//! scatters element ids into them. High-order nodes are not indexed.
//!
//! Each row lists its elements in ascending order, since the fill pass walks
//! elements in index order. The neighbor resolver relies on this for its
//! sorted-set intersections.

use crate::topology::csr::{prefix_offsets, Csr};
use crate::topology::element::Element;

/// Pass 1: count how many elements reference each point and return the
/// prefix offsets (length `num_points + 1`).
pub fn count_incidences(elements: &[Element], num_points: usize) -> Vec<usize> {
    let mut counts = vec![0usize; num_points];
    for elem in elements {
        for &p in elem.vertices() {
            counts[p] += 1;
        }
    }
    prefix_offsets(&counts)
}

/// Pass 2: place every `(point, element)` pair into its point's slot range.
pub fn fill_incidences(elements: &[Element], offsets: &[usize]) -> Vec<usize> {
    let total = offsets.last().copied().unwrap_or(0);
    let mut indices = vec![0usize; total];
    let mut cursor: Vec<usize> = offsets[..offsets.len().saturating_sub(1)].to_vec();
    for (ie, elem) in elements.iter().enumerate() {
        for &p in elem.vertices() {
            indices[cursor[p]] = ie;
            cursor[p] += 1;
        }
    }
    indices
}

/// Build the point→element CSR index.
pub fn build_point_elements(elements: &[Element], num_points: usize) -> Csr {
    let offsets = count_incidences(elements, num_points);
    let indices = fill_incidences(elements, &offsets);
    log::debug!(
        "point-element index: {} points, {} incidences",
        num_points,
        indices.len()
    );
    Csr::from_counted(offsets, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elems(rows: &[&[usize]]) -> Vec<Element> {
        rows.iter()
            .map(|r| Element::from_nodes(r.to_vec()).unwrap())
            .collect()
    }

    #[test]
    fn two_triangles_on_a_square() {
        let elements = elems(&[&[0, 1, 2], &[0, 2, 3]]);
        let offsets = count_incidences(&elements, 4);
        assert_eq!(offsets, vec![0, 2, 3, 5, 6]);
        let idx = build_point_elements(&elements, 4);
        assert_eq!(idx.row(0), &[0, 1]);
        assert_eq!(idx.row(1), &[0]);
        assert_eq!(idx.row(2), &[0, 1]);
        assert_eq!(idx.row(3), &[1]);
    }

    #[test]
    fn high_order_nodes_are_not_indexed() {
        let elements = elems(&[&[0, 1, 2, 3, 4, 5]]);
        let idx = build_point_elements(&elements, 6);
        assert_eq!(idx.num_entries(), 3);
        assert!(idx.row(4).is_empty());
    }

    #[test]
    fn isolated_points_get_empty_rows() {
        let elements = elems(&[&[1, 2, 3]]);
        let idx = build_point_elements(&elements, 5);
        assert!(idx.row(0).is_empty());
        assert!(idx.row(4).is_empty());
        assert_eq!(idx.offsets().len(), 6);
    }
}
