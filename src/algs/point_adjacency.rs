//! Points surrounding points through element edges.
//!
//! Same two-pass counting construction as the point→element index. The edge
//! rule comes from each element's [`ElementShape`]: in a triangle a vertex is
//! joined to both other vertices, in a quadrilateral only to its two cyclic
//! neighbors (never across the diagonal).
//!
//! A marker array stamped with the current point keeps a neighbor reached
//! through several elements from being counted twice. Rows are sorted
//! ascending after the fill pass.
//!
//! [`ElementShape`]: crate::topology::cell_type::ElementShape

use crate::topology::csr::{prefix_offsets, Csr};
use crate::topology::element::{Element, PointIdx};

const UNMARKED: usize = usize::MAX;

/// Call `visit` once for every point joined to `ip` by an element edge.
fn for_each_edge_neighbor(
    ip: PointIdx,
    elements: &[Element],
    point_elements: &Csr,
    marker: &mut [usize],
    mut visit: impl FnMut(PointIdx),
) {
    marker[ip] = ip;
    for &ie in point_elements.row(ip) {
        let elem = &elements[ie];
        let Some(li) = elem.local_vertex(ip) else {
            continue;
        };
        for (lj, &jp) in elem.vertices().iter().enumerate() {
            if marker[jp] != ip && elem.shape().vertices_adjacent(li, lj) {
                marker[jp] = ip;
                visit(jp);
            }
        }
    }
}

/// Pass 1: count the edge neighbors of every point and return the offsets.
pub fn count_point_neighbors(elements: &[Element], point_elements: &Csr) -> Vec<usize> {
    let n = point_elements.num_rows();
    let mut marker = vec![UNMARKED; n];
    let counts: Vec<usize> = (0..n)
        .map(|ip| {
            let mut c = 0;
            for_each_edge_neighbor(ip, elements, point_elements, &mut marker, |_| c += 1);
            c
        })
        .collect();
    prefix_offsets(&counts)
}

/// Pass 2: write the neighbors into the slots given by `offsets`.
pub fn fill_point_neighbors(
    elements: &[Element],
    point_elements: &Csr,
    offsets: &[usize],
) -> Vec<PointIdx> {
    let n = point_elements.num_rows();
    let mut marker = vec![UNMARKED; n];
    let mut indices = vec![0; offsets[n]];
    for ip in 0..n {
        let mut cursor = offsets[ip];
        for_each_edge_neighbor(ip, elements, point_elements, &mut marker, |jp| {
            indices[cursor] = jp;
            cursor += 1;
        });
        indices[offsets[ip]..offsets[ip + 1]].sort_unstable();
    }
    indices
}

/// Build the point→point CSR adjacency.
pub fn build_point_adjacency(elements: &[Element], point_elements: &Csr) -> Csr {
    let offsets = count_point_neighbors(elements, point_elements);
    let indices = fill_point_neighbors(elements, point_elements, &offsets);
    log::debug!("point adjacency: {} directed edges", indices.len());
    Csr::from_counted(offsets, indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::point_elements::build_point_elements;

    fn adjacency(rows: &[&[usize]], num_points: usize) -> Csr {
        let elements: Vec<Element> = rows
            .iter()
            .map(|r| Element::from_nodes(r.to_vec()).unwrap())
            .collect();
        let pe = build_point_elements(&elements, num_points);
        build_point_adjacency(&elements, &pe)
    }

    #[test]
    fn triangle_vertices_see_each_other() {
        let psup = adjacency(&[&[0, 1, 2], &[0, 2, 3]], 4);
        assert_eq!(psup.row(0), &[1, 2, 3]);
        assert_eq!(psup.row(1), &[0, 2]);
        assert_eq!(psup.row(2), &[0, 1, 3]);
        assert_eq!(psup.row(3), &[0, 2]);
    }

    #[test]
    fn quad_diagonal_is_excluded() {
        let psup = adjacency(&[&[0, 1, 2, 3]], 4);
        assert_eq!(psup.row(0), &[1, 3]);
        assert_eq!(psup.row(1), &[0, 2]);
        assert_eq!(psup.row(2), &[1, 3]);
        assert_eq!(psup.row(3), &[0, 2]);
    }

    #[test]
    fn shared_edge_counted_once_in_hybrid_mesh() {
        // quad 0-1-4-3 and triangle 1-2-4 share edge 1-4
        let psup = adjacency(&[&[0, 1, 4, 3], &[1, 2, 4]], 5);
        assert_eq!(psup.row(1), &[0, 2, 4]);
        assert_eq!(psup.row(4), &[1, 2, 3]);
        assert_eq!(psup.row(0), &[1, 3]);
        assert_eq!(psup.num_entries(), 12);
    }
}
