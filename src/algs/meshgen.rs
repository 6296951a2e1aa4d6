//! Structured rectangle generators for linear and quadratic hybrid meshes.
//!
//! Points live on a lattice refined by the element order; every element is
//! counter-clockwise and the four sides receive boundary records tagged
//! 1 (bottom), 2 (right), 3 (top) and 4 (left). Lattice points no element
//! uses (cell centers of 8-node quadrilaterals) are dropped.

use itertools::iproduct;

use crate::mesh_error::MeshError;
use crate::topology::cell_type::ElementShape;
use crate::topology::element::{BoundaryFaceRecord, Element, PointIdx, RawMesh};

pub const TAG_BOTTOM: i32 = 1;
pub const TAG_RIGHT: i32 = 2;
pub const TAG_TOP: i32 = 3;
pub const TAG_LEFT: i32 = 4;

fn invalid_geometry(message: impl Into<String>) -> MeshError {
    MeshError::InvalidGeometry(message.into())
}

/// Lattice indices of one structured cell.
struct Cell {
    c: [PointIdx; 4],
    /// midside nodes of the bottom, right, top and left sides
    m: [PointIdx; 4],
    center: PointIdx,
}

impl Cell {
    fn new(i: usize, j: usize, order: usize, stride: usize) -> Self {
        let at = |ii: usize, jj: usize| jj * stride + ii;
        let (i0, j0, o) = (i * order, j * order, order);
        let h = order / 2;
        Self {
            c: [at(i0, j0), at(i0 + o, j0), at(i0 + o, j0 + o), at(i0, j0 + o)],
            m: [
                at(i0 + h, j0),
                at(i0 + o, j0 + h),
                at(i0 + h, j0 + o),
                at(i0, j0 + h),
            ],
            center: at(i0 + h, j0 + h),
        }
    }

    fn elements(&self, shape: ElementShape) -> Vec<Vec<PointIdx>> {
        let [c0, c1, c2, c3] = self.c;
        let [m01, m12, m23, m30] = self.m;
        match shape {
            ElementShape::Triangle3 => vec![vec![c0, c1, c2], vec![c0, c2, c3]],
            ElementShape::Triangle6 => vec![
                vec![c0, c1, c2, m01, m12, self.center],
                vec![c0, c2, c3, self.center, m23, m30],
            ],
            ElementShape::Quadrilateral4 => vec![vec![c0, c1, c2, c3]],
            ElementShape::Quadrilateral8 => vec![vec![c0, c1, c2, c3, m01, m12, m23, m30]],
            ElementShape::Quadrilateral9 => {
                vec![vec![c0, c1, c2, c3, m01, m12, m23, m30, self.center]]
            }
        }
    }

    /// Boundary record along `side` (0 bottom .. 3 left), oriented with the cell.
    fn side(&self, side: usize, quadratic: bool, tag: i32) -> BoundaryFaceRecord {
        let mut nodes = vec![self.c[side], self.c[(side + 1) % 4]];
        if quadratic {
            nodes.push(self.m[side]);
        }
        BoundaryFaceRecord::new(nodes, vec![tag])
    }
}

/// Generate an `nx`×`ny` structured mesh of `shape` over `[min, max]`.
///
/// Triangular meshes split every cell along its `min`→`max` diagonal.
pub fn structured_rectangle(
    nx: usize,
    ny: usize,
    min: [f64; 2],
    max: [f64; 2],
    shape: ElementShape,
) -> Result<RawMesh, MeshError> {
    if nx == 0 || ny == 0 {
        return Err(invalid_geometry("nx and ny must be positive"));
    }
    if !(max[0] > min[0] && max[1] > min[1]) {
        return Err(invalid_geometry(format!(
            "empty rectangle [{min:?}, {max:?}]"
        )));
    }

    let order = usize::from(shape.order());
    let quadratic = order == 2;
    let (lx, ly) = (order * nx, order * ny);
    let stride = lx + 1;
    let dx = (max[0] - min[0]) / lx as f64;
    let dy = (max[1] - min[1]) / ly as f64;
    let lattice: Vec<[f64; 2]> = iproduct!(0..=ly, 0..=lx)
        .map(|(j, i)| [min[0] + dx * i as f64, min[1] + dy * j as f64])
        .collect();

    let mut conn = Vec::new();
    for (j, i) in iproduct!(0..ny, 0..nx) {
        conn.extend(Cell::new(i, j, order, stride).elements(shape));
    }

    let mut records = Vec::with_capacity(2 * (nx + ny));
    for i in 0..nx {
        records.push(Cell::new(i, 0, order, stride).side(0, quadratic, TAG_BOTTOM));
    }
    for j in 0..ny {
        records.push(Cell::new(nx - 1, j, order, stride).side(1, quadratic, TAG_RIGHT));
    }
    for i in (0..nx).rev() {
        records.push(Cell::new(i, ny - 1, order, stride).side(2, quadratic, TAG_TOP));
    }
    for j in (0..ny).rev() {
        records.push(Cell::new(0, j, order, stride).side(3, quadratic, TAG_LEFT));
    }

    // compact away lattice points no element references
    let mut renum = vec![usize::MAX; lattice.len()];
    let mut coords = Vec::with_capacity(lattice.len());
    for &p in conn.iter().flatten() {
        if renum[p] == usize::MAX {
            renum[p] = coords.len();
            coords.push(lattice[p]);
        }
    }
    let elements = conn
        .into_iter()
        .map(|nodes| Element::new(shape, nodes.into_iter().map(|p| renum[p]).collect()))
        .collect::<Result<Vec<_>, _>>()?;
    let boundary_faces = records
        .into_iter()
        .map(|r| {
            let nodes = r.nodes().iter().map(|&p| renum[p]).collect();
            BoundaryFaceRecord::new(nodes, r.tags().to_vec())
        })
        .collect();

    log::debug!(
        "structured {nx}x{ny} {shape} mesh: {} points, {} elements",
        coords.len(),
        elements.len()
    );
    Ok(RawMesh::new(coords, elements, boundary_faces))
}

/// Unit square `[0, 1]²` shorthand for [`structured_rectangle`].
pub fn unit_square(n: usize, shape: ElementShape) -> Result<RawMesh, MeshError> {
    structured_rectangle(n, n, [0.0, 0.0], [1.0, 1.0], shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_quad_counts() {
        let raw = structured_rectangle(3, 2, [0.0, 0.0], [3.0, 2.0], ElementShape::Quadrilateral4)
            .unwrap();
        assert_eq!(raw.num_points(), 12);
        assert_eq!(raw.num_elements(), 6);
        assert_eq!(raw.num_boundary_records(), 10);
        assert_eq!(raw.coords[11], [3.0, 2.0]);
    }

    #[test]
    fn quad8_drops_cell_centers() {
        let raw = unit_square(2, ElementShape::Quadrilateral8).unwrap();
        // 5x5 lattice minus the 4 cell centers
        assert_eq!(raw.num_points(), 21);
        let q9 = unit_square(2, ElementShape::Quadrilateral9).unwrap();
        assert_eq!(q9.num_points(), 25);
    }

    #[test]
    fn boundary_tags_by_side() {
        let raw = unit_square(2, ElementShape::Triangle6).unwrap();
        let tags: Vec<i32> = raw.boundary_faces.iter().map(|r| r.tags()[0]).collect();
        assert_eq!(tags, vec![1, 1, 2, 2, 3, 3, 4, 4]);
        assert!(raw.boundary_faces.iter().all(|r| r.nodes().len() == 3));
    }

    #[test]
    fn zero_cells_rejected() {
        assert!(matches!(
            unit_square(0, ElementShape::Triangle3),
            Err(MeshError::InvalidGeometry(_))
        ));
    }
}
