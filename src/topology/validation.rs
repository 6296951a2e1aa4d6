//! Structural checks on the raw input tables.
//!
//! Run before any topology phase so the algorithms can index freely.

use crate::mesh_error::MeshError;
use crate::topology::element::RawMesh;

/// Validate the incidence table and boundary records of `raw`.
///
/// Checks, in order: element node counts, node ranges, repeated element
/// vertices, boundary record lengths and ranges, boundary tag widths and the
/// region tag table length.
pub fn validate_raw_mesh(raw: &RawMesh) -> Result<(), MeshError> {
    let num_points = raw.num_points();

    for (ie, elem) in raw.elements.iter().enumerate() {
        let expected = elem.shape().num_nodes();
        if elem.nodes().len() != expected {
            return Err(MeshError::NodeCountMismatch {
                element: ie,
                expected,
                found: elem.nodes().len(),
            });
        }
        if let Some(&p) = elem.nodes().iter().find(|&&p| p >= num_points) {
            return Err(MeshError::VertexOutOfRange {
                entity: format!("element {ie}"),
                point: p,
                num_points,
            });
        }
        let verts = elem.vertices();
        for (i, &p) in verts.iter().enumerate() {
            if verts[i + 1..].contains(&p) {
                return Err(MeshError::DegenerateElement {
                    element: ie,
                    point: p,
                });
            }
        }
    }

    let ntags = raw.num_boundary_tags();
    for (ir, rec) in raw.boundary_faces.iter().enumerate() {
        if rec.nodes().len() < 2 || rec.nodes()[0] == rec.nodes()[1] {
            return Err(MeshError::BoundaryRecordTooShort { record: ir });
        }
        if let Some(&p) = rec.nodes().iter().find(|&&p| p >= num_points) {
            return Err(MeshError::VertexOutOfRange {
                entity: format!("boundary record {ir}"),
                point: p,
                num_points,
            });
        }
        if rec.tags().len() != ntags {
            return Err(MeshError::TagWidthMismatch {
                record: ir,
                expected: ntags,
                found: rec.tags().len(),
            });
        }
    }

    if !raw.region_tags.is_empty() && raw.region_tags.len() != raw.num_elements() {
        return Err(MeshError::InvariantViolation(format!(
            "{} region tag rows for {} elements",
            raw.region_tags.len(),
            raw.num_elements()
        )));
    }

    Ok(())
}
