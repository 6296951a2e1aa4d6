//! Reconcile boundary-record orientation with the owning element.
//!
//! The face enumerator orients every boundary face along its owning element's
//! local vertex order. A raw boundary record that runs the other way is
//! reversed here so records and canonical faces agree. The raw records are
//! left untouched; a corrected copy is returned.

use crate::mesh_error::MeshError;
use crate::topology::csr::{sorted_intersection_into, Csr};
use crate::topology::element::{BoundaryFaceRecord, ElemIdx, Element};
use crate::topology::options::BoundaryMatchPolicy;

/// The element owning a boundary record and the record's local face there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryHost {
    pub element: ElemIdx,
    pub local_face: usize,
}

/// Boundary records oriented consistently with their owning elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrientedBoundary {
    pub records: Vec<BoundaryFaceRecord>,
    /// Host of each record; `None` for records kept unchanged under
    /// [`BoundaryMatchPolicy::Lenient`] because no unique host exists.
    pub hosts: Vec<Option<BoundaryHost>>,
    /// How many records had to be reversed.
    pub num_reversed: usize,
}

/// Find the unique owning element and local face of record `ir`.
fn find_boundary_host(
    ir: usize,
    rec: &BoundaryFaceRecord,
    elements: &[Element],
    point_elements: &Csr,
    owners: &mut Vec<ElemIdx>,
) -> Result<BoundaryHost, MeshError> {
    let (a, b) = rec.vertices();
    sorted_intersection_into(point_elements.row(a), point_elements.row(b), owners);
    let element = match *owners.as_slice() {
        [] => return Err(MeshError::OrphanBoundaryFace { record: ir }),
        [e] => e,
        _ => {
            return Err(MeshError::AmbiguousBoundaryOwner {
                record: ir,
                candidates: owners.clone(),
            });
        }
    };
    let local_face = elements[element]
        .local_face_with_vertices(a, b)
        .ok_or(MeshError::BoundaryFaceNotInElement {
            record: ir,
            element,
        })?;
    Ok(BoundaryHost {
        element,
        local_face,
    })
}

/// Find the unique owning element and local face of every boundary record.
pub fn find_boundary_hosts(
    records: &[BoundaryFaceRecord],
    elements: &[Element],
    point_elements: &Csr,
) -> Result<Vec<BoundaryHost>, MeshError> {
    let mut owners = Vec::new();
    records
        .iter()
        .enumerate()
        .map(|(ir, rec)| find_boundary_host(ir, rec, elements, point_elements, &mut owners))
        .collect()
}

/// Reverse every record whose vertex order disagrees with its host element.
///
/// A record without a unique host is an error under
/// [`BoundaryMatchPolicy::Strict`]. Under [`BoundaryMatchPolicy::Lenient`] it
/// is logged and kept as given; the boundary matcher then skips it.
pub fn correct_boundary_orientation(
    records: &[BoundaryFaceRecord],
    elements: &[Element],
    point_elements: &Csr,
    policy: BoundaryMatchPolicy,
) -> Result<OrientedBoundary, MeshError> {
    let mut owners = Vec::new();
    let mut hosts = Vec::with_capacity(records.len());
    let mut oriented = Vec::with_capacity(records.len());
    let mut num_reversed = 0;
    for (ir, rec) in records.iter().enumerate() {
        match find_boundary_host(ir, rec, elements, point_elements, &mut owners) {
            Ok(host) => {
                let expected = elements[host.element].face_vertices(host.local_face);
                if rec.vertices() == expected {
                    oriented.push(rec.clone());
                } else {
                    num_reversed += 1;
                    oriented.push(rec.reversed());
                }
                hosts.push(Some(host));
            }
            Err(err) if policy == BoundaryMatchPolicy::Lenient => {
                log::warn!("{err}; record kept unoriented");
                oriented.push(rec.clone());
                hosts.push(None);
            }
            Err(err) => return Err(err),
        }
    }
    if num_reversed > 0 {
        log::warn!("{num_reversed} boundary faces were inverted for consistency");
    }
    Ok(OrientedBoundary {
        records: oriented,
        hosts,
        num_reversed,
    })
}
