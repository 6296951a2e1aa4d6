//! Boundary utilities: boundary-point flags and the raw-record ↔ canonical
//! boundary-face correspondence.
//!
//! A raw record matches a canonical boundary face when both of its low-order
//! vertices are the face's low-order vertices, in either order. Lookups go
//! through a hash map keyed by the unordered vertex pair instead of scanning
//! every canonical face per record.

use hashbrown::HashMap;

use crate::algs::face_enumeration::FaceTable;
use crate::mesh_error::MeshError;
use crate::topology::element::{BoundaryFaceRecord, FaceIdx, PointIdx};
use crate::topology::options::BoundaryMatchPolicy;

/// Bidirectional map between raw boundary records and canonical boundary faces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryMaps {
    record_to_face: Vec<Option<FaceIdx>>,
    face_to_record: Vec<Option<usize>>,
}

impl BoundaryMaps {
    /// Canonical face matched to raw record `record`.
    #[inline]
    pub fn face_of_record(&self, record: usize) -> Option<FaceIdx> {
        self.record_to_face[record]
    }

    /// Raw record matched to canonical boundary face `face`.
    #[inline]
    pub fn record_of_face(&self, face: FaceIdx) -> Option<usize> {
        self.face_to_record.get(face).copied().flatten()
    }

    /// Whether every record and every boundary face found a partner.
    pub fn is_complete(&self) -> bool {
        self.record_to_face.iter().all(Option::is_some)
            && self.face_to_record.iter().all(Option::is_some)
    }
}

#[inline]
fn pair_key(a: PointIdx, b: PointIdx) -> (PointIdx, PointIdx) {
    if a < b { (a, b) } else { (b, a) }
}

/// Match every raw record to its canonical boundary face and copy the
/// record's tags onto that face.
///
/// Under [`BoundaryMatchPolicy::Strict`] an unmatched record, a second record
/// for an already matched face, or a boundary face left without a record is
/// an error. Under [`BoundaryMatchPolicy::Lenient`] these are logged and the
/// corresponding map entries stay `None`; the first record for a face wins.
pub fn match_boundary_faces(
    records: &[BoundaryFaceRecord],
    table: &mut FaceTable,
    policy: BoundaryMatchPolicy,
) -> Result<BoundaryMaps, MeshError> {
    let nbface = table.num_boundary_faces();
    let lookup: HashMap<(PointIdx, PointIdx), FaceIdx> = table.faces()[..nbface]
        .iter()
        .enumerate()
        .map(|(f, face)| {
            let (a, b) = face.vertices();
            (pair_key(a, b), f)
        })
        .collect();

    let strict = policy == BoundaryMatchPolicy::Strict;
    let mut maps = BoundaryMaps {
        record_to_face: vec![None; records.len()],
        face_to_record: vec![None; nbface],
    };

    for (ir, rec) in records.iter().enumerate() {
        let (a, b) = rec.vertices();
        let Some(&f) = lookup.get(&pair_key(a, b)) else {
            if strict {
                return Err(MeshError::UnmatchedBoundaryFace { record: ir });
            }
            log::warn!("no canonical boundary face for boundary record {ir}; skipped");
            continue;
        };
        if let Some(first) = maps.face_to_record[f] {
            if strict {
                return Err(MeshError::DuplicateBoundaryRecord { record: ir, face: f });
            }
            log::warn!("boundary record {ir} repeats record {first} on face {f}; skipped");
            continue;
        }
        maps.record_to_face[ir] = Some(f);
        maps.face_to_record[f] = Some(ir);
        table.faces_mut()[f].tags = rec.tags().to_vec();
    }

    if let Some(face) = maps.face_to_record.iter().position(Option::is_none) {
        if strict {
            return Err(MeshError::MissingBoundaryRecord { face });
        }
        let missing = maps.face_to_record.iter().filter(|r| r.is_none()).count();
        log::warn!("{missing} canonical boundary faces have no boundary record");
    }

    log::debug!("boundary maps: {} records, {nbface} boundary faces", records.len());
    Ok(maps)
}

/// Flag every point that appears in at least one boundary record, midside
/// nodes included.
pub fn boundary_point_flags(num_points: usize, records: &[BoundaryFaceRecord]) -> Vec<bool> {
    let mut flags = vec![false; num_points];
    for rec in records {
        for &p in rec.nodes() {
            flags[p] = true;
        }
    }
    flags
}
