//! Compressed (CSR-style) adjacency.
//!
//! Immutable offset array of size `rows + 1` plus a flat index array; row `i`
//! is `indices[offsets[i]..offsets[i + 1]]`. Used for point→element and
//! point→point adjacency, built once and then only read.

use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;

/// CSR adjacency: a variable-length index list per row without per-row
/// allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Csr {
    offsets: Vec<usize>,
    indices: Vec<usize>,
}

impl Csr {
    /// Assemble from already-built arrays, checking their shape and that
    /// every row is strictly ascending.
    pub fn from_parts(offsets: Vec<usize>, indices: Vec<usize>) -> Result<Self, MeshError> {
        let csr = Self { offsets, indices };
        csr.validate_invariants()?;
        Ok(csr)
    }

    /// Assemble from arrays produced by a counting construction in this
    /// crate; only checked in debug builds.
    pub(crate) fn from_counted(offsets: Vec<usize>, indices: Vec<usize>) -> Self {
        let csr = Self { offsets, indices };
        csr.debug_assert_invariants();
        csr
    }

    /// Number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Total number of stored entries.
    #[inline]
    pub fn num_entries(&self) -> usize {
        self.indices.len()
    }

    /// Return the index slice for row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[usize] {
        &self.indices[self.offsets[i]..self.offsets[i + 1]]
    }

    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.offsets[i + 1] - self.offsets[i]
    }

    /// Offset array (length `num_rows() + 1`).
    #[inline]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Flat index array.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Iterate `(row, entries)` pairs.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        (0..self.num_rows()).map(move |i| (i, self.row(i)))
    }
}

impl DebugInvariants for Csr {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Csr");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        if self.offsets.first() != Some(&0) {
            return Err(MeshError::InvariantViolation(
                "CSR offsets must start at 0".into(),
            ));
        }
        if self.offsets.windows(2).any(|w| w[0] > w[1]) {
            return Err(MeshError::InvariantViolation(
                "CSR offsets must be non-decreasing".into(),
            ));
        }
        if self.offsets.last() != Some(&self.indices.len()) {
            return Err(MeshError::InvariantViolation(format!(
                "CSR offsets end at {:?}, but there are {} entries",
                self.offsets.last(),
                self.indices.len()
            )));
        }
        if let Some(i) = (0..self.num_rows()).find(|&i| self.row(i).windows(2).any(|w| w[0] >= w[1])) {
            return Err(MeshError::InvariantViolation(format!(
                "CSR row {i} is not strictly ascending"
            )));
        }
        Ok(())
    }
}

/// Turn per-row counts into prefix offsets (length `counts.len() + 1`).
pub fn prefix_offsets(counts: &[usize]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(counts.len() + 1);
    offsets.push(0);
    let mut acc = 0;
    for &c in counts {
        acc += c;
        offsets.push(acc);
    }
    offsets
}

/// Intersect two ascending slices into `out` (cleared first).
pub fn sorted_intersection_into(a: &[usize], b: &[usize], out: &mut Vec<usize>) {
    out.clear();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_and_offsets() {
        let csr = Csr::from_parts(prefix_offsets(&[2, 0, 1]), vec![4, 5, 6]).unwrap();
        assert_eq!(csr.num_rows(), 3);
        assert_eq!(csr.row(0), &[4, 5]);
        assert!(csr.row(1).is_empty());
        assert_eq!(csr.row(2), &[6]);
        assert_eq!(csr.degree(0), 2);
        assert_eq!(csr.rows().count(), 3);
    }

    #[test]
    fn bad_offsets_are_rejected() {
        assert!(Csr::from_parts(vec![0, 3], vec![1]).is_err());
        assert!(Csr::from_parts(vec![1, 1], vec![]).is_err());
        assert!(Csr::from_parts(vec![0, 2, 1], vec![1, 2]).is_err());
        assert!(Csr::from_parts(vec![0, 2], vec![3, 3]).is_err());
    }

    #[test]
    fn intersection_of_sorted_lists() {
        let mut out = Vec::new();
        sorted_intersection_into(&[0, 2, 3, 7], &[1, 2, 7, 9], &mut out);
        assert_eq!(out, vec![2, 7]);
        sorted_intersection_into(&[], &[1], &mut out);
        assert!(out.is_empty());
    }
}
