//! Structural self-checks for the topology containers.
//!
//! [`DebugInvariants::validate_invariants`] is always available and reports
//! the first violation it finds. [`DebugInvariants::debug_assert_invariants`]
//! turns a violation into a panic, in debug builds only.

use crate::mesh_error::MeshError;

/// Containers that can verify their own structural invariants.
pub trait DebugInvariants {
    /// Panic on the first violation in debug builds; no-op in release builds.
    fn debug_assert_invariants(&self);
    /// Check every invariant, returning the first violation as
    /// [`MeshError::InvariantViolation`].
    fn validate_invariants(&self) -> Result<(), MeshError>;
}

/// Run a fallible invariant check and panic with the container name on error.
/// Expands to nothing without `debug_assertions`.
#[macro_export]
macro_rules! debug_invariants {
    ($check:expr, $container:expr) => {
        #[cfg(debug_assertions)]
        if let Err(err) = $check {
            panic!("[invariants] {}: {}", $container, err);
        }
    };
}
