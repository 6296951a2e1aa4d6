//! Geometry utilities for hybrid meshes.
//!
//! Size metrics computed from node coordinates; see [`metrics`].

pub mod metrics;
