//! Grid coordinate types and the crate `Result`

/// Signed positions (world and local) and unsigned box extents.
pub use glam::{IVec3, UVec3};

/// Result of any fallible shape, material or brush operation
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
