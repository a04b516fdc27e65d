//! Voxcarve - voxel selections, per-voxel materials and the brushes that
//! carve, mask and paint them.

pub mod core;
pub mod math;
pub mod shape;
pub mod material;
pub mod world;
pub mod brush;
pub mod config;
