//! Mask brushes: narrow the current selection without touching materials.

pub mod checker;
pub mod flatten;
pub mod material;
pub mod random;
pub mod splatter;

pub use checker::{CheckerBrush, CheckerParams, checker};
pub use flatten::{FlattenBrush, flatten};
pub use material::{MaterialMaskBrush, material_mask};
pub use random::{RandomMaskBrush, random_mask};
pub use splatter::{SplatterMaskBrush, SplatterParams, fill_single_holes, grow, grow_phase, splatter_mask};
