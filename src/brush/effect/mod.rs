//! Effect brushes: compute new materials from a world snapshot.

pub mod erode;
pub mod blend;
pub mod overlay;
pub mod splatter;

pub use erode::{ErodeBrush, ErodeParams, erode_fill};
pub use blend::{BlendBrush, blend};
pub use overlay::{OverlayBrush, overlay};
pub use splatter::{SplatterBrush, splatter};
