//! Materials and per-voxel material storage.

pub mod registry;
pub mod dictionary;
pub mod shape;
pub mod complex;
pub mod single;

pub use registry::{MaterialRegistry, StandardMaterials};
pub use dictionary::{MaterialDictionary, NO_MATERIAL};
pub use shape::MaterialShape;
pub use complex::ComplexMaterialShape;
pub use single::SingleMaterialShape;

use serde::{Deserialize, Serialize};

/// A block material: base type plus variant data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Material {
    /// Base type id
    pub kind: u16,
    /// Variant (colour, orientation, ...)
    pub data: u8,
}

impl Material {
    /// Empty space
    pub const AIR: Material = Material::kind(0);

    pub const fn new(kind: u16, data: u8) -> Self {
        Self { kind, data }
    }

    /// Material with zero variant data.
    pub const fn kind(kind: u16) -> Self {
        Self { kind, data: 0 }
    }

    /// Same base type, ignoring variant data.
    pub fn same_kind(&self, other: &Material) -> bool {
        self.kind == other.kind
    }

    /// Exact match, or base-type match when `wildcard` is set.
    pub fn matches(&self, other: &Material, wildcard: bool) -> bool {
        if wildcard { self.same_kind(other) } else { self == other }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.data)
    }
}
