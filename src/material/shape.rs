//! Common interface over single- and multi-material shapes.

use crate::core::types::Result;
use crate::shape::{ComplexShape, Shape, for_each_local};
use super::{ComplexMaterialShape, Material};

/// A shape with a material attached to every selected voxel.
pub trait MaterialShape: Send + Sync {
    /// The underlying selection.
    fn shape(&self) -> &dyn Shape;

    /// Material at a voxel, `None` if the voxel is not selected.
    fn get_material(&self, x: i32, y: i32, z: i32, relative: bool) -> Option<Material>;

    /// Assign a material and select the voxel.
    fn set_material(&mut self, x: i32, y: i32, z: i32, relative: bool, material: Material) -> Result<()>;

    /// Clear the material and deselect the voxel.
    fn unset_material(&mut self, x: i32, y: i32, z: i32, relative: bool) -> Result<()>;

    /// Give every selected voxel `material`.
    fn flood(&mut self, material: Material) -> Result<()>;

    /// Material reported by selected voxels with nothing recorded.
    fn default_material(&self) -> Material;

    fn set_default_material(&mut self, material: Material) -> Result<()>;

    /// Size hint for serializers: more than 256 distinct materials.
    fn has_extra_data(&self) -> bool;

    fn clone_box(&self) -> Box<dyn MaterialShape>;

    /// Copy into dictionary-backed storage.
    fn to_complex_materials(&self) -> Result<ComplexMaterialShape> {
        let shape = self.shape();
        let mut out = ComplexMaterialShape::new(ComplexShape::empty_like(shape), self.default_material());
        let mut result = Ok(());
        for_each_local(shape.dimensions(), |p| {
            if result.is_err() {
                return;
            }
            if let Some(material) = self.get_material(p.x, p.y, p.z, false) {
                result = out.set_material(p.x, p.y, p.z, false, material);
            }
        });
        result.map(|_| out)
    }
}

impl Clone for Box<dyn MaterialShape> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl<'a> std::fmt::Debug for dyn MaterialShape + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaterialShape")
            .field("shape", &self.shape())
            .field("default", &self.default_material())
            .finish()
    }
}
