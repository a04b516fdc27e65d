//! Shape painted with one material throughout.

use crate::core::{Error, types::Result};
use crate::shape::Shape;
use super::{Material, MaterialShape};

/// One material for the whole selection; per-voxel assignment is unsupported.
#[derive(Clone, Debug)]
pub struct SingleMaterialShape {
    shape: Box<dyn Shape>,
    material: Material,
}

impl SingleMaterialShape {
    pub fn new(shape: Box<dyn Shape>, material: Material) -> Self {
        Self { shape, material }
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn into_shape(self) -> Box<dyn Shape> {
        self.shape
    }
}

impl MaterialShape for SingleMaterialShape {
    fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    fn get_material(&self, x: i32, y: i32, z: i32, relative: bool) -> Option<Material> {
        self.shape.get(x, y, z, relative).then_some(self.material)
    }

    fn set_material(&mut self, _x: i32, _y: i32, _z: i32, _relative: bool, _material: Material) -> Result<()> {
        Err(Error::Unsupported(
            "single-material shapes cannot set per-voxel materials; use to_complex_materials()".into(),
        ))
    }

    fn unset_material(&mut self, x: i32, y: i32, z: i32, relative: bool) -> Result<()> {
        self.shape.unset(x, y, z, relative)
    }

    fn flood(&mut self, material: Material) -> Result<()> {
        self.material = material;
        Ok(())
    }

    fn default_material(&self) -> Material {
        self.material
    }

    fn set_default_material(&mut self, material: Material) -> Result<()> {
        self.material = material;
        Ok(())
    }

    fn has_extra_data(&self) -> bool {
        false
    }

    fn clone_box(&self) -> Box<dyn MaterialShape> {
        Box::new(self.clone())
    }
}
