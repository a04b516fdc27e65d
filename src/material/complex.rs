//! Dictionary-compressed multi-material shape.
//!
//! Each voxel stores a dictionary id split over two byte planes. The high
//! plane only exists once id 255 has been handed out; until then a low byte of
//! `0xFF` is the "nothing recorded" sentinel.

use glam::IVec3;

use crate::core::{Error, types::Result};
use crate::shape::{ComplexShape, Shape};
use super::{Material, MaterialDictionary, MaterialShape, NO_MATERIAL};

/// Per-voxel materials over a mutable shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplexMaterialShape {
    shape: ComplexShape,
    dictionary: MaterialDictionary,
    low: Vec<u8>,
    high: Option<Vec<u8>>,
}

impl ComplexMaterialShape {
    /// Wrap `shape`; every selected voxel reports `default` until written.
    pub fn new(shape: ComplexShape, default: Material) -> Self {
        let volume = shape.volume();
        Self {
            shape,
            dictionary: MaterialDictionary::new(default),
            low: vec![0xFF; volume],
            high: None,
        }
    }

    /// Copy any shape's membership.
    pub fn from_shape(shape: &dyn Shape, default: Material) -> Self {
        Self::new(shape.to_complex(), default)
    }

    pub fn complex_shape(&self) -> &ComplexShape {
        &self.shape
    }

    pub fn into_shape(self) -> ComplexShape {
        self.shape
    }

    pub fn dictionary(&self) -> &MaterialDictionary {
        &self.dictionary
    }

    /// Whether the second byte plane has been allocated.
    pub fn has_high_plane(&self) -> bool {
        self.high.is_some()
    }

    /// Assign one material to every voxel of layers `y..y + height` and select them.
    pub fn set_horizontal_layer(&mut self, material: Material, y: u32, height: u32) -> Result<()> {
        let end = y.checked_add(height).filter(|end| *end <= self.shape.height());
        let Some(end) = end else {
            return Err(Error::Argument(format!(
                "layer {}..{} outside shape height {}",
                y,
                y as u64 + height as u64,
                self.shape.height()
            )));
        };
        let slab = self.shape.width() as usize * self.shape.length() as usize;
        let range = y as usize * slab..end as usize * slab;
        let id = self.register(material)?;
        self.fill_ids(range.clone(), id);
        self.shape.fill_range(range, true);
        Ok(())
    }

    fn register(&mut self, material: Material) -> Result<u16> {
        let id = self.dictionary.id_for(material)?;
        if id >= 0xFF {
            self.ensure_high_plane();
        }
        Ok(id)
    }

    fn ensure_high_plane(&mut self) {
        if self.high.is_none() {
            let high = self
                .low
                .iter()
                .map(|&b| if b == 0xFF { 0xFF } else { 0 })
                .collect();
            self.high = Some(high);
        }
    }

    fn read_id(&self, index: usize) -> u16 {
        let low = self.low[index] as u16;
        match &self.high {
            Some(high) => (high[index] as u16) << 8 | low,
            None if low == 0xFF => NO_MATERIAL,
            None => low,
        }
    }

    /// Single write path for both planes.
    fn write_id(&mut self, index: usize, id: u16) {
        self.low[index] = (id & 0xFF) as u8;
        if let Some(high) = &mut self.high {
            high[index] = (id >> 8) as u8;
        }
    }

    fn fill_ids(&mut self, range: std::ops::Range<usize>, id: u16) {
        self.low[range.clone()].fill((id & 0xFF) as u8);
        if let Some(high) = &mut self.high {
            high[range].fill((id >> 8) as u8);
        }
    }

    fn checked_index(&self, x: i32, y: i32, z: i32, relative: bool) -> Result<usize> {
        let p = self.shape.resolve(x, y, z, relative);
        self.shape.index_of(p).ok_or_else(|| out_of_bounds(p, &self.shape))
    }
}

fn out_of_bounds(p: IVec3, shape: &ComplexShape) -> Error {
    Error::Argument(format!(
        "material write at {:?} outside shape bounds {:?}",
        p,
        shape.dimensions()
    ))
}

impl MaterialShape for ComplexMaterialShape {
    fn shape(&self) -> &dyn Shape {
        &self.shape
    }

    fn get_material(&self, x: i32, y: i32, z: i32, relative: bool) -> Option<Material> {
        let p = self.shape.resolve(x, y, z, relative);
        let index = self.shape.index_of(p)?;
        if !self.shape.get_index(index) {
            return None;
        }
        match self.read_id(index) {
            NO_MATERIAL => Some(self.dictionary.default_material()),
            id => self.dictionary.material_for(id),
        }
    }

    fn set_material(&mut self, x: i32, y: i32, z: i32, relative: bool, material: Material) -> Result<()> {
        let index = self.checked_index(x, y, z, relative)?;
        let id = self.register(material)?;
        self.write_id(index, id);
        self.shape.set_index(index, true);
        Ok(())
    }

    fn unset_material(&mut self, x: i32, y: i32, z: i32, relative: bool) -> Result<()> {
        let index = self.checked_index(x, y, z, relative)?;
        self.write_id(index, NO_MATERIAL);
        self.shape.set_index(index, false);
        Ok(())
    }

    fn flood(&mut self, material: Material) -> Result<()> {
        let id = self.register(material)?;
        for index in 0..self.low.len() {
            let stored = if self.shape.get_index(index) { id } else { NO_MATERIAL };
            self.write_id(index, stored);
        }
        Ok(())
    }

    fn default_material(&self) -> Material {
        self.dictionary.default_material()
    }

    /// Swap which ids 0 and `material`'s id name.
    ///
    /// Stored ids are left in place, so every voxel that reported `material`
    /// now reports the old default and vice versa. Voxels with nothing
    /// recorded follow id 0 and report `material`.
    fn set_default_material(&mut self, material: Material) -> Result<()> {
        if self.dictionary.default_material() == material {
            return Ok(());
        }
        self.register(material)?;
        self.dictionary.promote_to_default(material)?;
        Ok(())
    }

    fn has_extra_data(&self) -> bool {
        self.dictionary.len() > 256
    }

    fn clone_box(&self) -> Box<dyn MaterialShape> {
        Box::new(self.clone())
    }

    fn to_complex_materials(&self) -> Result<ComplexMaterialShape> {
        Ok(self.clone())
    }
}
