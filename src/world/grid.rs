//! Sparse in-memory world.

use std::collections::HashMap;

use glam::IVec3;

use crate::material::{Material, MaterialRegistry, StandardMaterials};
use super::WorldView;

/// Hash map of non-air voxels over an unbounded grid.
#[derive(Clone, Debug, Default)]
pub struct GridWorld {
    voxels: HashMap<IVec3, Material>,
    registry: StandardMaterials,
}

impl GridWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, position: IVec3, material: Material) {
        if material == Material::AIR {
            self.voxels.remove(&position);
        } else {
            self.voxels.insert(position, material);
        }
    }

    /// Fill the inclusive box `min..=max`.
    pub fn fill_box(&mut self, min: IVec3, max: IVec3, material: Material) {
        for y in min.y..=max.y {
            for z in min.z..=max.z {
                for x in min.x..=max.x {
                    self.set(IVec3::new(x, y, z), material);
                }
            }
        }
    }

    /// Write every selected voxel of a brush result at `target`.
    pub fn apply(&mut self, target: IVec3, result: &dyn crate::material::MaterialShape) {
        let shape = result.shape();
        crate::shape::for_each_local(shape.dimensions(), |p| {
            if let Some(material) = result.get_material(p.x, p.y, p.z, false) {
                self.set(super::world_position(target, shape, p), material);
            }
        });
    }

    pub fn registry_mut(&mut self) -> &mut StandardMaterials {
        &mut self.registry
    }

    /// Number of non-air voxels.
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }
}

impl WorldView for GridWorld {
    fn point_material(&self, position: IVec3) -> Option<Material> {
        Some(self.voxels.get(&position).copied().unwrap_or(Material::AIR))
    }

    fn registry(&self) -> &dyn MaterialRegistry {
        &self.registry
    }
}
