//! Read-only access to the live world.
//!
//! Brushes never touch world storage directly. They read materials through
//! [`WorldView`] and hand their results back to the caller for committing.

pub mod grid;

pub use grid::GridWorld;

use glam::IVec3;

use crate::core::types::Result;
use crate::material::{ComplexMaterialShape, Material, MaterialRegistry, MaterialShape};
use crate::shape::{ComplexShape, Shape, for_each_local};

/// World position of a local grid voxel when the shape's origin sits at `target`.
pub fn world_position(target: IVec3, shape: &dyn Shape, local: IVec3) -> IVec3 {
    target + local - shape.origin()
}

/// Point queries against the live world.
pub trait WorldView {
    /// Material at a world position, `None` outside loaded space.
    fn point_material(&self, position: IVec3) -> Option<Material>;

    fn registry(&self) -> &dyn MaterialRegistry;

    /// Capture the world material of every selected voxel.
    ///
    /// The result's default material is air.
    fn snapshot(&self, target: IVec3, selection: &dyn Shape) -> Result<ComplexMaterialShape> {
        let air = self.registry().air();
        let mut snapshot = ComplexMaterialShape::new(ComplexShape::empty_like(selection), air);
        let mut result = Ok(());
        for_each_local(selection.dimensions(), |p| {
            if result.is_err() || !selection.get(p.x, p.y, p.z, false) {
                return;
            }
            let material = self
                .point_material(world_position(target, selection, p))
                .unwrap_or(air);
            result = snapshot.set_material(p.x, p.y, p.z, false, material);
        });
        result?;
        log::debug!(
            "Snapshot at {:?}: {} voxels, {} materials",
            target,
            snapshot.shape().count_set(),
            snapshot.dictionary().len()
        );
        Ok(snapshot)
    }
}

/// Material lookups for neighbourhood algorithms.
///
/// Selected voxels read the snapshot; everything else (unselected voxels and
/// positions outside the box) reads the live world, then air.
pub struct MaterialSampler<'a> {
    snapshot: &'a dyn MaterialShape,
    world: &'a dyn WorldView,
    target: IVec3,
}

impl<'a> MaterialSampler<'a> {
    pub fn new(snapshot: &'a dyn MaterialShape, world: &'a dyn WorldView, target: IVec3) -> Self {
        Self { snapshot, world, target }
    }

    /// Material at a local grid position (may lie outside the box).
    pub fn material_at(&self, local: IVec3) -> Material {
        if let Some(material) = self.snapshot.get_material(local.x, local.y, local.z, false) {
            return material;
        }
        let position = world_position(self.target, self.snapshot.shape(), local);
        self.world
            .point_material(position)
            .unwrap_or_else(|| self.world.registry().air())
    }

    pub fn registry(&self) -> &dyn MaterialRegistry {
        self.world.registry()
    }
}
