//! Surface capping layer.

use glam::IVec3;

use crate::brush::{Brush, BrushContext, BrushInfo, BrushKind};
use crate::core::types::Result;
use crate::material::SingleMaterialShape;
use crate::shape::{ComplexShape, Shape};
use crate::world::{WorldView, world_position};

static INFO: BrushInfo = BrushInfo {
    name: "overlay",
    aliases: &["over", "cap"],
    kind: BrushKind::Effect,
    help: "Cap exposed ground under the selection. Args: depth, material",
};

/// Mark a capping layer on the exposed world surface under `selection`.
///
/// For each (x, z) column the box is scanned top-down for the first non-air
/// world voxel. When the column contains at least one selected voxel, a
/// surface was found and the world voxel directly above it is air, `depth`
/// voxels are set from the surface downward (clipped at the box floor).
pub fn overlay(selection: &dyn Shape, world: &dyn WorldView, target: IVec3, depth: u32) -> ComplexShape {
    let air = world.registry().air();
    let material_at = |local: IVec3| {
        world
            .point_material(world_position(target, selection, local))
            .unwrap_or(air)
    };

    let mut out = ComplexShape::empty_like(selection);
    let (width, height, length) = (selection.width() as i32, selection.height() as i32, selection.length() as i32);
    let mut columns = 0usize;

    for z in 0..length {
        for x in 0..width {
            let mut surface = None;
            let mut selected = false;
            for y in (0..height).rev() {
                if surface.is_none() && material_at(IVec3::new(x, y, z)) != air {
                    surface = Some(y);
                }
                selected |= selection.get(x, y, z, false);
            }
            let Some(surface) = surface else { continue };
            if !selected || material_at(IVec3::new(x, surface + 1, z)) != air {
                continue;
            }
            let bottom = (surface - depth as i32 + 1).max(0);
            for y in bottom..=surface {
                out.set_local(IVec3::new(x, y, z), true);
            }
            columns += 1;
        }
    }
    log::debug!("Overlay capped {} columns", columns);
    out
}

/// Brush wrapper: paints the [`overlay`] layer with one material.
#[derive(Debug, Default, Clone, Copy)]
pub struct OverlayBrush;

impl Brush for OverlayBrush {
    fn info(&self) -> &BrushInfo {
        &INFO
    }

    fn run(&self, ctx: &mut BrushContext, world: &dyn WorldView) -> Result<()> {
        let depth = ctx.positive_or(INFO.name, "depth", ctx.defaults.overlay_depth);
        let material = ctx.paint_material(INFO.name, world.registry())?;
        let layer = overlay(ctx.require_shape()?, world, ctx.target, depth);
        ctx.put_material_shape(Box::new(SingleMaterialShape::new(Box::new(layer), material)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BrushDefaults;
    use crate::material::StandardMaterials;
    use crate::shape::Cuboid;
    use crate::world::GridWorld;

    /// Flat stone ground with its top at y = 2.
    fn ground() -> GridWorld {
        let mut world = GridWorld::new();
        world.fill_box(IVec3::new(-4, 0, -4), IVec3::new(4, 2, 4), StandardMaterials::STONE);
        world
    }

    #[test]
    fn test_caps_exposed_surface() {
        let world = ground();
        let selection = Cuboid::new(3, 6, 3).unwrap();
        let out = overlay(&selection, &world, IVec3::ZERO, 1);
        for z in 0..3 {
            for x in 0..3 {
                assert!(out.get(x, 2, z, false));
                assert!(!out.get(x, 1, z, false));
                assert!(!out.get(x, 3, z, false));
            }
        }
        assert_eq!(out.count_set(), 9);
    }

    #[test]
    fn test_depth_clipped_at_floor() {
        let world = ground();
        let selection = Cuboid::new(1, 6, 1).unwrap();
        let out = overlay(&selection, &world, IVec3::ZERO, 5);
        assert_eq!(out.count_set(), 3);
        assert!(out.get(0, 0, 0, false));
    }

    #[test]
    fn test_covered_surface_is_skipped() {
        // The box ends inside the ground, so the voxel above its highest
        // solid voxel is still stone.
        let world = ground();
        let selection = Cuboid::new(2, 2, 2).unwrap();
        let out = overlay(&selection, &world, IVec3::ZERO, 1);
        assert_eq!(out.count_set(), 0);
    }

    #[test]
    fn test_columns_without_selection_are_skipped() {
        let world = ground();
        let mut selection = ComplexShape::new(2, 6, 1, IVec3::ZERO);
        selection.set(0, 5, 0, false).unwrap();
        let out = overlay(&selection, &world, IVec3::ZERO, 1);
        assert!(out.get(0, 2, 0, false));
        assert!(!out.get(1, 2, 0, false));
    }

    #[test]
    fn test_brush_paints_layer() {
        let world = ground();
        let mut ctx = BrushContext::new(IVec3::ZERO, BrushDefaults::default());
        ctx.put_shape(Box::new(Cuboid::new(2, 6, 2).unwrap()));
        ctx.arg("overlay", "material", "snow");
        OverlayBrush.run(&mut ctx, &world).unwrap();

        let result = ctx.material_shape().unwrap();
        assert_eq!(result.get_material(0, 2, 0, false), Some(StandardMaterials::SNOW));
        assert_eq!(result.get_material(0, 3, 0, false), None);
        assert_eq!(ctx.shape().unwrap().count_set(), 4);
    }
}
