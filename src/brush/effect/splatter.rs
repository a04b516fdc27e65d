//! Splatter painting: grow a random blob inside the selection, close its
//! single-voxel holes and paint it.

use crate::brush::mask::splatter::{SplatterParams, fill_single_holes, grow, params_from};
use crate::brush::{Brush, BrushContext, BrushInfo, BrushKind};
use crate::core::types::Result;
use crate::material::{Material, SingleMaterialShape};
use crate::math::SimpleRng;
use crate::shape::Shape;
use crate::world::WorldView;

static INFO: BrushInfo = BrushInfo {
    name: "splatter",
    aliases: &["splat"],
    kind: BrushKind::Effect,
    help: "Paint a random splatter inside the selection. Args: seed, growth (0-1), recursions, material",
};

/// Grow a splatter over `shape`, fill its 1x1x1 holes and paint it with `material`.
///
/// Hole filling considers the whole bounding box, so it may set a voxel the
/// selection left unset.
pub fn splatter(
    shape: &dyn Shape,
    params: &SplatterParams,
    material: Material,
    rng: &mut SimpleRng,
) -> Result<SingleMaterialShape> {
    let grown = grow(shape, params, rng)?;
    let filled = fill_single_holes(&grown);
    log::debug!(
        "Splatter grew {} voxels, {} after hole fill",
        grown.count_set(),
        filled.count_set()
    );
    Ok(SingleMaterialShape::new(Box::new(filled), material))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SplatterBrush;

impl Brush for SplatterBrush {
    fn info(&self) -> &BrushInfo {
        &INFO
    }

    fn run(&self, ctx: &mut BrushContext, world: &dyn WorldView) -> Result<()> {
        let params = params_from(ctx, INFO.name);
        let material = ctx.paint_material(INFO.name, world.registry())?;
        let shape = ctx.require_shape()?.clone_box();
        let out = splatter(shape.as_ref(), &params, material, ctx.rng())?;
        ctx.put_material_shape(Box::new(out));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BrushDefaults;
    use crate::material::{MaterialShape, StandardMaterials};
    use crate::shape::{ComplexShape, Cuboid, Ellipsoid};
    use crate::world::GridWorld;
    use glam::IVec3;

    #[test]
    fn test_full_seed_paints_whole_selection() {
        let ball = Ellipsoid::sphere(2.0).unwrap();
        let params = SplatterParams { seed: 1.0, growth: 0.0, recursions: 0 };
        let out = splatter(&ball, &params, StandardMaterials::GRASS, &mut SimpleRng::new(7)).unwrap();
        assert_eq!(out.shape().count_set(), ball.count_set());
        assert_eq!(out.get_material(0, 0, 0, true), Some(StandardMaterials::GRASS));
    }

    #[test]
    fn test_hole_fill_sets_unselected_voxel() {
        let mut hollow = ComplexShape::filled(3, 3, 3, IVec3::ZERO);
        hollow.unset(1, 1, 1, false).unwrap();
        let params = SplatterParams { seed: 1.0, growth: 0.0, recursions: 0 };
        let out = splatter(&hollow, &params, StandardMaterials::GRASS, &mut SimpleRng::new(1)).unwrap();
        assert_eq!(out.shape().count_set(), 27);
        assert_eq!(out.get_material(1, 1, 1, false), Some(StandardMaterials::GRASS));
    }

    #[test]
    fn test_zero_seed_paints_nothing() {
        let cube = Cuboid::new(3, 3, 3).unwrap();
        let params = SplatterParams { seed: 0.0, growth: 1.0, recursions: 2 };
        let out = splatter(&cube, &params, StandardMaterials::GRASS, &mut SimpleRng::new(1)).unwrap();
        assert_eq!(out.shape().count_set(), 0);
    }

    #[test]
    fn test_brush_same_seed_same_result() {
        let world = GridWorld::new();
        let defaults = BrushDefaults { seed: Some(42), ..BrushDefaults::default() };
        let run = || {
            let mut ctx = BrushContext::new(IVec3::ZERO, defaults.clone());
            ctx.put_shape(Box::new(Ellipsoid::sphere(3.0).unwrap()));
            ctx.arg("splatter", "seed", 0.2).arg("splatter", "growth", 0.5);
            SplatterBrush.run(&mut ctx, &world).unwrap();
            ctx.material_shape().unwrap().to_complex_materials().unwrap()
        };
        assert_eq!(run(), run());
    }
}
