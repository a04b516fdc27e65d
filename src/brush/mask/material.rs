//! Keep only voxels whose world material matches.

use glam::IVec3;

use crate::brush::{Brush, BrushContext, BrushInfo, BrushKind};
use crate::core::{Error, types::Result};
use crate::material::Material;
use crate::shape::{ComplexShape, Shape, for_each_local};
use crate::world::{WorldView, world_position};

static INFO: BrushInfo = BrushInfo {
    name: "materialmask",
    aliases: &["mm", "mask"],
    kind: BrushKind::Mask,
    help: "Keep voxels whose world material matches. Args: material, wildcard (match base type only)",
};

/// Unset selected voxels whose world material differs from `mask`.
///
/// With `wildcard` only the base type has to match. Positions the world
/// cannot answer for never match.
pub fn material_mask(
    shape: &dyn Shape,
    world: &dyn WorldView,
    target: IVec3,
    mask: Material,
    wildcard: bool,
) -> ComplexShape {
    let mut out = shape.to_complex();
    for_each_local(shape.dimensions(), |p| {
        if !out.get(p.x, p.y, p.z, false) {
            return;
        }
        let keep = world
            .point_material(world_position(target, shape, p))
            .is_some_and(|m| m.matches(&mask, wildcard));
        if !keep {
            out.set_local(p, false);
        }
    });
    out
}

/// Brush wrapper around [`material_mask`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MaterialMaskBrush;

impl Brush for MaterialMaskBrush {
    fn info(&self) -> &BrushInfo {
        &INFO
    }

    fn run(&self, ctx: &mut BrushContext, world: &dyn WorldView) -> Result<()> {
        let mask = ctx
            .material(INFO.name, "material", world.registry())?
            .ok_or_else(|| Error::UserInput("Material mask needs a material".into()))?;
        let wildcard = ctx.bool_or(INFO.name, "wildcard", false);
        let out = material_mask(ctx.require_shape()?, world, ctx.target, mask, wildcard);
        log::debug!("Material mask kept {} voxels matching {}", out.count_set(), mask);
        ctx.put_shape(Box::new(out));
        Ok(())
    }
}
