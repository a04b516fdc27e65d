//! Majority smoothing over the 26-neighbourhood.

use glam::IVec3;

use crate::brush::{Brush, BrushContext, BrushInfo, BrushKind};
use crate::core::types::Result;
use crate::material::{ComplexMaterialShape, MaterialShape};
use crate::math::{Tally, moore_neighbors};
use crate::shape::for_each_local;
use crate::world::{MaterialSampler, WorldView};

static INFO: BrushInfo = BrushInfo {
    name: "blend",
    aliases: &["smooth"],
    kind: BrushKind::Effect,
    help: "Replace each voxel with the strict majority material of its 26 neighbours",
};

/// Reassign each selected voxel to its neighbours' modal material.
///
/// Only a strict, unique maximum counts; any tie at the top leaves the voxel
/// unchanged. Neighbours are read from `snapshot`, falling back to the world
/// outside the selection.
pub fn blend(
    snapshot: &ComplexMaterialShape,
    world: &dyn WorldView,
    target: IVec3,
) -> Result<ComplexMaterialShape> {
    let sampler = MaterialSampler::new(snapshot, world, target);
    let offsets: Vec<IVec3> = moore_neighbors().collect();
    let mut out = snapshot.clone();
    let mut changed = 0usize;
    let mut result = Ok(());

    for_each_local(snapshot.shape().dimensions(), |p| {
        if result.is_err() {
            return;
        }
        let Some(current) = snapshot.get_material(p.x, p.y, p.z, false) else {
            return;
        };
        let mut tally = Tally::new();
        for offset in &offsets {
            tally.add(sampler.material_at(p + *offset));
        }
        if let Some(majority) = tally.unique_mode() {
            if majority != current {
                result = out.set_material(p.x, p.y, p.z, false, majority);
                changed += 1;
            }
        }
    });
    result?;
    log::debug!("Blend: {} voxels changed", changed);
    Ok(out)
}

/// Brush wrapper around [`blend`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BlendBrush;

impl Brush for BlendBrush {
    fn info(&self) -> &BrushInfo {
        &INFO
    }

    fn run(&self, ctx: &mut BrushContext, world: &dyn WorldView) -> Result<()> {
        let snapshot = ctx.effect_input(world)?;
        let out = blend(&snapshot, world, ctx.target)?;
        ctx.put_material_shape(Box::new(out));
        Ok(())
    }
}
