//! Face-count erosion and filling.
//!
//! Two independent passes read the same snapshot and write one output:
//! erosion turns exposed solid voxels into air, filling turns enclosed
//! non-solid voxels into their most common solid neighbour.

use glam::IVec3;

use crate::brush::{Brush, BrushContext, BrushInfo, BrushKind};
use crate::core::types::Result;
use crate::material::{ComplexMaterialShape, MaterialShape};
use crate::math::{FACE_NEIGHBORS, Tally};
use crate::shape::for_each_local;
use crate::world::{MaterialSampler, WorldView};

static INFO: BrushInfo = BrushInfo {
    name: "erode",
    aliases: &["erosion"],
    kind: BrushKind::Effect,
    help: "Erode exposed and fill enclosed voxels. Args: erode, fill (face-count thresholds, 0-6)",
};

/// Face-count thresholds. Both comparisons are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErodeParams {
    /// Open faces needed to erode a solid voxel
    pub erode: u32,
    /// Solid neighbours needed to fill an open voxel
    pub fill: u32,
}

impl From<&crate::config::ErodeDefaults> for ErodeParams {
    fn from(d: &crate::config::ErodeDefaults) -> Self {
        Self { erode: d.erode, fill: d.fill }
    }
}

/// Run the erode and fill passes over `snapshot`.
///
/// A voxel is "open" when it is not solid or is liquid. Erode: a selected
/// solid, non-liquid voxel with at least `erode` open face neighbours becomes
/// air. Fill: a selected voxel that is neither solid nor liquid, with at least
/// `fill` solid non-liquid face neighbours, takes the most frequent of them;
/// among equally frequent materials the last one tallied wins.
///
/// Only solid non-liquid neighbours are tallied. Non-solid, non-liquid
/// neighbours such as tall grass count neither toward the threshold nor as
/// fill candidates.
pub fn erode_fill(
    snapshot: &ComplexMaterialShape,
    world: &dyn WorldView,
    target: IVec3,
    params: &ErodeParams,
) -> Result<ComplexMaterialShape> {
    let registry = world.registry();
    let air = registry.air();
    let sampler = MaterialSampler::new(snapshot, world, target);
    let mut out = snapshot.clone();
    let (mut eroded, mut filled) = (0usize, 0usize);
    let mut result = Ok(());

    for_each_local(snapshot.shape().dimensions(), |p| {
        if result.is_err() {
            return;
        }
        let Some(material) = snapshot.get_material(p.x, p.y, p.z, false) else {
            return;
        };
        let solid = registry.is_solid(material);
        let liquid = registry.is_liquid(material);

        if solid && !liquid {
            let open = FACE_NEIGHBORS
                .iter()
                .map(|offset| sampler.material_at(p + *offset))
                .filter(|m| !registry.is_solid(*m) || registry.is_liquid(*m))
                .count() as u32;
            if open >= params.erode {
                result = out.set_material(p.x, p.y, p.z, false, air);
                eroded += 1;
            }
        } else if !solid && !liquid {
            let mut tally = Tally::new();
            for offset in &FACE_NEIGHBORS {
                let m = sampler.material_at(p + *offset);
                if registry.is_solid(m) && !registry.is_liquid(m) {
                    tally.add(m);
                }
            }
            if tally.total() >= params.fill {
                if let Some(fill) = tally.mode_last_wins() {
                    result = out.set_material(p.x, p.y, p.z, false, fill);
                    filled += 1;
                }
            }
        }
    });
    result?;
    log::debug!("Erode: {} voxels eroded, {} filled", eroded, filled);
    Ok(out)
}

/// Brush wrapper around [`erode_fill`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ErodeBrush;

impl Brush for ErodeBrush {
    fn info(&self) -> &BrushInfo {
        &INFO
    }

    fn run(&self, ctx: &mut BrushContext, world: &dyn WorldView) -> Result<()> {
        let d = ErodeParams::from(&ctx.defaults.erode);
        let params = ErodeParams {
            erode: ctx.u32_or(INFO.name, "erode", d.erode),
            fill: ctx.u32_or(INFO.name, "fill", d.fill),
        };
        let snapshot = ctx.effect_input(world)?;
        let out = erode_fill(&snapshot, world, ctx.target, &params)?;
        ctx.put_material_shape(Box::new(out));
        Ok(())
    }
}
