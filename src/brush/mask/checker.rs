//! Checkerboard mask.

use glam::{IVec3, UVec3};

use crate::brush::{Brush, BrushContext, BrushInfo, BrushKind};
use crate::core::{Error, types::Result};
use crate::shape::{ComplexShape, MAX_EXTENT, Shape, for_each_local};
use crate::world::{WorldView, world_position};

static INFO: BrushInfo = BrushInfo {
    name: "checker",
    aliases: &["chk"],
    kind: BrushKind::Mask,
    help: "Keep voxels on even tiles. Args: width, height, length, x, y, z (offset)",
};

/// Tile size and offset of the checkerboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckerParams {
    pub tile: UVec3,
    pub offset: IVec3,
}

impl Default for CheckerParams {
    fn default() -> Self {
        Self { tile: UVec3::ONE, offset: IVec3::ZERO }
    }
}

/// Unset every voxel whose tile index is odd along any axis.
///
/// Tile indices use floor division of the voxel's world position plus the
/// offset, so the pattern is continuous across negative coordinates. The
/// offset wraps at the `i32` range.
pub fn checker(shape: &dyn Shape, target: IVec3, params: &CheckerParams) -> Result<ComplexShape> {
    if params.tile.min_element() == 0 || params.tile.max_element() > MAX_EXTENT {
        return Err(Error::Argument(format!(
            "checker tile size {:?} must lie in 1..={}",
            params.tile, MAX_EXTENT
        )));
    }
    let tile = params.tile.as_ivec3();
    let mut out = shape.to_complex();
    let mut removed = 0usize;
    for_each_local(shape.dimensions(), |p| {
        if !out.get(p.x, p.y, p.z, false) {
            return;
        }
        let pos = world_position(target, shape, p).wrapping_add(params.offset);
        let odd = |v: i32, size: i32| v.div_euclid(size).rem_euclid(2) == 1;
        if odd(pos.x, tile.x) || odd(pos.y, tile.y) || odd(pos.z, tile.z) {
            out.set_local(p, false);
            removed += 1;
        }
    });
    log::debug!("Checker mask removed {} voxels", removed);
    Ok(out)
}

/// Brush wrapper around [`checker`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckerBrush;

impl Brush for CheckerBrush {
    fn info(&self) -> &BrushInfo {
        &INFO
    }

    fn run(&self, ctx: &mut BrushContext, _world: &dyn WorldView) -> Result<()> {
        let d = &ctx.defaults.checker;
        let params = CheckerParams {
            tile: UVec3::new(
                ctx.positive_or(INFO.name, "width", d.width),
                ctx.positive_or(INFO.name, "height", d.height),
                ctx.positive_or(INFO.name, "length", d.length),
            ),
            offset: IVec3::new(
                ctx.i32_or(INFO.name, "x", d.offset[0]),
                ctx.i32_or(INFO.name, "y", d.offset[1]),
                ctx.i32_or(INFO.name, "z", d.offset[2]),
            ),
        };
        let out = checker(ctx.require_shape()?, ctx.target, &params)?;
        ctx.put_shape(Box::new(out));
        Ok(())
    }
}
