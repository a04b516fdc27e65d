//! Collapse a selection into a single layer.

use glam::IVec3;

use crate::brush::{Brush, BrushContext, BrushInfo, BrushKind};
use crate::core::types::Result;
use crate::shape::{ComplexShape, Shape};
use crate::world::WorldView;

static INFO: BrushInfo = BrushInfo {
    name: "flatten",
    aliases: &["flat"],
    kind: BrushKind::Mask,
    help: "Project the selection onto one layer: one voxel per occupied column",
};

/// Height-1 shape with a voxel for every column containing a selected voxel.
///
/// Columns are scanned from y = 0 upward and the lowest hit decides the
/// column. The output keeps the input's x/z origin and anchors y at 0.
pub fn flatten(shape: &dyn Shape) -> ComplexShape {
    let origin = shape.origin();
    let mut out = ComplexShape::new(shape.width(), 1, shape.length(), IVec3::new(origin.x, 0, origin.z));
    for z in 0..shape.length() as i32 {
        for x in 0..shape.width() as i32 {
            let lowest = (0..shape.height() as i32).find(|&y| shape.get(x, y, z, false));
            if lowest.is_some() {
                out.set_local(IVec3::new(x, 0, z), true);
            }
        }
    }
    out
}

/// Brush wrapper around [`flatten`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FlattenBrush;

impl Brush for FlattenBrush {
    fn info(&self) -> &BrushInfo {
        &INFO
    }

    fn run(&self, ctx: &mut BrushContext, _world: &dyn WorldView) -> Result<()> {
        let out = flatten(ctx.require_shape()?);
        ctx.put_shape(Box::new(out));
        Ok(())
    }
}
