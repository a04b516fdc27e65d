//! Shape brushes: start a chain with a CSG primitive selection.

use crate::core::types::Result;
use crate::shape::{Cuboid, Cylinder, Ellipsoid};
use crate::world::WorldView;
use super::{Brush, BrushContext, BrushInfo, BrushKind};

static BALL_INFO: BrushInfo = BrushInfo {
    name: "ball",
    aliases: &["b", "sphere"],
    kind: BrushKind::Shape,
    help: "Sphere selection. Args: radius",
};

static ELLIPSOID_INFO: BrushInfo = BrushInfo {
    name: "ellipsoid",
    aliases: &["e"],
    kind: BrushKind::Shape,
    help: "Ellipsoid selection. Args: rx, ry, rz",
};

static CYLINDER_INFO: BrushInfo = BrushInfo {
    name: "cylinder",
    aliases: &["cyl"],
    kind: BrushKind::Shape,
    help: "Vertical cylinder selection starting at the target. Args: radius, height",
};

static CUBOID_INFO: BrushInfo = BrushInfo {
    name: "cuboid",
    aliases: &["box", "voxel"],
    kind: BrushKind::Shape,
    help: "Box selection centred on the target. Args: width, height, length (or size)",
};

/// Sphere selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct BallBrush;

impl Brush for BallBrush {
    fn info(&self) -> &BrushInfo {
        &BALL_INFO
    }

    fn run(&self, ctx: &mut BrushContext, _world: &dyn WorldView) -> Result<()> {
        let radius = ctx.f64_or(BALL_INFO.name, "radius", ctx.defaults.radius);
        let shape = Ellipsoid::sphere(radius)?;
        ctx.put_shape(Box::new(shape));
        Ok(())
    }
}

/// Ellipsoid selection with per-axis radii.
#[derive(Debug, Default, Clone, Copy)]
pub struct EllipsoidBrush;

impl Brush for EllipsoidBrush {
    fn info(&self) -> &BrushInfo {
        &ELLIPSOID_INFO
    }

    fn run(&self, ctx: &mut BrushContext, _world: &dyn WorldView) -> Result<()> {
        let name = ELLIPSOID_INFO.name;
        let r = ctx.defaults.radius;
        let shape = Ellipsoid::new(
            ctx.f64_or(name, "rx", r),
            ctx.f64_or(name, "ry", r),
            ctx.f64_or(name, "rz", r),
        )?;
        ctx.put_shape(Box::new(shape));
        Ok(())
    }
}

/// Upright cylinder selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct CylinderBrush;

impl Brush for CylinderBrush {
    fn info(&self) -> &BrushInfo {
        &CYLINDER_INFO
    }

    fn run(&self, ctx: &mut BrushContext, _world: &dyn WorldView) -> Result<()> {
        let name = CYLINDER_INFO.name;
        let radius = ctx.f64_or(name, "radius", ctx.defaults.radius);
        let height = ctx.positive_or(name, "height", ctx.defaults.cylinder_height);
        let shape = Cylinder::circular(radius, height)?;
        ctx.put_shape(Box::new(shape));
        Ok(())
    }
}

/// Box selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct CuboidBrush;

impl Brush for CuboidBrush {
    fn info(&self) -> &BrushInfo {
        &CUBOID_INFO
    }

    fn run(&self, ctx: &mut BrushContext, _world: &dyn WorldView) -> Result<()> {
        let name = CUBOID_INFO.name;
        let size = ctx.positive_or(name, "size", ctx.defaults.cuboid_size);
        let shape = Cuboid::centered(
            ctx.positive_or(name, "width", size),
            ctx.positive_or(name, "height", size),
            ctx.positive_or(name, "length", size),
        )?;
        ctx.put_shape(Box::new(shape));
        Ok(())
    }
}
