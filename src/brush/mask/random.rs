//! Random thinning mask.

use crate::brush::{Brush, BrushContext, BrushInfo, BrushKind};
use crate::core::{Error, types::Result};
use crate::math::SimpleRng;
use crate::shape::{ComplexShape, Shape, for_each_local};
use crate::world::WorldView;

static INFO: BrushInfo = BrushInfo {
    name: "random",
    aliases: &["rand"],
    kind: BrushKind::Mask,
    help: "Keep each selected voxel independently with probability chance. Args: chance (0-1)",
};

/// Keep each selected voxel with probability `chance`, one draw per voxel.
pub fn random_mask(shape: &dyn Shape, chance: f64, rng: &mut SimpleRng) -> Result<ComplexShape> {
    if !(0.0..=1.0).contains(&chance) {
        return Err(Error::Argument(format!("chance {} outside [0, 1]", chance)));
    }
    let mut out = shape.to_complex();
    for_each_local(shape.dimensions(), |p| {
        if out.get(p.x, p.y, p.z, false) && !rng.chance(chance) {
            out.set_local(p, false);
        }
    });
    Ok(out)
}

/// Brush wrapper around [`random_mask`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomMaskBrush;

impl Brush for RandomMaskBrush {
    fn info(&self) -> &BrushInfo {
        &INFO
    }

    fn run(&self, ctx: &mut BrushContext, _world: &dyn WorldView) -> Result<()> {
        let chance = ctx.unit_or(INFO.name, "chance", ctx.defaults.random_chance);
        let shape = ctx.require_shape()?.clone_box();
        let out = random_mask(shape.as_ref(), chance, ctx.rng())?;
        ctx.put_shape(Box::new(out));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Cuboid, Ellipsoid};

    #[test]
    fn test_chance_one_keeps_everything() {
        let ball = Ellipsoid::sphere(3.0).unwrap();
        for seed in 0..20 {
            let mut rng = SimpleRng::new(seed);
            let out = random_mask(&ball, 1.0, &mut rng).unwrap();
            assert_eq!(out.count_set(), ball.count_set());
        }
    }

    #[test]
    fn test_chance_zero_removes_everything() {
        let cube = Cuboid::new(4, 4, 4).unwrap();
        let out = random_mask(&cube, 0.0, &mut SimpleRng::new(1)).unwrap();
        assert_eq!(out.count_set(), 0);
    }

    #[test]
    fn test_result_is_subset() {
        let ball = Ellipsoid::sphere(4.0).unwrap();
        let out = random_mask(&ball, 0.5, &mut SimpleRng::new(5)).unwrap();
        let kept = out.count_set();
        assert!(kept > 0 && kept < ball.count_set());
        for y in 0..9 {
            for z in 0..9 {
                for x in 0..9 {
                    if out.get(x, y, z, false) {
                        assert!(ball.get(x, y, z, false));
                    }
                }
            }
        }
    }

    #[test]
    fn test_invalid_chance() {
        let cube = Cuboid::new(1, 1, 1).unwrap();
        assert!(random_mask(&cube, 1.1, &mut SimpleRng::new(0)).is_err());
        assert!(random_mask(&cube, f64::NAN, &mut SimpleRng::new(0)).is_err());
    }
}
