//! Stochastic seed-and-grow selection.
//!
//! Phase 0 seeds selected voxels at random. Each following phase promotes
//! unset voxels that touch a set face neighbour, with a probability that
//! decays linearly across phases. Every phase reads the previous phase's
//! result and writes a fresh buffer, so visiting order cannot bias growth.

use glam::IVec3;

use crate::brush::{Brush, BrushContext, BrushInfo, BrushKind};
use crate::core::{Error, types::Result};
use crate::math::{FACE_NEIGHBORS, SimpleRng};
use crate::shape::{ComplexShape, Shape, for_each_local};
use crate::world::WorldView;

static INFO: BrushInfo = BrushInfo {
    name: "splattermask",
    aliases: &["splatm"],
    kind: BrushKind::Mask,
    help: "Keep a random splattered subset of the selection. Args: seed, growth (0-1), recursions",
};

/// Seed probability, initial growth probability and number of growth phases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplatterParams {
    pub seed: f64,
    pub growth: f64,
    pub recursions: u32,
}

impl SplatterParams {
    fn validate(&self) -> Result<()> {
        let unit = 0.0..=1.0;
        if unit.contains(&self.seed) && unit.contains(&self.growth) {
            Ok(())
        } else {
            Err(Error::Argument(format!(
                "splatter seed {} and growth {} must lie in [0, 1]",
                self.seed, self.growth
            )))
        }
    }

    /// Growth probability of phase `r` (0-based): `growth - (growth / recursions) * r`.
    pub fn phase_probability(&self, r: u32) -> f64 {
        self.growth - (self.growth / self.recursions as f64) * r as f64
    }
}

impl From<&crate::config::SplatterDefaults> for SplatterParams {
    fn from(d: &crate::config::SplatterDefaults) -> Self {
        Self { seed: d.seed, growth: d.growth, recursions: d.recursions }
    }
}

/// Seed-and-grow inside `shape`. The result is always a subset of `shape`.
pub fn grow(shape: &dyn Shape, params: &SplatterParams, rng: &mut SimpleRng) -> Result<ComplexShape> {
    params.validate()?;
    let selection = shape.to_complex();
    let dims = selection.dimensions();

    let mut current = ComplexShape::empty_like(shape);
    for_each_local(dims, |p| {
        if selection.get(p.x, p.y, p.z, false) && rng.chance(params.seed) {
            current.set_local(p, true);
        }
    });

    for r in 0..params.recursions {
        current = grow_phase(&selection, &current, params.phase_probability(r), rng);
    }
    Ok(current)
}

/// One growth phase: promote unset selected voxels touching a set face
/// neighbour in `current`, each with probability `probability`.
pub fn grow_phase(
    selection: &ComplexShape,
    current: &ComplexShape,
    probability: f64,
    rng: &mut SimpleRng,
) -> ComplexShape {
    let mut next = current.clone();
    for_each_local(selection.dimensions(), |p| {
        if !selection.get(p.x, p.y, p.z, false) || current.get(p.x, p.y, p.z, false) {
            return;
        }
        let touches = FACE_NEIGHBORS.iter().any(|offset| {
            let n = p + *offset;
            current.get(n.x, n.y, n.z, false)
        });
        if touches && rng.chance(probability) {
            next.set_local(p, true);
        }
    });
    next
}

/// Set every unset voxel whose six face neighbours are all set.
///
/// Neighbour coordinates are clamped to the box, so a voxel on the boundary
/// counts itself as its outward neighbour and is never filled.
pub fn fill_single_holes(shape: &ComplexShape) -> ComplexShape {
    let dims = shape.dimensions();
    let max = dims.as_ivec3() - IVec3::ONE;
    let mut out = shape.clone();
    for_each_local(dims, |p| {
        if shape.get(p.x, p.y, p.z, false) {
            return;
        }
        let enclosed = FACE_NEIGHBORS.iter().all(|offset| {
            let n = (p + *offset).clamp(IVec3::ZERO, max);
            shape.get(n.x, n.y, n.z, false)
        });
        if enclosed {
            out.set_local(p, true);
        }
    });
    out
}

/// Mask variant: narrow the selection to its splattered subset.
pub fn splatter_mask(shape: &dyn Shape, params: &SplatterParams, rng: &mut SimpleRng) -> Result<ComplexShape> {
    grow(shape, params, rng)
}

pub(crate) fn params_from(ctx: &BrushContext, brush: &str) -> SplatterParams {
    let d = SplatterParams::from(&ctx.defaults.splatter);
    SplatterParams {
        seed: ctx.unit_or(brush, "seed", d.seed),
        growth: ctx.unit_or(brush, "growth", d.growth),
        recursions: ctx.u32_or(brush, "recursions", d.recursions),
    }
}

/// Brush wrapper around [`splatter_mask`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SplatterMaskBrush;

impl Brush for SplatterMaskBrush {
    fn info(&self) -> &BrushInfo {
        &INFO
    }

    fn run(&self, ctx: &mut BrushContext, _world: &dyn WorldView) -> Result<()> {
        let params = params_from(ctx, INFO.name);
        let shape = ctx.require_shape()?.clone_box();
        let out = splatter_mask(shape.as_ref(), &params, ctx.rng())?;
        log::debug!("Splatter mask kept {} of {} voxels", out.count_set(), shape.count_set());
        ctx.put_shape(Box::new(out));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Cuboid, Ellipsoid};

    fn params(seed: f64, growth: f64, recursions: u32) -> SplatterParams {
        SplatterParams { seed, growth, recursions }
    }

    #[test]
    fn test_phase_probability_decays() {
        let p = params(0.1, 0.5, 5);
        assert_eq!(p.phase_probability(0), 0.5);
        assert!((p.phase_probability(4) - 0.1).abs() < 1e-12);
        assert!(p.phase_probability(1) < p.phase_probability(0));
    }

    #[test]
    fn test_full_seed_selects_everything() {
        let ball = Ellipsoid::sphere(3.0).unwrap();
        let out = grow(&ball, &params(1.0, 0.0, 3), &mut SimpleRng::new(1)).unwrap();
        assert_eq!(out.count_set(), ball.count_set());
    }

    #[test]
    fn test_zero_seed_selects_nothing() {
        let cube = Cuboid::new(5, 5, 5).unwrap();
        let out = grow(&cube, &params(0.0, 1.0, 4), &mut SimpleRng::new(2)).unwrap();
        assert_eq!(out.count_set(), 0);
    }

    #[test]
    fn test_growth_phase_reaches_face_neighbours_only() {
        let selection = ComplexShape::filled(3, 3, 3, IVec3::ZERO);
        let mut seed = ComplexShape::new(3, 3, 3, IVec3::ZERO);
        seed.set(1, 1, 1, false).unwrap();

        let one = grow_phase(&selection, &seed, 1.0, &mut SimpleRng::new(0));
        assert_eq!(one.count_set(), 7);
        assert!(!one.get(0, 0, 0, false));
        assert!(one.get(1, 1, 0, false));

        // reads only the previous phase, so a second phase is needed for edges
        let two = grow_phase(&selection, &one, 1.0, &mut SimpleRng::new(0));
        assert_eq!(two.count_set(), 19);
    }

    #[test]
    fn test_zero_probability_phase_is_identity() {
        let selection = ComplexShape::filled(3, 3, 3, IVec3::ZERO);
        let mut seed = ComplexShape::new(3, 3, 3, IVec3::ZERO);
        seed.set(0, 0, 0, false).unwrap();
        let next = grow_phase(&selection, &seed, 0.0, &mut SimpleRng::new(4));
        assert_eq!(next, seed);
    }

    #[test]
    fn test_growth_stays_inside_selection() {
        let mut shape = ComplexShape::new(6, 1, 1, IVec3::ZERO);
        for x in 0..3 {
            shape.set(x, 0, 0, false).unwrap();
        }
        let out = grow(&shape, &params(0.5, 1.0, 6), &mut SimpleRng::new(9)).unwrap();
        for x in 3..6 {
            assert!(!out.get(x, 0, 0, false));
        }
    }

    #[test]
    fn test_fill_single_holes() {
        let mut shape = ComplexShape::filled(3, 3, 3, IVec3::ZERO);
        shape.unset(1, 1, 1, false).unwrap();
        shape.unset(0, 1, 1, false).unwrap();
        let filled = fill_single_holes(&shape);
        // (1,1,1) lost its -x neighbour, (0,1,1) sits on the boundary
        assert!(!filled.get(1, 1, 1, false));
        assert!(!filled.get(0, 1, 1, false));

        let mut shape = ComplexShape::filled(3, 3, 3, IVec3::ZERO);
        shape.unset(1, 1, 1, false).unwrap();
        let filled = fill_single_holes(&shape);
        assert_eq!(filled.count_set(), 27);
    }

    #[test]
    fn test_invalid_params() {
        let cube = Cuboid::new(1, 1, 1).unwrap();
        assert!(matches!(
            grow(&cube, &params(2.0, 0.5, 1), &mut SimpleRng::new(0)),
            Err(Error::Argument(_))
        ));
    }
}
