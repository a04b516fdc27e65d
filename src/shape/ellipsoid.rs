//! Ellipsoid primitive: `(x/rx)^2 + (y/ry)^2 + (z/rz)^2 <= 1`.

use glam::IVec3;
use crate::core::{Error, types::Result};
use super::{ComplexShape, MAX_EXTENT, Shape, immutable_error};

/// Immutable ellipsoid centred on its origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    radius: [f64; 3],
    dims: [u32; 3],
}

impl Ellipsoid {
    pub fn new(rx: f64, ry: f64, rz: f64) -> Result<Self> {
        let radius = [rx, ry, rz];
        for r in radius {
            check_radius(r)?;
        }
        Ok(Self {
            radius,
            dims: radius.map(span),
        })
    }

    /// Sphere of the given radius.
    pub fn sphere(radius: f64) -> Result<Self> {
        Self::new(radius, radius, radius)
    }

    pub fn radii(&self) -> [f64; 3] {
        self.radius
    }

    /// Whether a centre-relative position lies inside.
    pub fn contains(&self, c: IVec3) -> bool {
        axis_term(c.x, self.radius[0])
            + axis_term(c.y, self.radius[1])
            + axis_term(c.z, self.radius[2])
            <= 1.0
    }
}

impl Shape for Ellipsoid {
    fn width(&self) -> u32 {
        self.dims[0]
    }

    fn height(&self) -> u32 {
        self.dims[1]
    }

    fn length(&self) -> u32 {
        self.dims[2]
    }

    fn origin(&self) -> IVec3 {
        IVec3::new(
            self.radius[0].floor() as i32,
            self.radius[1].floor() as i32,
            self.radius[2].floor() as i32,
        )
    }

    fn get(&self, x: i32, y: i32, z: i32, relative: bool) -> bool {
        let p = self.resolve(x, y, z, relative);
        self.contains_local(p) && self.contains(p - self.origin())
    }

    fn set(&mut self, _x: i32, _y: i32, _z: i32, _relative: bool) -> Result<()> {
        Err(immutable_error("Ellipsoid"))
    }

    fn unset(&mut self, _x: i32, _y: i32, _z: i32, _relative: bool) -> Result<()> {
        Err(immutable_error("Ellipsoid"))
    }

    fn is_mutable(&self) -> bool {
        false
    }

    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }
}

/// Box extent along one axis: `floor(2 * radius) + 1`.
pub(crate) fn span(radius: f64) -> u32 {
    (2.0 * radius).floor() as u32 + 1
}

/// Radii must be finite, non-negative and small enough that the box extent
/// `floor(2 * radius) + 1` stays within [`MAX_EXTENT`].
pub(crate) fn check_radius(radius: f64) -> Result<()> {
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(Error::Argument(format!("invalid radius {}", radius)));
    }
    if (2.0 * radius).floor() + 1.0 > MAX_EXTENT as f64 {
        return Err(Error::Argument(format!(
            "radius {} exceeds the maximum shape extent {}",
            radius, MAX_EXTENT
        )));
    }
    Ok(())
}

/// `(c / r)^2`, treating a zero radius as a single-voxel slab.
pub(crate) fn axis_term(c: i32, radius: f64) -> f64 {
    if radius == 0.0 {
        if c == 0 { 0.0 } else { f64::INFINITY }
    } else {
        let t = c as f64 / radius;
        t * t
    }
}

impl From<Ellipsoid> for ComplexShape {
    fn from(shape: Ellipsoid) -> Self {
        shape.to_complex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let e = Ellipsoid::new(2.0, 1.5, 0.0).unwrap();
        assert_eq!((e.width(), e.height(), e.length()), (5, 4, 1));
        assert_eq!(e.origin(), IVec3::new(2, 1, 0));
    }

    #[test]
    fn test_sphere_membership() {
        let s = Ellipsoid::sphere(2.0).unwrap();
        assert!(s.get(0, 0, 0, true));
        assert!(s.get(2, 0, 0, true));
        assert!(!s.get(2, 1, 0, true));
        assert!(!s.get(0, 0, 0, false)); // corner of the box
        assert!(s.get(2, 2, 2, false)); // centre in local coordinates
    }

    #[test]
    fn test_out_of_box_is_unset() {
        let s = Ellipsoid::sphere(1.0).unwrap();
        assert!(!s.get(5, 0, 0, true));
        assert!(!s.get(-1, 1, 1, false));
    }

    #[test]
    fn test_immutable() {
        let mut s = Ellipsoid::sphere(1.0).unwrap();
        assert!(!s.is_mutable());
        assert!(matches!(s.set(0, 0, 0, true), Err(Error::Unsupported(_))));
        assert!(matches!(s.unset(0, 0, 0, true), Err(Error::Unsupported(_))));
    }

    #[test]
    fn test_invalid_radius() {
        assert!(Ellipsoid::sphere(-1.0).is_err());
        assert!(Ellipsoid::new(1.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_huge_radius_rejected() {
        assert!(matches!(Ellipsoid::sphere(3.0e9), Err(Error::Argument(_))));
        assert!(matches!(Ellipsoid::new(1.0, 1.0, f64::MAX), Err(Error::Argument(_))));
        let limit = (MAX_EXTENT - 1) as f64 / 2.0;
        assert!(Ellipsoid::new(limit, 0.0, 0.0).is_ok());
        assert!(Ellipsoid::new(limit + 1.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_point_sphere() {
        let s = Ellipsoid::sphere(0.0).unwrap();
        assert_eq!(s.count_set(), 1);
    }
}
