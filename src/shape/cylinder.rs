//! Vertical cylinder primitive.

use glam::IVec3;
use crate::core::{Error, types::Result};
use super::ellipsoid::{axis_term, check_radius, span};
use super::{MAX_EXTENT, Shape, immutable_error};

/// Immutable y-aligned cylinder: `(x/rx)^2 + (z/rz)^2 <= 1` and `0 <= y < height`.
///
/// The origin sits on the axis at the bottom face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    rx: f64,
    rz: f64,
    height: u32,
}

impl Cylinder {
    pub fn new(rx: f64, rz: f64, height: u32) -> Result<Self> {
        check_radius(rx)?;
        check_radius(rz)?;
        if height == 0 || height > MAX_EXTENT {
            return Err(Error::Argument(format!(
                "cylinder height {} must lie in 1..={}",
                height, MAX_EXTENT
            )));
        }
        Ok(Self { rx, rz, height })
    }

    /// Circular cylinder.
    pub fn circular(radius: f64, height: u32) -> Result<Self> {
        Self::new(radius, radius, height)
    }
}

impl Shape for Cylinder {
    fn width(&self) -> u32 {
        span(self.rx)
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn length(&self) -> u32 {
        span(self.rz)
    }

    fn origin(&self) -> IVec3 {
        IVec3::new(self.rx.floor() as i32, 0, self.rz.floor() as i32)
    }

    fn get(&self, x: i32, y: i32, z: i32, relative: bool) -> bool {
        let p = self.resolve(x, y, z, relative);
        if !self.contains_local(p) {
            return false;
        }
        let c = p - self.origin();
        axis_term(c.x, self.rx) + axis_term(c.z, self.rz) <= 1.0
            && c.y >= 0
            && (c.y as u32) < self.height
    }

    fn set(&mut self, _x: i32, _y: i32, _z: i32, _relative: bool) -> Result<()> {
        Err(immutable_error("Cylinder"))
    }

    fn unset(&mut self, _x: i32, _y: i32, _z: i32, _relative: bool) -> Result<()> {
        Err(immutable_error("Cylinder"))
    }

    fn is_mutable(&self) -> bool {
        false
    }

    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let c = Cylinder::circular(2.0, 4).unwrap();
        assert_eq!((c.width(), c.height(), c.length()), (5, 4, 5));
        assert_eq!(c.origin(), IVec3::new(2, 0, 2));
    }

    #[test]
    fn test_membership() {
        let c = Cylinder::circular(2.0, 3).unwrap();
        assert!(c.get(0, 0, 0, true));
        assert!(c.get(0, 2, 0, true));
        assert!(!c.get(0, 3, 0, true));
        assert!(!c.get(0, -1, 0, true));
        assert!(c.get(2, 1, 0, true));
        assert!(!c.get(2, 1, 1, true));
    }

    #[test]
    fn test_every_layer_identical() {
        let c = Cylinder::circular(3.0, 5).unwrap();
        let per_layer = c.count_set() / 5;
        assert_eq!(c.count_set(), per_layer * 5);
    }

    #[test]
    fn test_immutable() {
        let mut c = Cylinder::circular(1.0, 1).unwrap();
        assert!(matches!(c.set(0, 0, 0, true), Err(Error::Unsupported(_))));
        assert!(Cylinder::circular(1.0, 0).is_err());
    }

    #[test]
    fn test_oversized_rejected() {
        assert!(matches!(Cylinder::circular(3.0e9, 1), Err(Error::Argument(_))));
        assert!(matches!(Cylinder::circular(1.0, u32::MAX), Err(Error::Argument(_))));
    }
}
