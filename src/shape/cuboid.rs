//! Axis-aligned box primitive.

use glam::{IVec3, UVec3};
use crate::core::{Error, types::Result};
use super::{MAX_EXTENT, Shape, immutable_error};

/// Immutable cuboid: set iff every local axis lies within `[0, size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cuboid {
    size: UVec3,
    origin: IVec3,
}

impl Cuboid {
    pub fn new(width: u32, height: u32, length: u32) -> Result<Self> {
        let valid = |d: u32| d > 0 && d <= MAX_EXTENT;
        if !(valid(width) && valid(height) && valid(length)) {
            return Err(Error::Argument(format!(
                "cuboid dimensions must lie in 1..={}, got {}x{}x{}",
                MAX_EXTENT, width, height, length
            )));
        }
        Ok(Self {
            size: UVec3::new(width, height, length),
            origin: IVec3::ZERO,
        })
    }

    /// Cuboid whose origin sits at the centre voxel.
    pub fn centered(width: u32, height: u32, length: u32) -> Result<Self> {
        let cuboid = Self::new(width, height, length)?;
        Ok(cuboid.with_origin((cuboid.size / 2).as_ivec3()))
    }

    pub fn with_origin(mut self, origin: IVec3) -> Self {
        self.origin = origin;
        self
    }
}

impl Shape for Cuboid {
    fn width(&self) -> u32 {
        self.size.x
    }

    fn height(&self) -> u32 {
        self.size.y
    }

    fn length(&self) -> u32 {
        self.size.z
    }

    fn origin(&self) -> IVec3 {
        self.origin
    }

    fn get(&self, x: i32, y: i32, z: i32, relative: bool) -> bool {
        self.contains_local(self.resolve(x, y, z, relative))
    }

    fn set(&mut self, _x: i32, _y: i32, _z: i32, _relative: bool) -> Result<()> {
        Err(immutable_error("Cuboid"))
    }

    fn unset(&mut self, _x: i32, _y: i32, _z: i32, _relative: bool) -> Result<()> {
        Err(immutable_error("Cuboid"))
    }

    fn is_mutable(&self) -> bool {
        false
    }

    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }

    fn count_set(&self) -> usize {
        self.volume()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_box() {
        let c = Cuboid::new(2, 3, 4).unwrap();
        assert_eq!(c.count_set(), 24);
        assert!(c.get(1, 2, 3, false));
        assert!(!c.get(2, 0, 0, false));
    }

    #[test]
    fn test_centered_origin() {
        let c = Cuboid::centered(3, 3, 3).unwrap();
        assert_eq!(c.origin(), IVec3::ONE);
        assert!(c.get(-1, -1, -1, true));
        assert!(!c.get(-2, 0, 0, true));
    }

    #[test]
    fn test_to_complex_then_edit() {
        let c = Cuboid::new(2, 2, 2).unwrap();
        let mut editable = c.to_complex();
        editable.unset(0, 0, 0, false).unwrap();
        assert_eq!(editable.count_set(), 7);
        assert_eq!(c.count_set(), 8);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(Cuboid::new(0, 1, 1), Err(Error::Argument(_))));
        assert!(matches!(Cuboid::centered(1, u32::MAX, 1), Err(Error::Argument(_))));
    }
}
