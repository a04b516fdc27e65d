//! Dense mutable shape storage.

use glam::{IVec3, UVec3};
use crate::core::{Error, types::Result};
use super::{Shape, linear_index};

/// General-purpose mutable shape backed by one flag per voxel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplexShape {
    dims: UVec3,
    origin: IVec3,
    voxels: Vec<bool>,
}

impl ComplexShape {
    /// Create an empty shape.
    pub fn new(width: u32, height: u32, length: u32, origin: IVec3) -> Self {
        let volume = width as usize * height as usize * length as usize;
        Self {
            dims: UVec3::new(width, height, length),
            origin,
            voxels: vec![false; volume],
        }
    }

    /// Create a shape with every voxel selected.
    pub fn filled(width: u32, height: u32, length: u32, origin: IVec3) -> Self {
        let mut shape = Self::new(width, height, length, origin);
        shape.voxels.fill(true);
        shape
    }

    /// Empty shape with the same box and origin as `other`.
    pub fn empty_like(other: &dyn Shape) -> Self {
        Self::new(other.width(), other.height(), other.length(), other.origin())
    }

    /// Overwrite every voxel from `other`. Bounding boxes must match.
    pub fn fill_from(&mut self, other: &dyn Shape) -> Result<()> {
        if other.dimensions() != self.dims {
            return Err(Error::Argument(format!(
                "cannot fill {:?} shape from {:?} shape",
                self.dims,
                other.dimensions()
            )));
        }
        let dims = self.dims;
        super::for_each_local(dims, |p| {
            let value = other.get(p.x, p.y, p.z, false);
            self.set_local(p, value);
        });
        Ok(())
    }

    /// Dense index of a local position, if inside the box.
    pub fn index_of(&self, p: IVec3) -> Option<usize> {
        linear_index(self.dims, p)
    }

    pub(crate) fn get_index(&self, index: usize) -> bool {
        self.voxels[index]
    }

    pub(crate) fn set_index(&mut self, index: usize, value: bool) {
        self.voxels[index] = value;
    }

    /// Set a range of dense indices in one pass.
    pub(crate) fn fill_range(&mut self, range: std::ops::Range<usize>, value: bool) {
        self.voxels[range].fill(value);
    }

    /// Infallible in-bounds write used by the algorithms. Out-of-box writes are ignored.
    pub(crate) fn set_local(&mut self, p: IVec3, value: bool) {
        if let Some(i) = self.index_of(p) {
            self.voxels[i] = value;
        }
    }

    fn write(&mut self, x: i32, y: i32, z: i32, relative: bool, value: bool) -> Result<()> {
        let p = self.resolve(x, y, z, relative);
        let index = self.index_of(p).ok_or_else(|| {
            Error::Argument(format!(
                "voxel {:?} outside shape bounds {:?}",
                p, self.dims
            ))
        })?;
        self.voxels[index] = value;
        Ok(())
    }
}

impl Shape for ComplexShape {
    fn width(&self) -> u32 {
        self.dims.x
    }

    fn height(&self) -> u32 {
        self.dims.y
    }

    fn length(&self) -> u32 {
        self.dims.z
    }

    fn origin(&self) -> IVec3 {
        self.origin
    }

    fn get(&self, x: i32, y: i32, z: i32, relative: bool) -> bool {
        let p = self.resolve(x, y, z, relative);
        self.index_of(p).is_some_and(|i| self.voxels[i])
    }

    fn set(&mut self, x: i32, y: i32, z: i32, relative: bool) -> Result<()> {
        self.write(x, y, z, relative, true)
    }

    fn unset(&mut self, x: i32, y: i32, z: i32, relative: bool) -> Result<()> {
        self.write(x, y, z, relative, false)
    }

    fn is_mutable(&self) -> bool {
        true
    }

    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn to_complex(&self) -> ComplexShape {
        self.clone()
    }

    fn count_set(&self) -> usize {
        self.voxels.iter().filter(|v| **v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_unset() {
        let mut shape = ComplexShape::new(3, 3, 3, IVec3::ZERO);
        assert!(!shape.get(1, 1, 1, false));
        shape.set(1, 1, 1, false).unwrap();
        assert!(shape.get(1, 1, 1, false));
        shape.unset(1, 1, 1, false).unwrap();
        assert!(!shape.get(1, 1, 1, false));
    }

    #[test]
    fn test_relative_addressing() {
        let mut shape = ComplexShape::new(5, 5, 5, IVec3::splat(2));
        shape.set(0, 0, 0, true).unwrap();
        assert!(shape.get(2, 2, 2, false));
        assert!(shape.get(0, 0, 0, true));
        shape.set(-2, -2, -2, true).unwrap();
        assert!(shape.get(0, 0, 0, false));
    }

    #[test]
    fn test_dimensions_never_change() {
        let mut shape = ComplexShape::new(4, 2, 3, IVec3::new(1, 0, 1));
        for_each(&mut shape);
        assert_eq!((shape.width(), shape.height(), shape.length()), (4, 2, 3));
        assert_eq!(shape.origin(), IVec3::new(1, 0, 1));

        fn for_each(shape: &mut ComplexShape) {
            for y in 0..2 {
                for z in 0..3 {
                    for x in 0..4 {
                        shape.set(x, y, z, false).unwrap();
                        if (x + z) % 2 == 0 {
                            shape.unset(x, y, z, false).unwrap();
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_trip_every_voxel() {
        let mut shape = ComplexShape::new(3, 2, 4, IVec3::new(1, 1, 2));
        for y in -1..1 {
            for z in -2..2 {
                for x in -1..2 {
                    shape.set(x, y, z, true).unwrap();
                    assert!(shape.get(x, y, z, true));
                    shape.unset(x, y, z, true).unwrap();
                    assert!(!shape.get(x, y, z, true));
                }
            }
        }
    }

    #[test]
    fn test_out_of_bounds_write_is_argument_error() {
        let mut shape = ComplexShape::new(2, 2, 2, IVec3::ZERO);
        assert!(matches!(shape.set(2, 0, 0, false), Err(Error::Argument(_))));
        assert!(matches!(shape.unset(0, -1, 0, false), Err(Error::Argument(_))));
        assert!(matches!(shape.set(1, 1, 1, true).and(shape.set(2, 2, 2, true)), Err(Error::Argument(_))));
        assert!(!shape.get(5, 5, 5, false));
    }

    #[test]
    fn test_fill_from() {
        let mut source = ComplexShape::new(2, 2, 2, IVec3::ZERO);
        source.set(1, 0, 1, false).unwrap();
        let mut target = ComplexShape::filled(2, 2, 2, IVec3::ZERO);
        target.fill_from(&source).unwrap();
        assert_eq!(target.count_set(), 1);
        assert!(target.get(1, 0, 1, false));
    }

    #[test]
    fn test_fill_from_mismatch() {
        let source = ComplexShape::new(2, 2, 2, IVec3::ZERO);
        let mut target = ComplexShape::new(3, 2, 2, IVec3::ZERO);
        assert!(matches!(target.fill_from(&source), Err(Error::Argument(_))));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut shape = ComplexShape::new(2, 2, 2, IVec3::ZERO);
        let boxed: Box<dyn Shape> = Box::new(shape.clone());
        shape.set(0, 0, 0, false).unwrap();
        assert!(!boxed.get(0, 0, 0, false));
        assert!(boxed.clone().is_mutable());
    }
}
