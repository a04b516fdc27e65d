//! Bounded boolean voxel volumes.
//!
//! A shape has a fixed bounding box of `width x height x length` voxels and an
//! `origin`: the grid position that relative coordinate (0, 0, 0) maps to.
//! Every accessor takes a `relative` flag. With `relative = false` the
//! coordinates are local grid indices; with `relative = true` the origin is
//! added first.

pub mod complex;
pub mod cuboid;
pub mod cylinder;
pub mod ellipsoid;

pub use complex::ComplexShape;
pub use cuboid::Cuboid;
pub use cylinder::Cylinder;
pub use ellipsoid::Ellipsoid;

use glam::{IVec3, UVec3};
use crate::core::types::Result;

/// A voxel selection with immutable dimensions.
pub trait Shape: Send + Sync {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn length(&self) -> u32;

    /// Grid position of relative (0, 0, 0).
    fn origin(&self) -> IVec3;

    /// Whether the voxel is part of the selection. Out-of-box queries are false.
    fn get(&self, x: i32, y: i32, z: i32, relative: bool) -> bool;

    /// Add a voxel to the selection.
    fn set(&mut self, x: i32, y: i32, z: i32, relative: bool) -> Result<()>;

    /// Remove a voxel from the selection.
    fn unset(&mut self, x: i32, y: i32, z: i32, relative: bool) -> Result<()>;

    /// False for shapes whose `set`/`unset` always fail.
    fn is_mutable(&self) -> bool;

    fn clone_box(&self) -> Box<dyn Shape>;

    /// Explicit copy into mutable dense storage.
    fn to_complex(&self) -> ComplexShape {
        let mut out = ComplexShape::new(self.width(), self.height(), self.length(), self.origin());
        for_each_local(self.dimensions(), |p| {
            if self.get(p.x, p.y, p.z, false) {
                out.set_local(p, true);
            }
        });
        out
    }

    fn dimensions(&self) -> UVec3 {
        UVec3::new(self.width(), self.height(), self.length())
    }

    /// Convert caller coordinates into a local grid position.
    fn resolve(&self, x: i32, y: i32, z: i32, relative: bool) -> IVec3 {
        let p = IVec3::new(x, y, z);
        if relative { p + self.origin() } else { p }
    }

    fn contains_local(&self, p: IVec3) -> bool {
        in_bounds(self.dimensions(), p)
    }

    /// Number of voxels in the bounding box.
    fn volume(&self) -> usize {
        self.width() as usize * self.height() as usize * self.length() as usize
    }

    /// Number of selected voxels.
    fn count_set(&self) -> usize {
        let mut count = 0;
        for_each_local(self.dimensions(), |p| {
            if self.get(p.x, p.y, p.z, false) {
                count += 1;
            }
        });
        count
    }
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl<'a> std::fmt::Debug for dyn Shape + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shape")
            .field("dimensions", &self.dimensions())
            .field("origin", &self.origin())
            .field("mutable", &self.is_mutable())
            .finish()
    }
}

/// Largest box extent along any axis; local positions must fit in `i32`.
pub const MAX_EXTENT: u32 = i32::MAX as u32;

pub(crate) fn in_bounds(dims: UVec3, p: IVec3) -> bool {
    p.x >= 0 && p.y >= 0 && p.z >= 0
        && (p.x as u32) < dims.x
        && (p.y as u32) < dims.y
        && (p.z as u32) < dims.z
}

/// Dense index: `y * (width * length) + z * width + x`.
pub(crate) fn linear_index(dims: UVec3, p: IVec3) -> Option<usize> {
    if !in_bounds(dims, p) {
        return None;
    }
    let (w, l) = (dims.x as usize, dims.z as usize);
    Some(p.y as usize * w * l + p.z as usize * w + p.x as usize)
}

/// Visit every local position in y, z, x order (matches storage order).
pub fn for_each_local(dims: UVec3, mut f: impl FnMut(IVec3)) {
    for y in 0..dims.y as i32 {
        for z in 0..dims.z as i32 {
            for x in 0..dims.x as i32 {
                f(IVec3::new(x, y, z));
            }
        }
    }
}

pub(crate) fn immutable_error(kind: &str) -> crate::core::Error {
    crate::core::Error::Unsupported(format!(
        "{} shapes are immutable; copy with to_complex() before editing",
        kind
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_index_layout() {
        let dims = UVec3::new(4, 3, 2);
        assert_eq!(linear_index(dims, IVec3::new(0, 0, 0)), Some(0));
        assert_eq!(linear_index(dims, IVec3::new(1, 0, 0)), Some(1));
        assert_eq!(linear_index(dims, IVec3::new(0, 0, 1)), Some(4));
        assert_eq!(linear_index(dims, IVec3::new(0, 1, 0)), Some(8));
        assert_eq!(linear_index(dims, IVec3::new(3, 2, 1)), Some(23));
        assert_eq!(linear_index(dims, IVec3::new(4, 0, 0)), None);
        assert_eq!(linear_index(dims, IVec3::new(0, -1, 0)), None);
    }

    #[test]
    fn test_for_each_local_visits_volume() {
        let mut seen = 0;
        for_each_local(UVec3::new(2, 3, 4), |_| seen += 1);
        assert_eq!(seen, 24);
    }

    #[test]
    fn test_primitive_to_complex_preserves_membership() {
        let ball = Ellipsoid::sphere(2.0).unwrap();
        let copy = ball.to_complex();
        assert!(copy.is_mutable());
        assert_eq!(copy.dimensions(), ball.dimensions());
        assert_eq!(copy.origin(), ball.origin());
        assert_eq!(copy.count_set(), ball.count_set());
        assert!(copy.get(0, 0, 0, true));
    }
}
