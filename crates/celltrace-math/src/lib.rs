#![warn(missing_docs)]

//! Math types for the celltrace CSG kernel.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! analytic scene geometry: points, vectors, unit directions, and the
//! axis-aligned bounding box that frames a scene.

use nalgebra::{Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Axis-aligned bounding box in 3D.
///
/// A scene's cells are assumed to partition the interior of one of these;
/// the box itself is closed (points on a face count as contained).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3 {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an empty (inverted) AABB suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Expand this AABB to include a point.
    pub fn include_point(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Test if a point lies inside the box (faces count as inside).
    pub fn contains_point(&self, p: &Point3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point() {
        let aabb = Aabb3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        assert!(aabb.contains_point(&Point3::new(0.0, 0.0, 0.0)));
        assert!(aabb.contains_point(&Point3::new(1.0, 1.0, 1.0))); // faces count
        assert!(!aabb.contains_point(&Point3::new(1.5, 0.0, 0.0)));
        assert!(!aabb.contains_point(&Point3::new(0.0, -1.001, 0.0)));
    }

    #[test]
    fn test_include_point_from_empty() {
        let mut aabb = Aabb3::empty();
        aabb.include_point(&Point3::new(1.0, 2.0, 3.0));
        aabb.include_point(&Point3::new(-1.0, 0.0, 5.0));
        assert!((aabb.min.x - (-1.0)).abs() < 1e-12);
        assert!((aabb.min.y - 0.0).abs() < 1e-12);
        assert!((aabb.min.z - 3.0).abs() < 1e-12);
        assert!((aabb.max.x - 1.0).abs() < 1e-12);
        assert!((aabb.max.y - 2.0).abs() < 1e-12);
        assert!((aabb.max.z - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_contains_nothing() {
        let aabb = Aabb3::empty();
        assert!(!aabb.contains_point(&Point3::origin()));
    }
}
