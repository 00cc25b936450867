//! Ray advance: crossing the nearest region boundary of a cell.

use crate::intersect::intersect_surface;
use crate::Ray;
use celltrace_geom::{BoundaryKind, Plane, Surface};
use celltrace_scene::{Geometry, Region};

/// Geometric bump applied past a crossed surface.
///
/// The advanced origin is pushed this far beyond the crossing so that
/// half-space queries land unambiguously on the exit side. This is the
/// kernel's only tunable; coordinates with magnitudes well beyond 1e6 may
/// need a larger bump than this fixed value provides.
pub const RAY_BUMP: f64 = 1e-9;

/// Result of advancing a ray across one region boundary.
#[derive(Debug, Clone, Copy)]
pub struct Crossing {
    /// The advanced ray, origin just past the crossed surface (reflected
    /// first if the surface is reflective).
    pub ray: Ray,
    /// Index of the crossed region in the cell's region list.
    pub region: usize,
    /// Boundary condition of the crossed surface.
    pub boundary: BoundaryKind,
}

/// Mirror a ray's direction across a plane's normal.
///
/// The returned ray shares the input's origin. Only planes reflect;
/// construction already rejects reflective quadrics.
pub fn reflect(ray: &Ray, plane: &Plane) -> Ray {
    let n = plane.normal.as_ref();
    let d = ray.direction.as_ref();
    Ray::new(ray.origin, d - 2.0 * d.dot(n) * n)
}

/// Advance a ray to the nearest boundary of its current cell.
///
/// Every region's surface is intersected; the minimum positive parameter
/// wins, with ties resolving to the earlier region index. The advanced
/// origin is bumped [`RAY_BUMP`] past the surface; a reflective crossing
/// additionally mirrors the direction and backs the origin off by twice
/// the bump along the reflected direction.
///
/// Returns `None` when no region is hit. That is only possible for rays
/// outside a closed cell, which callers of a well-formed geometry never
/// produce.
pub fn next_crossing(ray: &Ray, regions: &[Region]) -> Option<Crossing> {
    let mut nearest: Option<(usize, f64)> = None;
    for (index, region) in regions.iter().enumerate() {
        if let Some(t) = intersect_surface(ray, region.surface()) {
            match nearest {
                Some((_, best)) if t >= best => {}
                _ => nearest = Some((index, t)),
            }
        }
    }
    let (index, t) = nearest?;

    let surface = regions[index].surface();
    let boundary = surface.boundary();
    let crossed = Ray::new(ray.at(t + RAY_BUMP), *ray.direction.as_ref());

    let advanced = match (boundary, surface) {
        (BoundaryKind::Reflective, Surface::Plane(plane)) => {
            let mirrored = reflect(&crossed, plane);
            Ray::new(
                mirrored.origin + 2.0 * RAY_BUMP * mirrored.direction.as_ref(),
                *mirrored.direction.as_ref(),
            )
        }
        _ => crossed,
    };

    Some(Crossing {
        ray: advanced,
        region: index,
        boundary,
    })
}

/// One step of a [`Walk`]: the cell the ray was in and the crossing that
/// took it out.
#[derive(Debug, Clone, Copy)]
pub struct WalkEvent {
    /// Index of the cell the crossing left.
    pub cell: usize,
    /// The boundary crossing.
    pub crossing: Crossing,
}

/// Iterator driving a ray cell-to-cell through a geometry.
///
/// Each step resolves the current cell of the ray origin and crosses its
/// nearest boundary. The walk ends after a vacuum crossing, or when the
/// origin is in no cell, or when nothing is hit. A scene of facing
/// mirrors never terminates on its own; callers wanting a step budget
/// can `take(n)`.
#[derive(Debug)]
pub struct Walk<'a> {
    geometry: &'a Geometry,
    ray: Option<Ray>,
}

impl<'a> Walk<'a> {
    /// Start a walk of `geometry` from `ray`.
    pub fn new(geometry: &'a Geometry, ray: Ray) -> Self {
        Self {
            geometry,
            ray: Some(ray),
        }
    }
}

impl Iterator for Walk<'_> {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<WalkEvent> {
        let ray = self.ray.take()?;
        let cell = self.geometry.find_cell(&ray.origin)?;
        let crossing = next_crossing(&ray, self.geometry.cells()[cell].regions())?;
        if crossing.boundary != BoundaryKind::Vacuum {
            self.ray = Some(crossing.ray);
        }
        Some(WalkEvent { cell, crossing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celltrace_geom::{Sense, Sphere};
    use celltrace_math::{Point3, Vec3};
    use std::sync::Arc;

    fn plane_x(x: f64, boundary: BoundaryKind) -> Arc<Surface> {
        Arc::new(Surface::Plane(
            Plane::new(Point3::new(x, 0.0, 0.0), Vec3::x(), boundary).unwrap(),
        ))
    }

    #[test]
    fn test_reflect_head_on() {
        let plane = Plane::new(Point3::origin(), Vec3::x(), BoundaryKind::Reflective).unwrap();
        let ray = Ray::new(Point3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let reflected = reflect(&ray, &plane);
        assert!((reflected.direction.x - (-1.0)).abs() < 1e-12);
        assert!((reflected.origin - ray.origin).norm() < 1e-12);
    }

    #[test]
    fn test_reflect_involution() {
        let plane = Plane::new(
            Point3::origin(),
            Vec3::new(1.0, 2.0, -0.5),
            BoundaryKind::Reflective,
        )
        .unwrap();
        let ray = Ray::new(Point3::new(0.3, -0.2, 0.7), Vec3::new(0.1, -0.9, 0.4));
        let twice = reflect(&reflect(&ray, &plane), &plane);
        assert!((twice.direction.as_ref() - ray.direction.as_ref()).norm() < 1e-12);
    }

    #[test]
    fn test_reflect_preserves_unit_direction() {
        let plane = Plane::new(Point3::origin(), Vec3::new(0.0, 1.0, 1.0), BoundaryKind::Reflective)
            .unwrap();
        let ray = Ray::new(Point3::origin(), Vec3::new(1.0, 1.0, 0.0));
        let reflected = reflect(&ray, &plane);
        assert!((reflected.direction.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_next_crossing_transmission() {
        // Inside a unit sphere, heading +x: cross at t=1.
        let sphere = Arc::new(Surface::Sphere(
            Sphere::new(Point3::origin(), 1.0, BoundaryKind::Transmission).unwrap(),
        ));
        let regions = vec![Region::negative(sphere.clone())];
        let ray = Ray::new(Point3::origin(), Vec3::x());
        let crossing = next_crossing(&ray, &regions).unwrap();
        assert_eq!(crossing.region, 0);
        assert_eq!(crossing.boundary, BoundaryKind::Transmission);
        // Origin is strictly past the surface: the half-space flipped.
        assert_eq!(sphere.halfspace(&ray.origin), Sense::Negative);
        assert_eq!(sphere.halfspace(&crossing.ray.origin), Sense::Positive);
        assert!((crossing.ray.origin.x - (1.0 + RAY_BUMP)).abs() < 1e-12);
    }

    #[test]
    fn test_next_crossing_picks_nearest() {
        let near = plane_x(1.0, BoundaryKind::Transmission);
        let far = plane_x(2.0, BoundaryKind::Vacuum);
        // Region order deliberately lists the far plane first.
        let regions = vec![Region::negative(far), Region::negative(near)];
        let ray = Ray::new(Point3::origin(), Vec3::x());
        let crossing = next_crossing(&ray, &regions).unwrap();
        assert_eq!(crossing.region, 1);
        assert_eq!(crossing.boundary, BoundaryKind::Transmission);
    }

    #[test]
    fn test_next_crossing_tie_prefers_earlier_index() {
        // Two coincident planes: the earlier region index wins.
        let first = plane_x(1.0, BoundaryKind::Vacuum);
        let second = plane_x(1.0, BoundaryKind::Transmission);
        let regions = vec![Region::negative(first), Region::negative(second)];
        let ray = Ray::new(Point3::origin(), Vec3::x());
        let crossing = next_crossing(&ray, &regions).unwrap();
        assert_eq!(crossing.region, 0);
        assert_eq!(crossing.boundary, BoundaryKind::Vacuum);
    }

    #[test]
    fn test_next_crossing_no_hit() {
        // A single plane behind the ray: nothing ahead to cross.
        let wall = plane_x(-1.0, BoundaryKind::Transmission);
        let regions = vec![Region::positive(wall)];
        let ray = Ray::new(Point3::origin(), Vec3::x());
        assert!(next_crossing(&ray, &regions).is_none());
    }

    #[test]
    fn test_next_crossing_reflective() {
        // Mirror at x=0, ray approaching from the left.
        let mirror = plane_x(0.0, BoundaryKind::Reflective);
        let regions = vec![Region::negative(mirror.clone())];
        let ray = Ray::new(Point3::new(-1.0, 0.0, 0.0), Vec3::x());
        let crossing = next_crossing(&ray, &regions).unwrap();
        assert_eq!(crossing.boundary, BoundaryKind::Reflective);
        // Direction mirrored.
        assert!((crossing.ray.direction.x - (-1.0)).abs() < 1e-12);
        // Origin crossed to x = +bump, then backed off 2·bump along -x.
        assert!((crossing.ray.origin.x - (-RAY_BUMP)).abs() < 1e-12);
        // Net effect: the origin sits on the incoming side, with travel
        // reversed, so the reflected ray walks back into the cell.
        assert_eq!(mirror.halfspace(&crossing.ray.origin), Sense::Negative);
    }
}
