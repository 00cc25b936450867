//! Ray-plane intersection (closed-form).

use crate::Ray;
use celltrace_geom::Plane;

/// Intersect a ray with a plane.
///
/// Returns `Some(t)` if the ray crosses the plane at a non-negative
/// parameter, or `None` if the ray is parallel to the plane (including a
/// ray lying in it) or crosses behind the origin.
pub fn intersect_plane(ray: &Ray, plane: &Plane) -> Option<f64> {
    let normal = plane.normal.as_ref();
    let denom = ray.direction.as_ref().dot(normal);

    // Ray is parallel to plane
    if denom.abs() < 1e-12 {
        return None;
    }

    let t = (plane.point - ray.origin).dot(normal) / denom;

    // Intersection is behind ray origin
    if t < 0.0 {
        return None;
    }

    Some(t)
}
