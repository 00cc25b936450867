//! Ray-cylinder intersection (quadratic equation).

use crate::Ray;
use celltrace_geom::Cylinder;

/// Intersect a ray with an infinite cylindrical surface.
///
/// Returns the smaller non-negative root, or `None` when the ray misses,
/// runs parallel to the axis, or crosses only behind the origin.
pub fn intersect_cylinder(ray: &Ray, cylinder: &Cylinder) -> Option<f64> {
    let axis = cylinder.axis.as_ref();
    let d = ray.direction.as_ref();
    let oc = ray.origin - cylinder.center;

    // Project ray direction and origin-center onto the plane perpendicular
    // to the axis; the quadratic |oc_perp + t*d_perp|^2 = r^2 follows.
    let d_perp = d - d.dot(axis) * axis;
    let oc_perp = oc - oc.dot(axis) * axis;

    let a = d_perp.dot(&d_perp);
    let b = 2.0 * oc_perp.dot(&d_perp);
    let c = oc_perp.dot(&oc_perp) - cylinder.radius * cylinder.radius;

    // Ray is parallel to axis
    if a.abs() < 1e-12 {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let near = (-b - sqrt_disc) / (2.0 * a);
    let far = (-b + sqrt_disc) / (2.0 * a);

    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}
