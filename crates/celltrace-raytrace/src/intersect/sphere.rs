//! Ray-sphere intersection (quadratic equation).

use crate::Ray;
use celltrace_geom::Sphere;

/// Intersect a ray with a sphere.
///
/// Returns the smaller non-negative root of the quadratic (the far root
/// when the ray starts inside the sphere), or `None` when both roots are
/// negative or the ray misses.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<f64> {
    let oc = ray.origin - sphere.center;
    let d = ray.direction.as_ref();

    // Quadratic: |oc + t*d|^2 = r^2
    let a = d.dot(d); // Always 1 for unit direction, but explicit for clarity
    let b = 2.0 * oc.dot(d);
    let c = oc.dot(&oc) - sphere.radius * sphere.radius;

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
