//! Ray-surface intersection algorithms.
//!
//! Each surface type has a dedicated intersector that returns the
//! parameter of the nearest crossing strictly in front of the ray origin,
//! or `None` for a miss. No epsilon is applied inside the formulas;
//! stability at surfaces comes from the caller's bump (see
//! [`crate::RAY_BUMP`]).

mod cone;
mod cylinder;
mod plane;
mod sphere;

pub use cone::intersect_cone;
pub use cylinder::intersect_cylinder;
pub use plane::intersect_plane;
pub use sphere::intersect_sphere;

use crate::Ray;
use celltrace_geom::Surface;

/// Intersect a ray with a surface, dispatching on the surface kind.
pub fn intersect_surface(ray: &Ray, surface: &Surface) -> Option<f64> {
    match surface {
        Surface::Plane(plane) => intersect_plane(ray, plane),
        Surface::Sphere(sphere) => intersect_sphere(ray, sphere),
        Surface::Cylinder(cylinder) => intersect_cylinder(ray, cylinder),
        Surface::Cone(cone) => intersect_cone(ray, cone),
    }
}
