//! Ray-cone intersection (quadratic equation).

use crate::Ray;
use celltrace_geom::Cone;
use celltrace_math::Point3;

/// Intersect a ray with a double-napped cone, reporting only the real
/// nappe (the one the axis points into).
///
/// A tangential graze (zero discriminant) reports its single root without
/// the nappe filter, so a ray along the axis reports the apex. When two
/// distinct roots exist, each candidate point must lie strictly on the
/// real nappe: `(p − apex) · axis > 0`.
pub fn intersect_cone(ray: &Ray, cone: &Cone) -> Option<f64> {
    let axis = cone.axis.as_ref();
    let d = ray.direction.as_ref();
    let co = ray.origin - cone.apex;

    let cos_a = cone.half_angle.cos();
    let cos2 = cos_a * cos_a;

    let d_dot_a = d.dot(axis);
    let co_dot_a = co.dot(axis);

    // Quadratic coefficients from ((P - apex)·axis)^2 = |P - apex|^2 cos^2.
    let a = d_dot_a * d_dot_a - cos2;
    let b = 2.0 * (d_dot_a * co_dot_a - cos2 * d.dot(&co));
    let c = co_dot_a * co_dot_a - cos2 * co.dot(&co);

    if a.abs() < 1e-12 {
        // Ray runs at exactly the half-angle: the quadratic degenerates to
        // a line with at most one crossing.
        if b.abs() < 1e-12 {
            return None;
        }
        let t = -c / b;
        if t >= 0.0 && on_real_nappe(cone, &ray.at(t)) {
            return Some(t);
        }
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    if discriminant == 0.0 {
        // Tangential graze, single root; no nappe filter.
        let t = -b / (2.0 * a);
        return (t >= 0.0).then_some(t);
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);

    // `a` may be negative, so the roots are not ordered; take the smaller
    // valid one explicitly.
    let mut best: Option<f64> = None;
    for t in [t1, t2] {
        if t < 0.0 {
            continue;
        }
        if !on_real_nappe(cone, &ray.at(t)) {
            continue;
        }
        best = match best {
            Some(prev) if prev <= t => Some(prev),
            _ => Some(t),
        };
    }
    best
}

/// Whether a point lies on the nappe the axis opens into. The apex plane
/// itself is excluded.
fn on_real_nappe(cone: &Cone, point: &Point3) -> bool {
    (point - cone.apex).dot(cone.axis.as_ref()) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use celltrace_geom::BoundaryKind;
    use celltrace_math::Vec3;
    use std::f64::consts::PI;

    /// 45° cone with apex at the origin opening along +Z.
    fn z_cone() -> Cone {
        Cone::new(Point3::origin(), Vec3::z(), PI / 4.0, BoundaryKind::Transmission).unwrap()
    }

    #[test]
    fn test_ray_cone_through_axis() {
        let cone = z_cone();
        // At z=5 the cone wall is at x=±5; enters at x=-5.
        let ray = Ray::new(Point3::new(-20.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 0.0));
        let t = intersect_cone(&ray, &cone).unwrap();
        assert!((t - 15.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_cone_apex_along_axis() {
        // An axial ray grazes the apex: zero discriminant, root reported.
        let cone = z_cone();
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        let t = intersect_cone(&ray, &cone).unwrap();
        assert!((t - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_cone_shadow_nappe_rejected() {
        // Walking away from the real nappe: the only crossing is behind.
        let cone = z_cone();
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(intersect_cone(&ray, &cone).is_none());
    }

    #[test]
    fn test_ray_cone_shadow_hits_filtered() {
        // A ray crossing only the z<0 nappe reports nothing.
        let cone = z_cone();
        let ray = Ray::new(Point3::new(-20.0, 0.0, -5.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(intersect_cone(&ray, &cone).is_none());
    }

    #[test]
    fn test_ray_cone_miss() {
        let cone = Cone::new(Point3::origin(), Vec3::z(), PI / 6.0, BoundaryKind::Transmission)
            .unwrap();
        // Far from the axis at this height: radius there is tan(30°)·10 ≈ 5.77.
        let ray = Ray::new(Point3::new(0.0, 20.0, 10.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(intersect_cone(&ray, &cone).is_none());
    }

    #[test]
    fn test_ray_cone_from_inside() {
        // Starting inside the real nappe, the exit crossing is reported.
        let cone = z_cone();
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 0.0));
        let t = intersect_cone(&ray, &cone).unwrap();
        assert!((t - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_cone_half_angle_direction() {
        // Direction at exactly the half-angle: degenerate linear case.
        let cone = z_cone();
        let ray = Ray::new(Point3::new(-10.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 1.0));
        let t = intersect_cone(&ray, &cone).unwrap();
        // Crossing at (-5, 0, 5), 5√2 along the ray... the wall there is
        // the x=-z generator of the z>0 nappe.
        assert!((t - 5.0 * 2.0_f64.sqrt()).abs() < 1e-10);
        let p = ray.at(t);
        assert!((p.x - (-5.0)).abs() < 1e-9);
        assert!((p.z - 5.0).abs() < 1e-9);
    }
}
