#![warn(missing_docs)]

//! Analytic surface primitives for the celltrace CSG kernel.
//!
//! Each surface splits space into a negative ("inside") and a positive
//! ("outside") half-space and carries the boundary condition the ray walk
//! honors when crossing it. The four primitive kinds (planes, spheres,
//! infinite cylinders, cones) are the leaves every cell definition is
//! built from.

use celltrace_math::{Dir3, Point3, Vec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// Errors that can occur while constructing a surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// Sphere or cylinder radius was zero or negative.
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    /// Cone half-angle outside the open interval (0, π/2).
    #[error("cone half-angle must lie in (0, π/2), got {0}")]
    InvalidHalfAngle(f64),

    /// A normal or axis vector had (near-)zero magnitude.
    #[error("direction vector has zero magnitude")]
    DegenerateDirection,

    /// Reflective boundaries are only defined for planes.
    #[error("reflective boundary is not supported on a {0}")]
    ReflectiveUnsupported(&'static str),
}

/// Result type for surface construction.
pub type Result<T> = std::result::Result<T, GeomError>;

/// Normalize a direction vector, rejecting degenerate input.
fn unit_dir(v: Vec3) -> Result<Dir3> {
    if v.norm() < 1e-12 {
        return Err(GeomError::DegenerateDirection);
    }
    Ok(Dir3::new_normalize(v))
}

// =============================================================================
// Boundary kinds
// =============================================================================

/// Boundary condition of a surface, read by the ray walk when it crosses.
///
/// Transmission continues into the adjacent cell, Vacuum terminates the
/// walk, and Reflective mirrors the ray direction (planes only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryKind {
    /// The ray continues into the adjacent cell.
    #[default]
    Transmission,
    /// The ray leaves the scene; the walk terminates.
    Vacuum,
    /// The ray is mirrored back across the surface.
    Reflective,
}

impl BoundaryKind {
    /// Canonicalize a human-facing boundary name.
    ///
    /// Unknown names map to [`BoundaryKind::Transmission`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "reflective" => BoundaryKind::Reflective,
            "vacuum" => BoundaryKind::Vacuum,
            _ => BoundaryKind::Transmission,
        }
    }
}

impl From<&str> for BoundaryKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

// =============================================================================
// Half-space sense
// =============================================================================

/// Which side of a surface a point lies on.
///
/// The surface itself (half-space value exactly zero) counts as the
/// negative side, so half-spaces are closed on their inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sense {
    /// The −1 side: inside a sphere/cylinder/cone, behind a plane normal.
    Negative,
    /// The +1 side: outside, or ahead of a plane normal.
    Positive,
}

impl Sense {
    /// Classify a signed half-space value. Zero maps to [`Sense::Negative`].
    pub fn from_value(value: f64) -> Self {
        if value <= 0.0 {
            Sense::Negative
        } else {
            Sense::Positive
        }
    }

    /// The opposite sense.
    pub fn flip(self) -> Self {
        match self {
            Sense::Negative => Sense::Positive,
            Sense::Positive => Sense::Negative,
        }
    }

    /// The conventional −1/+1 sign of this sense.
    pub fn sign(self) -> i32 {
        match self {
            Sense::Negative => -1,
            Sense::Positive => 1,
        }
    }
}

// =============================================================================
// Plane
// =============================================================================

/// An infinite plane defined by a point on it and a unit normal.
///
/// The negative half-space is the side the normal points away from:
/// `(p − point) · normal ≤ 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// A point on the plane.
    pub point: Point3,
    /// Unit normal.
    pub normal: Dir3,
    /// Boundary condition.
    pub boundary: BoundaryKind,
}

impl Plane {
    /// Create a plane from a point and a normal. The normal is normalized.
    pub fn new(point: Point3, normal: Vec3, boundary: BoundaryKind) -> Result<Self> {
        Ok(Self {
            point,
            normal: unit_dir(normal)?,
            boundary,
        })
    }

    /// XY plane through the origin (normal +Z), transmissive.
    pub fn xy() -> Self {
        Self {
            point: Point3::origin(),
            normal: Dir3::new_normalize(Vec3::z()),
            boundary: BoundaryKind::Transmission,
        }
    }

    /// XZ plane through the origin (normal +Y), transmissive.
    pub fn xz() -> Self {
        Self {
            point: Point3::origin(),
            normal: Dir3::new_normalize(Vec3::y()),
            boundary: BoundaryKind::Transmission,
        }
    }

    /// YZ plane through the origin (normal +X), transmissive.
    pub fn yz() -> Self {
        Self {
            point: Point3::origin(),
            normal: Dir3::new_normalize(Vec3::x()),
            boundary: BoundaryKind::Transmission,
        }
    }

    /// Signed distance from a point to this plane.
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        (p - self.point).dot(self.normal.as_ref())
    }
}

// =============================================================================
// Sphere
// =============================================================================

/// A sphere defined by center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius, strictly positive.
    pub radius: f64,
    /// Boundary condition (Transmission or Vacuum).
    pub boundary: BoundaryKind,
}

impl Sphere {
    /// Create a sphere. The radius must be positive; reflective
    /// boundaries are rejected (only planes reflect).
    pub fn new(center: Point3, radius: f64, boundary: BoundaryKind) -> Result<Self> {
        if radius <= 0.0 {
            return Err(GeomError::NonPositiveRadius(radius));
        }
        if boundary == BoundaryKind::Reflective {
            return Err(GeomError::ReflectiveUnsupported("sphere"));
        }
        Ok(Self {
            center,
            radius,
            boundary,
        })
    }
}

// =============================================================================
// Cylinder
// =============================================================================

/// An infinite cylindrical surface defined by a point on its axis, the
/// axis direction, and a radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    /// A point on the axis.
    pub center: Point3,
    /// Unit axis direction.
    pub axis: Dir3,
    /// Radius, strictly positive.
    pub radius: f64,
    /// Boundary condition (Transmission or Vacuum).
    pub boundary: BoundaryKind,
}

impl Cylinder {
    /// Create an infinite cylinder. The axis is normalized; the radius
    /// must be positive; reflective boundaries are rejected.
    pub fn new(center: Point3, axis: Vec3, radius: f64, boundary: BoundaryKind) -> Result<Self> {
        if radius <= 0.0 {
            return Err(GeomError::NonPositiveRadius(radius));
        }
        if boundary == BoundaryKind::Reflective {
            return Err(GeomError::ReflectiveUnsupported("cylinder"));
        }
        Ok(Self {
            center,
            axis: unit_dir(axis)?,
            radius,
            boundary,
        })
    }
}

// =============================================================================
// Cone
// =============================================================================

/// A double-napped conical surface defined by apex, axis, and half-angle.
///
/// The axis points into the "real" nappe; the mirror (shadow) nappe is
/// filtered out of ray intersections but, like the real one, lies in the
/// negative half-space. Callers who need a single nappe compose a cone
/// region with a plane region cutting at the apex along the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Cone {
    /// Apex (tip) of the cone.
    pub apex: Point3,
    /// Unit axis direction, pointing into the real nappe.
    pub axis: Dir3,
    /// Half-angle in radians, in the open interval (0, π/2).
    pub half_angle: f64,
    /// Boundary condition (Transmission or Vacuum).
    pub boundary: BoundaryKind,
}

impl Cone {
    /// Create a cone. The axis is normalized; the half-angle must lie in
    /// (0, π/2); reflective boundaries are rejected.
    pub fn new(apex: Point3, axis: Vec3, half_angle: f64, boundary: BoundaryKind) -> Result<Self> {
        if !(half_angle > 0.0 && half_angle < FRAC_PI_2) {
            return Err(GeomError::InvalidHalfAngle(half_angle));
        }
        if boundary == BoundaryKind::Reflective {
            return Err(GeomError::ReflectiveUnsupported("cone"));
        }
        Ok(Self {
            apex,
            axis: unit_dir(axis)?,
            half_angle,
            boundary,
        })
    }
}

// =============================================================================
// Surface
// =============================================================================

/// An analytic surface: one of the four primitive kinds.
///
/// The closed set of variants keeps dispatch a plain `match`; there is no
/// open extension need.
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    /// Infinite plane.
    Plane(Plane),
    /// Sphere.
    Sphere(Sphere),
    /// Infinite cylinder.
    Cylinder(Cylinder),
    /// Double-napped cone.
    Cone(Cone),
}

impl Surface {
    /// Boundary condition carried by this surface.
    pub fn boundary(&self) -> BoundaryKind {
        match self {
            Surface::Plane(p) => p.boundary,
            Surface::Sphere(s) => s.boundary,
            Surface::Cylinder(c) => c.boundary,
            Surface::Cone(c) => c.boundary,
        }
    }

    /// Signed half-space value at a point.
    ///
    /// Negative inside (for quadrics: inside the sphere or cylinder,
    /// inside either cone nappe; for planes: behind the normal), positive
    /// outside, zero on the surface.
    pub fn halfspace_value(&self, p: &Point3) -> f64 {
        match self {
            Surface::Plane(plane) => plane.signed_distance(p),
            Surface::Sphere(sphere) => {
                (p - sphere.center).norm_squared() - sphere.radius * sphere.radius
            }
            Surface::Cylinder(cyl) => {
                (p - cyl.center).cross(cyl.axis.as_ref()).norm_squared()
                    - cyl.radius * cyl.radius
            }
            Surface::Cone(cone) => {
                let d = p - cone.apex;
                let along = d.dot(cone.axis.as_ref());
                let cos_a = cone.half_angle.cos();
                d.norm_squared() * cos_a * cos_a - along * along
            }
        }
    }

    /// Which side of the surface a point lies on.
    ///
    /// Points exactly on the surface report [`Sense::Negative`].
    pub fn halfspace(&self, p: &Point3) -> Sense {
        Sense::from_value(self.halfspace_value(p))
    }
}

impl From<Plane> for Surface {
    fn from(p: Plane) -> Self {
        Surface::Plane(p)
    }
}

impl From<Sphere> for Surface {
    fn from(s: Sphere) -> Self {
        Surface::Sphere(s)
    }
}

impl From<Cylinder> for Surface {
    fn from(c: Cylinder) -> Self {
        Surface::Cylinder(c)
    }
}

impl From<Cone> for Surface {
    fn from(c: Cone) -> Self {
        Surface::Cone(c)
    }
}
