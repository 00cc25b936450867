#![warn(missing_docs)]

//! celltrace: a CSG cell-tracking kernel.
//!
//! A scene is a partition of an axis-aligned bounding box into cells,
//! each cell a Boolean combination of analytic half-spaces (planes,
//! spheres, infinite cylinders, cones). The kernel answers two queries:
//! which cell contains a point, and where a ray next crosses a surface of
//! its current cell, honoring transmission, vacuum, and reflective
//! boundaries.
//!
//! All scene entities are immutable after construction, so queries are
//! freely concurrent.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use celltrace::{
//!     next_crossing, Aabb3, BoundaryKind, Cell, Geometry, Plane, Point3, Ray, Region,
//!     Surface, Vec3,
//! };
//!
//! // A box split at x = 0 into two cells by a transmissive plane.
//! let divider = Arc::new(Surface::Plane(Plane::new(
//!     Point3::origin(),
//!     Vec3::x(),
//!     BoundaryKind::Transmission,
//! )?));
//! let left = Cell::from_infix(vec![Region::negative(divider.clone())], "0")?;
//! let right = Cell::from_infix(vec![Region::positive(divider)], "0")?;
//! let bounds = Aabb3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
//! let geometry = Geometry::new(vec![left, right], bounds);
//!
//! assert_eq!(geometry.find_cell(&Point3::new(-0.5, 0.0, 0.0)), Some(0));
//! assert_eq!(geometry.find_cell(&Point3::new(0.5, 0.0, 0.0)), Some(1));
//!
//! // Advance a ray across the divider into the right cell.
//! let ray = Ray::new(Point3::new(-0.5, 0.0, 0.0), Vec3::x());
//! let cell = geometry.find_cell(&ray.origin).unwrap();
//! let crossing = next_crossing(&ray, geometry.cells()[cell].regions()).unwrap();
//! assert_eq!(crossing.boundary, BoundaryKind::Transmission);
//! assert_eq!(geometry.find_cell(&crossing.ray.origin), Some(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use celltrace_expr;
pub use celltrace_geom;
pub use celltrace_math;
pub use celltrace_raytrace;
pub use celltrace_scene;

pub use celltrace_expr::{Expr, ExprError};
pub use celltrace_geom::{
    BoundaryKind, Cone, Cylinder, GeomError, Plane, Sense, Sphere, Surface,
};
pub use celltrace_math::{Aabb3, Dir3, Point3, Vec3};
pub use celltrace_raytrace::{
    intersect_surface, next_crossing, reflect, Crossing, Ray, Walk, WalkEvent, RAY_BUMP,
};
pub use celltrace_scene::{evaluate, Cell, Geometry, Region};
