#![warn(missing_docs)]

//! Ray-surface intersection and ray advance for the celltrace CSG kernel.
//!
//! The intersection routines compute the nearest forward crossing of a
//! ray with each primitive surface in closed form. On top of them,
//! [`next_crossing`] advances a ray across the nearest region boundary of
//! its current cell, honoring transmission, vacuum, and reflective
//! boundary conditions, and [`Walk`] drives a ray cell-to-cell through a
//! whole geometry.

mod advance;
mod intersect;
mod ray;

pub use advance::{next_crossing, reflect, Crossing, Walk, WalkEvent, RAY_BUMP};
pub use intersect::{
    intersect_cone, intersect_cylinder, intersect_plane, intersect_sphere, intersect_surface,
};
pub use ray::Ray;
