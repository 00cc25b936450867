#![warn(missing_docs)]

//! Cells, regions, and scene geometry for the celltrace CSG kernel.
//!
//! A [`Region`] pairs a shared surface with a half-space sense; a
//! [`Cell`] combines its regions under a Boolean definition; a
//! [`Geometry`] holds the cell list and the bounding box the cells are
//! trusted to partition. All types are immutable after construction, so
//! concurrent queries against one geometry are safe.

use celltrace_expr::{Expr, ExprError};
use celltrace_geom::{Sense, Surface};
use celltrace_math::{Aabb3, Point3};
use std::sync::Arc;

// =============================================================================
// Region
// =============================================================================

/// A half-space: a surface together with the side of it that counts.
///
/// Surfaces are shared via [`Arc`] because several regions (possibly in
/// different cells) cite the same surface.
#[derive(Debug, Clone)]
pub struct Region {
    surface: Arc<Surface>,
    sense: Sense,
}

impl Region {
    /// Create a region from a shared surface and a sense.
    pub fn new(surface: Arc<Surface>, sense: Sense) -> Self {
        Self { surface, sense }
    }

    /// The negative (inside) half-space of a surface.
    pub fn negative(surface: Arc<Surface>) -> Self {
        Self::new(surface, Sense::Negative)
    }

    /// The positive (outside) half-space of a surface.
    pub fn positive(surface: Arc<Surface>) -> Self {
        Self::new(surface, Sense::Positive)
    }

    /// The surface this region cites.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Which side of the surface this region selects.
    pub fn sense(&self) -> Sense {
        self.sense
    }

    /// Whether the point lies in this half-space.
    ///
    /// Points exactly on the surface classify as the negative side, so
    /// they satisfy negative-sense regions.
    pub fn contains(&self, point: &Point3) -> bool {
        self.surface.halfspace(point) == self.sense
    }
}

// =============================================================================
// Expression evaluation
// =============================================================================

/// Evaluate a cell definition at a point.
///
/// The point is threaded explicitly through the recursion; evaluation has
/// no side effects and touches no state beyond its arguments. Leaf
/// indices must be valid for `regions` ([`Cell::new`] guarantees this for
/// any definition reachable through a cell).
pub fn evaluate(expr: &Expr, regions: &[Region], point: &Point3) -> bool {
    match expr {
        Expr::Region { index } => regions[*index].contains(point),
        Expr::Intersection { left, right } => {
            evaluate(left, regions, point) && evaluate(right, regions, point)
        }
        Expr::Union { left, right } => {
            evaluate(left, regions, point) || evaluate(right, regions, point)
        }
        Expr::Complement { inner } => !evaluate(inner, regions, point),
    }
}

// =============================================================================
// Cell
// =============================================================================

/// A volume of the scene: an ordered region list plus the Boolean
/// definition combining them.
#[derive(Debug, Clone)]
pub struct Cell {
    regions: Vec<Region>,
    definition: Expr,
}

impl Cell {
    /// Create a cell, checking that every leaf of the definition refers
    /// to a region in the list.
    pub fn new(regions: Vec<Region>, definition: Expr) -> Result<Self, ExprError> {
        definition.validate(regions.len())?;
        Ok(Self {
            regions,
            definition,
        })
    }

    /// Create a cell from an infix definition string (see
    /// [`Expr::parse`]), e.g. `"0 ^ ~1"`.
    pub fn from_infix(regions: Vec<Region>, definition: &str) -> Result<Self, ExprError> {
        Self::new(regions, Expr::parse(definition)?)
    }

    /// The cell's regions, in definition-index order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The cell's Boolean definition.
    pub fn definition(&self) -> &Expr {
        &self.definition
    }

    /// Whether the point lies inside this cell.
    pub fn contains(&self, point: &Point3) -> bool {
        evaluate(&self.definition, &self.regions, point)
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// A complete scene: cells trusted to partition the bounding box.
///
/// The kernel does not verify the partition; overlapping cells resolve to
/// the earliest match and gaps report no cell.
#[derive(Debug, Clone)]
pub struct Geometry {
    cells: Vec<Cell>,
    bounds: Aabb3,
}

impl Geometry {
    /// Create a geometry from its cells and bounding box.
    pub fn new(cells: Vec<Cell>, bounds: Aabb3) -> Self {
        Self { cells, bounds }
    }

    /// The cells, in lookup order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The bounding box the cells partition.
    pub fn bounds(&self) -> &Aabb3 {
        &self.bounds
    }

    /// Find the cell containing a point: the first cell (in list order)
    /// whose definition is satisfied.
    ///
    /// Returns `None` for points outside the bounding box or in a gap of
    /// an incomplete partition; that is a normal result, not an error.
    pub fn find_cell(&self, point: &Point3) -> Option<usize> {
        if !self.bounds.contains_point(point) {
            return None;
        }
        self.cells.iter().position(|cell| cell.contains(point))
    }
}
