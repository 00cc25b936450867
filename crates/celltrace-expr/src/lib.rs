#![warn(missing_docs)]

//! Cell-definition Boolean expressions for the celltrace CSG kernel.
//!
//! A cell's volume is described by a Boolean expression over the cell's
//! region list: leaves name regions by index, interior nodes combine them
//! with intersection, union, and complement. The tree is purely
//! declarative; evaluation against actual surfaces happens in the scene
//! layer, with the query point passed explicitly.
//!
//! Definitions can be built programmatically or parsed from a small infix
//! language (`"0 ^ ~(1 | 2)"`, see [`Expr::parse`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod parser;

pub use parser::parse;

/// Errors from parsing or validating a cell definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// A character the expression language does not know.
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar {
        /// Byte offset of the character in the input.
        pos: usize,
        /// The offending character.
        ch: char,
    },

    /// A token in a position the grammar does not allow.
    #[error("unexpected token at position {pos}: {message}")]
    UnexpectedToken {
        /// Byte offset of the token in the input.
        pos: usize,
        /// What was found and what was expected.
        message: String,
    },

    /// The expression ended where an operand or operator was required.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// Input remained after a complete expression.
    #[error("trailing input at position {pos}")]
    TrailingInput {
        /// Byte offset of the first unconsumed token.
        pos: usize,
    },

    /// A leaf referred to a region index the owning cell does not have.
    #[error("region index {index} out of range for {count} regions")]
    RegionIndexOutOfRange {
        /// The out-of-range leaf index.
        index: usize,
        /// Number of regions in the cell.
        count: usize,
    },
}

/// A Boolean expression over region indices.
///
/// Indices are 0-based positions into the owning cell's region list.
/// Binary nodes have exactly two children and complement exactly one; the
/// type makes other arities unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
    /// Leaf: the point satisfies region `index`.
    Region {
        /// 0-based index into the cell's region list.
        index: usize,
    },
    /// Both sides hold.
    Intersection {
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// Either side holds.
    Union {
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// The inner expression does not hold.
    Complement {
        /// Negated operand.
        inner: Box<Expr>,
    },
}

impl Expr {
    /// Leaf referencing region `index`.
    pub fn region(index: usize) -> Self {
        Expr::Region { index }
    }

    /// Intersection of two expressions.
    pub fn intersection(left: Expr, right: Expr) -> Self {
        Expr::Intersection {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Union of two expressions.
    pub fn union(left: Expr, right: Expr) -> Self {
        Expr::Union {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Complement of an expression.
    pub fn complement(inner: Expr) -> Self {
        Expr::Complement {
            inner: Box::new(inner),
        }
    }

    /// Parse a definition from the infix expression language.
    ///
    /// Operators: `^` or `∧` (intersection), `|` or `∨` (union), `~` or
    /// `¬` (complement), with parentheses for grouping. Complement binds
    /// tightest, then intersection, then union; binary operators are
    /// left-associative.
    pub fn parse(input: &str) -> Result<Self, ExprError> {
        parser::parse(input)
    }

    /// Check that every leaf index refers to a region in a list of
    /// `count` regions.
    pub fn validate(&self, count: usize) -> Result<(), ExprError> {
        match self {
            Expr::Region { index } => {
                if *index >= count {
                    Err(ExprError::RegionIndexOutOfRange {
                        index: *index,
                        count,
                    })
                } else {
                    Ok(())
                }
            }
            Expr::Intersection { left, right } | Expr::Union { left, right } => {
                left.validate(count)?;
                right.validate(count)
            }
            Expr::Complement { inner } => inner.validate(count),
        }
    }
}

impl std::str::FromStr for Expr {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expr::parse(s)
    }
}
