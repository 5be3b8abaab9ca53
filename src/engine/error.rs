//! Engine error types
//!
//! Every failure of a build or a solve is fatal to that computation.
//! The engine is pure, so retrying cannot change the outcome.

use super::ops::Operator;

/// Errors raised while building or solving an expression tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A referenced name has no entry in the table
    #[error("missing definition for '{name}'")]
    MissingDefinition { name: String },

    /// A constant subtree or an inversion divides by zero
    #[error("division by zero ({dividend} / 0)")]
    DivisionByZero { dividend: i64 },

    /// Checked arithmetic overflowed i64
    #[error("integer overflow evaluating {expr}")]
    Overflow { expr: String },

    /// The root's sides are not exactly one constant and one symbolic
    #[error("ambiguous equation: {constant_sides} of 2 sides are constant, expected exactly 1")]
    AmbiguousEquation { constant_sides: usize },

    /// A symbolic node on the active path has zero or two constant operands
    #[error("malformed path at depth {depth}: {constant_operands} constant operands, expected exactly 1")]
    MalformedPath {
        depth: usize,
        constant_operands: usize,
    },

    /// A Mul/FloorDiv inversion does not reproduce its target
    #[error("inexact inversion of {op}: no integer operand yields {target} with {known}")]
    InexactInversion {
        op: Operator,
        target: i64,
        known: i64,
    },

    /// The unknown leaf is absent from the table or reached more than once
    #[error("expected exactly one unknown '{name}', found {found}")]
    MultipleOrNoUnknown { name: String, found: usize },

    /// The root definition has no two sides to equate
    #[error("'{name}' is not a binary definition and cannot be used as an equation")]
    NotAnEquation { name: String },

    /// A value was requested for a subtree that depends on the unknown
    #[error("'{name}' depends on the unknown and has no constant value")]
    Unresolved { name: String },

    /// Resolution recursed deeper than allowed (usually a cyclic table)
    #[error("recursion depth {depth} exceeds maximum {max_depth}")]
    RecursionTooDeep { depth: usize, max_depth: usize },
}

/// Engine result alias
pub type EngineResult<T> = Result<T, EngineError>;
