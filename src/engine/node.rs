//! Resolved expression tree

use std::fmt;

use super::error::EngineResult;
use super::ops::Operator;

/// Node of a built expression tree
///
/// After folding, every subtree that does not reach the unknown leaf is a
/// single `Constant`, so `Symbolic` nodes only lie on the path from the
/// root to `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode {
    /// Folded value of an unknown-free subtree
    Constant(i64),
    /// Subtree that depends on the unknown
    Symbolic {
        op: Operator,
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },
    /// The unknown leaf; `name` is only kept for rendering
    Unknown { name: String },
}

impl ExprNode {
    pub fn symbolic(
        op: Operator,
        left: ExprNode,
        right: ExprNode,
    ) -> Self {
        ExprNode::Symbolic {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unknown(name: impl Into<String>) -> Self {
        ExprNode::Unknown { name: name.into() }
    }

    /// Folded value, if this node is a constant
    #[inline]
    pub fn as_constant(&self) -> Option<i64> {
        match self {
            ExprNode::Constant(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        matches!(self, ExprNode::Constant(_))
    }

    /// Number of symbolic nodes between this node and the unknown leaf
    ///
    /// Follows the first non-constant operand at each level, which is the
    /// unique path in a folded tree.
    pub fn symbolic_depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self;
        while let ExprNode::Symbolic { left, right, .. } = node {
            depth += 1;
            node = if left.is_constant() { &**right } else { &**left };
        }
        depth
    }

    /// Number of `Unknown` leaves in the tree
    pub fn unknown_count(&self) -> usize {
        match self {
            ExprNode::Constant(_) => 0,
            ExprNode::Unknown { .. } => 1,
            ExprNode::Symbolic { left, right, .. } => left.unknown_count() + right.unknown_count(),
        }
    }

    /// Evaluate with `value` substituted for the unknown
    pub fn evaluate_with(
        &self,
        value: i64,
    ) -> EngineResult<i64> {
        match self {
            ExprNode::Constant(c) => Ok(*c),
            ExprNode::Unknown { .. } => Ok(value),
            ExprNode::Symbolic { op, left, right } => {
                op.apply(left.evaluate_with(value)?, right.evaluate_with(value)?)
            }
        }
    }
}

impl fmt::Display for ExprNode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ExprNode::Constant(value) => write!(f, "{}", value),
            ExprNode::Unknown { name } => f.write_str(name),
            ExprNode::Symbolic { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}

/// Root equality `left == right`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub left: ExprNode,
    pub right: ExprNode,
}

impl Equation {
    pub fn new(
        left: ExprNode,
        right: ExprNode,
    ) -> Self {
        Self { left, right }
    }

    /// Whether substituting `value` for the unknown balances both sides
    pub fn is_satisfied_by(
        &self,
        value: i64,
    ) -> EngineResult<bool> {
        Ok(self.left.evaluate_with(value)? == self.right.evaluate_with(value)?)
    }
}

impl fmt::Display for Equation {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}
