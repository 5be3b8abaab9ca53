//! Equation solver
//!
//! Walks the symbolic side of a folded [`Equation`] from the root down to
//! the unknown leaf, inverting one operator per level. Off-path subtrees
//! are already single constants, so the walk is linear in the depth of
//! the unknown.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use super::error::{EngineError, EngineResult};
use super::node::{Equation, ExprNode};
use super::ops::{Operator, Side};

/// One inversion performed while descending the active side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolveStep {
    pub op: Operator,
    pub side: Side,
    /// Value of the constant operand
    pub known: i64,
    /// Value required of the whole node
    pub target: i64,
    /// Value required of the other operand
    pub solved: i64,
}

impl fmt::Display for SolveStep {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.side {
            Side::LeftKnown => write!(
                f,
                "{} = {} {} _  =>  _ = {}",
                self.target, self.known, self.op, self.solved
            ),
            Side::RightKnown => write!(
                f,
                "{} = _ {} {}  =>  _ = {}",
                self.target, self.op, self.known, self.solved
            ),
        }
    }
}

/// Value of the unknown together with the inversions that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    /// Name of the unknown leaf
    pub unknown: String,
    pub value: i64,
    /// One entry per symbolic node on the path, root first
    pub steps: Vec<SolveStep>,
}

/// Solves a single-unknown equation by operator inversion
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    /// Require Mul/FloorDiv inversions to reproduce their target
    check_exactness: bool,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver with exactness checking enabled
    pub fn new() -> Self {
        Solver {
            check_exactness: true,
        }
    }

    pub fn with_exact_check(
        mut self,
        check: bool,
    ) -> Self {
        self.check_exactness = check;
        self
    }

    /// Value the unknown must take for both sides to be equal
    pub fn solve(
        &self,
        equation: &Equation,
    ) -> EngineResult<i64> {
        self.solve_traced(equation).map(|solution| solution.value)
    }

    /// Like [`Solver::solve`], also returning every inversion step
    pub fn solve_traced(
        &self,
        equation: &Equation,
    ) -> EngineResult<Solution> {
        let (mut target, mut active) = match (equation.left.as_constant(), equation.right.as_constant()) {
            (Some(target), None) => (target, &equation.right),
            (None, Some(target)) => (target, &equation.left),
            (Some(_), Some(_)) => return Err(EngineError::AmbiguousEquation { constant_sides: 2 }),
            (None, None) => return Err(EngineError::AmbiguousEquation { constant_sides: 0 }),
        };
        debug!("solving for target {}", target);

        let mut steps = Vec::new();
        loop {
            match active {
                ExprNode::Unknown { name } => {
                    debug!("solved '{}' = {} in {} steps", name, target, steps.len());
                    return Ok(Solution {
                        unknown: name.clone(),
                        value: target,
                        steps,
                    });
                }
                ExprNode::Constant(_) => {
                    return Err(EngineError::MalformedPath {
                        depth: steps.len(),
                        constant_operands: 0,
                    })
                }
                ExprNode::Symbolic { op, left, right } => {
                    let (side, known, next) = match (left.as_constant(), right.as_constant()) {
                        (Some(known), None) => (Side::LeftKnown, known, &**right),
                        (None, Some(known)) => (Side::RightKnown, known, &**left),
                        (l, r) => {
                            return Err(EngineError::MalformedPath {
                                depth: steps.len(),
                                constant_operands: usize::from(l.is_some()) + usize::from(r.is_some()),
                            })
                        }
                    };

                    let solved = if self.check_exactness {
                        op.invert_exact(side, target, known)?
                    } else {
                        op.invert(side, target, known)?
                    };
                    let step = SolveStep {
                        op: *op,
                        side,
                        known,
                        target,
                        solved,
                    };
                    debug!("step {}: {}", steps.len(), step);
                    steps.push(step);

                    target = solved;
                    active = next;
                }
            }
        }
    }
}
