//! Operator semantics
//!
//! Forward evaluation (`apply`) and single-operand inversion (`invert`)
//! of the four integer operators. All arithmetic is checked.

use serde::Serialize;
use std::fmt;

use super::error::{EngineError, EngineResult};

/// Binary operator of a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    /// Integer division rounding toward negative infinity
    FloorDiv,
}

/// Which operand of a binary node held the known value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// `target = known op u`
    LeftKnown,
    /// `target = u op known`
    RightKnown,
}

impl Side {
    /// Place `known` and the unknown-subtree value `u` in operand order
    #[inline]
    pub fn arrange(
        self,
        known: i64,
        u: i64,
    ) -> (i64, i64) {
        match self {
            Side::LeftKnown => (known, u),
            Side::RightKnown => (u, known),
        }
    }
}

impl Operator {
    /// All operators, in symbol-table order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::FloorDiv,
    ];

    /// Look up an operator by its source symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::FloorDiv),
            _ => None,
        }
    }

    /// Source symbol of the operator
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::FloorDiv => "/",
        }
    }

    /// Evaluate `a op b`
    pub fn apply(
        self,
        a: i64,
        b: i64,
    ) -> EngineResult<i64> {
        let overflow = || EngineError::Overflow {
            expr: format!("{} {} {}", a, self, b),
        };
        match self {
            Operator::Add => a.checked_add(b).ok_or_else(overflow),
            Operator::Sub => a.checked_sub(b).ok_or_else(overflow),
            Operator::Mul => a.checked_mul(b).ok_or_else(overflow),
            Operator::FloorDiv => floor_div(a, b),
        }
    }

    /// Solve `target = f(op, ..)` for the operand that is not `known`.
    ///
    /// Mul and FloorDiv use floor division and are only exact for inputs
    /// that divide evenly; see [`Operator::invert_exact`].
    pub fn invert(
        self,
        side: Side,
        target: i64,
        known: i64,
    ) -> EngineResult<i64> {
        let overflow = || EngineError::Overflow {
            expr: format!("inverse of {} with target {} and known {}", self, target, known),
        };
        match (self, side) {
            (Operator::Add, _) => target.checked_sub(known).ok_or_else(overflow),
            (Operator::Sub, Side::RightKnown) => target.checked_add(known).ok_or_else(overflow),
            (Operator::Sub, Side::LeftKnown) => known.checked_sub(target).ok_or_else(overflow),
            (Operator::Mul, _) => floor_div(target, known),
            (Operator::FloorDiv, Side::RightKnown) => {
                if known == 0 {
                    return Err(EngineError::DivisionByZero { dividend: target });
                }
                target.checked_mul(known).ok_or_else(overflow)
            }
            (Operator::FloorDiv, Side::LeftKnown) => floor_div(known, target),
        }
    }

    /// [`Operator::invert`], then re-apply the operator and require it to
    /// reproduce `target`.
    pub fn invert_exact(
        self,
        side: Side,
        target: i64,
        known: i64,
    ) -> EngineResult<i64> {
        let inexact = EngineError::InexactInversion {
            op: self,
            target,
            known,
        };
        let u = self.invert(side, target, known)?;
        let (a, b) = side.arrange(known, u);
        match self.apply(a, b) {
            Ok(value) if value == target => Ok(u),
            _ => Err(inexact),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Integer division rounding toward negative infinity
pub fn floor_div(
    a: i64,
    b: i64,
) -> EngineResult<i64> {
    if b == 0 {
        return Err(EngineError::DivisionByZero { dividend: a });
    }
    let q = a.checked_div(b).ok_or_else(|| EngineError::Overflow {
        expr: format!("{} / {}", a, b),
    })?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}
