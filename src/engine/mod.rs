//! Expression engine
//!
//! Two passes over a pre-parsed [`DefinitionTable`]:
//!
//! 1. [`ExprBuilder`] resolves names into an [`ExprNode`] tree and folds
//!    every unknown-free subtree into a constant.
//! 2. [`Solver`] takes the folded root [`Equation`] and inverts operators
//!    along the single symbolic path until it reaches the unknown.
//!
//! ```rust
//! use exprsolve::engine::{solve_table, Definition, DefinitionTable, Operator};
//!
//! let table: DefinitionTable = [
//!     ("root", Definition::binary(Operator::Add, "lhs", "rhs")),
//!     ("lhs", Definition::binary(Operator::Add, "x", "two")),
//!     ("x", Definition::Literal(0)),
//!     ("two", Definition::Literal(2)),
//!     ("rhs", Definition::Literal(10)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let solution = solve_table(&table, "root", "x", true).unwrap();
//! assert_eq!(solution.value, 8);
//! ```

pub mod builder;
pub mod error;
pub mod node;
pub mod ops;
pub mod solver;
pub mod table;

#[cfg(test)]
mod tests;

pub use builder::{ExprBuilder, DEFAULT_MAX_DEPTH};
pub use error::{EngineError, EngineResult};
pub use node::{Equation, ExprNode};
pub use ops::{floor_div, Operator, Side};
pub use solver::{Solution, SolveStep, Solver};
pub use table::{Definition, DefinitionTable};

/// Evaluate `root` as an ordinary expression, using every literal
pub fn evaluate_table(
    table: &DefinitionTable,
    root: &str,
) -> EngineResult<i64> {
    ExprBuilder::new().evaluate(table, root)
}

/// Treat `root` as an equality and solve it for `unknown`
pub fn solve_table(
    table: &DefinitionTable,
    root: &str,
    unknown: &str,
    check_exactness: bool,
) -> EngineResult<Solution> {
    solve_with(
        ExprBuilder::new().with_unknown(unknown),
        Solver::new().with_exact_check(check_exactness),
        table,
        root,
    )
}

/// Build the equation at `root` with `builder` and solve it with `solver`
pub fn solve_with(
    mut builder: ExprBuilder,
    solver: Solver,
    table: &DefinitionTable,
    root: &str,
) -> EngineResult<Solution> {
    if let Some(unknown) = builder.unknown() {
        if !table.mentions(unknown) {
            return Err(EngineError::MultipleOrNoUnknown {
                name: unknown.to_string(),
                found: 0,
            });
        }
    }
    let equation = builder.build_equation(table, root)?;
    solver.solve_traced(&equation)
}
