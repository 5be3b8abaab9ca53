//! Engine unit tests
//!
//! Builder folding, operator inversion, and the solver walk.


use crate::engine::{Definition, DefinitionTable, Operator};

/// Example puzzle: root evaluates to 152, humn solves to 301
pub(crate) const EXAMPLE: &str = include_str!("../../../tests/fixtures/example.txt");

pub(crate) fn lit(value: i64) -> Definition {
    Definition::Literal(value)
}

pub(crate) fn bin(
    op: Operator,
    left: &str,
    right: &str,
) -> Definition {
    Definition::binary(op, left, right)
}

pub(crate) fn table(entries: Vec<(&str, Definition)>) -> DefinitionTable {
    entries.into_iter().collect()
}
