//! exprsolve
//!
//! Builds named arithmetic expressions from a flat definition table,
//! folds every constant subtree, and solves the root equality for a single
//! unknown by inverting operators along its path.
//!
//! # Example
//!
//! ```rust
//! use exprsolve::{evaluate_source, solve_source, SolverConfig};
//!
//! let source = "root: lhs + rhs\nlhs: x * two\nx: 3\ntwo: 2\nrhs: 10\n";
//! let config = SolverConfig {
//!     unknown: "x".to_string(),
//!     ..SolverConfig::default()
//! };
//!
//! assert_eq!(evaluate_source(source, &config).unwrap(), 16);
//! assert_eq!(solve_source(source, &config).unwrap().value, 5);
//! ```

#![warn(rust_2018_idioms)]

pub mod engine;
pub mod input;
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use engine::{DefinitionTable, EngineError, Equation, ExprBuilder, Solution, Solver};
pub use util::config::SolverConfig;

use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name
pub const NAME: &str = "exprsolve";

/// Which computations to run on a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Evaluate the root expression
    Evaluate,
    /// Solve the root equality for the unknown
    Solve,
    /// Both, like a full puzzle run
    Both,
}

impl Mode {
    fn evaluates(self) -> bool {
        matches!(self, Mode::Evaluate | Mode::Both)
    }

    fn solves(self) -> bool {
        matches!(self, Mode::Solve | Mode::Both)
    }
}

/// Results for one input file
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub file: PathBuf,
    /// Number of definitions read
    pub definitions: usize,
    /// Value of the root expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    /// Solution of the root equality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<Solution>,
    /// Rendered root equality, e.g. `((4 + (2 * (humn - 3))) / 4) = 150`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equation: Option<String>,
}

/// Evaluate the configured root of a parsed table
pub fn evaluate(
    table: &DefinitionTable,
    config: &SolverConfig,
) -> Result<i64, EngineError> {
    ExprBuilder::new()
        .with_max_depth(config.max_depth)
        .evaluate(table, &config.root)
}

fn equation_builder(config: &SolverConfig) -> ExprBuilder {
    ExprBuilder::new()
        .with_unknown(config.unknown.as_str())
        .with_max_depth(config.max_depth)
}

/// Build the configured root equality of a parsed table
pub fn equation(
    table: &DefinitionTable,
    config: &SolverConfig,
) -> Result<Equation, EngineError> {
    equation_builder(config).build_equation(table, &config.root)
}

/// Solve the configured root equality of a parsed table for the configured unknown
pub fn solve(
    table: &DefinitionTable,
    config: &SolverConfig,
) -> Result<Solution, EngineError> {
    let solver = Solver::new().with_exact_check(config.check_exactness);
    engine::solve_with(equation_builder(config), solver, table, &config.root)
}

/// Parse `source` and evaluate its root
pub fn evaluate_source(
    source: &str,
    config: &SolverConfig,
) -> Result<i64> {
    let table = input::parse_table(source).context("Failed to read definitions")?;
    evaluate(&table, config).with_context(|| format!("Failed to evaluate '{}'", config.root))
}

/// Parse `source` and solve its root equality
pub fn solve_source(
    source: &str,
    config: &SolverConfig,
) -> Result<Solution> {
    let table = input::parse_table(source).context("Failed to read definitions")?;
    solve(&table, config).with_context(|| {
        format!("Failed to solve '{}' for '{}'", config.root, config.unknown)
    })
}

/// Read a definition file and run `mode` on it
pub fn run_file(
    path: &Path,
    config: &SolverConfig,
    mode: Mode,
) -> Result<Report> {
    debug!("reading {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let table = input::parse_table(&source)
        .with_context(|| format!("Failed to parse: {}", path.display()))?;

    let value = if mode.evaluates() {
        let value = evaluate(&table, config)
            .with_context(|| format!("Failed to evaluate '{}' in {}", config.root, path.display()))?;
        Some(value)
    } else {
        None
    };

    let (solution, equation) = if mode.solves() {
        let context = || {
            format!(
                "Failed to solve '{}' for '{}' in {}",
                config.root,
                config.unknown,
                path.display()
            )
        };
        let solution = solve(&table, config).with_context(context)?;
        let rendered = equation(&table, config).with_context(context)?.to_string();
        (Some(solution), Some(rendered))
    } else {
        (None, None)
    };

    info!("{}: {} definitions", path.display(), table.len());
    Ok(Report {
        file: path.to_path_buf(),
        definitions: table.len(),
        value,
        solution,
        equation,
    })
}

/// Run `mode` on every file in parallel; results keep input order
pub fn run_files(
    paths: &[PathBuf],
    config: &SolverConfig,
    mode: Mode,
) -> Vec<Result<Report>> {
    paths
        .par_iter()
        .map(|path| run_file(path, config, mode))
        .collect()
}
