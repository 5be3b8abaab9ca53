//! Engine scenarios through the public API

use exprsolve::engine::{solve_table, Definition, DefinitionTable, EngineError, Operator};
use exprsolve::{evaluate_source, solve_source, SolverConfig};

const EXAMPLE: &str = include_str!("../fixtures/example.txt");

fn config_for(unknown: &str) -> SolverConfig {
    SolverConfig {
        unknown: unknown.to_string(),
        ..SolverConfig::default()
    }
}

#[test]
fn test_example_evaluates_to_152() {
    assert_eq!(evaluate_source(EXAMPLE, &SolverConfig::default()).unwrap(), 152);
}

#[test]
fn test_example_solves_to_301() {
    let solution = solve_source(EXAMPLE, &SolverConfig::default()).unwrap();
    assert_eq!(solution.unknown, "humn");
    assert_eq!(solution.value, 301);
}

#[test]
fn test_scenario_a() {
    let source = "root: a + b\na: 10\nb: c * d\nc: 2\nd: 3\n";
    assert_eq!(evaluate_source(source, &SolverConfig::default()).unwrap(), 16);
}

#[test]
fn test_scenario_b() {
    let source = "root: l = r\n";
    // `=` is not an operator; the root must still use one of + - * /
    assert!(solve_source(source, &config_for("x")).is_err());

    let source = "root: l + r\nl: x + two\ntwo: 2\nr: 10\n";
    assert_eq!(solve_source(source, &config_for("x")).unwrap().value, 8);
}

#[test]
fn test_scenario_c() {
    let source = "root: l + r\nl: twenty - x\ntwenty: 20\nr: 5\n";
    assert_eq!(solve_source(source, &config_for("x")).unwrap().value, 15);
}

#[test]
fn test_scenario_d() {
    let source = "root: l + r\nl: x / four\nfour: 4\nr: 3\n";
    assert_eq!(solve_source(source, &config_for("x")).unwrap().value, 12);
}

#[test]
fn test_ambiguous_root() {
    let table: DefinitionTable = [
        ("root", Definition::binary(Operator::Add, "a", "b")),
        ("a", Definition::Literal(1)),
        ("b", Definition::Literal(2)),
        ("x", Definition::Literal(0)),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        solve_table(&table, "root", "x", true),
        Err(EngineError::AmbiguousEquation { constant_sides: 2 })
    );
}

#[test]
fn test_error_reports_cause() {
    let err = solve_source("root: a + b\na: 1\n", &config_for("x")).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to solve"), "{}", message);
    assert!(message.contains("expected exactly one unknown 'x'"), "{}", message);

    let err = evaluate_source("root: a + b\na: 1\n", &SolverConfig::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("missing definition for 'b'"));
}

#[test]
fn test_exact_check_can_be_disabled() {
    let source = "root: l + r\nl: x * two\ntwo: 2\nr: 7\n";
    let mut config = config_for("x");
    assert!(solve_source(source, &config).is_err());

    config.check_exactness = false;
    assert_eq!(solve_source(source, &config).unwrap().value, 3);
}
