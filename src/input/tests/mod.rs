//! Reader tests

use crate::engine::{Definition, Operator};
use crate::input::{parse_line, parse_table, ParseError};

#[test]
fn test_parse_literal_and_binary() {
    let table = parse_table("root: aa + bb\naa: 5\nbb: -3\n").unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(
        table.get("root"),
        Some(&Definition::binary(Operator::Add, "aa", "bb"))
    );
    assert_eq!(table.get("aa"), Some(&Definition::Literal(5)));
    assert_eq!(table.get("bb"), Some(&Definition::Literal(-3)));
}

#[test]
fn test_parse_keeps_insertion_order() {
    let table = parse_table("c: 1\na: 2\nb: c / a").unwrap();
    let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn test_parse_skips_blank_lines_and_whitespace() {
    let table = parse_table("\n  root:  x   *   y  \n\n x: 2\r\ny: 4\n").unwrap();
    assert_eq!(
        table.get("root"),
        Some(&Definition::binary(Operator::Mul, "x", "y"))
    );
    assert_eq!(table.len(), 3);
}

#[test]
fn test_all_operator_symbols() {
    for (symbol, op) in [
        ("+", Operator::Add),
        ("-", Operator::Sub),
        ("*", Operator::Mul),
        ("/", Operator::FloorDiv),
    ] {
        let (_, def) = parse_line(&format!("n: a {} b", symbol), 1).unwrap();
        assert_eq!(def, Definition::binary(op, "a", "b"));
    }
}

#[test]
fn test_unknown_operator() {
    assert_eq!(
        parse_table("a: 1\nroot: a % b").unwrap_err(),
        ParseError::UnknownOperator {
            line: 2,
            symbol: "%".to_string()
        }
    );
}

#[test]
fn test_duplicate_name() {
    assert_eq!(
        parse_table("a: 1\na: 2").unwrap_err(),
        ParseError::DuplicateName {
            line: 2,
            name: "a".to_string()
        }
    );
}

#[test]
fn test_malformed_lines() {
    for text in ["no colon here", "a: b +", "a:", "a: b + c + d", "1a: 5"] {
        assert!(
            matches!(parse_table(text), Err(ParseError::Malformed { line: 1, .. })),
            "expected malformed: {}",
            text
        );
    }
}

#[test]
fn test_literal_out_of_range() {
    assert!(matches!(
        parse_table("a: 99999999999999999999"),
        Err(ParseError::InvalidLiteral { line: 1, .. })
    ));
}
