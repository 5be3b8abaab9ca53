//! Definition-table reader
//!
//! Reads one definition per line:
//!
//! ```text
//! root: pppw + sjmn
//! dbpl: 5
//! ```
//!
//! Blank lines are skipped. Operators are `+`, `-`, `*` and `/`.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::engine::{Definition, DefinitionTable, Operator};

#[cfg(test)]
mod tests;

static LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*:\s*(.+)$").expect("line pattern is valid")
});

static BINARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s+(\S+)\s+([A-Za-z_][A-Za-z0-9_]*)$")
        .expect("binary pattern is valid")
});

static LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("literal pattern is valid"));

/// Reader error, carrying the 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: expected `name: value` or `name: left op right`, found '{content}'")]
    Malformed { line: usize, content: String },
    #[error("line {line}: unknown operator '{symbol}'")]
    UnknownOperator { line: usize, symbol: String },
    #[error("line {line}: '{name}' is already defined")]
    DuplicateName { line: usize, name: String },
    #[error("line {line}: invalid integer literal '{literal}'")]
    InvalidLiteral { line: usize, literal: String },
}

/// Parse a whole definition table
pub fn parse_table(source: &str) -> Result<DefinitionTable, ParseError> {
    let mut table = DefinitionTable::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }

        let (name, definition) = parse_line(text, line)?;
        if table.contains(&name) {
            return Err(ParseError::DuplicateName { line, name });
        }
        table.insert(name, definition);
    }
    debug!("parsed {} definitions", table.len());
    Ok(table)
}

/// Parse a single trimmed, non-empty line
pub fn parse_line(
    text: &str,
    line: usize,
) -> Result<(String, Definition), ParseError> {
    let malformed = || ParseError::Malformed {
        line,
        content: text.to_string(),
    };

    let caps = LINE.captures(text).ok_or_else(malformed)?;
    let name = caps[1].to_string();
    let body = caps[2].trim();

    if LITERAL.is_match(body) {
        let value = body.parse::<i64>().map_err(|_| ParseError::InvalidLiteral {
            line,
            literal: body.to_string(),
        })?;
        return Ok((name, Definition::Literal(value)));
    }

    let parts = BINARY.captures(body).ok_or_else(malformed)?;
    let op = Operator::from_symbol(&parts[2]).ok_or_else(|| ParseError::UnknownOperator {
        line,
        symbol: parts[2].to_string(),
    })?;
    Ok((name, Definition::binary(op, &parts[1], &parts[3])))
}
