//! Definition table
//!
//! The flat, pre-parsed input of the engine: one definition per name.

use indexmap::IndexMap;

use super::ops::Operator;

/// Definition bound to a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    /// Integer literal
    Literal(i64),
    /// `left op right`, operands referenced by name
    Binary {
        op: Operator,
        left: String,
        right: String,
    },
}

impl Definition {
    /// Shorthand for a binary definition
    pub fn binary(
        op: Operator,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Definition::Binary {
            op,
            left: left.into(),
            right: right.into(),
        }
    }

    /// Operand names of a binary definition
    pub fn operands(&self) -> Option<(&str, &str)> {
        match self {
            Definition::Literal(_) => None,
            Definition::Binary { left, right, .. } => Some((left.as_str(), right.as_str())),
        }
    }
}

/// Insertion-ordered mapping from name to definition
///
/// The table is expected to form a tree rooted at the root name: every
/// other name is an operand of at most one definition. This is a
/// precondition and is not checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionTable {
    entries: IndexMap<String, Definition>,
}

impl DefinitionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, returning the previous definition if there was one
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        definition: Definition,
    ) -> Option<Definition> {
        self.entries.insert(name.into(), definition)
    }

    /// Look up a definition
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&Definition> {
        self.entries.get(name)
    }

    /// Whether `name` has a definition
    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Definitions in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Definition)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of definitions that use `name` as an operand
    pub fn reference_count(
        &self,
        name: &str,
    ) -> usize {
        self.entries
            .values()
            .filter_map(Definition::operands)
            .map(|(l, r)| usize::from(l == name) + usize::from(r == name))
            .sum()
    }

    /// Whether `name` appears anywhere, as a key or as an operand
    pub fn mentions(
        &self,
        name: &str,
    ) -> bool {
        self.contains(name) || self.reference_count(name) > 0
    }
}

impl<N: Into<String>> FromIterator<(N, Definition)> for DefinitionTable {
    fn from_iter<I: IntoIterator<Item = (N, Definition)>>(iter: I) -> Self {
        let mut table = DefinitionTable::new();
        for (name, definition) in iter {
            table.insert(name, definition);
        }
        table
    }
}
