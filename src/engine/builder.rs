//! Expression builder
//!
//! Resolves a [`DefinitionTable`] into an [`ExprNode`] tree, folding every
//! subtree that does not reach the unknown into a single constant. Folding
//! is what confines the symbolic region to the one path from the root to
//! the unknown leaf.

use tracing::{debug, trace};

use super::error::{EngineError, EngineResult};
use super::node::{Equation, ExprNode};
use super::table::{Definition, DefinitionTable};

/// Default limit on resolution depth
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Builds expression trees from a definition table
#[derive(Debug, Clone)]
pub struct ExprBuilder {
    /// Name resolved to the unknown leaf instead of its definition
    unknown: Option<String>,
    /// Maximum resolution depth
    max_depth: usize,
    /// Times the unknown leaf was reached during the last build
    unknown_hits: usize,
}

impl Default for ExprBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprBuilder {
    /// Create a builder with no unknown; every name resolves to a constant
    pub fn new() -> Self {
        ExprBuilder {
            unknown: None,
            max_depth: DEFAULT_MAX_DEPTH,
            unknown_hits: 0,
        }
    }

    /// Resolve `name` to the unknown leaf
    pub fn with_unknown(
        mut self,
        name: impl Into<String>,
    ) -> Self {
        self.unknown = Some(name.into());
        self
    }

    /// Set the maximum resolution depth
    pub fn with_max_depth(
        mut self,
        max_depth: usize,
    ) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Configured unknown name
    pub fn unknown(&self) -> Option<&str> {
        self.unknown.as_deref()
    }

    /// Times the unknown leaf was reached during the last build
    pub fn unknown_hits(&self) -> usize {
        self.unknown_hits
    }

    /// Build the tree rooted at `name`
    pub fn build(
        &mut self,
        table: &DefinitionTable,
        name: &str,
    ) -> EngineResult<ExprNode> {
        self.unknown_hits = 0;
        let node = self.build_node(table, name, 0)?;
        debug!(
            "built '{}' (constant: {}, unknown hits: {})",
            name,
            node.is_constant(),
            self.unknown_hits
        );
        Ok(node)
    }

    /// Build `name` and return its folded value
    pub fn evaluate(
        &mut self,
        table: &DefinitionTable,
        name: &str,
    ) -> EngineResult<i64> {
        self.build(table, name)?
            .as_constant()
            .ok_or_else(|| EngineError::Unresolved {
                name: name.to_string(),
            })
    }

    /// Build the equation `left == right` from the operands of `root`.
    ///
    /// The root's own operator is discarded.
    pub fn build_equation(
        &mut self,
        table: &DefinitionTable,
        root: &str,
    ) -> EngineResult<Equation> {
        self.unknown_hits = 0;
        if self.unknown.as_deref() == Some(root) {
            return Err(EngineError::NotAnEquation {
                name: root.to_string(),
            });
        }

        let (left, right) = match lookup(table, root)? {
            Definition::Literal(_) => {
                return Err(EngineError::NotAnEquation {
                    name: root.to_string(),
                })
            }
            Definition::Binary { left, right, .. } => (left, right),
        };

        let left = self.build_node(table, left, 1)?;
        let right = self.build_node(table, right, 1)?;
        debug!(
            "built equation '{}': left constant: {}, right constant: {}",
            root,
            left.is_constant(),
            right.is_constant()
        );
        Ok(Equation::new(left, right))
    }

    fn build_node(
        &mut self,
        table: &DefinitionTable,
        name: &str,
        depth: usize,
    ) -> EngineResult<ExprNode> {
        if depth > self.max_depth {
            return Err(EngineError::RecursionTooDeep {
                depth,
                max_depth: self.max_depth,
            });
        }

        if self.unknown.as_deref() == Some(name) {
            self.unknown_hits += 1;
            if self.unknown_hits > 1 {
                return Err(EngineError::MultipleOrNoUnknown {
                    name: name.to_string(),
                    found: self.unknown_hits,
                });
            }
            return Ok(ExprNode::unknown(name));
        }

        match lookup(table, name)? {
            Definition::Literal(value) => Ok(ExprNode::Constant(*value)),
            Definition::Binary { op, left, right } => {
                let left = self.build_node(table, left, depth + 1)?;
                let right = self.build_node(table, right, depth + 1)?;
                match (left.as_constant(), right.as_constant()) {
                    (Some(a), Some(b)) => {
                        let folded = op.apply(a, b)?;
                        trace!("fold {}: {} {} {} = {}", name, a, op, b, folded);
                        Ok(ExprNode::Constant(folded))
                    }
                    _ => Ok(ExprNode::symbolic(*op, left, right)),
                }
            }
        }
    }
}

fn lookup<'t>(
    table: &'t DefinitionTable,
    name: &str,
) -> EngineResult<&'t Definition> {
    table
        .get(name)
        .ok_or_else(|| EngineError::MissingDefinition {
            name: name.to_string(),
        })
}
