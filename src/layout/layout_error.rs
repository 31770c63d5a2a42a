//! Error type of the layout engine.

use crate::model::NodeIndex;
use thiserror::Error;

/// Failure of the layout engine.
///
/// Only raised for trees that break the structural invariants a parsed
/// tree guarantees (e.g. a constituent without children, or words numbered
/// out of order). It signals a defect in how the tree was built, not a
/// problem with user input, and no layout is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Invariant violation at node {node:?}: {reason}")]
    InvariantViolation {
        /// Offending node, if the violation concerns a single node
        node: Option<NodeIndex>,
        reason: String,
    },
}

impl LayoutError {
    /// Convenience constructor for InvariantViolation at a node
    pub(crate) fn at_node(node: NodeIndex, reason: impl Into<String>) -> Self {
        LayoutError::InvariantViolation {
            node: Some(node),
            reason: reason.into(),
        }
    }

    /// Convenience constructor for InvariantViolation of the whole tree
    pub(crate) fn in_tree(reason: impl Into<String>) -> Self {
        LayoutError::InvariantViolation {
            node: None,
            reason: reason.into(),
        }
    }
}
