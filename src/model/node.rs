//! Node module for constituency tree representation.

use crate::model::tree::NodeIndex;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// Represents a node of a constituency tree.
///
/// A node is either:
/// - **Leaf**: a word of the sentence, labeled with the category of the
///   constituent that directly contains it
/// - **Internal**: a constituent with a category label and an ordered,
///   non-empty sequence of children
///
/// The root is the one internal node without a parent.
///
/// # Invariants
/// - `index` is the position of the node in the tree arena
/// - `parent` is `None` only for the root, and for any node during
///   construction until its parent is added
/// - `word_index` of leaves follows left-to-right order of the words
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Node {
    /// Terminal word
    Leaf {
        /// Index of this node in the tree arena
        index: NodeIndex,
        /// Index of the parent node
        parent: Option<NodeIndex>,
        /// Category inherited from the enclosing constituent
        label: String,
        /// The word itself
        word: String,
        /// Position of the word in the sentence (zero-based)
        word_index: usize,
    },
    /// Constituent with children
    Internal {
        /// Index of this node in the tree arena
        index: NodeIndex,
        /// Index of the parent node
        parent: Option<NodeIndex>,
        /// Category label, e.g. `NP`
        label: String,
        /// Children in source order
        children: Vec<NodeIndex>,
    },
}

impl Node {
    /// Creates a new leaf node without parent.
    pub fn new_leaf(index: NodeIndex, label: String, word: String, word_index: usize) -> Self {
        Node::Leaf {
            index,
            parent: None,
            label,
            word,
            word_index,
        }
    }

    /// Creates a new internal node without parent.
    pub fn new_internal(index: NodeIndex, label: String, children: Vec<NodeIndex>) -> Self {
        Node::Internal {
            index,
            parent: None,
            label,
            children,
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        match self {
            Node::Leaf { index, .. } | Node::Internal { index, .. } => *index,
        }
    }

    /// Returns the category label of this node.
    pub fn label(&self) -> &str {
        match self {
            Node::Leaf { label, .. } | Node::Internal { label, .. } => label,
        }
    }

    /// Returns the word if this is a leaf, `None` otherwise.
    pub fn word(&self) -> Option<&str> {
        match self {
            Node::Leaf { word, .. } => Some(word),
            Node::Internal { .. } => None,
        }
    }

    /// Returns the word position if this is a leaf, `None` otherwise.
    pub fn word_index(&self) -> Option<usize> {
        match self {
            Node::Leaf { word_index, .. } => Some(*word_index),
            Node::Internal { .. } => None,
        }
    }

    /// Returns the children of this node (empty for leaves).
    pub fn children(&self) -> &[NodeIndex] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Internal { children, .. } => children,
        }
    }

    /// Returns the index of the parent, if set.
    pub fn parent_index(&self) -> Option<NodeIndex> {
        match self {
            Node::Leaf { parent, .. } | Node::Internal { parent, .. } => *parent,
        }
    }

    /// Returns whether a parent is set.
    pub fn has_parent(&self) -> bool {
        self.parent_index().is_some()
    }

    /// Returns whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Returns whether this node is internal (including the root).
    pub fn is_internal(&self) -> bool {
        matches!(self, Node::Internal { .. })
    }

    /// Returns whether this node is an internal node without parent.
    pub fn is_root(&self) -> bool {
        self.is_internal() && !self.has_parent()
    }

    pub(crate) fn set_parent(&mut self, parent_index: NodeIndex) {
        match self {
            Node::Leaf { parent, .. } | Node::Internal { parent, .. } => {
                *parent = Some(parent_index);
            }
        }
    }
}
