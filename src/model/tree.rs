//! Provides the constituency tree representation.
//!
//! Provides core data structures for representing constituency trees:
//! * [ConstituentTree] - Main tree structure using the arena pattern
//! * [NodeIndex] as type used to index nodes in tree

use crate::bracket::writer;
use crate::model::node::Node;
use std::fmt;
use std::ops::Index;

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

/// *During construction only*, index for unset root.
const NO_ROOT_SET_INDEX: NodeIndex = usize::MAX;

// =#========================================================================#=
// TREE
// =#========================================================================#=
/// A constituency tree represented using the arena pattern on [Node].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex],
/// which avoids reference juggling and keeps traversals cache friendly.
///
/// # Structure
/// - All nodes (root, internal and leaves) are stored in the arena.
/// - Index of root is maintained.
/// - Construction is bottom-up, so the root is the last node added and
///   children always have smaller indices than their parent.
/// - Leaves know their word position; words are numbered in the order
///   in which leaves are added.
///
/// The tree only stores what was parsed. Spans and depths are computed
/// separately by the [layout](crate::layout) engine.
///
/// # Example
/// ```
/// use synbox::model::ConstituentTree;
///
/// // (S (NP ellos) (VP leen))
/// let mut tree = ConstituentTree::new(2);
/// let ellos = tree.add_leaf("NP".to_string(), "ellos".to_string());
/// let np = tree.add_internal("NP".to_string(), vec![ellos]);
/// let leen = tree.add_leaf("VP".to_string(), "leen".to_string());
/// let vp = tree.add_internal("VP".to_string(), vec![leen]);
/// let s = tree.add_internal("S".to_string(), vec![np, vp]);
/// tree.set_root(s);
///
/// assert!(tree.is_valid());
/// assert_eq!(tree.words(), vec!["ellos", "leen"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstituentTree {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<Node>,

    /// Index of the root of this tree
    root_index: NodeIndex,

    /// Number of leaves added so far
    num_words: usize,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl ConstituentTree {
    /// Creates a new empty tree with capacity for about `num_words` words.
    pub fn new(num_words: usize) -> Self {
        ConstituentTree {
            nodes: Vec::with_capacity(2 * num_words + 1),
            root_index: NO_ROOT_SET_INDEX,
            num_words: 0,
        }
    }

    /// Adds a leaf for the next word, assigning a unique index, which gets
    /// returned. Its word position is the number of leaves added before.
    pub fn add_leaf(&mut self, label: String, word: String) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes
            .push(Node::new_leaf(index, label, word, self.num_words));
        self.num_words += 1;
        index
    }

    /// Adds an internal node over `children`, assigning a unique index,
    /// which gets returned.
    ///
    /// # Panics
    /// Panics if a child index is out of bounds.
    pub fn add_internal(&mut self, label: String, children: Vec<NodeIndex>) -> NodeIndex {
        let index = self.nodes.len();
        for &child in &children {
            self.nodes[child].set_parent(index);
        }
        self.nodes.push(Node::new_internal(index, label, children));
        index
    }

    /// Marks the node at `index` as the root.
    pub fn set_root(&mut self, index: NodeIndex) {
        self.root_index = index;
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index is set, in bounds, and points to an internal node
    ///   without parent
    /// - All node indices match their position in the arena
    /// - All child indices are valid and point back to their parent
    /// - Every non-root node has a parent that lists it as child
    /// - Exactly the root has no parent
    /// - Leaves carry word positions `0..n` in left-to-right order
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if !self.is_root_set() || !self.nodes[self.root_index].is_root() {
            return false;
        }

        for (index, node) in self.nodes.iter().enumerate() {
            if node.index() != index {
                return false;
            }

            for &child in node.children() {
                if child >= self.nodes.len() || self.nodes[child].parent_index() != Some(index) {
                    return false;
                }
            }

            match node.parent_index() {
                None if index != self.root_index => return false,
                None => {}
                Some(parent) => {
                    if parent >= self.nodes.len() || !self.nodes[parent].children().contains(&index) {
                        return false;
                    }
                }
            }
        }

        // Words must be numbered in the order they are reached from the root
        let mut expected_word = 0;
        for node in self.pre_order_iter() {
            if let Some(word_index) = node.word_index() {
                if word_index != expected_word {
                    return false;
                }
                expected_word += 1;
            }
        }

        expected_word == self.num_words
    }

    /// Returns whether root of tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index < self.nodes.len()
    }

    /// Returns the index of the root, or `None` while under construction.
    pub fn root_index(&self) -> Option<NodeIndex> {
        self.is_root_set().then_some(self.root_index)
    }

    /// Returns a reference to the root node.
    ///
    /// # Panics
    /// Panics if the root hasn't been set and thus tree hasn't been fully
    /// constructed yet.
    pub fn root(&self) -> &Node {
        &self[self.root_index]
    }

    /// Returns a reference to the node at the given index, if it exists.
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Returns all nodes in arena order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the number of words (leaves) in this tree.
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    /// Returns the number of internal nodes in this tree, root included.
    pub fn num_internal(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_internal()).count()
    }

    /// Returns the number of nodes in this tree.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the words of the sentence in left-to-right order.
    pub fn words(&self) -> Vec<&str> {
        self.pre_order_iter().filter_map(Node::word).collect()
    }

    /// Returns the bracket notation of this tree.
    ///
    /// See [`to_bracket_string`](crate::bracket::to_bracket_string).
    pub fn to_bracket_string(&self) -> String {
        writer::to_bracket_string(self)
    }

    /// Returns an iterator over the tree in post-order (children before parents).
    ///
    /// Children are visited left to right, so leaves come in word order.
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }

    /// Returns an iterator over the tree in pre-order (parents before children).
    ///
    /// Children are visited left to right, so leaves come in word order.
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }
}

impl Index<NodeIndex> for ConstituentTree {
    type Output = Node;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

// ============================================================================
// Printing
// ============================================================================
/// Prints an indented outline of the tree.
///
/// # Example Output
/// ```text
/// Tree with 2 words (5 nodes total):
/// [4] S
///   ├─ [1] NP
///   │   └─ [0] "ellos" (word 0)
///   └─ [3] VP
///       └─ [2] "leen" (word 1)
/// ```
impl fmt::Display for ConstituentTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Tree with {} words ({} nodes total):",
            self.num_words,
            self.nodes.len()
        )?;

        let Some(root) = self.root_index() else {
            return writeln!(f, "(No root set)");
        };

        // (node, prefix of its line, whether it is the last child)
        let mut stack = vec![(root, String::new(), true)];
        while let Some((index, prefix, is_last)) = stack.pop() {
            let is_root = index == self.root_index;
            let connector = if is_root { "" } else if is_last { "└─ " } else { "├─ " };

            match &self.nodes[index] {
                Node::Leaf { word, word_index, .. } => {
                    writeln!(f, "{prefix}{connector}[{index}] {word:?} (word {word_index})")?;
                }
                Node::Internal { label, children, .. } => {
                    writeln!(f, "{prefix}{connector}[{index}] {label}")?;

                    let child_prefix = if is_root {
                        "  ".to_string()
                    } else {
                        format!("{}{}   ", prefix, if is_last { " " } else { "│" })
                    };

                    for (position, &child) in children.iter().enumerate().rev() {
                        stack.push((child, child_prefix.clone(), position + 1 == children.len()));
                    }
                }
            }
        }
        Ok(())
    }
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
/// Iterator for post-order traversal (children before parents).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited after all its descendants have been visited.
pub struct PostOrderIter<'a> {
    tree: &'a ConstituentTree,
    stack: Vec<(NodeIndex, bool)>, // (index, children_visited)
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a ConstituentTree) -> Self {
        let stack = tree.root_index().map(|root| vec![(root, false)]).unwrap_or_default();
        PostOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let node = &self.tree[index];

            if children_visited || node.children().is_empty() {
                return Some(node);
            }

            self.stack.push((index, true));
            // Push children right to left, so leftmost is processed first
            for &child in node.children().iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited before any of its descendants.
pub struct PreOrderIter<'a> {
    tree: &'a ConstituentTree,
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a ConstituentTree) -> Self {
        let stack = tree.root_index().map(|root| vec![root]).unwrap_or_default();
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];

        // Push children right to left, so leftmost is processed first
        for &child in node.children().iter().rev() {
            self.stack.push(child);
        }

        Some(node)
    }
}
