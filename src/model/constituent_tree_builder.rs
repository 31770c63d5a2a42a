//! Provides the [TreeBuilder] implementation for [ConstituentTree].

use crate::model::tree_builder::TreeBuilder;
use crate::model::{ConstituentTree, NodeIndex};

/// Builder that constructs [ConstituentTree] instances.
///
/// # Example
/// ```
/// use synbox::bracket::BracketParser;
/// use synbox::model::ConstituentTreeBuilder;
///
/// let mut parser = BracketParser::new(ConstituentTreeBuilder::new());
/// let tree = parser.parse_str("(S (NP ellos) (VP leen))")?;
/// assert_eq!(tree.num_words(), 2);
///
/// # Ok::<(), synbox::parser::ParsingError>(())
/// ```
#[derive(Debug, Default)]
pub struct ConstituentTreeBuilder {
    current_tree: Option<ConstituentTree>,
}

impl ConstituentTreeBuilder {
    /// Creates a new builder in the empty state.
    pub fn new() -> Self {
        Self { current_tree: None }
    }

    fn tree_mut(&mut self) -> &mut ConstituentTree {
        // Building without `init_next` is tolerated; the tree is simply not pre-sized
        self.current_tree.get_or_insert_with(|| ConstituentTree::new(0))
    }
}

impl TreeBuilder for ConstituentTreeBuilder {
    type NodeIdx = NodeIndex;
    type Tree = ConstituentTree;

    fn init_next(&mut self, num_words: usize) {
        self.current_tree = Some(ConstituentTree::new(num_words));
    }

    fn add_leaf(&mut self, label: &str, word: &str) -> Self::NodeIdx {
        self.tree_mut().add_leaf(label.to_string(), word.to_string())
    }

    fn add_internal(&mut self, label: &str, children: &[Self::NodeIdx]) -> Self::NodeIdx {
        self.tree_mut().add_internal(label.to_string(), children.to_vec())
    }

    fn finish_tree(&mut self, root: Self::NodeIdx) -> Option<Self::Tree> {
        let mut tree = self.current_tree.take()?;
        tree.set_root(root);
        Some(tree)
    }
}
