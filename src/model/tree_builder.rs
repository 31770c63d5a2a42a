//! Trait for constructing constituency trees during parsing.
//!
//! The [`TreeBuilder`] trait decouples the
//! [BracketParser](crate::bracket::BracketParser) from concrete tree
//! representations. The parser calls builder methods as it reads bracket
//! notation, and the builder assembles whatever tree structure it wants.
//!
//! Construction is bottom-up: leaves and inner constituents are added
//! before the constituent containing them, and words are added in
//! left-to-right order.
//!
//! # Built-in implementation
//! * [`ConstituentTreeBuilder`](crate::model::ConstituentTreeBuilder)
//!   builds a [`ConstituentTree`](crate::model::ConstituentTree)
//!
//! # Builder lifecycle
//! A builder can construct multiple trees sequentially:
//!
//! ```text
//! Empty ──→ init_next() ──→ Building ──→ add_leaf/add_internal ──→ finish_tree() ──→ Empty
//!   ↑                                                                                 │
//!   └─────────────────────────────────────────────────────────────────────────────────┘
//! ```

// =#========================================================================#=
// TREE BUILDER (trait)
// =#========================================================================#=
/// Abstraction for constructing trees during parsing.
///
/// # Implementing this trait
/// The parser drives the lifecycle:
///
/// 1. [`init_next`](Self::init_next) -> prepare for a new tree
/// 2. [`add_leaf`](Self::add_leaf), [`add_internal`](Self::add_internal)
///    -> build structure bottom-up
/// 3. [`finish_tree`](Self::finish_tree) -> mark the root, return the tree
///
/// After `finish_tree`, the builder returns to an empty state,
/// ready for `init_next` again.
pub trait TreeBuilder {
    /// The type used to identify nodes during construction.
    ///
    /// Returned by the `add_*` methods, then passed to
    /// [`add_internal`](Self::add_internal) to connect children.
    type NodeIdx: Copy;

    /// The tree type produced by this builder.
    type Tree;

    /// Prepares the builder for constructing a new tree.
    ///
    /// # Arguments
    /// * `num_words` - Expected number of words (hint for allocation)
    fn init_next(&mut self, num_words: usize);

    /// Adds a word, labeled with the category of its enclosing constituent.
    fn add_leaf(&mut self, label: &str, word: &str) -> Self::NodeIdx;

    /// Adds a constituent over the given children (in source order).
    fn add_internal(&mut self, label: &str, children: &[Self::NodeIdx]) -> Self::NodeIdx;

    /// Finalizes the tree with `root` as its root and returns it.
    ///
    /// Returns `None` if no tree is under construction.
    fn finish_tree(&mut self, root: Self::NodeIdx) -> Option<Self::Tree>;
}
