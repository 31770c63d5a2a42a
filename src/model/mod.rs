//! Data model for constituency trees.
//!
//! # Tree representation
//! Trees are represented by [ConstituentTree], which uses the arena pattern
//! to store [Node]s. Each node is either a `Leaf` (a word) or `Internal`
//! (a labeled constituent), referenced by [NodeIndex].
//!
//! # Building trees
//! Trees are constructed during parsing via the [TreeBuilder] trait, which
//! decouples the parser from concrete tree types:
//!
//! - [ConstituentTreeBuilder] → [ConstituentTree]
//!
//! You can implement [TreeBuilder] to construct your own tree representation
//! while reusing the library's parser.

pub mod constituent_tree_builder;
pub mod node;
pub mod tree;
pub mod tree_builder;

pub use constituent_tree_builder::ConstituentTreeBuilder;
pub use node::Node;
pub use tree::ConstituentTree;
pub use tree::NodeIndex;
pub use tree_builder::TreeBuilder;
