//! Synbox is a library to lay out constituency trees given in labeled
//! bracket notation as a grid of words and brackets.
//!
//! A sentence such as `(S (NP (Det The) (N cat)) (VP (V sat)))` is drawn
//! as a row of words, one per column, with every constituent drawn as a
//! bracket spanning the columns of its words. Constituents with a
//! *high-level* label are stacked above the words, all others below.
//! Core functionality provided:
//! - Parsing: Stack based parser for bracket notation with precise
//!   errors for malformed input. See [crate::bracket].
//! - Tree model: Arena based [ConstituentTree] with leaves and constituents
//!   as distinct node variants. You can also provide your own
//!   [TreeBuilder](crate::model::TreeBuilder) implementation.
//! - Layout: Word spans, depths and placement rows for every constituent,
//!   computed without modifying the tree. See [crate::layout].
//! - Rendering: HTML tables and JSON. See [crate::render].
//!
//! Limitations:
//! - One tree per input, no quoting of words
//! - Words and labels cannot contain parentheses or whitespace
//!
//! # Usage patterns
//! 1. Functions in this module provide quick access with default settings.
//! 2. [BracketParser](crate::bracket::BracketParser),
//!    [Layout::compute] and [render](crate::render) functions can be used
//!    step by step for full control.
//!
//! ## Example
//!
//! ```
//! use synbox::{layout_str, LayoutConfig};
//!
//! let config = LayoutConfig::new().with_high_level_labels(["NP", "VP"]);
//! let layout = layout_str("(S (NP (Det The) (N cat)) (VP (V sat)))", &config)?;
//!
//! assert_eq!(layout.words, vec!["The", "cat", "sat"]);
//! let above: Vec<_> = layout.above[0].placements.iter().map(|p| p.label.as_str()).collect();
//! assert_eq!(above, vec!["NP", "VP"]);
//! # Ok::<(), synbox::SynboxError>(())
//! ```

pub mod bracket;
pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

pub use crate::error::SynboxError;
pub use crate::layout::{Layout, LayoutConfig, LayoutError};
pub use crate::model::ConstituentTree;
pub use crate::parser::ParsingError;

// ============================================================================
// Quick API
// ============================================================================
/// Parses a bracket notation string into a [ConstituentTree].
///
/// See [`bracket::parse_str`] for full documentation.
pub fn parse_bracket_str<S: AsRef<str>>(input: S) -> Result<ConstituentTree, ParsingError> {
    bracket::parse_str(input)
}

/// Computes the [Layout] of a parsed tree.
///
/// See [`Layout::compute`] for full documentation.
pub fn layout_tree(tree: &ConstituentTree, config: &LayoutConfig) -> Result<Layout, LayoutError> {
    Layout::compute(tree, config)
}

/// Parses a bracket notation string and computes its [Layout].
pub fn layout_str<S: AsRef<str>>(input: S, config: &LayoutConfig) -> Result<Layout, SynboxError> {
    let tree = parse_bracket_str(input)?;
    Ok(layout_tree(&tree, config)?)
}

/// Parses a bracket notation string and renders it as a full HTML document
/// with default [HtmlOptions](crate::render::HtmlOptions).
pub fn render_html_str<S: AsRef<str>>(input: S, config: &LayoutConfig) -> Result<String, SynboxError> {
    let layout = layout_str(input, config)?;
    Ok(render::to_html(&layout, &render::HtmlOptions::default()))
}
