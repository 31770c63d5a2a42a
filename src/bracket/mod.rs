//! Bracket notation parser and writer for constituency trees.
//!
//! This module provides [BracketParser] to parse labeled bracket notation
//! into tree structures. The parser uses a
//! [TreeBuilder](crate::model::TreeBuilder) internally.
//!
//! # Quick API
//! * [`parse_str`] - parses a single string, returns a [ConstituentTree]
//! * [`to_bracket_string`] - writes a tree back in canonical notation
//!
//! # Format
//! The bracket notation has the following simple grammar:
//! * `tree ::= '(' label (tree | word)* ')'`
//! * `label ::= atom`
//! * `word ::= atom`
//! * `atom ::= maximal run of characters other than '(', ')' and whitespace`
//!
//! Furthermore:
//! * Whitespace (ASCII only) can occur between any tokens and is needed
//!   only between two atoms
//! * There is no quoting or escaping; words cannot contain parentheses
//! * A word directly inside a constituent becomes a leaf labeled with that
//!   constituent's label, e.g. `(N cat)` is the constituent `N` with the
//!   leaf `cat`
//! * Anything following the root is ignored
//!
//! Example: `(S (NP (Det The) (N cat)) (VP (V sat)))`

pub(crate) mod defs;
pub mod parser;
pub mod writer;

pub use parser::BracketParser;
pub use writer::to_bracket_string;

use crate::model::ConstituentTree;
use crate::parser::ParsingError;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a single bracket string to obtain a [ConstituentTree].
///
/// # Arguments
/// * `input` - The bracket notation string to parse
///
/// # Returns
/// * [ConstituentTree] - Tree parsed from the string
/// * [ParsingError] - If the string is malformed: not starting with `(`,
///   a `(` without label, or an unterminated bracket
///
/// # Example
/// ```
/// use synbox::bracket::parse_str;
///
/// let tree = parse_str("(S (NP (Det The) (N cat)) (VP (V sat)))")?;
/// assert_eq!(tree.words(), vec!["The", "cat", "sat"]);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_str<S: AsRef<str>>(input: S) -> Result<ConstituentTree, ParsingError> {
    BracketParser::new_defaults().parse_str(input.as_ref())
}
