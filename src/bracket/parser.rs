//! Structs and logic to parse bracket notation.
//!
//! This module provides the [BracketParser] struct, a descent parser with
//! one token of lookahead that keeps open constituents on an explicit stack.

use crate::bracket::defs::DEFAULT_NUM_WORDS_GUESS;
use crate::model::ConstituentTreeBuilder;
use crate::model::tree_builder::TreeBuilder;
use crate::parser::parsing_error::{ParsingError, ParsingErrorType};
use crate::parser::tokenizer::{Token, TokenKind, Tokenizer};
use log::{debug, warn};
use std::mem;

// =#========================================================================#=
// BRACKET PARSER
// =#========================================================================#=
/// Parser for labeled bracket notation, generic over [TreeBuilder].
///
/// # Construction
/// * [`new(tree_builder)`](Self::new) - generic constructor
/// * [`new_defaults()`](Self::new_defaults) - uses [ConstituentTreeBuilder]
///
/// # Configuration
/// * [`with_num_words(num_words)`](Self::with_num_words)
///     - Expected number of words, used to pre-allocate the tree.
///       Otherwise the count of the previously parsed tree is used.
///
/// # Example
/// ```
/// use synbox::bracket::BracketParser;
///
/// let mut parser = BracketParser::new_defaults();
/// let tree = parser.parse_str("(FN (Atributo doː_tɪɦɑːiː) (Núcleo ʋɪdjɑːɾtʰiː))")?;
/// assert_eq!(tree.words(), vec!["doː_tɪɦɑːiː", "ʋɪdjɑːɾtʰiː"]);
///
/// # Ok::<(), synbox::parser::ParsingError>(())
/// ```
#[derive(Debug)]
pub struct BracketParser<T: TreeBuilder> {
    tree_builder: T,
    num_words: usize,
}

// ============================================================================
// Construction & Configuration, Deconstruction (pub)
// ============================================================================
impl<T: TreeBuilder> BracketParser<T> {
    /// Creates a new [BracketParser] with the given tree builder.
    pub fn new(tree_builder: T) -> Self {
        Self {
            tree_builder,
            num_words: DEFAULT_NUM_WORDS_GUESS,
        }
    }

    /// Sets the expected number of words in each parsed tree.
    pub fn with_num_words(mut self, num_words: usize) -> Self {
        self.num_words = num_words;
        self
    }

    /// Consumes the parser and returns the tree builder.
    pub fn into_builder(self) -> T {
        self.tree_builder
    }
}

impl BracketParser<ConstituentTreeBuilder> {
    /// Creates a new [BracketParser] building
    /// [ConstituentTree](crate::model::ConstituentTree)s.
    pub fn new_defaults() -> Self {
        Self::new(ConstituentTreeBuilder::new())
    }
}

impl Default for BracketParser<ConstituentTreeBuilder> {
    fn default() -> Self {
        Self::new_defaults()
    }
}

// ============================================================================
// API Parsing (pub)
// ============================================================================
impl<T: TreeBuilder> BracketParser<T> {
    /// Parses a single tree in bracket notation.
    ///
    /// # Arguments
    /// * `input` - The bracket string; input following the closing `)` of
    ///   the root is ignored
    ///
    /// # Returns
    /// * `Ok(T::Tree)` - The parsed tree
    /// * `Err(ParsingError)` - If the input is malformed
    pub fn parse_str(&mut self, input: &str) -> Result<T::Tree, ParsingError> {
        let mut tokenizer = Tokenizer::new(input);
        self.tree_builder.init_next(self.num_words);
        self.num_words = 0;

        let root = self.parse_root(&mut tokenizer)?;
        let tree = self
            .tree_builder
            .finish_tree(root)
            .ok_or_else(|| ParsingError::without_context(ParsingErrorType::BuilderNotInitialized))?;

        debug!("parsed tree with {} words from {} bytes", self.num_words, input.len());
        Ok(tree)
    }
}

// ============================================================================
// Parsing
// ============================================================================
impl<T: TreeBuilder> BracketParser<T> {
    /// Parses the root constituent. Anything after its closing `)` is
    /// ignored.
    fn parse_root(&mut self, tokenizer: &mut Tokenizer<'_>) -> Result<T::NodeIdx, ParsingError> {
        if !matches!(tokenizer.peek(), Some(Token { kind: TokenKind::Open, .. })) {
            return Err(ParsingError::missing_opening_parenthesis(tokenizer));
        }

        let root = self.parse_constituent(tokenizer)?;

        if let Some(token) = tokenizer.peek() {
            warn!("ignoring input after the root constituent, starting with {} at {}", token.kind, token.position);
        }

        Ok(root)
    }

    /// Parses a constituent, adds it to tree, and returns its index:
    /// - `'(' label (constituent | word)* ')'`
    /// - Expects tokenizer at opening `(` (checked by caller)
    /// - Each bare word becomes a leaf labeled like its constituent
    /// - Nested constituents are kept on an explicit stack, so nesting depth
    ///   is only bounded by memory
    fn parse_constituent<'a>(&mut self, tokenizer: &mut Tokenizer<'a>) -> Result<T::NodeIdx, ParsingError> {
        // Label and children of the innermost open constituent ...
        let mut label = parse_open(tokenizer)?;
        let mut children = Vec::new();
        // ... and of the ones enclosing it
        let mut enclosing: Vec<(&'a str, Vec<T::NodeIdx>)> = Vec::new();

        loop {
            match tokenizer.peek() {
                Some(Token { kind: TokenKind::Open, .. }) => {
                    let inner = parse_open(tokenizer)?;
                    enclosing.push((mem::replace(&mut label, inner), mem::take(&mut children)));
                }
                Some(Token { kind: TokenKind::Atom(word), .. }) => {
                    tokenizer.next_token();
                    children.push(self.tree_builder.add_leaf(label, word));
                    self.num_words += 1;
                }
                Some(Token { kind: TokenKind::Close, .. }) => {
                    tokenizer.next_token();
                    let index = self.tree_builder.add_internal(label, &children);
                    match enclosing.pop() {
                        Some((outer_label, outer_children)) => {
                            label = outer_label;
                            children = outer_children;
                            children.push(index);
                        }
                        None => return Ok(index),
                    }
                }
                None => return Err(ParsingError::unterminated_bracket(tokenizer)),
            }
        }
    }
}

/// Parses `"(label"` and returns the label.
fn parse_open<'a>(tokenizer: &mut Tokenizer<'a>) -> Result<&'a str, ParsingError> {
    tokenizer.next_token();
    match tokenizer.peek() {
        Some(Token { kind: TokenKind::Atom(label), .. }) => {
            tokenizer.next_token();
            Ok(label)
        }
        _ => Err(ParsingError::missing_label(tokenizer)),
    }
}
