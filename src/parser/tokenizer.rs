//! Tokenizer splitting bracket notation into `(`, `)` and atoms.
//!
//! The [Tokenizer] keeps exactly one token of lookahead, which is all the
//! descent parser in [BracketParser](crate::bracket::BracketParser)
//! needs.

use crate::bracket::defs::BRACKET_DELIMITERS;
use crate::parser::byte_parser::ByteParser;
use log::trace;
use std::fmt;

/// Kind of a token together with the text of atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// Opening parenthesis `(`
    Open,
    /// Closing parenthesis `)`
    Close,
    /// Maximal run of non-whitespace, non-parenthesis characters
    /// (a label or a word)
    Atom(&'a str),
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Open => write!(f, "'('"),
            TokenKind::Close => write!(f, "')'"),
            TokenKind::Atom(text) => write!(f, "{text:?}"),
        }
    }
}

/// A token and the byte offset at which it starts in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub position: usize,
}

// =#========================================================================#=
// TOKENIZER
// =#========================================================================#=
/// Lazy tokenizer with one token of lookahead.
///
/// # Example
/// ```
/// use synbox::parser::tokenizer::{TokenKind, Tokenizer};
///
/// let kinds: Vec<_> = Tokenizer::new("(NP (N gato))").map(|t| t.kind).collect();
/// assert_eq!(kinds, vec![
///     TokenKind::Open,
///     TokenKind::Atom("NP"),
///     TokenKind::Open,
///     TokenKind::Atom("N"),
///     TokenKind::Atom("gato"),
///     TokenKind::Close,
///     TokenKind::Close,
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    parser: ByteParser<'a>,
    lookahead: Option<Token<'a>>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `input` and scans the first token.
    pub fn new(input: &'a str) -> Self {
        let mut tokenizer = Self {
            parser: ByteParser::for_str(input),
            lookahead: None,
        };
        tokenizer.lookahead = tokenizer.scan_token();
        tokenizer
    }

    /// Returns the lookahead token without consuming it.
    pub fn peek(&self) -> Option<Token<'a>> {
        self.lookahead
    }

    /// Returns the lookahead token and scans the following one.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        let current = self.lookahead.take();
        if current.is_some() {
            self.lookahead = self.scan_token();
        }
        current
    }

    /// Byte offset of the lookahead token, or of the end of input
    /// (after trailing whitespace) if there is none.
    pub fn position(&self) -> usize {
        self.lookahead
            .map_or_else(|| self.parser.position(), |token| token.position)
    }

    /// Up to `k` bytes of input starting at [`position`](Self::position).
    pub fn context(&self, k: usize) -> String {
        self.parser.get_context_at(self.position(), k)
    }

    fn scan_token(&mut self) -> Option<Token<'a>> {
        self.parser.skip_whitespace();
        let position = self.parser.position();

        self.parser.peek()?;

        let kind = if self.parser.consume_if(b'(') {
            TokenKind::Open
        } else if self.parser.consume_if(b')') {
            TokenKind::Close
        } else {
            TokenKind::Atom(self.parser.parse_atom(BRACKET_DELIMITERS))
        };

        trace!("token {kind} at {position}");
        Some(Token { kind, position })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Splits `input` into all of its tokens eagerly.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Tokenizer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parentheses_split_atoms_without_whitespace() {
        let tokens = tokenize("(S(NP x)y)");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Open,
                TokenKind::Atom("S"),
                TokenKind::Open,
                TokenKind::Atom("NP"),
                TokenKind::Atom("x"),
                TokenKind::Close,
                TokenKind::Atom("y"),
                TokenKind::Close,
            ]
        );
    }

    #[test]
    fn test_positions_are_byte_offsets() {
        let positions: Vec<_> = tokenize("( Adj jóvenes )")
            .iter()
            .map(|t| t.position)
            .collect();
        // 'ó' takes two bytes
        assert_eq!(positions, vec![0, 2, 6, 15]);
    }

    #[test]
    fn test_position_at_end_skips_trailing_whitespace() {
        let mut tokenizer = Tokenizer::new("(S)  \n");
        while tokenizer.next_token().is_some() {}
        assert_eq!(tokenizer.peek(), None);
        assert_eq!(tokenizer.position(), 6);
        assert_eq!(tokenizer.context(10), "");
    }

    #[test]
    fn test_new_scans_first_token() {
        let tokenizer = Tokenizer::new("  (S x)");
        assert_eq!(
            tokenizer.peek(),
            Some(Token {
                kind: TokenKind::Open,
                position: 2
            })
        );
        assert_eq!(tokenizer.position(), 2);
        assert_eq!(tokenizer.context(3), "(S ");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\r\n").is_empty());
    }
}
