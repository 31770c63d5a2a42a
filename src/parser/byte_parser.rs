//! Low-level byte-by-byte scanner over UTF-8 text.
//!
//! This module provides [ByteParser] for scanning bracket notation with
//! support for peeking, consuming and zero-copy extraction of atoms. Used as
//! the foundation of the [Tokenizer](crate::parser::tokenizer::Tokenizer).

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte scanner over a borrowed UTF-8 string.
///
/// All structural delimiters of bracket notation (parentheses and ASCII
/// whitespace) are single bytes, so scanning works on bytes while every
/// slice handed out by [`parse_atom`](Self::parse_atom) still starts and
/// ends on a character boundary.
///
/// # Example
/// ```
/// use synbox::parser::byte_parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("  (NP jóvenes)");
/// parser.skip_whitespace();
/// assert!(parser.consume_if(b'('));
/// assert_eq!(parser.parse_atom(b"() \t\n\r"), "NP");
/// parser.skip_whitespace();
/// assert_eq!(parser.parse_atom(b"() \t\n\r"), "jóvenes");
/// assert_eq!(parser.peek(), Some(b')'));
/// ```
#[derive(Debug, Clone)]
pub struct ByteParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> ByteParser<'a> {
    /// Creates a new `ByteParser` positioned at the start of `input`.
    pub fn for_str(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Peeks at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of input
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Skips (consumes) all consecutive ASCII whitespace characters.
    ///
    /// Whitespace includes: space, tab, newline, carriage return,
    /// form feed and vertical tab.
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if is_whitespace(b) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Checks if the current byte equals `ch`.
    pub fn peek_is(&self, ch: u8) -> bool {
        self.peek() == Some(ch)
    }

    /// Consumes the current byte if it equals `ch`.
    ///
    /// # Returns
    /// `true` if the byte was matched and consumed, `false` otherwise
    pub fn consume_if(&mut self, ch: u8) -> bool {
        if self.peek_is(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes bytes until any of the `delimiters` (or end of input) and
    /// returns the consumed run as a slice of the input.
    ///
    /// Returns an empty slice if the current byte already is a delimiter.
    /// `delimiters` must only contain ASCII bytes.
    pub fn parse_atom(&mut self, delimiters: &[u8]) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if delimiters.contains(&b) {
                break;
            }
            self.pos += 1;
        }

        &self.input[start..self.pos]
    }

    /// Returns the current byte offset in the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns a string from up to `k` bytes starting at `position`,
    /// for error context.
    ///
    /// A multi-byte character cut at the end is replaced with the Unicode
    /// replacement character.
    pub fn get_context_at(&self, position: usize, k: usize) -> String {
        let bytes = self.input.as_bytes();
        let start = position.min(bytes.len());
        let end = (start + k).min(bytes.len());
        String::from_utf8_lossy(&bytes[start..end]).into_owned()
    }
}

/// Whitespace in the sense of bracket notation (ASCII only).
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}
