//! Constants of the bracket notation format.

/// Bytes ending an atom: parentheses and ASCII whitespace
pub(crate) const BRACKET_DELIMITERS: &[u8] = b"() \t\n\r\x0B\x0C";

/// Default guess for number of words, when unknown
pub(crate) const DEFAULT_NUM_WORDS_GUESS: usize = 10;
