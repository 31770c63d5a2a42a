//! Basic low-level parsing functionality.
//!
//! This module provides the byte scanner and tokenizer underneath the
//! bracket notation parser, along with its error type.

pub mod byte_parser;
pub mod parsing_error;
pub mod tokenizer;

pub use byte_parser::ByteParser;
pub use parsing_error::{ParsingError, ParsingErrorType};
pub use tokenizer::{Token, TokenKind, Tokenizer};
