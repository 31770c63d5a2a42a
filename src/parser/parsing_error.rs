//! Error types for the bracket notation parser.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for
//! representing and reporting malformed input.

use crate::parser::tokenizer::Tokenizer;
use thiserror::Error;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Reasons why bracket notation input is rejected.
#[derive(PartialEq, Eq, Debug, Clone, Error)]
pub enum ParsingErrorType {
    #[error("Input must start with '(' but found {found}")]
    MissingOpeningParenthesis { found: String },
    #[error("Expected label after '(' but found {found}")]
    MissingLabel { found: String },
    #[error("Unterminated bracket - reached end of input before matching ')'")]
    UnterminatedBracket,
    #[error("Builder not initialized")]
    BuilderNotInitialized,
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (byte position and the input
/// following it).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position}{}", format_context(.context))]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and the tokenizer state,
    /// pointing at the lookahead token.
    pub fn from_tokenizer(kind: ParsingErrorType, tokenizer: &Tokenizer<'_>) -> Self {
        Self {
            kind,
            position: tokenizer.position(),
            context: tokenizer.context(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for MissingOpeningParenthesis
    pub fn missing_opening_parenthesis(tokenizer: &Tokenizer<'_>) -> Self {
        let found = describe_lookahead(tokenizer);
        Self::from_tokenizer(ParsingErrorType::MissingOpeningParenthesis { found }, tokenizer)
    }

    /// Convenience constructor for MissingLabel
    pub fn missing_label(tokenizer: &Tokenizer<'_>) -> Self {
        let found = describe_lookahead(tokenizer);
        Self::from_tokenizer(ParsingErrorType::MissingLabel { found }, tokenizer)
    }

    /// Convenience constructor for UnterminatedBracket
    pub fn unterminated_bracket(tokenizer: &Tokenizer<'_>) -> Self {
        Self::from_tokenizer(ParsingErrorType::UnterminatedBracket, tokenizer)
    }

    /// Create a ParsingError without parser context (for builder errors)
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self {
            kind,
            position: 0,
            context: String::new(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the byte position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the input following the error position (up to 50 bytes)
    pub fn context(&self) -> &str {
        &self.context
    }
}

fn describe_lookahead(tokenizer: &Tokenizer<'_>) -> String {
    tokenizer
        .peek()
        .map_or_else(|| "end of input".to_string(), |token| token.kind.to_string())
}

fn format_context(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context (next {} bytes): {}", context.len(), context)
    }
}
