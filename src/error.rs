//! Crate level error type.

use crate::layout::LayoutError;
use crate::parser::ParsingError;
use std::io;
use thiserror::Error;

/// Any failure of going from bracket notation to rendered output.
///
/// The first two variants are the failures of the core: rejected input and
/// defects in a tree. The others only arise when reading configuration or
/// writing output.
#[derive(Debug, Error)]
pub enum SynboxError {
    #[error("Malformed input - {0}")]
    MalformedInput(#[from] ParsingError),
    #[error(transparent)]
    InvariantViolation(#[from] LayoutError),
    #[error("Invalid configuration - {0}")]
    Config(#[source] serde_json::Error),
    #[error("JSON serialization failed - {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error - {0}")]
    Io(#[from] io::Error),
}
