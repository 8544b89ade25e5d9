//! Parse errors

use thiserror::Error;

/// Error parsing modifier names or key representations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty input")]
    Empty,
    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),
    #[error("Missing key in: {0}")]
    MissingKey(String),
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}
