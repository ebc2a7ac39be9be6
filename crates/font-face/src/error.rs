use std::result;

use thiserror::Error;

/// Error types for font-face parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed stylesheet at line {line}, column {column}: {reason}")]
    Syntax { line: u32, column: u32, reason: String },

    #[error("@font-face rule at line {line}, column {column} is missing `{field}`")]
    MissingField { line: u32, column: u32, field: &'static str },
}

impl ParseError {
    pub(crate) fn syntax(location: cssparser::SourceLocation, reason: impl Into<String>) -> Self {
        // cssparser lines are 0-based
        Self::Syntax { line: location.line + 1, column: location.column, reason: reason.into() }
    }

    pub(crate) fn missing(location: cssparser::SourceLocation, field: &'static str) -> Self {
        Self::MissingField { line: location.line + 1, column: location.column, field }
    }
}

/// An archive or regeneration was requested over zero entries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no font faces selected")]
pub struct EmptySelection;

/// A selection named a key that is not in the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown font key: {0}")]
pub struct UnknownKey(pub String);

pub type Result<T> = result::Result<T, ParseError>;
