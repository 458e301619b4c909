//! Text parser error type.

use std::fmt;

use thiserror::Error;

/// A position in the input text, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextPosition {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors raised while parsing JSON text.
///
/// Parsing aborts on the first error; no partial value is produced.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid or unexpected character at {0}")]
    InvalidOrUnexpectedCharacter(TextPosition),
    /// Object keys must be unique. A stricter-than-RFC-8259 rule, kept on
    /// purpose: a re-declared key is a bug in the document, not a value.
    #[error("duplicate object keys at {0}")]
    DuplicateObjectKeys(TextPosition),
    #[error("unexpected end of text at {0}")]
    UnexpectedEndOfText(TextPosition),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// The input position at which parsing failed, when one applies.
    pub fn position(&self) -> Option<TextPosition> {
        match self {
            ParseError::InvalidOrUnexpectedCharacter(pos)
            | ParseError::DuplicateObjectKeys(pos)
            | ParseError::UnexpectedEndOfText(pos) => Some(*pos),
            ParseError::Io(_) => None,
        }
    }
}
