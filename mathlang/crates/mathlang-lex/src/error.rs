//! Error types for the token reader.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::span::Span;

/// Failure of a read.
///
/// After a read fails the reader must not be relied on; [`crate::Lexer`]
/// reports end of input from then on.
#[derive(Debug, Error)]
pub enum LexError {
    /// A lexeme starting with a digit that is not a valid number.
    #[error("malformed number '{lexeme}' at {span}")]
    MalformedNumber {
        /// The offending lexeme.
        lexeme: String,
        /// Where the lexeme starts.
        span: Span,
        /// The float parser's complaint.
        #[source]
        source: ParseFloatError,
    },

    /// The source could not be read.
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),
}

impl LexError {
    /// Location of the failure, if it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::MalformedNumber { span, .. } => Some(*span),
            LexError::Io(_) => None,
        }
    }
}

/// Result type alias for reads.
pub type LexResult<T> = std::result::Result<T, LexError>;
