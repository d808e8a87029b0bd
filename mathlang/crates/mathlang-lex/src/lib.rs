//! mathlang-lex - Token reader for the mathlang scripting language
//!
//! This crate turns mathlang source text (statements such as
//! `let x = 5 ;`, `note "a comment"` and `print x + 1 ;`) into a stream of
//! typed tokens for a downstream parser.
//!
//! # Example Usage
//!
//! ```
//! use mathlang_lex::{Lexer, Token};
//!
//! let mut lexer = Lexer::new("print \"hi\"");
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::Name("print".into())));
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::String("hi".into())));
//! assert_eq!(lexer.next_token().unwrap(), None);
//!
//! // Or collect everything at once
//! let tokens = mathlang_lex::tokenize("a+b").unwrap();
//! assert_eq!(tokens.len(), 3);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type and the keyword and symbol sets
//! - [`lexer`] - The token reader
//! - [`cursor`] - Character cursor for source traversal
//! - [`span`] - Source locations
//! - [`error`] - Read failures
//!
//! # Lexing Rules
//!
//! Spaces between lexemes are skipped. A lexeme is either a `"`-quoted
//! string, ending at the next quote or newline, or an unquoted run ending at
//! a space, tab, newline or one of the symbols `=`, `+`, `-`, `;`. A symbol
//! is always a lexeme of its own.
//!
//! Lexemes are then classified:
//!
//! - starts with an ASCII digit: **Number** (`5`, `2.5`, `1e3`)
//! - a lone symbol: **Symbol**
//! - `let`, `note`, `print`, or any single character: **Name**
//! - anything else: **String**

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod span;
pub mod token;

#[cfg(test)]
mod edge_cases;

use std::io::Read;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use span::Span;
pub use token::{is_keyword, is_symbol, Token, KEYWORDS, SYMBOLS};

/// A pull-based supply of tokens, as consumed by a parser.
///
/// Implementors return `Ok(None)` once exhausted and keep doing so on every
/// later call.
pub trait TokenSource {
    /// Returns the next token, or `None` at end of input.
    fn next_token(&mut self) -> LexResult<Option<Token>>;
}

/// Reads every token of `source`, stopping at the first failure.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).collect()
}

/// Reads a whole streaming source into memory for a [`Lexer`].
///
/// # Errors
///
/// [`LexError::Io`] if the reader fails or the bytes are not UTF-8.
pub fn read_source<R: Read>(mut reader: R) -> LexResult<String> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(source)
}
