//! Token definitions for mathlang.
//!
//! The token set is closed: every lexeme the reader produces is classified
//! into exactly one of the four [`Token`] variants.

use std::fmt;

use serde::Serialize;

/// Reserved words. A lexeme spelling one of these is always a [`Token::Name`].
pub const KEYWORDS: [&str; 3] = ["let", "note", "print"];

/// Characters that stand alone as a [`Token::Symbol`] and end any unquoted
/// lexeme they appear in.
pub const SYMBOLS: [char; 4] = ['=', '+', '-', ';'];

/// A classified lexeme.
///
/// Serializes as `{"kind": "Name", "value": "let"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Token {
    /// A reserved keyword or a one-character variable name.
    Name(String),

    /// A numeric literal.
    Number(f64),

    /// A quoted literal with its quotes stripped, or any other
    /// multi-character text that is neither a keyword nor a number.
    String(String),

    /// One of `=`, `+`, `-`, `;`.
    Symbol(char),
}

impl Token {
    /// Returns the variant name, e.g. `"Number"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Name(_) => "Name",
            Token::Number(_) => "Number",
            Token::String(_) => "String",
            Token::Symbol(_) => "Symbol",
        }
    }

    /// Returns true for a name that spells a reserved keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::Name(name) if is_keyword(name))
    }
}

/// Writes the literal form of the token: strings are re-quoted, everything
/// else prints as it appeared in the source.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Name(name) => f.write_str(name),
            Token::Number(value) => write!(f, "{}", value),
            Token::String(text) => write!(f, "\"{}\"", text),
            Token::Symbol(symbol) => write!(f, "{}", symbol),
        }
    }
}

/// Returns true if `text` is a reserved keyword.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

/// Returns true if `c` is a symbol character.
#[inline]
pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(&c)
}
