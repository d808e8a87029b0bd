//! Lexer module.
//!
//! - `core` - the `Lexer` struct, the read loop and its iterator form
//! - `lexeme` - cutting the next lexeme out of the source
//! - `classify` - turning a lexeme into a `Token`

mod classify;
mod core;
mod lexeme;

pub use self::core::Lexer;
