//! Lexeme classification.

use tracing::debug;

use super::lexeme::Lexeme;
use crate::error::{LexError, LexResult};
use crate::token::{is_keyword, is_symbol, Token};

/// Classifies a non-empty lexeme.
///
/// The checks run in a fixed order: leading digit, lone symbol, keyword or
/// single character, then the string fallback. Quoted and unquoted lexemes
/// are classified alike.
pub(crate) fn classify(lexeme: Lexeme<'_>) -> LexResult<Token> {
    let text = lexeme.text;
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return Ok(Token::String(String::new()));
    };
    let single = chars.next().is_none();

    if first.is_ascii_digit() {
        return parse_number(lexeme).map(Token::Number);
    }
    if single && is_symbol(first) {
        return Ok(Token::Symbol(first));
    }
    if single || is_keyword(text) {
        return Ok(Token::Name(text.to_owned()));
    }
    Ok(Token::String(text.to_owned()))
}

fn parse_number(lexeme: Lexeme<'_>) -> LexResult<f64> {
    lexeme.text.parse::<f64>().map_err(|source| {
        debug!(lexeme = lexeme.text, span = %lexeme.span, "malformed number");
        LexError::MalformedNumber {
            lexeme: lexeme.text.to_owned(),
            span: lexeme.span,
            source,
        }
    })
}
