//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct and its read loop.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::classify::classify;
use crate::cursor::Cursor;
use crate::error::LexResult;
use crate::span::Span;
use crate::token::Token;
use crate::TokenSource;

/// Token reader for mathlang source text.
///
/// Each call to [`Lexer::next_token`] skips leading spaces, cuts one lexeme,
/// classifies it and returns the token. Once the source is exhausted, or a
/// read has failed, every further call returns `Ok(None)`.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Span of the most recently returned token.
    token_span: Option<Span>,

    /// Set after a failed read.
    poisoned: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a reader positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_span: None,
            poisoned: false,
        }
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// Empty lexemes (blank lines, doubled delimiters, `""`) are skipped.
    ///
    /// # Errors
    ///
    /// [`crate::LexError::MalformedNumber`] if a lexeme starting with a
    /// digit does not parse as a number.
    ///
    /// # Example
    ///
    /// ```
    /// use mathlang_lex::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("let x = 5 ;");
    /// assert_eq!(lexer.next_token().unwrap(), Some(Token::Name("let".into())));
    /// assert_eq!(lexer.next_token().unwrap(), Some(Token::Name("x".into())));
    /// assert_eq!(lexer.next_token().unwrap(), Some(Token::Symbol('=')));
    /// assert_eq!(lexer.next_token().unwrap(), Some(Token::Number(5.0)));
    /// assert_eq!(lexer.next_token().unwrap(), Some(Token::Symbol(';')));
    /// assert_eq!(lexer.next_token().unwrap(), None);
    /// ```
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        if self.poisoned {
            return Ok(None);
        }

        loop {
            if self.cursor.is_at_end() {
                trace!(position = self.cursor.position(), "end of input");
                return Ok(None);
            }

            self.cursor.skip_spaces();
            let lexeme = self.scan_lexeme();
            if lexeme.text.is_empty() {
                continue;
            }

            return match classify(lexeme) {
                Ok(token) => {
                    trace!(kind = token.kind(), token = %token, span = %lexeme.span, "read token");
                    self.token_span = Some(lexeme.span);
                    Ok(Some(token))
                },
                Err(err) => {
                    debug!(error = %err, "read failed; reader poisoned");
                    self.poisoned = true;
                    Err(err)
                },
            };
        }
    }

    /// Span of the token most recently returned by [`Lexer::next_token`].
    pub fn token_span(&self) -> Option<Span> {
        self.token_span
    }

    /// Returns true once no further tokens will be produced.
    pub fn is_finished(&self) -> bool {
        self.poisoned || self.cursor.remaining().chars().all(is_blank)
    }

    /// Current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

/// Characters that can only ever form empty lexemes.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t' | '\r')
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> LexResult<Option<Token>> {
        Lexer::next_token(self)
    }
}

/// Yields every token, then at most one error, then stops.
impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LexError;

    fn name(s: &str) -> Token {
        Token::Name(s.to_string())
    }

    #[test]
    fn test_let_statement() {
        let mut lexer = Lexer::new("let x = 5 ;");
        assert_eq!(lexer.next_token().unwrap(), Some(name("let")));
        assert_eq!(lexer.next_token().unwrap(), Some(name("x")));
        assert_eq!(lexer.next_token().unwrap(), Some(Token::Symbol('=')));
        assert_eq!(lexer.next_token().unwrap(), Some(Token::Number(5.0)));
        assert_eq!(lexer.next_token().unwrap(), Some(Token::Symbol(';')));
        assert_eq!(lexer.next_token().unwrap(), None);
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().unwrap(), Some(name("x")));
        let position = lexer.position();
        for _ in 0..5 {
            assert_eq!(lexer.next_token().unwrap(), None);
            assert_eq!(lexer.position(), position);
        }
        assert!(lexer.is_finished());
    }

    #[test]
    fn test_token_span_tracks_last_token() {
        let mut lexer = Lexer::new("let\n  ab");
        assert!(lexer.token_span().is_none());
        lexer.next_token().unwrap();
        assert_eq!(lexer.token_span(), Some(Span::new(0, 3, 1, 1)));
        lexer.next_token().unwrap();
        assert_eq!(lexer.token_span(), Some(Span::new(6, 8, 2, 3)));
    }

    #[test]
    fn test_error_poisons_reader() {
        let mut lexer = Lexer::new("let 5x = 1;");
        assert_eq!(lexer.next_token().unwrap(), Some(name("let")));

        let err = lexer.next_token().unwrap_err();
        assert!(matches!(
            err,
            LexError::MalformedNumber { ref lexeme, span, .. }
                if lexeme == "5x" && span == Span::new(4, 6, 1, 5)
        ));

        assert!(lexer.is_finished());
        assert_eq!(lexer.next_token().unwrap(), None);
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let items: Vec<_> = Lexer::new("a 1.2.3 b").collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap(), &name("a"));
        assert!(items[1].is_err());
    }

    #[test]
    fn test_is_finished_with_trailing_blanks() {
        let mut lexer = Lexer::new("x \n\t ");
        assert!(!lexer.is_finished());
        lexer.next_token().unwrap();
        assert!(lexer.is_finished());
        assert_eq!(lexer.next_token().unwrap(), None);
    }

    #[test]
    fn test_token_source_trait() {
        fn drain(source: &mut impl TokenSource) -> usize {
            let mut count = 0;
            while let Ok(Some(_)) = source.next_token() {
                count += 1;
            }
            count
        }

        assert_eq!(drain(&mut Lexer::new("print \"hi\" ;")), 3);
    }
}
