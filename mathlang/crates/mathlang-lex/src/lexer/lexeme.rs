//! Lexeme extraction.
//!
//! A lexeme is either a quoted string or an unquoted run. Each scan consumes
//! the lexeme plus at most one trailing delimiter.

use crate::span::Span;
use crate::token::is_symbol;
use crate::Lexer;

/// A raw slice of the source, not yet classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Lexeme<'a> {
    pub text: &'a str,
    pub span: Span,
}

/// Characters that end an unquoted run and are consumed with it.
#[inline]
fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t' | '\r')
}

impl<'a> Lexer<'a> {
    /// Cuts the next lexeme at the cursor. The text may be empty.
    pub(crate) fn scan_lexeme(&mut self) -> Lexeme<'a> {
        if self.cursor.current_char() == Some('"') {
            self.scan_quoted()
        } else {
            self.scan_unquoted()
        }
    }

    /// Scans `"...`, stopping at the closing quote, a newline or the end.
    ///
    /// The span covers both quotes when the string is closed.
    fn scan_quoted(&mut self) -> Lexeme<'a> {
        let mark = self.cursor.mark();
        self.cursor.advance();

        let start = self.cursor.position();
        self.cursor.advance_while(|c| c != '"' && c != '\n');
        let text = self.cursor.slice_from(start);

        let span = if self.cursor.current_char() == Some('"') {
            self.cursor.advance();
            self.cursor.span_from(mark)
        } else {
            // Unterminated: drop the newline, if any, after measuring
            let span = self.cursor.span_from(mark);
            self.cursor.advance();
            span
        };

        Lexeme { text, span }
    }

    /// Scans a run up to a delimiter or a symbol.
    ///
    /// A symbol at the start of the run is a lexeme of its own. A symbol
    /// that ends a non-empty run is left under the cursor.
    fn scan_unquoted(&mut self) -> Lexeme<'a> {
        let mark = self.cursor.mark();

        match self.cursor.current_char() {
            Some(c) if is_symbol(c) => {
                self.cursor.advance();
                Lexeme {
                    text: self.cursor.slice_from(mark.position),
                    span: self.cursor.span_from(mark),
                }
            },
            _ => {
                self.cursor
                    .advance_while(|c| !is_delimiter(c) && !is_symbol(c));
                let lexeme = Lexeme {
                    text: self.cursor.slice_from(mark.position),
                    span: self.cursor.span_from(mark),
                };
                if self.cursor.current_char().is_some_and(is_delimiter) {
                    self.cursor.advance();
                }
                lexeme
            },
        }
    }
}
