//! Character cursor for traversing source text.
//!
//! The cursor owns the read position of the token reader. It only ever moves
//! forward, stays on UTF-8 character boundaries and never passes the end of
//! the source. Line and column are tracked for diagnostics.

use crate::span::Span;

/// A forward-only cursor over a borrowed source string.
///
/// # Example
///
/// ```
/// use mathlang_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x");
/// assert_eq!(cursor.current_char(), Some('l'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('e'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `None` at the end.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;

        // Fast path for ASCII
        if b < 128 {
            return Some(b as char);
        }

        self.source[self.position..].chars().next()
    }

    /// Moves past the current character. Does nothing at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use mathlang_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 1);
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.current_char() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use mathlang_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abc def");
    /// cursor.advance_while(|c| c != ' ');
    /// assert_eq!(cursor.remaining(), " def");
    /// ```
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.current_char() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Skips consecutive space characters. Tabs and newlines are left alone.
    pub fn skip_spaces(&mut self) {
        self.advance_while(|c| c == ' ');
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the source from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unread rest of the source.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Records the current position for a later [`Cursor::span_from`].
    pub fn mark(&self) -> Mark {
        Mark {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Returns the span from `mark` up to the current position.
    pub fn span_from(&self, mark: Mark) -> Span {
        Span::new(mark.position, self.position, mark.line, mark.column)
    }
}

/// A saved cursor location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}
