//! Edge case tests for mathlang-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, Lexer, Token};

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
    }

    fn name(s: &str) -> Token {
        Token::Name(s.to_string())
    }

    fn string(s: &str) -> Token {
        Token::String(s.to_string())
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_spaces_only() {
        let mut lexer = Lexer::new("      ");
        assert_eq!(lexer.next_token().unwrap(), None);
        assert_eq!(lexer.next_token().unwrap(), None);
    }

    #[test]
    fn test_edge_blank_lines() {
        assert!(lex_all("\n\n  \n\t\r\n").is_empty());
    }

    #[test]
    fn test_edge_print_quoted() {
        assert_eq!(lex_all("print \"hi\""), vec![name("print"), string("hi")]);
    }

    #[test]
    fn test_edge_symbol_splits_run() {
        assert_eq!(
            lex_all("a+b"),
            vec![name("a"), Token::Symbol('+'), name("b")]
        );
    }

    #[test]
    fn test_edge_adjacent_symbols() {
        assert_eq!(
            lex_all("=+-;"),
            vec![
                Token::Symbol('='),
                Token::Symbol('+'),
                Token::Symbol('-'),
                Token::Symbol(';'),
            ]
        );
    }

    #[test]
    fn test_edge_keyword_glued_to_symbol() {
        assert_eq!(
            lex_all("print;let"),
            vec![name("print"), Token::Symbol(';'), name("let")]
        );
    }

    #[test]
    fn test_edge_multichar_unquoted_is_string() {
        assert_eq!(lex_all("hello world"), vec![string("hello"), string("world")]);
    }

    #[test]
    fn test_edge_unterminated_quote() {
        assert_eq!(lex_all("note \"never closed"), vec![name("note"), string("never closed")]);
    }

    #[test]
    fn test_edge_quote_ends_at_newline() {
        assert_eq!(
            lex_all("print \"first\nx"),
            vec![name("print"), string("first"), name("x")]
        );
    }

    #[test]
    fn test_edge_empty_quotes_skipped() {
        assert_eq!(lex_all("print \"\" ;"), vec![name("print"), Token::Symbol(';')]);
    }

    #[test]
    fn test_edge_quoted_contents_still_classified() {
        assert_eq!(lex_all("\"let\""), vec![name("let")]);
        assert_eq!(lex_all("\"x\""), vec![name("x")]);
        assert_eq!(lex_all("\"42\""), vec![Token::Number(42.0)]);
        assert_eq!(lex_all("\"+\""), vec![Token::Symbol('+')]);
    }

    #[test]
    fn test_edge_quote_inside_run() {
        assert_eq!(lex_all("ab\"cd"), vec![string("ab\"cd")]);
    }

    #[test]
    fn test_edge_closing_quote_then_text() {
        // The closing quote is the only delimiter consumed
        assert_eq!(lex_all("\"ab\"cd"), vec![string("ab"), string("cd")]);
    }

    #[test]
    fn test_edge_number_then_symbol() {
        assert_eq!(
            lex_all("5;"),
            vec![Token::Number(5.0), Token::Symbol(';')]
        );
    }

    #[test]
    fn test_edge_negative_number_is_two_tokens() {
        assert_eq!(lex_all("-3"), vec![Token::Symbol('-'), Token::Number(3.0)]);
    }

    #[test]
    fn test_edge_exponent_with_sign_is_malformed() {
        // '-' ends the run, leaving "1e"
        let err = tokenize("1e-5").unwrap_err();
        assert!(matches!(err, LexError::MalformedNumber { ref lexeme, .. } if lexeme == "1e"));
    }

    #[test]
    fn test_edge_huge_number() {
        assert_eq!(lex_all("1e400"), vec![Token::Number(f64::INFINITY)]);
    }

    #[test]
    fn test_edge_tabs_are_not_skipped_but_delimit() {
        assert_eq!(lex_all("let\tx"), vec![name("let"), name("x")]);
    }

    #[test]
    fn test_edge_crlf_lines() {
        assert_eq!(
            lex_all("let x = 1 ;\r\nprint x ;\r\n"),
            vec![
                name("let"),
                name("x"),
                Token::Symbol('='),
                Token::Number(1.0),
                Token::Symbol(';'),
                name("print"),
                name("x"),
                Token::Symbol(';'),
            ]
        );
    }

    #[test]
    fn test_edge_long_run_of_delimiters() {
        let source = format!("{}x", "\n".repeat(100_000));
        assert_eq!(lex_all(&source), vec![name("x")]);
    }

    #[test]
    fn test_edge_long_string() {
        let text = "a".repeat(10_000);
        assert_eq!(lex_all(&text), vec![string(&text)]);
    }

    #[test]
    fn test_edge_unicode_text() {
        assert_eq!(lex_all("π ≈ \"ünïcode\""), vec![name("π"), name("≈"), string("ünïcode")]);
    }

    #[test]
    fn test_edge_cursor_stays_in_bounds() {
        let source = "print \"x";
        let mut lexer = Lexer::new(source);
        while lexer.next_token().unwrap().is_some() {
            assert!(lexer.position() <= source.len());
        }
        assert_eq!(lexer.position(), source.len());
    }
}
