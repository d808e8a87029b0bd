//! Tokens command implementation.
//!
//! Runs the token reader over one source and prints the resulting stream.

use std::io::{self, Write};
use std::path::PathBuf;

use mathlang_lex::{Lexer, Span, Token};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{read_input, OutputFormat};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source file, or `-` for standard input.
    pub input: PathBuf,
    /// Listing format.
    pub format: OutputFormat,
    /// Prefix tokens with their location.
    pub spans: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = usize;

    fn new(args: TokensArgs) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<usize> {
        let source = read_input(&self.args.input)?;
        debug!(input = %self.args.input.display(), bytes = source.len(), "loaded source");

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let count = render_tokens(&source, self.args.format, self.args.spans, &mut out)?;
        out.flush()?;

        debug!(command = Self::name(), input = %self.args.input.display(), tokens = count, "done");
        Ok(count)
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// One listed token.
#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    value: TokenValue<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<u32>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum TokenValue<'a> {
    Text(&'a str),
    Number(f64),
    Symbol(char),
}

impl<'a> TokenRecord<'a> {
    fn new(token: &'a Token, span: Option<Span>) -> Self {
        let value = match token {
            Token::Name(text) | Token::String(text) => TokenValue::Text(text),
            Token::Number(value) => TokenValue::Number(*value),
            Token::Symbol(symbol) => TokenValue::Symbol(*symbol),
        };
        Self {
            kind: token.kind(),
            value,
            line: span.map(|s| s.line),
            column: span.map(|s| s.column),
        }
    }
}

/// Tokenize `source` and write the listing to `out`.
///
/// Nothing is written if the source fails to tokenize.
///
/// # Returns
/// * `Result<usize>` - The number of tokens listed
pub fn render_tokens<W: Write>(
    source: &str,
    format: OutputFormat,
    spans: bool,
    out: &mut W,
) -> Result<usize> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push((token, lexer.token_span().unwrap_or_default()));
    }

    match format {
        OutputFormat::Plain => {
            for (token, span) in &tokens {
                if spans {
                    write!(out, "{} ", span)?;
                }
                writeln!(out, "{}({})", token.kind(), token)?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<_> = tokens
                .iter()
                .map(|(token, span)| TokenRecord::new(token, spans.then_some(*span)))
                .collect();
            serde_json::to_writer(&mut *out, &records)?;
            writeln!(out)?;
        },
    }

    Ok(tokens.len())
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<usize> {
    TokensCommand::new(args).execute()
}
