//! mlt - command-line front end for the mathlang token reader.
//!
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{MltError, Result};

/// mlt - inspect how mathlang source is tokenized
#[derive(Parser, Debug)]
#[command(name = "mlt")]
#[command(author = "Mathlang Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect how mathlang source is tokenized", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the mlt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a source file
    Tokens(TokensCommand),

    /// Tokenize files and report the first error in each
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file, or `-` for standard input
    input: PathBuf,

    /// Output format (default: from config, else plain)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Prefix each token with its line:column
    #[arg(short, long)]
    spans: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parses arguments, loads configuration, initializes logging and runs the
/// selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, &config),
        Commands::Check(args) => execute_check(args),
    }
}

/// Execute the tokens command. Flags override the config file.
fn execute_tokens(args: TokensCommand, config: &Config) -> Result<()> {
    let tokens_args = TokensArgs {
        input: args.input,
        format: args.format.unwrap_or(config.tokens.format),
        spans: args.spans || config.tokens.spans,
    };
    run_tokens(tokens_args).map(|_| ())
}

/// Execute the check command.
fn execute_check(args: CheckCommand) -> Result<()> {
    run_check(CheckArgs {
        inputs: args.inputs,
    })
    .map(|_| ())
}
