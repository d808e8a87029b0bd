//! Command modules for the mlt CLI.
//!
//! Each subcommand is implemented in its own file following the
//! [`traits::Command`] pattern.

pub mod traits;
pub mod common;

pub mod tokens;
pub mod check;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};
