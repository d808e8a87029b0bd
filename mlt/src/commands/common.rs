//! Common types and utilities for mlt commands.

use std::fs::File;
use std::io;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{MltError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported formats for token listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Kind(literal)` per line
    #[default]
    Plain,
    /// A JSON array of `{"kind", "value"}` objects
    Json,
}

// ============================================================================
// Input
// ============================================================================

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Read a whole source file, or standard input for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        return Ok(mathlang_lex::read_source(io::stdin().lock())?);
    }

    let file = File::open(path).map_err(|e| {
        MltError::FileOperation(format!("{}: {}", path.display(), e))
    })?;
    Ok(mathlang_lex::read_source(io::BufReader::new(file))?)
}
