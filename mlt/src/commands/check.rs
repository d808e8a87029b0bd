//! Check command implementation.
//!
//! Tokenizes each input file and reports the first lexical error per file.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::commands::common::read_input;
use crate::commands::traits::Command;
use crate::error::{MltError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Source files to check.
    pub inputs: Vec<PathBuf>,
}

/// Outcome of checking a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReport {
    /// Tokenized cleanly into this many tokens.
    Passed(usize),
    /// Failed with this message.
    Failed(String),
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Check a single file.
    fn check_file(&self, path: &Path) -> FileReport {
        let outcome = read_input(path).and_then(|source| {
            mathlang_lex::tokenize(&source)
                .map(|tokens| tokens.len())
                .map_err(MltError::from)
        });
        match outcome {
            Ok(count) => FileReport::Passed(count),
            Err(err) => FileReport::Failed(err.to_string()),
        }
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = Vec<FileReport>;

    fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Vec<FileReport>> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut reports = Vec::with_capacity(self.args.inputs.len());

        for path in &self.args.inputs {
            let report = self.check_file(path);
            match &report {
                FileReport::Passed(count) => {
                    writeln!(out, "{}: ok ({} tokens)", path.display(), count)?;
                },
                FileReport::Failed(message) => {
                    warn!(input = %path.display(), "{}", message);
                    writeln!(out, "{}: error: {}", path.display(), message)?;
                },
            }
            reports.push(report);
        }

        let failed = reports
            .iter()
            .filter(|r| matches!(r, FileReport::Failed(_)))
            .count();
        debug!(command = Self::name(), files = reports.len(), failed, "done");

        if failed > 0 {
            return Err(MltError::CheckFailed(failed));
        }
        Ok(reports)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<Vec<FileReport>> {
    CheckCommand::new(args).execute()
}
