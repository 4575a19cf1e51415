//! Per-file processing
//!
//! Reads a file, normalizes its comments and hands the result to the chosen
//! output: stdout, the file itself, or nowhere (check mode).

use crate::error::CliError;
use commentcase_parser::{normalize_bytes, CaseMode, ProcessReport};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where normalized sources go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Print the normalized source to stdout
    Stdout,
    /// Rewrite changed files in place
    Write,
    /// Report only
    Check,
}

/// Per-file result, also the shape of a `--json` line
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    pub path: PathBuf,
    pub mode: CaseMode,
    #[serde(flatten)]
    pub report: ProcessReport,
}

/// Normalize one file. Under [`Output::Write`] a changed file is only written
/// back when it is valid UTF-8, so no byte outside a comment is ever replaced.
pub fn process_file(
    path: &Path,
    mode: CaseMode,
    output: Output,
) -> Result<FileSummary, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (normalized, report) = normalize_bytes(&bytes, mode);
    tracing::debug!(path = %path.display(), changes = report.changes, "normalized file");

    match output {
        Output::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(normalized.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| CliError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
        }
        Output::Write if report.modified => {
            if std::str::from_utf8(&bytes).is_err() {
                return Err(CliError::NotUtf8 {
                    path: path.to_path_buf(),
                });
            }
            fs::write(path, normalized).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Output::Write | Output::Check => {}
    }

    Ok(FileSummary {
        path: path.to_path_buf(),
        mode,
        report,
    })
}

/// Human-readable summary line for stderr, if there is anything to say
pub fn describe(summary: &FileSummary, output: Output) -> Option<String> {
    if !summary.report.modified {
        return None;
    }
    let noun = if summary.report.changes == 1 {
        "comment"
    } else {
        "comments"
    };
    let verb = match output {
        Output::Check => "would update",
        Output::Stdout | Output::Write => "updated",
    };
    Some(format!(
        "{}: {verb} {} {noun}",
        summary.path.display(),
        summary.report.changes
    ))
}
