//! Errors surfaced by the CLI

use commentcase_parser::UnknownCaseMode;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    InvalidMode(#[from] UnknownCaseMode),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("refusing to rewrite {}: file is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },

    #[error("failed to encode summary: {0}")]
    Summary(#[from] serde_json::Error),
}
