//! Failures the CLI reports to the user.

use std::path::PathBuf;
use thiserror::Error;

/// Every failure ends up here and is printed as `Error: <message>`.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("invalid JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The input parsed but cannot be converted: non-object root, or a
    /// character XML cannot represent.
    #[error("{}: {source}", path.display())]
    InvalidDocument {
        path: PathBuf,
        source: json2xml_core::Json2XmlError,
    },

    /// Anything else that went wrong while reading, converting or writing.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
