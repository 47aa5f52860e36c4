//! Standalone file utilities shipped with the CLI.
//!
//! These share no state with figure collections.

use std::io;
use std::path::PathBuf;

pub mod weather_csv;
pub mod word_count;

pub type ToolResult<T> = Result<T, ToolError>;

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("JSON input must be an array of records")]
    NotAnArray,
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}
