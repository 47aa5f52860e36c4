//! Exact-token word occurrence counting.

use super::{ToolError, ToolResult};
use std::fs;
use std::path::Path;

/// Counts whitespace-delimited tokens exactly equal to `word`.
///
/// Matching is case-sensitive and punctuation is part of the token.
pub fn count_occurrences(content: &str, word: &str) -> usize {
    content
        .split_whitespace()
        .filter(|token| *token == word)
        .count()
}

pub fn count_in_file(path: &Path, word: &str) -> ToolResult<usize> {
    let content = fs::read_to_string(path).map_err(|source| ToolError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(count_occurrences(&content, word))
}
