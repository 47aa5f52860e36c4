//! Data and log directory resolution.
//!
//! # Responsibility
//! - Resolve the data root against a fixed anchor, never the working directory.
//! - Create missing directories idempotently.
//!
//! # Invariants
//! - Resolved paths are absolute.
//! - An existing non-directory path is never replaced.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment override for the data root.
pub const DATA_DIR_ENV: &str = "FIGSHELF_DATA_DIR";
/// Environment override for the log directory.
pub const LOG_DIR_ENV: &str = "FIGSHELF_LOG_DIR";

const APP_DIR_NAME: &str = "figshelf";
const DATA_DIR_NAME: &str = "data";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("could not determine the platform data directory")]
    NoDataDir,
    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("failed to create directory {}: {source}", path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fixed anchor every relative path is resolved against.
///
/// This is `<platform data dir>/figshelf`, e.g. `~/.local/share/figshelf`.
pub fn app_anchor() -> Result<PathBuf, PathError> {
    let base = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(base.join(APP_DIR_NAME))
}

/// Resolves the data root.
///
/// Resolution order:
/// 1. `explicit` (usually a CLI flag)
/// 2. `FIGSHELF_DATA_DIR`
/// 3. `<anchor>/data`
///
/// Relative overrides are joined onto the anchor.
pub fn resolve_data_root(explicit: Option<&Path>) -> Result<PathBuf, PathError> {
    resolve_dir(explicit, DATA_DIR_ENV, DATA_DIR_NAME)
}

/// Resolves the log directory with the same precedence as the data root.
pub fn resolve_log_dir(explicit: Option<&Path>) -> Result<PathBuf, PathError> {
    resolve_dir(explicit, LOG_DIR_ENV, LOG_DIR_NAME)
}

fn resolve_dir(
    explicit: Option<&Path>,
    env_key: &str,
    default_name: &str,
) -> Result<PathBuf, PathError> {
    let override_path = explicit
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(env_key).filter(|v| !v.is_empty()).map(PathBuf::from));

    match override_path {
        Some(path) if path.is_absolute() => Ok(path),
        Some(path) => Ok(app_anchor()?.join(path)),
        None => Ok(app_anchor()?.join(default_name)),
    }
}

/// Ensures `path` exists as a directory, creating it and its ancestors.
///
/// Safe to call on every startup.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|source| PathError::CreateFailed {
        path: path.to_path_buf(),
        source,
    })
}
