//! Figure repository contract and file-backed implementation.
//!
//! # Responsibility
//! - Persist one JSON document per figure under `<root>/<user>/<id>.json`.
//! - Report semantic conditions (`AlreadyExists`, `NotFound`) as typed errors.
//!
//! # Invariants
//! - `create` never overwrites an existing record file.
//! - `update` never creates a record file.
//! - Removing the last record keeps the user directory in place.
//! - `list` returns records sorted by id.
//! - Read paths reject invalid persisted content instead of masking it.

use crate::model::figure::{Figure, FigureValidationError};
use crate::paths::{ensure_directory, PathError};
use log::{debug, error, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const RECORD_EXTENSION: &str = "json";

static SAFE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^/\\\x00]+$").expect("valid storage key regex"));

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for figure persistence operations.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Validation(#[from] FigureValidationError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("figure `{id}` already exists in collection `{user}`")]
    AlreadyExists { user: String, id: String },
    #[error("figure `{id}` not found in collection `{user}`")]
    NotFound { user: String, id: String },
    #[error("invalid {kind} `{value}`: must be a single path component")]
    InvalidKey { kind: &'static str, value: String },
    #[error("i/o error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid persisted figure data at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Repository interface for per-user figure collections.
pub trait FigureRepository {
    fn create(&self, user: &str, figure: &Figure) -> RepoResult<()>;
    fn update(&self, user: &str, figure: &Figure) -> RepoResult<()>;
    fn remove(&self, user: &str, id: &str) -> RepoResult<()>;
    fn get(&self, user: &str, id: &str) -> RepoResult<Option<Figure>>;
    /// Returns `None` when the user has no collection directory.
    fn list(&self, user: &str) -> RepoResult<Option<Vec<Figure>>>;
    fn collection_exists(&self, user: &str) -> RepoResult<bool>;
}

/// File-backed figure repository rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileFigureRepository {
    root: PathBuf,
}

impl FileFigureRepository {
    /// Opens a repository, creating `root` and missing ancestors.
    ///
    /// Idempotent; safe to call on every startup.
    pub fn open(root: impl Into<PathBuf>) -> RepoResult<Self> {
        let root = root.into();
        if let Err(err) = ensure_directory(&root) {
            error!(
                "event=data_root_ready module=repo status=error root={} error={}",
                root.display(),
                err
            );
            return Err(err.into());
        }
        info!(
            "event=data_root_ready module=repo status=ok root={}",
            root.display()
        );
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn user_dir(&self, user: &str) -> RepoResult<PathBuf> {
        check_key("user", user)?;
        Ok(self.root.join(user))
    }

    fn record_path(&self, user: &str, id: &str) -> RepoResult<PathBuf> {
        check_key("id", id)?;
        Ok(self
            .user_dir(user)?
            .join(format!("{id}.{RECORD_EXTENSION}")))
    }
}

impl FigureRepository for FileFigureRepository {
    fn create(&self, user: &str, figure: &Figure) -> RepoResult<()> {
        figure.validate()?;
        let path = self.record_path(user, &figure.id)?;
        ensure_directory(&self.user_dir(user)?)?;

        if path.exists() {
            return Err(RepoError::AlreadyExists {
                user: user.to_string(),
                id: figure.id.clone(),
            });
        }

        write_record(&path, figure)
    }

    fn update(&self, user: &str, figure: &Figure) -> RepoResult<()> {
        figure.validate()?;
        let path = self.record_path(user, &figure.id)?;
        if !path.is_file() {
            return Err(RepoError::NotFound {
                user: user.to_string(),
                id: figure.id.clone(),
            });
        }

        write_record(&path, figure)
    }

    fn remove(&self, user: &str, id: &str) -> RepoResult<()> {
        let path = self.record_path(user, id)?;
        if !path.is_file() {
            return Err(RepoError::NotFound {
                user: user.to_string(),
                id: id.to_string(),
            });
        }

        fs::remove_file(&path).map_err(|source| RepoError::Io { path, source })
    }

    fn get(&self, user: &str, id: &str) -> RepoResult<Option<Figure>> {
        let path = self.record_path(user, id)?;
        if !path.is_file() {
            return Ok(None);
        }

        read_record(&path).map(Some)
    }

    fn list(&self, user: &str) -> RepoResult<Option<Vec<Figure>>> {
        let user_dir = self.user_dir(user)?;
        if !user_dir.is_dir() {
            return Ok(None);
        }

        let entries = fs::read_dir(&user_dir).map_err(|source| RepoError::Io {
            path: user_dir.clone(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| RepoError::Io {
                path: user_dir.clone(),
                source,
            })?;
            let path = entry.path();
            let is_record = path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(RECORD_EXTENSION);
            if is_record {
                paths.push(path);
            } else {
                debug!(
                    "event=collection_list module=repo status=skip entry={}",
                    path.display()
                );
            }
        }

        let mut figures = paths
            .iter()
            .map(|path| read_record(path))
            .collect::<RepoResult<Vec<_>>>()?;
        figures.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(Some(figures))
    }

    fn collection_exists(&self, user: &str) -> RepoResult<bool> {
        Ok(self.user_dir(user)?.is_dir())
    }
}

fn check_key(kind: &'static str, value: &str) -> RepoResult<()> {
    if value == "." || value == ".." || !SAFE_KEY_RE.is_match(value) {
        return Err(RepoError::InvalidKey {
            kind,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn write_record(path: &Path, figure: &Figure) -> RepoResult<()> {
    let body = serde_json::to_string_pretty(figure).map_err(|source| RepoError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, body).map_err(|source| RepoError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_record(path: &Path) -> RepoResult<Figure> {
    let body = fs::read_to_string(path).map_err(|source| RepoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&body).map_err(|source| RepoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{check_key, RepoError};

    #[test]
    fn check_key_accepts_plain_names() {
        check_key("id", "7").unwrap();
        check_key("user", "usuario1").unwrap();
        check_key("id", "sonic.classic").unwrap();
    }

    #[test]
    fn check_key_rejects_traversal_and_separators() {
        for bad in ["", ".", "..", "a/b", "a\\b", "nul\0"] {
            let err = check_key("id", bad).unwrap_err();
            assert!(matches!(err, RepoError::InvalidKey { kind: "id", .. }), "{bad:?}");
        }
    }
}
