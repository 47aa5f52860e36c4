//! Core library for figshelf, a per-user collectible figure inventory.
//! This crate owns the record model, file storage and rendering rules.

pub mod logging;
pub mod model;
pub mod paths;
pub mod render;
pub mod repo;
pub mod service;
pub mod tools;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError, LOG_LEVEL_ENV};
pub use model::figure::{Figure, FigureGenre, FigureKind, FigureValidationError};
pub use paths::{
    ensure_directory, resolve_data_root, resolve_log_dir, PathError, DATA_DIR_ENV, LOG_DIR_ENV,
};
pub use render::{FigureView, ValueTier};
pub use repo::figure_repo::{FigureRepository, FileFigureRepository, RepoError, RepoResult};
pub use service::collection_service::{CollectionService, Outcome};
