//! Collection use-case service.
//!
//! # Responsibility
//! - Expose create/update/remove/get/list over a `FigureRepository`.
//! - Recover ordinary conditions (collision, not found, empty) into `Outcome`s.
//!
//! # Invariants
//! - Collision and not-found never surface as `Err`.
//! - Parse, I/O, validation and key errors propagate unchanged.
//! - No operation mutates storage when it reports collision or not found.

use crate::model::figure::Figure;
use crate::render::FigureView;
use crate::repo::figure_repo::{FigureRepository, RepoError, RepoResult};
use log::{info, warn};
use std::fmt::{Display, Formatter};

/// Result of one collection operation, rendered as a human-readable message.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Created { user: String, id: String },
    Collision { user: String, id: String },
    Updated { user: String, id: String },
    Removed { user: String, id: String },
    NotFound { user: String, id: String },
    Found(FigureView),
    Listing { user: String, figures: Vec<FigureView> },
    NoSuchCollection { user: String },
    EmptyCollection { user: String },
}

impl Outcome {
    /// Whether the requested operation could not be carried out.
    ///
    /// An empty collection is informational and not a failure.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::Collision { .. } | Self::NotFound { .. } | Self::NoSuchCollection { .. }
        )
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created { user, .. } => {
                write!(f, "Nueva figura añadida a la colección de {user}.")
            }
            Self::Collision { user, id } => write!(
                f,
                "Error: ya existe una figura con el ID {id} en la colección de {user}."
            ),
            Self::Updated { user, .. } => {
                write!(f, "Figura actualizada en la colección de {user}.")
            }
            Self::Removed { user, .. } => {
                write!(f, "Figura eliminada de la colección de {user}.")
            }
            Self::NotFound { user, id } => write!(
                f,
                "Error: no existe una figura con el ID {id} en la colección de {user}."
            ),
            Self::Found(view) => write!(f, "{view}"),
            Self::Listing { user, figures } => {
                write!(f, "Colección de figuras de {user}:")?;
                for view in figures {
                    write!(f, "\n\n{view}")?;
                }
                Ok(())
            }
            Self::NoSuchCollection { user } => {
                write!(f, "Error: no existe una colección para el usuario {user}.")
            }
            Self::EmptyCollection { user } => write!(f, "La colección de {user} está vacía."),
        }
    }
}

/// Storage manager for per-user figure collections.
pub struct CollectionService<R: FigureRepository> {
    repo: R,
}

impl<R: FigureRepository> CollectionService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Adds a figure; reports a collision instead of overwriting.
    pub fn create(&self, user: &str, figure: &Figure) -> RepoResult<Outcome> {
        match self.repo.create(user, figure) {
            Ok(()) => {
                info!(
                    "event=figure_create module=service status=ok user={} id={}",
                    user, figure.id
                );
                Ok(Outcome::Created {
                    user: user.to_string(),
                    id: figure.id.clone(),
                })
            }
            Err(RepoError::AlreadyExists { user, id }) => {
                warn!(
                    "event=figure_create module=service status=collision user={} id={}",
                    user, id
                );
                Ok(Outcome::Collision { user, id })
            }
            Err(err) => Err(err),
        }
    }

    /// Replaces a stored figure as a whole.
    ///
    /// Callers fill unset fields with defaults before calling.
    pub fn update(&self, user: &str, figure: &Figure) -> RepoResult<Outcome> {
        match self.repo.update(user, figure) {
            Ok(()) => {
                info!(
                    "event=figure_update module=service status=ok user={} id={}",
                    user, figure.id
                );
                Ok(Outcome::Updated {
                    user: user.to_string(),
                    id: figure.id.clone(),
                })
            }
            Err(RepoError::NotFound { user, id }) => {
                warn!(
                    "event=figure_update module=service status=not_found user={} id={}",
                    user, id
                );
                Ok(Outcome::NotFound { user, id })
            }
            Err(err) => Err(err),
        }
    }

    pub fn remove(&self, user: &str, id: &str) -> RepoResult<Outcome> {
        match self.repo.remove(user, id) {
            Ok(()) => {
                info!(
                    "event=figure_remove module=service status=ok user={} id={}",
                    user, id
                );
                Ok(Outcome::Removed {
                    user: user.to_string(),
                    id: id.to_string(),
                })
            }
            Err(RepoError::NotFound { user, id }) => {
                warn!(
                    "event=figure_remove module=service status=not_found user={} id={}",
                    user, id
                );
                Ok(Outcome::NotFound { user, id })
            }
            Err(err) => Err(err),
        }
    }

    pub fn get(&self, user: &str, id: &str) -> RepoResult<Outcome> {
        match self.repo.get(user, id)? {
            Some(figure) => {
                info!(
                    "event=figure_get module=service status=ok user={} id={}",
                    user, id
                );
                Ok(Outcome::Found(FigureView::from_figure(&figure)))
            }
            None => {
                warn!(
                    "event=figure_get module=service status=not_found user={} id={}",
                    user, id
                );
                Ok(Outcome::NotFound {
                    user: user.to_string(),
                    id: id.to_string(),
                })
            }
        }
    }

    /// Lists a collection sorted by id.
    pub fn list(&self, user: &str) -> RepoResult<Outcome> {
        let Some(figures) = self.repo.list(user)? else {
            warn!(
                "event=collection_list module=service status=no_collection user={}",
                user
            );
            return Ok(Outcome::NoSuchCollection {
                user: user.to_string(),
            });
        };

        info!(
            "event=collection_list module=service status=ok user={} count={}",
            user,
            figures.len()
        );
        if figures.is_empty() {
            return Ok(Outcome::EmptyCollection {
                user: user.to_string(),
            });
        }

        Ok(Outcome::Listing {
            user: user.to_string(),
            figures: figures.iter().map(FigureView::from_figure).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;

    #[test]
    fn failure_classification() {
        let user = "alice".to_string();
        let id = "7".to_string();
        assert!(Outcome::Collision {
            user: user.clone(),
            id: id.clone()
        }
        .is_failure());
        assert!(Outcome::NoSuchCollection { user: user.clone() }.is_failure());
        assert!(!Outcome::EmptyCollection { user: user.clone() }.is_failure());
        assert!(!Outcome::Created { user, id }.is_failure());
    }

    #[test]
    fn empty_listing_message_names_user() {
        let outcome = Outcome::EmptyCollection {
            user: "bob".to_string(),
        };
        assert_eq!(outcome.message(), "La colección de bob está vacía.");
    }
}
