// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;
use crate::errors::{AuthErrorKind, FieldError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Saisie utilisateur invalide, toujours récupérable
    #[error("Validation failed for field '{field}': {0}", field = .0.field)]
    Validation(#[from] FieldError),

    /// Configuration incohérente (erreur de programmation, pas de saisie)
    #[error("Invalid configuration for '{key}': {reason}")]
    InvalidConfiguration {
        key: &'static str,
        reason: String,
    },

    /// Refus du fournisseur d'identité
    #[error("Authentication failed: {0}")]
    Authentication(AuthErrorKind),

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    /// Erreur liée à un collaborateur externe (document store, stockage fichiers)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}
