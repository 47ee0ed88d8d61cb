use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Erreur prête à être présentée : un code stable et un seul message lisible.
#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    const GENERIC_MESSAGE: &'static str = "Something went wrong. Please try again.";

    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Traduit une erreur du domaine pour l'écran appelant.
    ///
    /// `min_password_length` n'est lu que pour le message "weak password" du
    /// fournisseur d'identité.
    pub fn from_domain(error: DomainError, min_password_length: usize) -> Self {
        match error {
            // 1. Saisie invalide (400) : le message du champ est affiché tel quel
            DomainError::Validation(field_error) => Self {
                code: ErrorCode::ValidationFailed,
                message: field_error.message(),
                details: Some(serde_json::json!({
                    "field": field_error.field,
                    "reason": field_error.kind,
                })),
            },

            // 2. Refus du fournisseur d'identité (401)
            DomainError::Authentication(kind) => Self {
                code: ErrorCode::AuthenticationFailed,
                message: kind.user_message(min_password_length),
                details: Some(serde_json::json!({ "kind": kind })),
            },

            // 3. Entité introuvable (404)
            DomainError::NotFound { entity, id } => Self::new(
                ErrorCode::NotFound,
                format!("{entity} with id '{id}' not found"),
            ),

            // 4. Collaborateur externe indisponible (503), détail masqué
            DomainError::Infrastructure(reason) => {
                tracing::error!("Infrastructure error: {}", reason);
                Self::new(ErrorCode::ServiceUnavailable, Self::GENERIC_MESSAGE)
            }

            // 5. Erreurs techniques (500)
            other @ (DomainError::InvalidConfiguration { .. } | DomainError::Internal(_)) => {
                tracing::error!("Unexpected domain error: {:?}", other);
                Self::new(ErrorCode::InternalError, Self::GENERIC_MESSAGE)
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
