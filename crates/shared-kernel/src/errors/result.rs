use crate::errors::DomainError;

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : Value objects, Entités, Use Cases, Ports.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Helper pour les erreurs de type "Internal" rapides
pub fn internal_err(msg: impl Into<String>) -> DomainError {
    DomainError::Internal(msg.into())
}
