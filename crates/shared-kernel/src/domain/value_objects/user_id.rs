// crates/shared-kernel/src/domain/value_objects/user_id.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Field, FieldError, FieldErrorKind, Result};

/// Identifiant opaque attribué par le fournisseur d'identité.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub const MAX_LENGTH: usize = 128;

    /// Validation et création depuis une String (entrée externe)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let id = Self(value.into().trim().to_string());
        id.validate()?;
        Ok(id)
    }

    /// Reconstruction rapide (document déjà persisté)
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for UserId {
    fn validate(&self) -> Result<()> {
        if self.0.is_empty() {
            return Err(FieldError::empty(Field::UserId).into());
        }

        if self.0.len() > Self::MAX_LENGTH {
            return Err(FieldError::new(
                Field::UserId,
                FieldErrorKind::TooLong { max: Self::MAX_LENGTH },
            )
            .into());
        }

        // Utilisé tel quel dans les chemins de stockage (users/{uid}/photos)
        if !self.0.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(FieldError::invalid_format(Field::UserId).into());
        }

        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for UserId {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
