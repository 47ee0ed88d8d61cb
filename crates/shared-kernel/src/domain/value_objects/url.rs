// crates/shared_kernel/src/domain/value_objects/url.rs

use std::fmt;
use serde::{Deserialize, Serialize};
use url::Url as LibUrl;
use crate::domain::value_objects::ValueObject;
use crate::errors::{Field, FieldError, Result};

/// Localisateur d'une ressource déjà téléversée (ex: photo de profil).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Url(String);

impl Url {
    /// Constructeur sécurisé (retour du stockage fichiers)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw_string = value.into();

        // 1. Parsing via la crate 'url' pour normalisation syntaxique
        let parsed = LibUrl::parse(raw_string.trim())
            .map_err(|_| FieldError::invalid_format(Field::PhotoUrl))?;

        // 2. Validation métier stricte
        let url = Self(parsed.to_string());
        url.validate()?;

        Ok(url)
    }

    /// Reconstruction rapide (document déjà persisté)
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Url {
    fn validate(&self) -> Result<()> {
        let parsed =
            LibUrl::parse(&self.0).map_err(|_| FieldError::invalid_format(Field::PhotoUrl))?;

        // On restreint les protocoles
        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(FieldError::invalid_format(Field::PhotoUrl).into());
        }

        Ok(())
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for Url {
    type Error = crate::errors::DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{DomainError, FieldErrorKind};

    #[test]
    fn test_url_happy_path() {
        let url = Url::try_new("https://cdn.example.com/users/u1/photos/photo_1").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/users/u1/photos/photo_1");
    }

    #[test]
    fn test_url_rejects_other_schemes() {
        let result = Url::try_new("file:///etc/passwd");
        assert!(matches!(
            result,
            Err(DomainError::Validation(FieldError { field: Field::PhotoUrl, kind: FieldErrorKind::InvalidFormat }))
        ));
    }

    #[test]
    fn test_url_rejects_garbage() {
        assert!(Url::try_new("not a url").is_err());
    }

    #[test]
    fn test_new_unchecked_skips_validation() {
        let url = Url::new_unchecked("legacy://photo");
        assert_eq!(url.as_str(), "legacy://photo");
        assert!(url.validate().is_err());
    }
}
