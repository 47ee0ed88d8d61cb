// crates/profile/src/domain/validation/validation_config.rs

use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};

/// Bornes configurables du jeu de règles (lecture seule).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub min_password_length: usize,
    pub max_bio_length: usize,
    pub min_photos: usize,
    pub max_photos: usize,
}

impl ValidationConfig {
    pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
    pub const DEFAULT_MAX_BIO_LENGTH: usize = 500;
    pub const DEFAULT_MIN_PHOTOS: usize = 1;
    pub const DEFAULT_MAX_PHOTOS: usize = 6;

    pub fn try_new(
        min_password_length: usize,
        max_bio_length: usize,
        min_photos: usize,
        max_photos: usize,
    ) -> Result<Self> {
        let config = Self {
            min_password_length,
            max_bio_length,
            min_photos,
            max_photos,
        };
        config.check()?;
        Ok(config)
    }

    /// Surcharge des valeurs par défaut via `PROFILE_*`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let read = |key: &'static str, default: usize| -> Result<usize> {
            match lookup(key) {
                None => Ok(default),
                Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                    DomainError::InvalidConfiguration {
                        key,
                        reason: format!("'{raw}' is not a non-negative integer"),
                    }
                }),
            }
        };

        Self::try_new(
            read("PROFILE_MIN_PASSWORD_LENGTH", Self::DEFAULT_MIN_PASSWORD_LENGTH)?,
            read("PROFILE_MAX_BIO_LENGTH", Self::DEFAULT_MAX_BIO_LENGTH)?,
            read("PROFILE_MIN_PHOTOS", Self::DEFAULT_MIN_PHOTOS)?,
            read("PROFILE_MAX_PHOTOS", Self::DEFAULT_MAX_PHOTOS)?,
        )
    }

    /// Cohérence interne. Une config invalide est une erreur de programmation.
    pub fn check(&self) -> Result<()> {
        if self.min_password_length == 0 {
            return Err(DomainError::InvalidConfiguration {
                key: "min_password_length",
                reason: "must be a positive integer".into(),
            });
        }

        if self.max_photos == 0 {
            return Err(DomainError::InvalidConfiguration {
                key: "max_photos",
                reason: "must be a positive integer".into(),
            });
        }

        if self.min_photos > self.max_photos {
            return Err(DomainError::InvalidConfiguration {
                key: "min_photos",
                reason: format!(
                    "min_photos ({}) exceeds max_photos ({})",
                    self.min_photos, self.max_photos
                ),
            });
        }

        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_password_length: Self::DEFAULT_MIN_PASSWORD_LENGTH,
            max_bio_length: Self::DEFAULT_MAX_BIO_LENGTH,
            min_photos: Self::DEFAULT_MIN_PHOTOS,
            max_photos: Self::DEFAULT_MAX_PHOTOS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ValidationConfig::default();
        assert_eq!(config.min_password_length, 6);
        assert_eq!(config.max_bio_length, 500);
        assert_eq!(config.min_photos, 1);
        assert_eq!(config.max_photos, 6);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_incoherent_bounds_are_rejected() {
        assert!(matches!(
            ValidationConfig::try_new(0, 500, 1, 6),
            Err(DomainError::InvalidConfiguration { key: "min_password_length", .. })
        ));
        assert!(matches!(
            ValidationConfig::try_new(6, 500, 1, 0),
            Err(DomainError::InvalidConfiguration { key: "max_photos", .. })
        ));
        assert!(matches!(
            ValidationConfig::try_new(6, 500, 4, 3),
            Err(DomainError::InvalidConfiguration { key: "min_photos", .. })
        ));
    }

    #[test]
    fn test_lookup_falls_back_to_defaults() {
        let config = ValidationConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = ValidationConfig::from_lookup(lookup_from(&[
            ("PROFILE_MIN_PASSWORD_LENGTH", "8"),
            ("PROFILE_MAX_PHOTOS", " 9 "),
        ]))
        .unwrap();

        assert_eq!(config.min_password_length, 8);
        assert_eq!(config.max_photos, 9);
        assert_eq!(config.max_bio_length, 500);
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        let result = ValidationConfig::from_lookup(lookup_from(&[("PROFILE_MAX_BIO_LENGTH", "lots")]));
        assert!(matches!(
            result,
            Err(DomainError::InvalidConfiguration { key: "PROFILE_MAX_BIO_LENGTH", .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ValidationConfig = serde_json::from_str(r#"{ "max_photos": 4 }"#).unwrap();
        assert_eq!(config.max_photos, 4);
        assert_eq!(config.min_photos, 1);
    }
}
