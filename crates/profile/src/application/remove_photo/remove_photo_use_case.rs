// crates/profile/src/application/remove_photo/remove_photo_use_case.rs

use shared_kernel::errors::{DomainError, Result};

use crate::application::remove_photo::RemovePhotoCommand;
use crate::domain::validation::{validate_photo_removal, ValidationConfig};

/// Retrait d'une photo de la liste du formulaire.
/// L'objet stocké n'est pas supprimé ici.
pub struct RemovePhotoUseCase {
    config: ValidationConfig,
}

impl RemovePhotoUseCase {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, command: RemovePhotoCommand) -> Result<Vec<String>> {
        validate_photo_removal(command.photo_urls.len(), &self.config)?;

        if command.index >= command.photo_urls.len() {
            return Err(DomainError::NotFound {
                entity: "Photo",
                id: command.index.to_string(),
            });
        }

        let mut photo_urls = command.photo_urls;
        photo_urls.remove(command.index);
        Ok(photo_urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_kernel::errors::{Field, FieldError, FieldErrorKind};

    fn urls(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| format!("https://cdn.example.com/{n}")).collect()
    }

    #[test]
    fn test_remove_keeps_order() {
        let use_case = RemovePhotoUseCase::new(ValidationConfig::default());

        let result = use_case
            .execute(RemovePhotoCommand { photo_urls: urls(&["a", "b", "c"]), index: 1 })
            .unwrap();

        assert_eq!(result, urls(&["a", "c"]));
    }

    #[test]
    fn test_removing_primary_promotes_next() {
        let use_case = RemovePhotoUseCase::new(ValidationConfig::default());

        let result = use_case
            .execute(RemovePhotoCommand { photo_urls: urls(&["a", "b"]), index: 0 })
            .unwrap();

        assert_eq!(result, urls(&["b"]));
    }

    #[test]
    fn test_last_photo_is_kept() {
        let use_case = RemovePhotoUseCase::new(ValidationConfig::default());

        let result = use_case.execute(RemovePhotoCommand { photo_urls: urls(&["a"]), index: 0 });

        assert_eq!(
            result,
            Err(DomainError::Validation(FieldError::new(
                Field::Photos,
                FieldErrorKind::TooFew { min: 1 }
            )))
        );
    }

    #[test]
    fn test_out_of_range_index() {
        let use_case = RemovePhotoUseCase::new(ValidationConfig::default());

        let result = use_case.execute(RemovePhotoCommand { photo_urls: urls(&["a", "b"]), index: 5 });

        assert!(matches!(result, Err(DomainError::NotFound { entity: "Photo", .. })));
    }
}
