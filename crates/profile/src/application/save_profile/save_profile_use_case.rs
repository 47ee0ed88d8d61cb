// crates/profile/src/application/save_profile/save_profile_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::errors::{internal_err, DomainError, FieldError, Result};

use crate::application::save_profile::SaveProfileCommand;
use crate::domain::entities::UserProfile;
use crate::domain::ports::UserProfileRepository;
use crate::domain::validation::{validate_profile_for_save, ValidationConfig};

pub struct SaveProfileUseCase {
    repo: Arc<dyn UserProfileRepository>,
    clock: Arc<dyn Clock>,
    config: ValidationConfig,
}

impl SaveProfileUseCase {
    pub fn new(
        repo: Arc<dyn UserProfileRepository>,
        clock: Arc<dyn Clock>,
        config: ValidationConfig,
    ) -> Self {
        Self { repo, clock, config }
    }

    pub async fn execute(&self, command: SaveProfileCommand) -> Result<UserProfile> {
        // 1. Validation (nom -> âge -> bio -> photos), première erreur seulement
        let validated = validate_profile_for_save(&command.profile, &self.config)
            .map_err(first_blocking_error)
            .inspect_err(|e| {
                tracing::warn!(user_id = %command.user_id, "Profile save rejected: {}", e)
            })?;

        let now = self.clock.now();

        // 2. Création ou mise à jour selon l'existence du document
        match self.repo.find_by_id(&command.user_id).await? {
            Some(mut profile) => {
                // Idempotence : aucune écriture si rien n'a changé
                if profile.apply(validated, now) {
                    self.repo.update(&profile).await?;
                    tracing::info!(user_id = %profile.uid, "Profile updated");
                }
                Ok(profile)
            }
            None => {
                let mut profile = UserProfile::new_initial(command.user_id.clone(), now);
                profile.apply(validated, now);
                self.repo.create(&profile).await?;
                tracing::info!(user_id = %profile.uid, "Profile created");
                Ok(profile)
            }
        }
    }
}

fn first_blocking_error(errors: Vec<FieldError>) -> DomainError {
    errors
        .into_iter()
        .next()
        .map(DomainError::from)
        .unwrap_or_else(|| internal_err("profile validation failed without a field error"))
}
