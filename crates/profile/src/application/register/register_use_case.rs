// crates/profile/src/application/register/register_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::application::register::RegisterCommand;
use crate::domain::entities::UserProfile;
use crate::domain::ports::{IdentityProvider, UserProfileRepository};
use crate::domain::validation::{validate_registration, ValidationConfig};

pub struct RegisterUseCase {
    identity: Arc<dyn IdentityProvider>,
    repo: Arc<dyn UserProfileRepository>,
    clock: Arc<dyn Clock>,
    config: ValidationConfig,
}

impl RegisterUseCase {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        repo: Arc<dyn UserProfileRepository>,
        clock: Arc<dyn Clock>,
        config: ValidationConfig,
    ) -> Self {
        Self { identity, repo, clock, config }
    }

    pub async fn execute(&self, command: RegisterCommand) -> Result<UserId> {
        // 1. Règles locales : aucun appel réseau tant que la saisie est invalide
        let email = validate_registration(
            &command.email,
            &command.password,
            &command.confirm_password,
            &self.config,
        )
        .inspect_err(|e| tracing::warn!(field = %e.field, "Registration rejected: {}", e))?;

        // 2. Création du compte chez le fournisseur d'identité
        let user_id = self.identity.sign_up(&email, &command.password).await?;

        // 3. Document profil initial. Un échec ici n'annule pas l'inscription :
        // l'utilisateur complètera son profil depuis l'écran d'édition.
        let profile = UserProfile::new_initial(user_id.clone(), self.clock.now());
        if let Err(e) = self.repo.create(&profile).await {
            tracing::warn!(user_id = %user_id, "Initial profile creation failed: {}", e);
        }

        tracing::info!(user_id = %user_id, "User registered");
        Ok(user_id)
    }
}
