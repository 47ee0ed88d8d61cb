// crates/profile/src/application/sign_in/sign_in_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{DomainError, Result};

use crate::application::sign_in::SignInCommand;
use crate::domain::ports::IdentityProvider;
use crate::domain::validation::{validate_sign_in, ValidationConfig};

pub struct SignInUseCase {
    identity: Arc<dyn IdentityProvider>,
    config: ValidationConfig,
}

impl SignInUseCase {
    pub fn new(identity: Arc<dyn IdentityProvider>, config: ValidationConfig) -> Self {
        Self { identity, config }
    }

    pub async fn execute(&self, command: SignInCommand) -> Result<UserId> {
        let email = validate_sign_in(&command.email, &command.password, &self.config)?;

        match self.identity.sign_in(&email, &command.password).await {
            Ok(user_id) => {
                tracing::info!(user_id = %user_id, "User signed in");
                Ok(user_id)
            }
            Err(DomainError::Authentication(kind)) => {
                tracing::warn!(?kind, "Sign-in refused by identity provider");
                Err(DomainError::Authentication(kind))
            }
            Err(e) => Err(e),
        }
    }
}
