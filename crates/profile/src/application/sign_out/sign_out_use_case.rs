// crates/profile/src/application/sign_out/sign_out_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::ports::IdentityProvider;

pub struct SignOutUseCase {
    identity: Arc<dyn IdentityProvider>,
}

impl SignOutUseCase {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    pub async fn execute(&self, user_id: &UserId) -> Result<()> {
        self.identity.sign_out(user_id).await?;
        tracing::info!(user_id = %user_id, "User signed out");
        Ok(())
    }
}
