// crates/profile/src/domain/ports/identity_provider.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

/// Service d'authentification externe.
///
/// Les refus sont retournés en `DomainError::Authentication(AuthErrorKind)`.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<UserId>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserId>;
    async fn sign_out(&self, user_id: &UserId) -> Result<()>;
}
