// crates/profile/src/domain/ports/user_profile_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::entities::UserProfile;

/// Document store des profils (collection `users`, clé = `uid`).
#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>>;

    async fn create(&self, profile: &UserProfile) -> Result<()>;

    /// Écriture en fusion : `created_at` n'est jamais réécrit.
    async fn update(&self, profile: &UserProfile) -> Result<()>;
}
