// crates/profile/src/application/get_profile/get_profile_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::entities::UserProfile;
use crate::domain::ports::UserProfileRepository;

pub struct GetProfileUseCase {
    repo: Arc<dyn UserProfileRepository>,
}

impl GetProfileUseCase {
    pub fn new(repo: Arc<dyn UserProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> Result<UserProfile> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or_not_found(user_id)
    }
}
