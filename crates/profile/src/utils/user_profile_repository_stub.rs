// crates/profile/src/utils/user_profile_repository_stub.rs

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::UserProfile;
use crate::domain::ports::UserProfileRepository;

// --- STUB USER PROFILE REPOSITORY (document store en mémoire) ---
#[derive(Default)]
pub struct UserProfileRepositoryStub {
    pub profiles: Mutex<HashMap<UserId, UserProfile>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    pub create_calls: Mutex<u32>,
    pub update_calls: Mutex<u32>,
}

impl UserProfileRepositoryStub {
    pub fn with_profile(profile: UserProfile) -> Self {
        let stub = Self::default();
        stub.profiles.lock().unwrap().insert(profile.uid.clone(), profile);
        stub
    }

    pub fn failing(error: DomainError) -> Self {
        let stub = Self::default();
        *stub.error_to_return.lock().unwrap() = Some(error);
        stub
    }

    pub fn stored(&self, id: &UserId) -> Option<UserProfile> {
        self.profiles.lock().unwrap().get(id).cloned()
    }

    pub fn writes(&self) -> u32 {
        *self.create_calls.lock().unwrap() + *self.update_calls.lock().unwrap()
    }

    fn check_error(&self) -> Result<()> {
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserProfileRepository for UserProfileRepositoryStub {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>> {
        self.check_error()?;
        Ok(self.stored(id))
    }

    async fn create(&self, profile: &UserProfile) -> Result<()> {
        *self.create_calls.lock().unwrap() += 1;
        self.check_error()?;
        self.profiles.lock().unwrap().insert(profile.uid.clone(), profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &UserProfile) -> Result<()> {
        *self.update_calls.lock().unwrap() += 1;
        self.check_error()?;

        let mut profiles = self.profiles.lock().unwrap();
        let mut merged = profile.clone();
        // Écriture en fusion : la date de création d'origine est conservée
        if let Some(existing) = profiles.get(&profile.uid) {
            merged.created_at = existing.created_at;
        }
        profiles.insert(merged.uid.clone(), merged);
        Ok(())
    }
}
