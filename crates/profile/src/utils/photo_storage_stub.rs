// crates/profile/src/utils/photo_storage_stub.rs

use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::domain::value_objects::{Url, UserId};
use shared_kernel::errors::{DomainError, Result};

use crate::domain::ports::{photo_path, PhotoStorage};

// --- STUB PHOTO STORAGE ---
#[derive(Default)]
pub struct PhotoStorageStub {
    pub uploaded: Mutex<Vec<String>>,
    pub deleted: Mutex<Vec<String>>,
    pub error_to_return: Mutex<Option<DomainError>>,
}

impl PhotoStorageStub {
    pub const BASE_URL: &'static str = "https://storage.example.com";

    pub fn failing(error: DomainError) -> Self {
        let stub = Self::default();
        *stub.error_to_return.lock().unwrap() = Some(error);
        stub
    }
}

#[async_trait]
impl PhotoStorage for PhotoStorageStub {
    async fn upload(&self, user_id: &UserId, photo_id: &str, _bytes: Vec<u8>) -> Result<Url> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        let path = photo_path(user_id, photo_id);
        self.uploaded.lock().unwrap().push(path.clone());
        Url::try_new(format!("{}/{}", Self::BASE_URL, path))
    }

    async fn delete(&self, user_id: &UserId, photo_id: &str) -> Result<()> {
        self.deleted.lock().unwrap().push(photo_path(user_id, photo_id));
        Ok(())
    }
}
