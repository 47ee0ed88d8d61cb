// crates/profile/src/application/delete_photo/delete_photo_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::ports::PhotoStorage;

/// Suppression de l'objet stocké, une fois la photo retirée du profil.
pub struct DeletePhotoUseCase {
    storage: Arc<dyn PhotoStorage>,
}

impl DeletePhotoUseCase {
    pub fn new(storage: Arc<dyn PhotoStorage>) -> Self {
        Self { storage }
    }

    pub async fn execute(&self, user_id: &UserId, photo_id: &str) -> Result<()> {
        self.storage
            .delete(user_id, photo_id)
            .await
            .inspect_err(|e| tracing::warn!(user_id = %user_id, photo_id, "Photo delete failed: {}", e))?;

        tracing::info!(user_id = %user_id, photo_id, "Photo deleted");
        Ok(())
    }
}
