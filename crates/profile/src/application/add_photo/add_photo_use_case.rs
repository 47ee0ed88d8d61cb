// crates/profile/src/application/add_photo/add_photo_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;

use crate::application::add_photo::AddPhotoCommand;
use crate::domain::ports::PhotoStorage;
use crate::domain::validation::{validate_photo_addition, ValidationConfig};

pub struct AddPhotoUseCase {
    storage: Arc<dyn PhotoStorage>,
    clock: Arc<dyn Clock>,
    config: ValidationConfig,
}

impl AddPhotoUseCase {
    pub fn new(
        storage: Arc<dyn PhotoStorage>,
        clock: Arc<dyn Clock>,
        config: ValidationConfig,
    ) -> Self {
        Self { storage, clock, config }
    }

    /// Retourne la nouvelle liste, photo ajoutée en dernière position.
    pub async fn execute(&self, command: AddPhotoCommand) -> Result<Vec<String>> {
        validate_photo_addition(command.photo_urls.len(), &self.config)?;

        let photo_id = format!("photo_{}", self.clock.now().timestamp_millis());
        let url = self
            .storage
            .upload(&command.user_id, &photo_id, command.bytes)
            .await
            .inspect_err(|e| tracing::warn!(user_id = %command.user_id, "Photo upload failed: {}", e))?;

        tracing::info!(user_id = %command.user_id, photo_id = %photo_id, "Photo uploaded");

        let mut photo_urls = command.photo_urls;
        photo_urls.push(url.into());
        Ok(photo_urls)
    }
}
