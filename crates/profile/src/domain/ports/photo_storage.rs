// crates/profile/src/domain/ports/photo_storage.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::{Url, UserId};
use shared_kernel::errors::Result;

/// Stockage fichiers des photos de profil.
#[async_trait]
pub trait PhotoStorage: Send + Sync {
    /// Téléverse l'image et retourne son URL de téléchargement.
    async fn upload(&self, user_id: &UserId, photo_id: &str, bytes: Vec<u8>) -> Result<Url>;

    async fn delete(&self, user_id: &UserId, photo_id: &str) -> Result<()>;
}

/// Chemin de l'objet dans le bucket
pub fn photo_path(user_id: &UserId, photo_id: &str) -> String {
    format!("users/{}/photos/{}", user_id, photo_id)
}
