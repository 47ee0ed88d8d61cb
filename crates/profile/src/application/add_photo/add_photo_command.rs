// crates/profile/src/application/add_photo/add_photo_command.rs

use shared_kernel::domain::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct AddPhotoCommand {
    pub user_id: UserId,
    /// Liste affichée dans le formulaire au moment de l'ajout
    pub photo_urls: Vec<String>,
    pub bytes: Vec<u8>,
}
