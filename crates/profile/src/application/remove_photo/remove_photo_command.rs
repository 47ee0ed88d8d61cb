// crates/profile/src/application/remove_photo/remove_photo_command.rs

#[derive(Debug, Clone)]
pub struct RemovePhotoCommand {
    pub photo_urls: Vec<String>,
    pub index: usize,
}
