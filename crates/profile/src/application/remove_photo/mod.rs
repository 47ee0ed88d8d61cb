mod remove_photo_command;
mod remove_photo_use_case;

pub use remove_photo_command::RemovePhotoCommand;
pub use remove_photo_use_case::RemovePhotoUseCase;
