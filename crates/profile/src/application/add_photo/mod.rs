mod add_photo_command;
mod add_photo_use_case;

pub use add_photo_command::AddPhotoCommand;
pub use add_photo_use_case::AddPhotoUseCase;
