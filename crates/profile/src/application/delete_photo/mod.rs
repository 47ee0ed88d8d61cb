mod delete_photo_use_case;

pub use delete_photo_use_case::DeletePhotoUseCase;
