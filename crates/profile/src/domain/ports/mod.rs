mod identity_provider;
mod photo_storage;
mod user_profile_repository;

pub use identity_provider::IdentityProvider;
pub use photo_storage::{photo_path, PhotoStorage};
pub use user_profile_repository::UserProfileRepository;
