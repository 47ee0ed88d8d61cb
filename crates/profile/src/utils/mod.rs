mod identity_provider_stub;
mod photo_storage_stub;
mod user_profile_repository_stub;

pub use identity_provider_stub::IdentityProviderStub;
pub use photo_storage_stub::PhotoStorageStub;
pub use user_profile_repository_stub::UserProfileRepositoryStub;
