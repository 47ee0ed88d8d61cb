mod get_profile_use_case;

pub use get_profile_use_case::GetProfileUseCase;
