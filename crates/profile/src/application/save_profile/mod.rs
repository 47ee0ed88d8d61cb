mod save_profile_command;
mod save_profile_use_case;

pub use save_profile_command::SaveProfileCommand;
pub use save_profile_use_case::SaveProfileUseCase;
