mod register_command;
mod register_use_case;

pub use register_command::RegisterCommand;
pub use register_use_case::RegisterUseCase;
