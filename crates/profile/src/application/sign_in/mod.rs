mod sign_in_command;
mod sign_in_use_case;

pub use sign_in_command::SignInCommand;
pub use sign_in_use_case::SignInUseCase;

#[cfg(test)]
mod sign_in_use_case_test;
