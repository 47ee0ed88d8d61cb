// crates/profile/src/application/sign_in/sign_in_command.rs

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SignInCommand {
    pub email: String,
    pub password: String,
}
