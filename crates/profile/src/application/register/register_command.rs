// crates/profile/src/application/register/register_command.rs

use serde::Deserialize;

/// Saisie brute du formulaire d'inscription.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterCommand {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
