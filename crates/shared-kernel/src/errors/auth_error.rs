// crates/shared-kernel/src/errors/auth_error.rs

use serde::Serialize;
use thiserror::Error;

/// Échecs remontés par le fournisseur d'identité.
///
/// Les adaptateurs traduisent le code du fournisseur une seule fois via
/// [`AuthErrorKind::from_provider_code`]; le reste du code ne fait que du `match`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthErrorKind {
    #[error("email already in use")]
    EmailAlreadyInUse,
    #[error("invalid email")]
    InvalidEmail,
    #[error("weak password")]
    WeakPassword,
    #[error("user not found")]
    UserNotFound,
    #[error("wrong password")]
    WrongPassword,
    #[error("invalid credential")]
    InvalidCredential,
    #[error("too many requests")]
    TooManyRequests,
    #[error("unknown identity provider failure")]
    Unknown,
}

impl AuthErrorKind {
    /// Correspondance exacte sur les codes `auth/*` du fournisseur.
    pub fn from_provider_code(code: &str) -> Self {
        match code {
            "auth/email-already-in-use" => Self::EmailAlreadyInUse,
            "auth/invalid-email" => Self::InvalidEmail,
            "auth/weak-password" => Self::WeakPassword,
            "auth/user-not-found" => Self::UserNotFound,
            "auth/wrong-password" => Self::WrongPassword,
            "auth/invalid-credential" => Self::InvalidCredential,
            "auth/too-many-requests" => Self::TooManyRequests,
            _ => Self::Unknown,
        }
    }

    /// Message affiché par les écrans d'inscription et de connexion.
    pub fn user_message(&self, min_password_length: usize) -> String {
        match self {
            Self::EmailAlreadyInUse => "An account with this email already exists.".into(),
            Self::InvalidEmail => "Please enter a valid email address.".into(),
            Self::WeakPassword => {
                format!("Password must be at least {min_password_length} characters.")
            }
            // On ne révèle pas lequel des deux est faux
            Self::UserNotFound | Self::WrongPassword | Self::InvalidCredential => {
                "Invalid email or password.".into()
            }
            Self::TooManyRequests => "Too many attempts. Please try again later.".into(),
            Self::Unknown => "Something went wrong. Please try again.".into(),
        }
    }
}
