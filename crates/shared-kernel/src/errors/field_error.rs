// crates/shared-kernel/src/errors/field_error.rs

use serde::Serialize;
use std::fmt;

/// Champ de formulaire auquel une erreur de validation est rattachée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    Name,
    Age,
    Bio,
    Gender,
    LookingFor,
    Photos,
    PhotoUrl,
    UserId,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
            Self::Name => "name",
            Self::Age => "age",
            Self::Bio => "bio",
            Self::Gender => "gender",
            Self::LookingFor => "looking_for",
            Self::Photos => "photos",
            Self::PhotoUrl => "photo_url",
            Self::UserId => "user_id",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Password confirmation",
            Self::Name => "Name",
            Self::Age => "Age",
            Self::Bio => "Bio",
            Self::Gender => "Gender",
            Self::LookingFor => "Looking for",
            Self::Photos => "Photos",
            Self::PhotoUrl => "Photo URL",
            Self::UserId => "User ID",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nature de la règle violée. Les bornes sont portées pour le formatage du message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldErrorKind {
    EmptyField,
    InvalidFormat,
    TooShort { min: usize },
    TooLong { max: usize },
    OutOfRange { min: u32, max: u32 },
    NotANumber,
    TooFew { min: usize },
    TooMany { max: usize },
    Mismatch,
}

/// Échec de validation attendu, affichable tel quel à l'utilisateur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldError {
    pub field: Field,
    #[serde(flatten)]
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: Field, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    pub fn empty(field: Field) -> Self {
        Self::new(field, FieldErrorKind::EmptyField)
    }

    pub fn invalid_format(field: Field) -> Self {
        Self::new(field, FieldErrorKind::InvalidFormat)
    }

    /// Message unique présenté par le formulaire.
    pub fn message(&self) -> String {
        use FieldErrorKind::*;

        match (self.field, self.kind) {
            (Field::Email, InvalidFormat) => "Please enter a valid email address".into(),
            (Field::ConfirmPassword, Mismatch) => "Passwords do not match".into(),
            (Field::Age, NotANumber) => "Age must be a number".into(),
            (Field::Age, OutOfRange { min, max }) => {
                format!("You must be between {min} and {max} years old")
            }
            (Field::Photos, TooFew { min }) => {
                let noun = if min == 1 { "photo" } else { "photos" };
                format!("Add at least {min} {noun}")
            }
            (Field::Photos, TooMany { max }) => format!("Maximum {max} photos allowed"),

            (field, EmptyField) => format!("{} is required", field.label()),
            (field, InvalidFormat) => format!("{} is invalid", field.label()),
            (field, TooShort { min }) => {
                format!("{} must be at least {min} characters", field.label())
            }
            (field, TooLong { max }) => {
                format!("{} must be at most {max} characters", field.label())
            }
            (field, OutOfRange { min, max }) => {
                format!("{} must be between {min} and {max}", field.label())
            }
            (field, NotANumber) => format!("{} must be a number", field.label()),
            (field, TooFew { min }) => format!("{} requires at least {min} items", field.label()),
            (field, TooMany { max }) => format!("{} allows at most {max} items", field.label()),
            (field, Mismatch) => format!("{} does not match", field.label()),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for FieldError {}
