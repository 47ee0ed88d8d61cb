// crates/profile/src/domain/validation/profile_validator.rs

//! Jeu de règles unique pour l'inscription, la connexion et l'édition du profil.
//!
//! Fonctions pures : aucune I/O, aucun état, même entrée => même résultat.

use std::num::IntErrorKind;
use std::sync::LazyLock;
use regex::Regex;
use shared_kernel::errors::{Field, FieldError, FieldErrorKind};

use crate::domain::models::{CandidateProfile, ValidatedProfile};
use crate::domain::validation::ValidationConfig;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 120;

// local@domaine.tld : un seul '@', au moins un point côté domaine, aucun blanc
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

type FieldResult<T> = std::result::Result<T, FieldError>;

pub fn validate_email(raw: &str) -> FieldResult<String> {
    let email = raw.trim();

    if email.is_empty() {
        return Err(FieldError::empty(Field::Email));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(FieldError::invalid_format(Field::Email));
    }

    Ok(email.to_string())
}

/// Le mot de passe n'est jamais normalisé : les espaces comptent.
pub fn validate_password(raw: &str, min_length: usize) -> FieldResult<()> {
    if raw.is_empty() {
        return Err(FieldError::empty(Field::Password));
    }

    if raw.chars().count() < min_length {
        return Err(FieldError::new(
            Field::Password,
            FieldErrorKind::TooShort { min: min_length },
        ));
    }

    Ok(())
}

pub fn validate_password_confirmation(password: &str, confirm: &str) -> FieldResult<()> {
    if password != confirm {
        return Err(FieldError::new(Field::ConfirmPassword, FieldErrorKind::Mismatch));
    }
    Ok(())
}

pub fn validate_name(raw: &str) -> FieldResult<String> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(FieldError::empty(Field::Name));
    }

    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(FieldError::new(
            Field::Name,
            FieldErrorKind::TooShort { min: MIN_NAME_LENGTH },
        ));
    }

    Ok(name.to_string())
}

/// Parsing strict de la chaîne entière : "25abc" est refusé.
pub fn validate_age(raw: &str) -> FieldResult<u32> {
    let text = raw.trim();

    if text.is_empty() {
        return Err(FieldError::empty(Field::Age));
    }

    let out_of_range = FieldError::new(
        Field::Age,
        FieldErrorKind::OutOfRange { min: MIN_AGE, max: MAX_AGE },
    );

    let age = match text.parse::<i64>() {
        Ok(value) => value,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(out_of_range);
        }
        Err(_) => return Err(FieldError::new(Field::Age, FieldErrorKind::NotANumber)),
    };

    if age < i64::from(MIN_AGE) || age > i64::from(MAX_AGE) {
        return Err(out_of_range);
    }

    // Borné par MAX_AGE juste au-dessus
    Ok(age as u32)
}

/// Une bio vide est toujours valide. La longueur est mesurée en caractères.
pub fn validate_bio(raw: &str, max_length: usize) -> FieldResult<()> {
    if raw.chars().count() > max_length {
        return Err(FieldError::new(
            Field::Bio,
            FieldErrorKind::TooLong { max: max_length },
        ));
    }
    Ok(())
}

pub fn validate_photo_count(count: usize, min: usize, max: usize) -> FieldResult<()> {
    if count < min {
        return Err(FieldError::new(Field::Photos, FieldErrorKind::TooFew { min }));
    }

    if count > max {
        return Err(FieldError::new(Field::Photos, FieldErrorKind::TooMany { max }));
    }

    Ok(())
}

/// Garde de l'étape d'ajout : même borne haute que `validate_photo_count`.
pub fn validate_photo_addition(current: usize, config: &ValidationConfig) -> FieldResult<()> {
    if current >= config.max_photos {
        return Err(FieldError::new(
            Field::Photos,
            FieldErrorKind::TooMany { max: config.max_photos },
        ));
    }
    Ok(())
}

/// Garde de l'étape de retrait : la dernière photo ne peut jamais être retirée.
pub fn validate_photo_removal(current: usize, config: &ValidationConfig) -> FieldResult<()> {
    let min = config.min_photos.max(1);

    if current <= min {
        return Err(FieldError::new(Field::Photos, FieldErrorKind::TooFew { min }));
    }
    Ok(())
}

/// Inscription : email -> mot de passe -> confirmation. Retourne l'email nettoyé.
pub fn validate_registration(
    email: &str,
    password: &str,
    confirm_password: &str,
    config: &ValidationConfig,
) -> FieldResult<String> {
    let email = validate_email(email)?;
    validate_password(password, config.min_password_length)?;
    validate_password_confirmation(password, confirm_password)?;
    Ok(email)
}

/// Connexion : email -> mot de passe. Retourne l'email nettoyé.
pub fn validate_sign_in(
    email: &str,
    password: &str,
    config: &ValidationConfig,
) -> FieldResult<String> {
    let email = validate_email(email)?;
    validate_password(password, config.min_password_length)?;
    Ok(email)
}

/// Sauvegarde du profil : nom -> âge -> bio -> photos.
///
/// Seule la première erreur est retournée (le formulaire n'affiche qu'un message).
pub fn validate_profile_for_save(
    candidate: &CandidateProfile,
    config: &ValidationConfig,
) -> Result<ValidatedProfile, Vec<FieldError>> {
    check_profile(candidate, config).map_err(|mut errors| {
        errors.truncate(1);
        errors
    })
}

/// Variante qui collecte toutes les erreurs, dans le même ordre d'évaluation.
pub fn validate_profile_for_save_all(
    candidate: &CandidateProfile,
    config: &ValidationConfig,
) -> Result<ValidatedProfile, Vec<FieldError>> {
    check_profile(candidate, config)
}

fn check_profile(
    candidate: &CandidateProfile,
    config: &ValidationConfig,
) -> Result<ValidatedProfile, Vec<FieldError>> {
    let name = validate_name(&candidate.name);
    let age = validate_age(&candidate.age);
    let bio = validate_bio(&candidate.bio, config.max_bio_length);
    let photos = validate_photo_count(
        candidate.photo_urls.len(),
        config.min_photos,
        config.max_photos,
    );

    match (name, age, bio, photos) {
        (Ok(name), Ok(age), Ok(()), Ok(())) => Ok(ValidatedProfile::new(
            name,
            age,
            candidate.bio.trim().to_string(),
            candidate.gender,
            candidate.looking_for,
            candidate.city.trim().to_string(),
            candidate.photo_urls.clone(),
        )),
        (name, age, bio, photos) => Err([name.err(), age.err(), bio.err(), photos.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}
