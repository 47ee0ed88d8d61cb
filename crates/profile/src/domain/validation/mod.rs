mod profile_validator;
mod validation_config;

pub use profile_validator::{
    validate_age, validate_bio, validate_email, validate_name, validate_password,
    validate_password_confirmation, validate_photo_addition, validate_photo_count,
    validate_photo_removal, validate_profile_for_save, validate_profile_for_save_all,
    validate_registration, validate_sign_in, MAX_AGE, MIN_AGE, MIN_NAME_LENGTH,
};
pub use validation_config::ValidationConfig;
