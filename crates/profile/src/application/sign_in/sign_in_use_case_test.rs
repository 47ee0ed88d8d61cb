use std::sync::Arc;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{AppError, AuthErrorKind, DomainError, ErrorCode, Field};

use crate::application::sign_in::{SignInCommand, SignInUseCase};
use crate::domain::validation::ValidationConfig;
use crate::utils::IdentityProviderStub;

fn command(email: &str, password: &str) -> SignInCommand {
    SignInCommand { email: email.into(), password: password.into() }
}

#[tokio::test]
async fn test_sign_in_success() {
    let identity = Arc::new(IdentityProviderStub::new("uid7"));
    let use_case = SignInUseCase::new(identity.clone(), ValidationConfig::default());

    let result = use_case.execute(command(" sam@example.com", "secret1")).await;

    assert_eq!(result, Ok(UserId::new_unchecked("uid7")));
    assert_eq!(identity.calls.lock().unwrap()[0].0, "sam@example.com");
}

#[tokio::test]
async fn test_sign_in_short_password_is_rejected_locally() {
    let identity = Arc::new(IdentityProviderStub::new("uid7"));
    let use_case = SignInUseCase::new(identity.clone(), ValidationConfig::default());

    let result = use_case.execute(command("sam@example.com", "abc")).await;

    let err = result.unwrap_err();
    assert_eq!(err.field_error().map(|e| e.field), Some(Field::Password));
    assert_eq!(identity.call_count(), 0);
}

#[tokio::test]
async fn test_wrong_password_maps_to_generic_message() {
    let identity = Arc::new(IdentityProviderStub::failing(DomainError::Authentication(
        AuthErrorKind::WrongPassword,
    )));
    let config = ValidationConfig::default();
    let use_case = SignInUseCase::new(identity, config);

    let err = use_case.execute(command("sam@example.com", "secret1")).await.unwrap_err();
    let app = AppError::from_domain(err, config.min_password_length);

    assert_eq!(app.code, ErrorCode::AuthenticationFailed);
    assert_eq!(app.message, "Invalid email or password.");
}

#[tokio::test]
async fn test_provider_outage_is_propagated() {
    let identity = Arc::new(IdentityProviderStub::failing(DomainError::Infrastructure(
        "timeout".into(),
    )));
    let use_case = SignInUseCase::new(identity, ValidationConfig::default());

    let result = use_case.execute(command("sam@example.com", "secret1")).await;

    assert!(matches!(result, Err(DomainError::Infrastructure(_))));
}
