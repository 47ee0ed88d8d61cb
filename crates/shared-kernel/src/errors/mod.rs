// crates/shared-kernel/src/errors/mod.rs

mod app_error;
mod auth_error;
mod error;
mod error_code;
mod field_error;
mod result;

pub use app_error::AppError;
pub use auth_error::AuthErrorKind;
pub use error::DomainError;
pub use error_code::ErrorCode;
pub use field_error::{Field, FieldError, FieldErrorKind};
pub use result::{internal_err, Result};
