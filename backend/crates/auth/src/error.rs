//! Auth Error Types
//!
//! Auth-specific error variants that convert into the unified
//! `kernel::error::AppError` at the HTTP boundary.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required input was absent or empty
    #[error("Missing param: {0}")]
    MissingParam(&'static str),

    /// An input was present but malformed
    #[error("Invalid param: {0}")]
    InvalidParam(&'static str),

    /// A collaborator was not supplied to the use case
    #[error("Invalid dependency: {0}")]
    InvalidDependency(&'static str),

    /// Email is already registered
    #[error("Email already registered")]
    EmailTaken,

    /// New password rejected by policy
    #[error("Password validation failed: {0}")]
    PasswordPolicy(#[from] PasswordPolicyError),

    /// Stored hash could not be used
    #[error("Password hash error: {0}")]
    PasswordHash(#[from] PasswordHashError),

    /// Storage handle was never connected, or has been disconnected
    #[error("Storage handle is not connected")]
    StorageUnavailable,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingParam(_)
            | AuthError::InvalidParam(_)
            | AuthError::PasswordPolicy(_) => ErrorKind::BadRequest,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::StorageUnavailable => ErrorKind::ServiceUnavailable,
            AuthError::InvalidDependency(_)
            | AuthError::PasswordHash(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let app_error = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::MissingParam(param) | AuthError::InvalidParam(param) => {
                app_error.with_param(*param)
            }
            _ => app_error,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::StorageUnavailable => {
                tracing::error!("Auth storage used before connect or after disconnect");
            }
            AuthError::InvalidDependency(name) => {
                tracing::error!(dependency = name, "Auth use case is misconfigured");
            }
            AuthError::PasswordHash(e) => {
                tracing::error!(error = %e, "Stored password hash is unusable");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Database(e) => AppError::from(e),
            other => other.to_app_error(),
        }
    }
}
