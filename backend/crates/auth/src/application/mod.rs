//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod email_validator;
pub mod login;

// Re-exports
pub use config::AuthConfig;
pub use email_validator::EmailValidator;
pub use login::{Authenticator, LoginUseCase, LoginUseCaseBuilder};
