//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, collaborator traits
//! - `application/` - Login use case, email validator, configuration
//! - `infra/` - PostgreSQL storage, Argon2 comparer, HMAC token issuer
//! - `presentation/` - HTTP adapter, handlers, DTOs, router
//!
//! ## Login flow
//! 1. Look the user up by email
//! 2. Compare the password against the stored hash
//! 3. Issue an access token and persist it on the user row
//!
//! Unknown email and wrong password are indistinguishable to the caller (401).
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional application-wide pepper
//! - Access tokens are HMAC-SHA256 signed and carry a random nonce
//! - Secrets are redacted from `Debug` output and never logged

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{Argon2Encrypter, Database, PgUserRepository};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
