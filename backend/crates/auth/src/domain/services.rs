//! Domain Service Traits
//!
//! Credential checks and token minting. The algorithms (Argon2, HMAC, ...)
//! are infrastructure concerns.

use crate::domain::value_object::{access_token::AccessToken, user_id::UserId};
use crate::error::AuthResult;

/// Compares a typed password against a stored hash
#[trait_variant::make(PasswordComparer: Send)]
pub trait LocalPasswordComparer {
    async fn compare(&self, password: &str, password_hash: &str) -> AuthResult<bool>;
}

/// Mints a fresh access token for a user
#[trait_variant::make(TokenIssuer: Send)]
pub trait LocalTokenIssuer {
    async fn generate(&self, user_id: &UserId) -> AuthResult<AccessToken>;
}

/// Email syntax routine
pub trait EmailSyntax: Send + Sync {
    fn is_email(&self, email: &str) -> bool;
}
