//! Repository Traits
//!
//! Persistence the login use case depends on. Implementation is in the
//! infrastructure layer.

use crate::domain::entity::user_record::UserRecord;
use crate::domain::value_object::{access_token::AccessToken, user_id::UserId};
use crate::error::AuthResult;

/// Looks a user up by email
#[trait_variant::make(UserLookup: Send)]
pub trait LocalUserLookup {
    /// Find the user registered under `email`, if any
    async fn load(&self, email: &str) -> AuthResult<Option<UserRecord>>;
}

/// Persists the access token issued to a user
#[trait_variant::make(TokenStore: Send)]
pub trait LocalTokenStore {
    /// Store `token` against `user_id`, replacing any previous token
    async fn update(&self, user_id: &UserId, token: &AccessToken) -> AuthResult<()>;
}
