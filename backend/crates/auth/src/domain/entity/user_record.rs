//! User Record Entity
//!
//! The slice of a stored user the login flow reads. Persistence is owned by
//! the storage layer; the use case never mutates it.

use crate::domain::value_object::user_id::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: UserId,
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
}

impl UserRecord {
    pub fn new(
        user_id: UserId,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}
