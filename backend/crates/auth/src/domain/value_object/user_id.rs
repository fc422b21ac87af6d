use derive_more::Display;
use uuid::Uuid;

/// Opaque user identifier as stored in the `users` table
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh identifier for a new user (UUIDv4, hyphenated)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
