//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for signing access tokens (32 bytes)
    pub token_secret: [u8; 32],
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development).
    /// Tokens issued under it do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_key(),
            ..Default::default()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
