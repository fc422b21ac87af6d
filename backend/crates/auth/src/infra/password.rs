//! Argon2 password comparison

use std::sync::Arc;

use platform::password::{ClearTextPassword, HashedPassword};

use crate::domain::services::PasswordComparer;
use crate::error::{AuthError, AuthResult};

/// Verifies passwords against Argon2id PHC hashes, with an optional pepper
#[derive(Clone, Default)]
pub struct Argon2Encrypter {
    pepper: Option<Arc<[u8]>>,
}

impl Argon2Encrypter {
    pub fn new(pepper: Option<&[u8]>) -> Self {
        Self {
            pepper: pepper.map(Arc::from),
        }
    }

    /// Hash a new password, enforcing the password policy
    pub fn hash(&self, password: &str) -> AuthResult<String> {
        let password = ClearTextPassword::new(password.to_string())?;
        let hashed = password.hash(self.pepper.as_deref())?;
        Ok(hashed.as_phc_string().to_string())
    }
}

impl PasswordComparer for Argon2Encrypter {
    async fn compare(&self, password: &str, password_hash: &str) -> AuthResult<bool> {
        let hashed = HashedPassword::from_phc_string(password_hash)?;
        let password = ClearTextPassword::for_verification(password);
        let pepper = self.pepper.clone();

        // CPU-bound
        let valid =
            tokio::task::spawn_blocking(move || hashed.verify(&password, pepper.as_deref()))
                .await
                .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(valid)
    }
}
