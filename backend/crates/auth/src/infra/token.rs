//! HMAC-signed access tokens
//!
//! Format: `b64url(user_id) . b64url(nonce) . b64url(HMAC-SHA256(secret, first two parts))`

use platform::crypto::{from_base64_url, hmac_sha256, random_bytes, to_base64_url, verify_hmac_sha256};

use crate::domain::services::TokenIssuer;
use crate::domain::value_object::{access_token::AccessToken, user_id::UserId};
use crate::error::AuthResult;

const NONCE_LEN: usize = 16;

#[derive(Clone)]
pub struct HmacTokenGenerator {
    secret: [u8; 32],
}

impl HmacTokenGenerator {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    /// Check the signature and recover the user id the token was issued to
    pub fn verify(&self, token: &AccessToken) -> Option<UserId> {
        let (payload, signature) = token.as_str().rsplit_once('.')?;
        let signature = from_base64_url(signature).ok()?;

        if !verify_hmac_sha256(&self.secret, payload.as_bytes(), &signature) {
            return None;
        }

        let (user_id, _nonce) = payload.split_once('.')?;
        let user_id = String::from_utf8(from_base64_url(user_id).ok()?).ok()?;
        Some(UserId::new(user_id))
    }
}

impl TokenIssuer for HmacTokenGenerator {
    async fn generate(&self, user_id: &UserId) -> AuthResult<AccessToken> {
        let payload = format!(
            "{}.{}",
            to_base64_url(user_id.as_str().as_bytes()),
            to_base64_url(&random_bytes(NONCE_LEN))
        );
        let signature = hmac_sha256(&self.secret, payload.as_bytes());

        Ok(AccessToken::new(format!(
            "{}.{}",
            payload,
            to_base64_url(&signature)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sut() -> HmacTokenGenerator {
        HmacTokenGenerator::new([7u8; 32])
    }

    #[tokio::test]
    async fn test_generated_token_verifies_to_user_id() {
        let sut = make_sut();
        let token = sut.generate(&UserId::new("any_id")).await.unwrap();

        assert_eq!(token.as_str().split('.').count(), 3);
        assert_eq!(sut.verify(&token), Some(UserId::new("any_id")));
    }

    #[tokio::test]
    async fn test_tokens_are_fresh_per_call() {
        let sut = make_sut();
        let first = sut.generate(&UserId::new("any_id")).await.unwrap();
        let second = sut.generate(&UserId::new("any_id")).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_verify_rejects_other_secret() {
        let token = make_sut().generate(&UserId::new("any_id")).await.unwrap();

        assert!(HmacTokenGenerator::new([8u8; 32]).verify(&token).is_none());
    }

    #[tokio::test]
    async fn test_verify_rejects_tampered_user_id() {
        let sut = make_sut();
        let token = sut.generate(&UserId::new("any_id")).await.unwrap();

        let (_, rest) = token.as_str().split_once('.').unwrap();
        let forged = AccessToken::new(format!("{}.{}", to_base64_url(b"admin_id"), rest));

        assert!(sut.verify(&forged).is_none());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let sut = make_sut();
        assert!(sut.verify(&AccessToken::new("any_token")).is_none());
        assert!(sut.verify(&AccessToken::new("a.b.c")).is_none());
    }
}
