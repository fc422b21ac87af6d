//! Spy collaborators shared by the unit tests.
//!
//! Each spy records the arguments of its last call and returns a canned
//! result, or an `AuthError::Internal` when built with `failing()`.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::login::Authenticator;
use crate::domain::entity::user_record::UserRecord;
use crate::domain::repository::{TokenStore, UserLookup};
use crate::domain::services::{EmailSyntax, PasswordComparer, TokenIssuer};
use crate::domain::value_object::{access_token::AccessToken, user_id::UserId};
use crate::error::{AuthError, AuthResult};

fn spy_failure(name: &str) -> AuthError {
    AuthError::Internal(format!("{name} failed"))
}

// ============================================================================
// UserLookup
// ============================================================================

pub struct LoadUserByEmailSpy {
    user: Option<UserRecord>,
    fail: bool,
    calls: AtomicUsize,
    email: Mutex<Option<String>>,
}

impl LoadUserByEmailSpy {
    pub fn returning(user: Option<UserRecord>) -> Self {
        Self {
            user,
            fail: false,
            calls: AtomicUsize::new(0),
            email: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn user(&self) -> Option<UserRecord> {
        self.user.clone()
    }

    pub fn email(&self) -> Option<String> {
        self.email.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for LoadUserByEmailSpy {
    fn default() -> Self {
        Self::returning(Some(UserRecord::new(
            UserId::new("any_id"),
            "valid_email@mail.com",
            "hashed_password",
        )))
    }
}

impl UserLookup for LoadUserByEmailSpy {
    async fn load(&self, email: &str) -> AuthResult<Option<UserRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.email.lock().unwrap() = Some(email.to_string());
        if self.fail {
            return Err(spy_failure("user lookup"));
        }
        Ok(self.user.clone())
    }
}

// ============================================================================
// PasswordComparer
// ============================================================================

pub struct EncrypterSpy {
    is_valid: bool,
    fail: bool,
    call: Mutex<Option<(String, String)>>,
}

impl EncrypterSpy {
    pub fn returning(is_valid: bool) -> Self {
        Self {
            is_valid,
            fail: false,
            call: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn password(&self) -> Option<String> {
        self.call.lock().unwrap().as_ref().map(|(p, _)| p.clone())
    }

    pub fn password_hash(&self) -> Option<String> {
        self.call.lock().unwrap().as_ref().map(|(_, h)| h.clone())
    }
}

impl Default for EncrypterSpy {
    fn default() -> Self {
        Self::returning(true)
    }
}

impl PasswordComparer for EncrypterSpy {
    async fn compare(&self, password: &str, password_hash: &str) -> AuthResult<bool> {
        *self.call.lock().unwrap() = Some((password.to_string(), password_hash.to_string()));
        if self.fail {
            return Err(spy_failure("encrypter"));
        }
        Ok(self.is_valid)
    }
}

// ============================================================================
// TokenIssuer
// ============================================================================

pub struct TokenGeneratorSpy {
    access_token: AccessToken,
    fail: bool,
    user_id: Mutex<Option<UserId>>,
}

impl TokenGeneratorSpy {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id.lock().unwrap().clone()
    }
}

impl Default for TokenGeneratorSpy {
    fn default() -> Self {
        Self {
            access_token: AccessToken::new("any_token"),
            fail: false,
            user_id: Mutex::new(None),
        }
    }
}

impl TokenIssuer for TokenGeneratorSpy {
    async fn generate(&self, user_id: &UserId) -> AuthResult<AccessToken> {
        *self.user_id.lock().unwrap() = Some(user_id.clone());
        if self.fail {
            return Err(spy_failure("token generator"));
        }
        Ok(self.access_token.clone())
    }
}

// ============================================================================
// TokenStore
// ============================================================================

#[derive(Default)]
pub struct UpdateAccessTokenSpy {
    fail: bool,
    stored: Mutex<Option<(UserId, AccessToken)>>,
}

impl UpdateAccessTokenSpy {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Option<(UserId, AccessToken)> {
        self.stored.lock().unwrap().clone()
    }
}

impl TokenStore for UpdateAccessTokenSpy {
    async fn update(&self, user_id: &UserId, token: &AccessToken) -> AuthResult<()> {
        if self.fail {
            return Err(spy_failure("update access token"));
        }
        *self.stored.lock().unwrap() = Some((user_id.clone(), token.clone()));
        Ok(())
    }
}

// ============================================================================
// Authenticator (whole use case)
// ============================================================================

pub enum AuthOutcome {
    Token(&'static str),
    Rejected,
    Fail,
    Misconfigured(&'static str),
}

pub struct AuthUseCaseSpy {
    outcome: AuthOutcome,
    call: Mutex<Option<(Option<String>, Option<String>)>>,
}

impl AuthUseCaseSpy {
    pub fn new(outcome: AuthOutcome) -> Self {
        Self {
            outcome,
            call: Mutex::new(None),
        }
    }

    pub fn call(&self) -> Option<(Option<String>, Option<String>)> {
        self.call.lock().unwrap().clone()
    }
}

impl Authenticator for AuthUseCaseSpy {
    async fn authenticate(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> AuthResult<Option<AccessToken>> {
        *self.call.lock().unwrap() = Some((
            email.map(str::to_string),
            password.map(str::to_string),
        ));
        match self.outcome {
            AuthOutcome::Token(token) => Ok(Some(AccessToken::new(token))),
            AuthOutcome::Rejected => Ok(None),
            AuthOutcome::Fail => Err(spy_failure("auth use case")),
            AuthOutcome::Misconfigured(dependency) => {
                Err(AuthError::InvalidDependency(dependency))
            }
        }
    }
}

// ============================================================================
// EmailSyntax
// ============================================================================

pub struct EmailSyntaxSpy {
    is_email: bool,
    email: Mutex<Option<String>>,
}

impl EmailSyntaxSpy {
    pub fn returning(is_email: bool) -> Self {
        Self {
            is_email,
            email: Mutex::new(None),
        }
    }

    pub fn email(&self) -> Option<String> {
        self.email.lock().unwrap().clone()
    }
}

impl EmailSyntax for EmailSyntaxSpy {
    fn is_email(&self, email: &str) -> bool {
        *self.email.lock().unwrap() = Some(email.to_string());
        self.is_email
    }
}
