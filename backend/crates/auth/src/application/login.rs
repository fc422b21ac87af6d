//! Login Use Case
//!
//! Authenticates a user by email and password and issues an access token.

use std::sync::Arc;

use crate::domain::repository::{TokenStore, UserLookup};
use crate::domain::services::{PasswordComparer, TokenIssuer};
use crate::domain::value_object::access_token::AccessToken;
use crate::error::{AuthError, AuthResult};

/// Anything that can turn credentials into an access token.
///
/// `Ok(None)` means the credentials were rejected.
#[trait_variant::make(Authenticator: Send)]
pub trait LocalAuthenticator {
    async fn authenticate(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> AuthResult<Option<AccessToken>>;
}

/// Login use case
///
/// Collaborators are called strictly in order:
/// user lookup, password comparison, token generation, token persistence.
/// Their errors are returned unchanged.
pub struct LoginUseCase<U, P, T, S>
where
    U: UserLookup,
    P: PasswordComparer,
    T: TokenIssuer,
    S: TokenStore,
{
    user_lookup: Arc<U>,
    password_comparer: Arc<P>,
    token_issuer: Arc<T>,
    token_store: Arc<S>,
}

impl<U, P, T, S> LoginUseCase<U, P, T, S>
where
    U: UserLookup,
    P: PasswordComparer,
    T: TokenIssuer,
    S: TokenStore,
{
    pub fn new(
        user_lookup: Arc<U>,
        password_comparer: Arc<P>,
        token_issuer: Arc<T>,
        token_store: Arc<S>,
    ) -> Self {
        Self {
            user_lookup,
            password_comparer,
            token_issuer,
            token_store,
        }
    }

    pub fn builder() -> LoginUseCaseBuilder<U, P, T, S> {
        LoginUseCaseBuilder::default()
    }

    pub async fn execute(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> AuthResult<Option<AccessToken>> {
        let email = email
            .filter(|e| !e.is_empty())
            .ok_or(AuthError::MissingParam("email"))?;
        let password = password
            .filter(|p| !p.is_empty())
            .ok_or(AuthError::MissingParam("password"))?;

        let Some(user) = self.user_lookup.load(email).await? else {
            tracing::info!("Login rejected: no user for email");
            return Ok(None);
        };

        let password_valid = self
            .password_comparer
            .compare(password, &user.password_hash)
            .await?;

        if !password_valid {
            tracing::info!(user_id = %user.user_id, "Login rejected: password mismatch");
            return Ok(None);
        }

        let token = self.token_issuer.generate(&user.user_id).await?;
        self.token_store.update(&user.user_id, &token).await?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(Some(token))
    }
}

impl<U, P, T, S> Authenticator for LoginUseCase<U, P, T, S>
where
    U: UserLookup + Sync,
    P: PasswordComparer + Sync,
    T: TokenIssuer + Sync,
    S: TokenStore + Sync,
{
    async fn authenticate(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> AuthResult<Option<AccessToken>> {
        self.execute(email, password).await
    }
}

/// Assembles a [`LoginUseCase`] from collaborators that may not all be
/// configured yet.
///
/// `build` checks them in call order and names the first missing one.
pub struct LoginUseCaseBuilder<U, P, T, S> {
    user_lookup: Option<Arc<U>>,
    password_comparer: Option<Arc<P>>,
    token_issuer: Option<Arc<T>>,
    token_store: Option<Arc<S>>,
}

impl<U, P, T, S> Default for LoginUseCaseBuilder<U, P, T, S> {
    fn default() -> Self {
        Self {
            user_lookup: None,
            password_comparer: None,
            token_issuer: None,
            token_store: None,
        }
    }
}

impl<U, P, T, S> LoginUseCaseBuilder<U, P, T, S>
where
    U: UserLookup,
    P: PasswordComparer,
    T: TokenIssuer,
    S: TokenStore,
{
    pub fn user_lookup(mut self, user_lookup: Arc<U>) -> Self {
        self.user_lookup = Some(user_lookup);
        self
    }

    pub fn password_comparer(mut self, password_comparer: Arc<P>) -> Self {
        self.password_comparer = Some(password_comparer);
        self
    }

    pub fn token_issuer(mut self, token_issuer: Arc<T>) -> Self {
        self.token_issuer = Some(token_issuer);
        self
    }

    pub fn token_store(mut self, token_store: Arc<S>) -> Self {
        self.token_store = Some(token_store);
        self
    }

    pub fn build(self) -> AuthResult<LoginUseCase<U, P, T, S>> {
        let user_lookup = self
            .user_lookup
            .ok_or(AuthError::InvalidDependency("user_lookup"))?;
        let password_comparer = self
            .password_comparer
            .ok_or(AuthError::InvalidDependency("password_comparer"))?;
        let token_issuer = self
            .token_issuer
            .ok_or(AuthError::InvalidDependency("token_issuer"))?;
        let token_store = self
            .token_store
            .ok_or(AuthError::InvalidDependency("token_store"))?;

        Ok(LoginUseCase::new(
            user_lookup,
            password_comparer,
            token_issuer,
            token_store,
        ))
    }
}
