//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::login::{Authenticator, LoginUseCase};
use crate::infra::{Argon2Encrypter, Database, HmacTokenGenerator, PgUserRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::login_router::LoginRouter;

/// Create the Auth router backed by PostgreSQL, Argon2 and HMAC tokens
pub fn auth_router(db: Database, config: AuthConfig) -> Router {
    let repo = Arc::new(PgUserRepository::new(db));

    let use_case = LoginUseCase::new(
        repo.clone(),
        Arc::new(Argon2Encrypter::new(config.pepper())),
        Arc::new(HmacTokenGenerator::new(config.token_secret)),
        repo,
    );

    auth_router_generic(use_case)
}

/// Create an Auth router around any authenticator
pub fn auth_router_generic<A>(authenticator: A) -> Router
where
    A: Authenticator + Send + Sync + 'static,
{
    let state = AuthAppState {
        login: Arc::new(LoginRouter::new(Arc::new(authenticator))),
    };

    Router::new()
        .route("/login", post(handlers::login::<A>))
        .with_state(state)
}
