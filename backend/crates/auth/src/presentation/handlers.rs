//! HTTP Handlers

use axum::body::Bytes;
use axum::extract::State;
use std::sync::Arc;

use crate::application::login::Authenticator;
use crate::presentation::dto::LoginRequest;
use crate::presentation::http::{HttpRequest, HttpResponse};
use crate::presentation::login_router::LoginRouter;

/// Shared state for auth handlers
pub struct AuthAppState<A> {
    pub login: Arc<LoginRouter<A>>,
}

impl<A> Clone for AuthAppState<A> {
    fn clone(&self) -> Self {
        Self {
            login: self.login.clone(),
        }
    }
}

/// POST /api/auth/login
pub async fn login<A>(State(state): State<AuthAppState<A>>, body: Bytes) -> HttpResponse
where
    A: Authenticator + Send + Sync + 'static,
{
    state.login.route(parse_login_request(&body)).await
}

/// Empty body is a request without a body. Unparseable JSON is no request at all.
fn parse_login_request(body: &[u8]) -> Option<HttpRequest<LoginRequest>> {
    if body.is_empty() {
        return Some(HttpRequest::empty());
    }

    match serde_json::from_slice::<LoginRequest>(body) {
        Ok(req) => Some(HttpRequest::new(req)),
        Err(e) => {
            tracing::warn!(error = %e, "Unparseable login request body");
            None
        }
    }
}
