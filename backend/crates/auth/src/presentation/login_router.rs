//! HTTP adapter for the login use case
//!
//! Missing fields become 400, rejected credentials 401, an issued token
//! 200. Every other failure is logged and becomes an empty 500.

use std::sync::Arc;

use crate::application::login::Authenticator;
use crate::error::AuthError;
use crate::presentation::dto::LoginRequest;
use crate::presentation::http::{HttpRequest, HttpResponse};

pub struct LoginRouter<A> {
    authenticator: Arc<A>,
}

impl<A> LoginRouter<A>
where
    A: Authenticator + Sync,
{
    pub fn new(authenticator: Arc<A>) -> Self {
        Self { authenticator }
    }

    pub async fn route(&self, request: Option<HttpRequest<LoginRequest>>) -> HttpResponse {
        let Some(body) = request.and_then(|r| r.body) else {
            tracing::error!("Login request arrived without a body");
            return HttpResponse::ServerError;
        };

        let Some(email) = non_empty(&body.email) else {
            return HttpResponse::bad_request(AuthError::MissingParam("email"));
        };
        let Some(password) = non_empty(&body.password) else {
            return HttpResponse::bad_request(AuthError::MissingParam("password"));
        };

        match self
            .authenticator
            .authenticate(Some(email), Some(password))
            .await
        {
            Ok(Some(token)) => HttpResponse::ok(token),
            Ok(None) => HttpResponse::Unauthorized,
            Err(e) => {
                e.log();
                HttpResponse::ServerError
            }
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::test_support::{AuthOutcome, AuthUseCaseSpy};

    fn make_sut(outcome: AuthOutcome) -> (LoginRouter<AuthUseCaseSpy>, Arc<AuthUseCaseSpy>) {
        let spy = Arc::new(AuthUseCaseSpy::new(outcome));
        (LoginRouter::new(spy.clone()), spy)
    }

    fn request(email: Option<&str>, password: Option<&str>) -> Option<HttpRequest<LoginRequest>> {
        Some(HttpRequest::new(LoginRequest {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }))
    }

    #[tokio::test]
    async fn test_missing_email_returns_400() {
        let (sut, spy) = make_sut(AuthOutcome::Token("any_token"));

        let response = sut.route(request(None, Some("any_password"))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body().unwrap()["param"], "email");
        assert!(spy.call().is_none());
    }

    #[tokio::test]
    async fn test_empty_email_returns_400() {
        let (sut, _) = make_sut(AuthOutcome::Token("any_token"));

        let response = sut.route(request(Some(""), Some("any_password"))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body().unwrap()["detail"], "Missing param: email");
    }

    #[tokio::test]
    async fn test_missing_password_returns_400() {
        let (sut, spy) = make_sut(AuthOutcome::Token("any_token"));

        let response = sut.route(request(Some("any_email@mail.com"), None)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body().unwrap()["param"], "password");
        assert!(spy.call().is_none());
    }

    #[tokio::test]
    async fn test_email_is_checked_before_password() {
        let (sut, _) = make_sut(AuthOutcome::Token("any_token"));

        let response = sut.route(request(None, None)).await;

        assert_eq!(response.body().unwrap()["param"], "email");
    }

    #[tokio::test]
    async fn test_missing_request_returns_500() {
        let (sut, spy) = make_sut(AuthOutcome::Token("any_token"));

        let response = sut.route(None).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.body().is_none());
        assert!(spy.call().is_none());
    }

    #[tokio::test]
    async fn test_missing_body_returns_500() {
        let (sut, _) = make_sut(AuthOutcome::Token("any_token"));

        let response = sut.route(Some(HttpRequest::empty())).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.body().is_none());
    }

    #[tokio::test]
    async fn test_forwards_credentials_to_authenticator() {
        let (sut, spy) = make_sut(AuthOutcome::Token("any_token"));

        sut.route(request(Some("any_email@mail.com"), Some("any_password")))
            .await;

        assert_eq!(
            spy.call(),
            Some((
                Some("any_email@mail.com".to_string()),
                Some("any_password".to_string())
            ))
        );
    }

    #[tokio::test]
    async fn test_rejected_credentials_return_401() {
        let (sut, _) = make_sut(AuthOutcome::Rejected);

        let response = sut
            .route(request(Some("invalid_email@mail.com"), Some("invalid_password")))
            .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.body().is_none());
    }

    #[tokio::test]
    async fn test_authenticator_failure_returns_500() {
        let (sut, _) = make_sut(AuthOutcome::Fail);

        let response = sut
            .route(request(Some("any_email@mail.com"), Some("any_password")))
            .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.body().is_none());
    }

    #[tokio::test]
    async fn test_invalid_dependency_returns_500() {
        let (sut, _) = make_sut(AuthOutcome::Misconfigured("token_store"));

        let response = sut
            .route(request(Some("any_email@mail.com"), Some("any_password")))
            .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.body().is_none());
    }

    #[tokio::test]
    async fn test_valid_credentials_return_200_with_token() {
        let (sut, _) = make_sut(AuthOutcome::Token("any_token"));

        let response = sut
            .route(request(Some("valid_email@mail.com"), Some("valid_password")))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.body(),
            Some(serde_json::json!({ "accessToken": "any_token" }))
        );
    }
}
