//! Framework-agnostic request/response pair used by [`LoginRouter`].
//!
//! [`LoginRouter`]: super::login_router::LoginRouter

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use serde_json::Value;

use crate::domain::value_object::access_token::AccessToken;
use crate::error::AuthError;
use crate::presentation::dto::LoginResponse;

#[derive(Debug, Clone)]
pub struct HttpRequest<B> {
    pub body: Option<B>,
}

impl<B> HttpRequest<B> {
    pub fn new(body: B) -> Self {
        Self { body: Some(body) }
    }

    pub fn empty() -> Self {
        Self { body: None }
    }
}

/// Outcome of a login request
///
/// Only `Ok` and `BadRequest` carry a body. 401 and 500 are sent empty.
#[derive(Debug)]
pub enum HttpResponse {
    Ok(LoginResponse),
    BadRequest(AppError),
    Unauthorized,
    ServerError,
}

impl HttpResponse {
    pub fn ok(token: AccessToken) -> Self {
        Self::Ok(LoginResponse {
            access_token: token.into_string(),
        })
    }

    pub fn bad_request(error: AuthError) -> Self {
        error.log();
        Self::BadRequest(error.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Ok(_) => StatusCode::OK,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> Option<Value> {
        match self {
            Self::Ok(body) => serde_json::to_value(body).ok(),
            Self::BadRequest(error) => Some(error.to_problem_json()),
            Self::Unauthorized | Self::ServerError => None,
        }
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::BadRequest(error) => error.into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
