//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Login request
///
/// Both fields are optional on the wire so a missing field surfaces as a
/// 400 naming that field rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}
