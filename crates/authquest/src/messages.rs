//! Request and response bodies exchanged with AuthQuest.
//!
//! Field names follow the provider's snake_case wire format. Request structs
//! borrow their strings; they only live for the duration of one call.

use serde::{Deserialize, Serialize};

/// `POST /oauth/access_token`
#[derive(Debug, Serialize)]
pub struct AccessTokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub access_code: &'a str,
}

/// `POST /oauth/access_token/validate`
#[derive(Debug, Serialize)]
pub struct ValidateAccessTokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub access_token: &'a str,
}

/// `POST /oauth/access_token/refresh`
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub access_token: &'a str,
}

/// `PUT /client/user/role`. `role` carries the space name being granted.
#[derive(Debug, Serialize)]
pub struct RoleRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub access_token: &'a str,
    pub role: &'a str,
}

/// `PUT /invite/scope`
#[derive(Debug, Serialize)]
pub struct InviteScopeRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub user_emails: &'a [String],
    pub scope: &'a str,
}

/// Token pair returned by the access-token and refresh endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    #[serde(default)]
    pub user_id: Option<String>,
    pub access_token: String,
}

/// Decoded claims returned by the validate endpoint.
///
/// `scopes` lists the spaces the token may access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthQuestJwt {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Expiry as sent by the provider (seconds or a formatted string).
    #[serde(default)]
    pub exp: Option<serde_json::Value>,
    #[serde(default)]
    pub iss: Option<String>,
    #[serde(default)]
    pub sub: Option<String>,
}
