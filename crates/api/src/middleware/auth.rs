//! Bearer-token extractor backed by AuthQuest validation.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use peoplemover_authquest::{AuthQuestError, AuthQuestJwt};
use peoplemover_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Caller authenticated by a Bearer token that AuthQuest accepted.
///
/// ```ignore
/// async fn my_handler(user: AuthQuestUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = ?user.claims.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthQuestUser {
    /// The raw token, for calls that forward it to AuthQuest.
    pub access_token: String,
    /// Claims returned by the validate endpoint.
    pub claims: AuthQuestJwt,
}

impl FromRequestParts<AppState> for AuthQuestUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = state
            .authquest
            .validate_access_token(token)
            .await
            .map_err(|err| match err {
                AuthQuestError::Api { .. } => {
                    AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
                }
                other => AppError::AuthQuest(other),
            })?;

        Ok(AuthQuestUser {
            access_token: token.to_string(),
            claims,
        })
    }
}
