//! Handlers for token exchange and per-space authorization.
//!
//! These endpoints front AuthQuest: the client credentials stay on the
//! server, and provider errors are relayed to the caller unchanged.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use peoplemover_authquest::{authenticate_scope, AccessTokenResponse, AuthQuestError, AuthQuestJwt};
use peoplemover_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::services::SpaceService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AccessCodeRequest {
    pub access_code: String,
}

#[derive(Debug, Deserialize)]
pub struct AccessTokenRequest {
    pub access_token: String,
}

/// Request body for the authenticate and role endpoints.
#[derive(Debug, Deserialize)]
pub struct SpaceAccessRequest {
    pub access_token: String,
    pub space_name: String,
}

#[derive(Debug, Deserialize)]
pub struct InviteRequest {
    pub space_name: String,
    pub emails: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AccessTokenBody {
    pub access_token: String,
}

/// POST /api/access_token
pub async fn create_access_token(
    State(state): State<AppState>,
    Json(input): Json<AccessCodeRequest>,
) -> AppResult<Json<AccessTokenBody>> {
    let response = state.authquest.create_access_token(&input.access_code).await?;
    Ok(Json(AccessTokenBody {
        access_token: response.access_token,
    }))
}

/// POST /api/access_token/validate
pub async fn validate(
    State(state): State<AppState>,
    Json(input): Json<AccessTokenRequest>,
) -> AppResult<Json<AuthQuestJwt>> {
    let claims = state.authquest.validate_access_token(&input.access_token).await?;
    Ok(Json(claims))
}

/// POST /api/access_token/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<AccessTokenRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    let refreshed = state.authquest.refresh_access_token(&input.access_token).await?;
    Ok(Json(refreshed))
}

/// POST /api/access_token/authenticate
///
/// 200 when the token's scopes include the space, 403 otherwise.
pub async fn authenticate(
    State(state): State<AppState>,
    Json(input): Json<SpaceAccessRequest>,
) -> AppResult<StatusCode> {
    let forbidden = || {
        AppError::Core(CoreError::Forbidden(format!(
            "Token does not grant access to space '{}'",
            input.space_name
        )))
    };

    let claims = match state.authquest.validate_access_token(&input.access_token).await {
        Ok(claims) => claims,
        Err(AuthQuestError::Api { status, .. }) => {
            tracing::debug!(status, "Token rejected by AuthQuest");
            return Err(forbidden());
        }
        Err(err) => return Err(err.into()),
    };

    if authenticate_scope(&claims, &input.space_name) {
        Ok(StatusCode::OK)
    } else {
        Err(forbidden())
    }
}

/// PUT /api/user/role
pub async fn update_role(
    State(state): State<AppState>,
    Json(input): Json<SpaceAccessRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let payload = state
        .authquest
        .update_user_role(&input.access_token, &input.space_name)
        .await?;
    tracing::info!(space_name = %input.space_name, "User role updated");
    Ok(Json(payload))
}

/// PUT /api/user/invite/space
pub async fn invite_to_space(
    State(state): State<AppState>,
    Json(input): Json<InviteRequest>,
) -> AppResult<StatusCode> {
    SpaceService::invite_users(&state.pool, &state.authquest, &input.space_name, &input.emails)
        .await?;
    tracing::info!(
        space_name = %input.space_name,
        invited = input.emails.len(),
        "Users invited to space",
    );
    Ok(StatusCode::NO_CONTENT)
}
