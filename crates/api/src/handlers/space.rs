//! Handlers for the `/space` and `/user/space` resources.

use axum::extract::{Path, State};
use axum::Json;
use peoplemover_db::models::space::{Space, SpaceTimestamp};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthQuestUser;
use crate::services::space::SpaceWithAccessToken;
use crate::services::SpaceService;
use crate::state::AppState;

/// Request body for `POST /api/user/space`.
#[derive(Debug, Deserialize)]
pub struct CreateUserSpace {
    pub space_name: String,
}

/// POST /api/space
///
/// The request body is the bare space name as text.
pub async fn create(State(state): State<AppState>, name: String) -> AppResult<Json<Space>> {
    let space = SpaceService::create(&state.pool, &name).await?;
    tracing::info!(space_id = space.id, space_name = %space.name, "Space created");
    Ok(Json(space))
}

/// GET /api/space
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Space>>> {
    Ok(Json(SpaceService::list_all(&state.pool).await?))
}

/// GET /api/space/{space_name}
pub async fn last_modified(
    State(state): State<AppState>,
    Path(space_name): Path<String>,
) -> AppResult<Json<SpaceTimestamp>> {
    let timestamp = SpaceService::last_modified(&state.pool, &space_name).await?;
    Ok(Json(timestamp))
}

/// GET /api/user/space
pub async fn list_for_user(
    State(state): State<AppState>,
    user: AuthQuestUser,
) -> AppResult<Json<Vec<Space>>> {
    let spaces = SpaceService::list_for_scopes(&state.pool, &user.claims.scopes).await?;
    Ok(Json(spaces))
}

/// POST /api/user/space
pub async fn create_for_user(
    State(state): State<AppState>,
    user: AuthQuestUser,
    Json(input): Json<CreateUserSpace>,
) -> AppResult<Json<SpaceWithAccessToken>> {
    let created = SpaceService::create_for_user(
        &state.pool,
        &state.authquest,
        &user.access_token,
        &input.space_name,
    )
    .await?;

    tracing::info!(
        space_id = created.space.id,
        space_name = %created.space.name,
        user_id = ?user.claims.user_id,
        "Space created for user",
    );
    Ok(Json(created))
}
