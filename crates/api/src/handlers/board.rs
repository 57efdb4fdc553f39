//! Handlers for the `/board` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use peoplemover_core::types::DbId;
use peoplemover_db::models::board::{Board, CreateBoard, UpdateBoard};
use validator::Validate;

use crate::error::AppResult;
use crate::services::BoardService;
use crate::state::AppState;

/// GET /api/board/{space_name}
pub async fn list(
    State(state): State<AppState>,
    Path(space_name): Path<String>,
) -> AppResult<Json<Vec<Board>>> {
    let boards = BoardService::list_in_space(&state.pool, &space_name).await?;
    Ok(Json(boards))
}

/// POST /api/board/{space_name}
pub async fn create(
    State(state): State<AppState>,
    Path(space_name): Path<String>,
    Json(input): Json<CreateBoard>,
) -> AppResult<Json<Board>> {
    input.validate()?;
    let board = BoardService::create_in_space(&state.pool, &input, &space_name).await?;

    tracing::info!(
        board_id = board.id,
        board_name = %board.name,
        space_name = %space_name,
        products = board.products.len(),
        "Board created",
    );
    Ok(Json(board))
}

/// PUT /api/board/{board_id}/{space_name}
pub async fn update(
    State(state): State<AppState>,
    Path((board_id, space_name)): Path<(DbId, String)>,
    Json(input): Json<UpdateBoard>,
) -> AppResult<Json<Board>> {
    input.validate()?;
    let board = BoardService::update(&state.pool, board_id, &input, &space_name).await?;

    tracing::info!(
        board_id,
        board_name = %board.name,
        space_name = %space_name,
        "Board renamed",
    );
    Ok(Json(board))
}

/// DELETE /api/board/{board_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(board_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = BoardService::delete(&state.pool, board_id).await?;

    tracing::info!(
        board_id,
        board_name = %removed.board.name,
        space_name = %removed.space_name,
        products = removed.products,
        assignments = removed.assignments,
        "Board deleted",
    );
    Ok(StatusCode::NO_CONTENT)
}
