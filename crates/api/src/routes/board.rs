//! Route definitions for the `/board` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::board;
use crate::state::AppState;

/// Routes mounted at `/board`.
///
/// ```text
/// GET    /{space_name}                -> list
/// POST   /{space_name}                -> create
/// DELETE /{board_id}                  -> delete
/// PUT    /{board_id}/{space_name}     -> update
/// ```
///
/// The first segment is a space name for GET and POST and a board id for
/// DELETE and PUT; the router needs one parameter name per position.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{segment}",
            get(board::list).post(board::create).delete(board::delete),
        )
        .route("/{segment}/{space_name}", put(board::update))
}
