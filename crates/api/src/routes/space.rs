//! Route definitions for spaces.

use axum::routing::get;
use axum::Router;

use crate::handlers::space;
use crate::state::AppState;

/// ```text
/// GET  /space                  -> list
/// POST /space                  -> create
/// GET  /space/{space_name}     -> last_modified
/// GET  /user/space             -> list_for_user (Bearer)
/// POST /user/space             -> create_for_user (Bearer)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/space", get(space::list).post(space::create))
        .route("/space/{space_name}", get(space::last_modified))
        .route(
            "/user/space",
            get(space::list_for_user).post(space::create_for_user),
        )
}
