//! Route definitions for token exchange and user authorization.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST /access_token                -> create_access_token
/// POST /access_token/validate       -> validate
/// POST /access_token/refresh        -> refresh
/// POST /access_token/authenticate   -> authenticate
/// PUT  /user/role                   -> update_role
/// PUT  /user/invite/space           -> invite_to_space
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/access_token", post(auth::create_access_token))
        .route("/access_token/validate", post(auth::validate))
        .route("/access_token/refresh", post(auth::refresh))
        .route("/access_token/authenticate", post(auth::authenticate))
        .route("/user/role", put(auth::update_role))
        .route("/user/invite/space", put(auth::invite_to_space))
}
