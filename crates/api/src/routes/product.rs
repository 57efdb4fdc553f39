//! Route definitions for the `/product` resource.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/product`.
///
/// ```text
/// POST   /                  -> create
/// PUT    /{product_id}      -> update
/// DELETE /{product_id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(product::create))
        .route("/{product_id}", put(product::update).delete(product::delete))
}
