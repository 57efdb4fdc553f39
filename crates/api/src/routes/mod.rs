pub mod auth;
pub mod board;
pub mod health;
pub mod product;
pub mod space;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /board/{space_name}                   list, create (GET, POST)
/// /board/{board_id}                     delete (DELETE)
/// /board/{board_id}/{space_name}        rename (PUT)
///
/// /product                              create (POST)
/// /product/{product_id}                 update, delete (PUT, DELETE)
///
/// /space                                list, create (GET, POST text body)
/// /space/{space_name}                   last modified date (GET)
/// /user/space                           user's spaces, create for user (Bearer)
///
/// /access_token                         exchange access code (POST)
/// /access_token/validate                validate token (POST)
/// /access_token/refresh                 refresh token (POST)
/// /access_token/authenticate            check space scope (POST)
/// /user/role                            grant space role (PUT)
/// /user/invite/space                    invite emails to space (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/board", board::router())
        .nest("/product", product::router())
        .merge(space::router())
        .merge(auth::router())
}
