//! Handlers for the `/product` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use peoplemover_core::types::DbId;
use peoplemover_db::models::product::{NewProduct, Product, UpdateProduct};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::ProductService;
use crate::state::AppState;

/// POST /api/product
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewProduct>,
) -> AppResult<Json<Product>> {
    input.validate()?;
    let product = ProductService::create(&state.pool, &input).await?;

    tracing::info!(
        product_id = product.id,
        product_name = %product.name,
        board_id = product.board_id,
        "Product created",
    );
    Ok(Json(product))
}

/// PUT /api/product/{product_id}
pub async fn update(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    if let Some(body_id) = input.id.filter(|id| *id != product_id) {
        return Err(AppError::BadRequest(format!(
            "Product id {body_id} does not match path id {product_id}"
        )));
    }
    input.validate()?;
    let product = ProductService::update(&state.pool, product_id, &input).await?;

    tracing::info!(product_id, product_name = %product.name, "Product updated");
    Ok(Json(product))
}

/// DELETE /api/product/{product_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = ProductService::delete(&state.pool, product_id).await?;

    tracing::info!(
        product_id,
        product_name = %removed.product.name,
        board_id = removed.product.board_id,
        reassigned = removed.reassigned,
        "Product deleted",
    );
    Ok(StatusCode::OK)
}
