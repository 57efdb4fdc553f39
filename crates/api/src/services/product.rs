//! Product lifecycle on an existing board.
//!
//! Names are unique per board, compared exactly as the
//! `uq_products_board_id_name` constraint does. Every write touches the
//! owning space.

use peoplemover_core::board::{validate_name, UNASSIGNED_PRODUCT_NAME};
use peoplemover_core::error::CoreError;
use peoplemover_core::types::DbId;
use peoplemover_db::models::product::{CreateProduct, NewProduct, Product, UpdateProduct};
use peoplemover_db::repositories::{AssignmentRepo, BoardRepo, ProductRepo, SpaceRepo};
use peoplemover_db::DbPool;

use crate::error::AppResult;

/// What a product deletion did.
#[derive(Debug)]
pub struct RemovedProduct {
    pub product: Product,
    pub reassigned: u64,
}

/// Product operations scoped to a board.
pub struct ProductService;

impl ProductService {
    /// Add a product to an existing board.
    pub async fn create(pool: &DbPool, input: &NewProduct) -> AppResult<Product> {
        validate_name("Product", &input.name)?;
        let board = BoardRepo::find_by_id(pool, input.board_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Board", input.board_id))?;
        ensure_name_available(pool, board.id, &input.name, None).await?;

        let mut tx = pool.begin().await?;
        let product =
            ProductRepo::create(&mut *tx, &CreateProduct::from(input), board.id, board.space_id)
                .await?;
        SpaceRepo::touch(&mut *tx, board.space_id).await?;
        tx.commit().await?;
        Ok(product)
    }

    /// Rename a product and optionally replace its notes.
    pub async fn update(
        pool: &DbPool,
        product_id: DbId,
        input: &UpdateProduct,
    ) -> AppResult<Product> {
        validate_name("Product", &input.name)?;
        let existing = ProductRepo::find_by_id(pool, product_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Product", product_id))?;
        ensure_name_available(pool, existing.board_id, &input.name, Some(product_id)).await?;

        let mut tx = pool.begin().await?;
        let product = ProductRepo::update(&mut *tx, product_id, input)
            .await?
            .ok_or_else(|| CoreError::not_found("Product", product_id))?;
        SpaceRepo::touch(&mut *tx, product.space_id).await?;
        tx.commit().await?;
        Ok(product)
    }

    /// Delete a product, handing its assignments to the board's
    /// "unassigned" product.
    ///
    /// The "unassigned" product itself cannot be deleted.
    pub async fn delete(pool: &DbPool, product_id: DbId) -> AppResult<RemovedProduct> {
        let mut tx = pool.begin().await?;

        let product = ProductRepo::find_by_id(&mut *tx, product_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Product", product_id))?;
        if product.name == UNASSIGNED_PRODUCT_NAME {
            return Err(CoreError::Validation(
                "The unassigned product cannot be deleted".to_string(),
            )
            .into());
        }
        let unassigned = ProductRepo::find_by_name(&mut *tx, product.board_id, UNASSIGNED_PRODUCT_NAME)
            .await?
            .ok_or_else(|| CoreError::not_found("Product", UNASSIGNED_PRODUCT_NAME))?;

        let reassigned = AssignmentRepo::move_to_product(&mut *tx, product.id, unassigned.id).await?;
        ProductRepo::delete(&mut *tx, product.id).await?;
        SpaceRepo::touch(&mut *tx, product.space_id).await?;
        tx.commit().await?;

        Ok(RemovedProduct {
            product,
            reassigned,
        })
    }
}

async fn ensure_name_available(
    pool: &DbPool,
    board_id: DbId,
    name: &str,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    let taken = ProductRepo::find_by_name(pool, board_id, name)
        .await?
        .is_some_and(|p| Some(p.id) != exclude_id);
    if taken {
        return Err(
            CoreError::Conflict(format!("A product named '{name}' already exists")).into(),
        );
    }
    Ok(())
}
