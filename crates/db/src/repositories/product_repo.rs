//! Repository for the `products` table.

use peoplemover_core::types::DbId;
use sqlx::{PgConnection, PgExecutor};

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, board_id, space_id, notes";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a product on a board, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateProduct,
        board_id: DbId,
        space_id: DbId,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, board_id, space_id, notes)
             VALUES ($1, $2, $3, COALESCE($4, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(board_id)
            .bind(space_id)
            .bind(&input.notes)
            .fetch_one(executor)
            .await
    }

    /// Create one product per entry of `products` on the given board.
    ///
    /// Runs on a single connection so callers can keep the inserts inside
    /// their transaction. Returns the rows in input order.
    pub async fn copy_to_board(
        conn: &mut PgConnection,
        products: &[CreateProduct],
        board_id: DbId,
        space_id: DbId,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let mut created = Vec::with_capacity(products.len());
        for product in products {
            created.push(Self::create(&mut *conn, product, board_id, space_id).await?);
        }
        Ok(created)
    }

    /// Find a product by its internal ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a product on a board by exact name.
    pub async fn find_by_name(
        executor: impl PgExecutor<'_>,
        board_id: DbId,
        name: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE board_id = $1 AND name = $2");
        sqlx::query_as::<_, Product>(&query)
            .bind(board_id)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// Update a product's name and notes. Returns `None` if no row exists.
    ///
    /// Notes are left untouched when the update carries none.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET name = $2, notes = COALESCE($3, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.notes)
            .fetch_optional(executor)
            .await
    }

    /// Delete a single product. Returns `true` if a row was removed.
    pub async fn delete(executor: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the products of a board ordered by case-insensitive name.
    pub async fn list_by_board(
        executor: impl PgExecutor<'_>,
        board_id: DbId,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE board_id = $1
             ORDER BY LOWER(name), id"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(board_id)
            .fetch_all(executor)
            .await
    }

    /// List every product in a space ordered by case-insensitive name.
    pub async fn list_by_space(
        executor: impl PgExecutor<'_>,
        space_id: DbId,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE space_id = $1
             ORDER BY LOWER(name), id"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(space_id)
            .fetch_all(executor)
            .await
    }

    /// Count the products on a board.
    pub async fn count_by_board(
        executor: impl PgExecutor<'_>,
        board_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products WHERE board_id = $1")
            .bind(board_id)
            .fetch_one(executor)
            .await?;
        Ok(row.0)
    }

    /// Delete every product on a board. Returns the number of rows removed.
    ///
    /// Fails with a foreign key violation while any of them still has
    /// assignments; remove those first.
    pub async fn delete_for_board(
        executor: impl PgExecutor<'_>,
        board_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE board_id = $1")
            .bind(board_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
