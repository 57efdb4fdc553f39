//! Repository for the `assignments` table.

use peoplemover_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::assignment::{Assignment, CreateAssignment};

const COLUMNS: &str = "id, person_id, product_id, placeholder";

/// Provides the assignment operations the board lifecycle needs.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert a new assignment, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateAssignment,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assignments (person_id, product_id, placeholder)
             VALUES ($1, $2, COALESCE($3, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(input.person_id)
            .bind(input.product_id)
            .bind(input.placeholder)
            .fetch_one(executor)
            .await
    }

    /// List the assignments on a product.
    pub async fn list_by_product(
        executor: impl PgExecutor<'_>,
        product_id: DbId,
    ) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments WHERE product_id = $1 ORDER BY id");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(product_id)
            .fetch_all(executor)
            .await
    }

    /// Move every assignment on one product onto another.
    ///
    /// Returns the number of rows moved.
    pub async fn move_to_product(
        executor: impl PgExecutor<'_>,
        from_product_id: DbId,
        to_product_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE assignments SET product_id = $2 WHERE product_id = $1")
            .bind(from_product_id)
            .bind(to_product_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Count the assignments on any product of a board.
    pub async fn count_for_board(
        executor: impl PgExecutor<'_>,
        board_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM assignments a
             JOIN products p ON p.id = a.product_id
             WHERE p.board_id = $1",
        )
        .bind(board_id)
        .fetch_one(executor)
        .await?;
        Ok(row.0)
    }

    /// Delete every assignment on any product of a board.
    ///
    /// Returns the number of rows removed.
    pub async fn delete_for_board(
        executor: impl PgExecutor<'_>,
        board_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM assignments
             WHERE product_id IN (SELECT id FROM products WHERE board_id = $1)",
        )
        .bind(board_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }
}
