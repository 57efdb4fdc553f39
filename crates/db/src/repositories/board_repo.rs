//! Repository for the `boards` table.
//!
//! Boards are always scoped to a space. Deleting a board here does not touch
//! its products; callers remove those first, in the same transaction.

use peoplemover_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::board::Board;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, space_id";

/// Provides CRUD operations for boards.
pub struct BoardRepo;

impl BoardRepo {
    /// Insert a new board, returning the created row (with no products).
    pub async fn create(
        executor: impl PgExecutor<'_>,
        name: &str,
        space_id: DbId,
    ) -> Result<Board, sqlx::Error> {
        let query = format!(
            "INSERT INTO boards (name, space_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Board>(&query)
            .bind(name)
            .bind(space_id)
            .fetch_one(executor)
            .await
    }

    /// Find a board by its internal ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Board>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM boards WHERE id = $1");
        sqlx::query_as::<_, Board>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a board by ID and lock its row until the transaction ends.
    pub async fn find_by_id_for_update(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Board>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM boards WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Board>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a board in a space by name, ignoring case.
    pub async fn find_by_name(
        executor: impl PgExecutor<'_>,
        space_id: DbId,
        name: &str,
    ) -> Result<Option<Board>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM boards
             WHERE space_id = $1 AND LOWER(name) = LOWER($2)"
        );
        sqlx::query_as::<_, Board>(&query)
            .bind(space_id)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// List the boards of a space ordered by case-insensitive name.
    pub async fn list_by_space(
        executor: impl PgExecutor<'_>,
        space_id: DbId,
    ) -> Result<Vec<Board>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM boards
             WHERE space_id = $1
             ORDER BY LOWER(name), id"
        );
        sqlx::query_as::<_, Board>(&query)
            .bind(space_id)
            .fetch_all(executor)
            .await
    }

    /// Count boards in a space.
    pub async fn count_by_space(
        executor: impl PgExecutor<'_>,
        space_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM boards WHERE space_id = $1")
            .bind(space_id)
            .fetch_one(executor)
            .await?;
        Ok(row.0)
    }

    /// Rename a board. Returns `None` if no row with the given `id` exists.
    pub async fn rename(
        executor: impl PgExecutor<'_>,
        id: DbId,
        name: &str,
    ) -> Result<Option<Board>, sqlx::Error> {
        let query = format!(
            "UPDATE boards SET name = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Board>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// Delete a board by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while the board still has products.
    pub async fn delete(executor: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM boards WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
