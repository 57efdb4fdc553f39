//! Repository for the `spaces` table.

use peoplemover_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::space::Space;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, last_modified_date, created_at";

/// Provides lookups and timestamp maintenance for spaces.
pub struct SpaceRepo;

impl SpaceRepo {
    /// Insert a new space, returning the created row.
    pub async fn create(executor: impl PgExecutor<'_>, name: &str) -> Result<Space, sqlx::Error> {
        let query = format!(
            "INSERT INTO spaces (name, last_modified_date)
             VALUES ($1, NOW())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Space>(&query)
            .bind(name)
            .fetch_one(executor)
            .await
    }

    /// Find a space by its internal ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Space>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM spaces WHERE id = $1");
        sqlx::query_as::<_, Space>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a space by name, ignoring case.
    pub async fn find_by_name(
        executor: impl PgExecutor<'_>,
        name: &str,
    ) -> Result<Option<Space>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM spaces WHERE LOWER(name) = LOWER($1)");
        sqlx::query_as::<_, Space>(&query)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// List all spaces in creation order.
    pub async fn list(executor: impl PgExecutor<'_>) -> Result<Vec<Space>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM spaces ORDER BY id");
        sqlx::query_as::<_, Space>(&query).fetch_all(executor).await
    }

    /// List the spaces whose names match any of `names`, ignoring case.
    pub async fn list_by_names(
        executor: impl PgExecutor<'_>,
        names: &[String],
    ) -> Result<Vec<Space>, sqlx::Error> {
        let lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
        let query = format!("SELECT {COLUMNS} FROM spaces WHERE LOWER(name) = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Space>(&query)
            .bind(lowered)
            .fetch_all(executor)
            .await
    }

    /// Set `last_modified_date` to now. Returns `true` if the space exists.
    pub async fn touch(executor: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE spaces SET last_modified_date = NOW() WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
