//! Repository for the `people` table.

use peoplemover_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::person::{CreatePerson, Person};

const COLUMNS: &str = "id, name, space_id";

/// Provides the person operations the board lifecycle needs.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreatePerson,
    ) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO people (name, space_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(input.space_id)
            .fetch_one(executor)
            .await
    }

    /// Find a person by its internal ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
