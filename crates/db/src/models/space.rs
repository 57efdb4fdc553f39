//! Space entity model and response DTOs.

use peoplemover_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `spaces` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Space {
    pub id: DbId,
    pub name: String,
    /// Bumped whenever a board or product inside the space changes.
    pub last_modified_date: Timestamp,
    pub created_at: Timestamp,
}

/// Response body for `GET /api/space/{space_name}`.
#[derive(Debug, Clone, Serialize)]
pub struct SpaceTimestamp {
    pub last_modified_date: Timestamp,
}
