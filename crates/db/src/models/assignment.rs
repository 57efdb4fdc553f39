//! Assignment entity model and DTOs.

use peoplemover_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `assignments` table: one person placed on one product.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub person_id: DbId,
    pub product_id: DbId,
    pub placeholder: bool,
}

/// DTO for creating an assignment. `placeholder` defaults to `false`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignment {
    pub person_id: DbId,
    pub product_id: DbId,
    pub placeholder: Option<bool>,
}
