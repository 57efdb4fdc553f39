//! Board entity model and DTOs.

use peoplemover_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::product::{CreateProduct, Product};

/// A row from the `boards` table.
///
/// `products` is not a column: services fill it in, sorted by
/// case-insensitive name, before the board is returned to a client.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Board {
    pub id: DbId,
    pub name: String,
    pub space_id: DbId,
    #[sqlx(skip)]
    pub products: Vec<Product>,
}

/// Request body for creating a board in a space.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBoard {
    /// Clients copying a board may echo its id back; an id that already
    /// exists is rejected as a conflict.
    pub id: Option<DbId>,
    #[validate(length(min = 1, message = "Board name must not be empty"))]
    pub name: String,
    /// Products to copy onto the new board. Empty means a single
    /// "unassigned" product is created instead.
    #[serde(default)]
    pub products: Vec<CreateProduct>,
}

/// Request body for renaming a board.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBoard {
    #[validate(length(min = 1, message = "Board name must not be empty"))]
    pub name: String,
}
