//! Product entity model and DTOs.

use peoplemover_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub board_id: DbId,
    pub space_id: DbId,
    pub notes: String,
}

/// A product to create on a board as part of a board creation request.
///
/// `id` names the product this one is copied from. When it belongs to the
/// same space, its assignments move onto the copy. Any `board_id` sent by
/// the client is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    #[serde(default)]
    pub id: Option<DbId>,
    pub name: String,
    pub notes: Option<String>,
}

impl CreateProduct {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            notes: None,
        }
    }
}

/// Request body for adding a single product to an existing board.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProduct {
    pub board_id: DbId,
    #[validate(length(min = 1, message = "Product name must not be empty"))]
    pub name: String,
    pub notes: Option<String>,
}

impl From<&NewProduct> for CreateProduct {
    fn from(input: &NewProduct) -> Self {
        Self {
            id: None,
            name: input.name.clone(),
            notes: input.notes.clone(),
        }
    }
}

/// Request body for editing a product. `id`, when sent, must match the path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProduct {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, message = "Product name must not be empty"))]
    pub name: String,
    pub notes: Option<String>,
}
