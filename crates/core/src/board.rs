//! Naming and ordering rules for spaces, boards and products.
//!
//! Names are compared case-insensitively everywhere: two boards called
//! `"Team A"` and `"team a"` in the same space collide, and listings sort by
//! the lower-cased name.

use crate::error::CoreError;
use crate::types::DbId;

/// Product every new board gets when the caller supplies no products.
pub const UNASSIGNED_PRODUCT_NAME: &str = "unassigned";

/// Name of the board created alongside a new space.
pub const DEFAULT_BOARD_NAME: &str = "My Board";

/// Products created on the default board of a new space, in insertion order.
pub const NEW_SPACE_PRODUCT_NAMES: [&str; 2] = ["My Product", UNASSIGNED_PRODUCT_NAME];

/// Reject empty or whitespace-only names.
pub fn validate_name(entity: &str, name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{entity} name must not be empty"
        )));
    }
    Ok(())
}

/// Case-insensitive name equality.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Whether `name` is already taken by one of `existing` (`(id, name)` pairs).
///
/// The entry whose id equals `exclude_id` is skipped, so renaming a board to
/// its own current name is not a collision.
pub fn has_name_collision<'a, I>(existing: I, name: &str, exclude_id: Option<DbId>) -> bool
where
    I: IntoIterator<Item = (DbId, &'a str)>,
{
    existing
        .into_iter()
        .filter(|(id, _)| Some(*id) != exclude_id)
        .any(|(_, other)| names_match(other, name))
}

/// Sort in place by case-insensitive name, ascending.
pub fn sort_by_name<T, F>(items: &mut [T], name_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| name_of(item).to_lowercase());
}
