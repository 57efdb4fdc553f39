//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the request bodies that create or change it

pub mod assignment;
pub mod board;
pub mod person;
pub mod product;
pub mod space;
