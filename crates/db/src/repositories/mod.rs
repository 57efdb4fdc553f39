//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods take any Postgres executor as their first argument, so the same
//! call works against the pool (`&pool`) or inside a transaction
//! (`&mut *tx`).

pub mod assignment_repo;
pub mod board_repo;
pub mod person_repo;
pub mod product_repo;
pub mod space_repo;

pub use assignment_repo::AssignmentRepo;
pub use board_repo::BoardRepo;
pub use person_repo::PersonRepo;
pub use product_repo::ProductRepo;
pub use space_repo::SpaceRepo;
