//! Domain primitives shared by every PeopleMover crate.
//!
//! Nothing in here touches the database or the network: ids and timestamps,
//! the domain error type, and the naming/ordering rules for spaces, boards
//! and products.

pub mod board;
pub mod error;
pub mod types;
