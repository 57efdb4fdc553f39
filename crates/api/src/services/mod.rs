//! Business operations that span several repositories.
//!
//! Services validate input, enforce the naming invariants from
//! [`peoplemover_core::board`] and own the transaction boundaries. Handlers
//! stay thin: extract, call one service method, serialize.

pub mod board;
pub mod product;
pub mod space;

pub use board::BoardService;
pub use product::ProductService;
pub use space::SpaceService;
