//! Request handlers.
//!
//! Handlers extract path/body parameters, call one service (or the AuthQuest
//! client) and map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod board;
pub mod product;
pub mod space;
