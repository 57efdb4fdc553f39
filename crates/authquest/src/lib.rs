//! Client for the AuthQuest identity provider.
//!
//! PeopleMover does not issue or verify tokens itself: every token exchange,
//! validation, refresh, role grant and scope invitation is a synchronous REST
//! call to AuthQuest. This crate wraps those calls ([`client`]), their wire
//! formats ([`messages`]) and the per-space scope check ([`scope`]).

pub mod client;
pub mod config;
pub mod messages;
pub mod scope;

pub use client::{AuthQuestClient, AuthQuestError};
pub use config::AuthQuestConfig;
pub use messages::{AccessTokenResponse, AuthQuestJwt};
pub use scope::authenticate_scope;
