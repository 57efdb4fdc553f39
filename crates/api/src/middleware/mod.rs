//! Request extractors for authentication.
//!
//! - [`auth::AuthQuestUser`] -- validates a Bearer token with AuthQuest.

pub mod auth;
