use std::sync::Arc;

use peoplemover_authquest::AuthQuestClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: peoplemover_db::DbPool,
    /// Client for the AuthQuest identity provider.
    pub authquest: Arc<AuthQuestClient>,
}
