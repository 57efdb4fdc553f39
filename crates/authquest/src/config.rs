use std::time::Duration;

/// Default timeout for a single AuthQuest request.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings and client credentials for AuthQuest.
///
/// Passed to [`AuthQuestClient::new`](crate::AuthQuestClient::new); the
/// credentials are attached to every request.
#[derive(Debug, Clone)]
pub struct AuthQuestConfig {
    /// Base URL the endpoint paths are appended to, e.g.
    /// `https://authquest.example.com/api`. A trailing slash is ignored.
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl AuthQuestConfig {
    /// Load AuthQuest settings from environment variables.
    ///
    /// | Env Var                   | Required | Default |
    /// |---------------------------|----------|---------|
    /// | `AUTHQUEST_URL`           | **yes**  | --      |
    /// | `AUTHQUEST_CLIENT_ID`     | **yes**  | --      |
    /// | `AUTHQUEST_CLIENT_SECRET` | **yes**  | --      |
    /// | `AUTHQUEST_TIMEOUT_SECS`  | no       | `10`    |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or empty, or if the timeout
    /// is not a valid `u64`.
    pub fn from_env() -> Self {
        let base_url = required_var("AUTHQUEST_URL");
        let client_id = required_var("AUTHQUEST_CLIENT_ID");
        let client_secret = required_var("AUTHQUEST_CLIENT_SECRET");

        let timeout_secs: u64 = std::env::var("AUTHQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("AUTHQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            client_id,
            client_secret,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Join `path` (which starts with `/`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn required_var(name: &str) -> String {
    let value = std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set in the environment"));
    assert!(!value.is_empty(), "{name} must not be empty");
    value
}
