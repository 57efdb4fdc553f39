//! REST API client for the AuthQuest endpoints.
//!
//! One method per provider endpoint, using [`reqwest`]. Non-2xx answers are
//! surfaced as [`AuthQuestError::Api`] with the provider's status and body so
//! callers can hand them to their own clients unchanged. Nothing is retried.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AuthQuestConfig;
use crate::messages::{
    AccessTokenRequest, AccessTokenResponse, AuthQuestJwt, InviteScopeRequest,
    RefreshTokenRequest, RoleRequest, ValidateAccessTokenRequest,
};

const ACCESS_TOKEN_PATH: &str = "/oauth/access_token";
const VALIDATE_PATH: &str = "/oauth/access_token/validate";
const REFRESH_PATH: &str = "/oauth/access_token/refresh";
const USER_ROLE_PATH: &str = "/client/user/role";
const INVITE_SCOPE_PATH: &str = "/invite/scope";

/// Errors from the AuthQuest REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum AuthQuestError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("AuthQuest request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// AuthQuest returned a non-2xx status code.
    #[error("AuthQuest API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

/// HTTP client bound to one AuthQuest deployment and one set of client
/// credentials.
#[derive(Debug, Clone)]
pub struct AuthQuestClient {
    client: reqwest::Client,
    config: AuthQuestConfig,
}

impl AuthQuestClient {
    /// Build a client whose requests time out after `config.timeout`.
    pub fn new(config: AuthQuestConfig) -> Result<Self, AuthQuestError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Exchange an authorization code for an access token.
    pub async fn create_access_token(
        &self,
        access_code: &str,
    ) -> Result<AccessTokenResponse, AuthQuestError> {
        let body = AccessTokenRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            access_code,
        };
        self.post_json(ACCESS_TOKEN_PATH, &body).await
    }

    /// Validate an access token, returning its decoded claims.
    pub async fn validate_access_token(
        &self,
        access_token: &str,
    ) -> Result<AuthQuestJwt, AuthQuestError> {
        let body = ValidateAccessTokenRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            access_token,
        };
        self.post_json(VALIDATE_PATH, &body).await
    }

    /// Trade an access token for a fresh one.
    pub async fn refresh_access_token(
        &self,
        access_token: &str,
    ) -> Result<AccessTokenResponse, AuthQuestError> {
        let body = RefreshTokenRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            access_token,
        };
        self.post_json(REFRESH_PATH, &body).await
    }

    /// Grant the token's user the scope for `space_name`.
    ///
    /// Returns the provider's response payload as-is.
    pub async fn update_user_role(
        &self,
        access_token: &str,
        space_name: &str,
    ) -> Result<serde_json::Value, AuthQuestError> {
        let body = RoleRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            access_token,
            role: space_name,
        };
        let response = self
            .client
            .put(self.config.endpoint(USER_ROLE_PATH))
            .json(&body)
            .send()
            .await?;
        Self::parse_response(USER_ROLE_PATH, response).await
    }

    /// Invite `emails` to the scope of `space_name`.
    pub async fn invite_users_to_scope(
        &self,
        space_name: &str,
        emails: &[String],
    ) -> Result<(), AuthQuestError> {
        let body = InviteScopeRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            user_emails: emails,
            scope: space_name,
        };
        let response = self
            .client
            .put(self.config.endpoint(INVITE_SCOPE_PATH))
            .json(&body)
            .send()
            .await?;
        Self::ensure_success(INVITE_SCOPE_PATH, response).await?;
        Ok(())
    }

    /// Whether the provider answers HTTP at all.
    ///
    /// Any status counts as reachable; only transport failures do not.
    pub async fn is_reachable(&self) -> bool {
        match self.client.get(self.config.endpoint("/")).send().await {
            Ok(_) => true,
            Err(error) => {
                tracing::warn!(%error, "AuthQuest is unreachable");
                false
            }
        }
    }

    // ---- private helpers ----

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AuthQuestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.config.endpoint(path))
            .json(body)
            .send()
            .await?;
        Self::parse_response(path, response).await
    }

    /// Return the response unchanged on a 2xx status, otherwise an
    /// [`AuthQuestError::Api`] carrying the status and body text.
    async fn ensure_success(
        path: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, AuthQuestError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(path, status = status.as_u16(), "AuthQuest rejected request");
            return Err(AuthQuestError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, AuthQuestError> {
        let response = Self::ensure_success(path, response).await?;
        Ok(response.json::<T>().await?)
    }
}
