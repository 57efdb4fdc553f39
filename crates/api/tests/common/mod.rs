#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use peoplemover_authquest::{AuthQuestClient, AuthQuestConfig};
use sqlx::PgPool;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use peoplemover_api::config::ServerConfig;
use peoplemover_api::router::build_app_router;
use peoplemover_api::state::AppState;

/// Build a test `ServerConfig` pointing AuthQuest at `authquest_url`.
pub fn test_config(authquest_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        authquest: AuthQuestConfig {
            base_url: authquest_url.to_string(),
            client_id: "CLIENT_ID_123".to_string(),
            client_secret: "CLIENT_SECRET_123".to_string(),
            timeout: Duration::from_secs(5),
        },
    }
}

/// Build the full application router against the given AuthQuest base URL.
pub fn build_app(pool: PgPool, authquest_url: &str) -> Router {
    let config = test_config(authquest_url);
    let authquest = AuthQuestClient::new(config.authquest.clone()).unwrap();

    let state = AppState {
        pool,
        authquest: Arc::new(authquest),
    };
    build_app_router(state, &config)
}

/// Build the application with a fresh stub AuthQuest server.
///
/// Tests mount the provider responses they need on the returned server.
pub async fn build_test_app(pool: PgPool) -> (Router, MockServer) {
    let authquest = MockServer::start().await;
    let app = build_app(pool, &authquest.uri());
    (app, authquest)
}

/// Stub the validate endpoint to accept any token with the given scopes.
pub async fn mock_valid_token(server: &MockServer, scopes: &[&str]) {
    Mock::given(method("POST"))
        .and(path("/oauth/access_token/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user_id": "user1",
            "scopes": scopes,
            "iss": "AuthQuest",
            "sub": "user1",
        })))
        .mount(server)
        .await;
}

/// Stub the validate endpoint to reject every token.
pub async fn mock_rejected_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/access_token/validate"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_text(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::put(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
