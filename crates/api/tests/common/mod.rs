#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use payout_api::auth::jwt::{generate_access_token, JwtConfig};
use payout_api::auth::password::hash_password;
use payout_api::config::ServerConfig;
use payout_api::router::build_app_router;
use payout_api::state::AppState;
use payout_core::account::Account;
use payout_core::memory::MemoryStore;
use payout_core::recipient::Recipient;
use payout_core::roles::Role;
use payout_core::roll_no::RollNo;
use payout_core::types::DbId;

pub const ADMIN_ID: DbId = 1;
pub const ADMIN_EMAIL: &str = "admin@test.com";
pub const AGENT_ID: DbId = 2;
pub const AGENT_EMAIL: &str = "agent@test.com";
pub const OTHER_AGENT_ID: DbId = 3;
pub const OTHER_AGENT_EMAIL: &str = "agent-b@test.com";
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        report_page_size: 10,
        jwt: JwtConfig {
            secret: "test-secret-for-http-tests".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// An in-memory store with one admin and two agents. Agents have no role
/// row, so they fall back to the default role.
pub async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");

    for (id, email) in [
        (ADMIN_ID, ADMIN_EMAIL),
        (AGENT_ID, AGENT_EMAIL),
        (OTHER_AGENT_ID, OTHER_AGENT_EMAIL),
    ] {
        store
            .insert_account(Account {
                id,
                email: email.to_string(),
                password_hash: password_hash.clone(),
            })
            .await;
    }
    store.set_role(ADMIN_ID, Some(Role::Admin)).await;

    store
}

/// Add an unpaid recipient and return its normalized roll number.
pub async fn add_recipient(store: &MemoryStore, roll_no: &str, name: &str) -> RollNo {
    let roll_no = RollNo::parse(roll_no).expect("valid roll number");
    store
        .insert_recipient(Recipient::unpaid(roll_no.clone(), name, "12 Main Road"))
        .await;
    roll_no
}

/// Build the full application router over the given store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    build_app_router(AppState::new(store, test_config()))
}

/// Mint an access token for a seeded user, skipping the login round-trip.
pub fn token_for(user_id: DbId, email: &str) -> String {
    generate_access_token(user_id, email, &test_config().jwt).expect("token generation")
}

pub fn admin_token() -> String {
    token_for(ADMIN_ID, ADMIN_EMAIL)
}

pub fn agent_token() -> String {
    token_for(AGENT_ID, AGENT_EMAIL)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<axum::body::Body> {
    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
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
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let text = body_text(response).await;
    serde_json::from_str(&text).expect("body should be JSON")
}
