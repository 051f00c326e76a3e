//! HTTP-level tests for recipient lookup and payout confirmation.

mod common;

use axum::http::StatusCode;
use common::{
    add_recipient, admin_token, agent_token, body_json, get, get_auth, post_json,
    post_json_auth, seeded_store, token_for, ADMIN_ID, AGENT_ID, OTHER_AGENT_EMAIL,
    OTHER_AGENT_ID,
};
use payout_core::recipient::PayoutStatus;
use payout_core::roles::Role;

const MARK_PAID: &str = "/api/v1/recipients/mark-paid";
const MARK_UNPAID: &str = "/api/v1/recipients/mark-unpaid";

#[tokio::test]
async fn lookup_normalizes_roll_number() {
    let store = seeded_store().await;
    add_recipient(&store, "MYS/35/53", "A. Kumar").await;
    let app = common::build_test_app(store);

    let response = get_auth(
        app,
        "/api/v1/recipients?roll_no=%20mys/35/53%20",
        &agent_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["roll_no"], "MYS/35/53");
    assert_eq!(json["data"]["name"], "A. Kumar");
    assert_eq!(json["data"]["status"], "unpaid");
    assert!(json["data"]["paid_at"].is_null());
}

#[tokio::test]
async fn lookup_unknown_roll_number_is_404() {
    let app = common::build_test_app(seeded_store().await);

    let response = get_auth(app, "/api/v1/recipients?roll_no=XX/1", &agent_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn blank_roll_number_is_400() {
    let app = common::build_test_app(seeded_store().await);

    let response = get_auth(app, "/api/v1/recipients?roll_no=%20%20", &agent_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn lookup_requires_sign_in() {
    let store = seeded_store().await;
    add_recipient(&store, "MYS/35/53", "A. Kumar").await;

    let response = get(common::build_test_app(store), "/api/v1/recipients?roll_no=MYS/35/53").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn mark_paid_without_token_changes_nothing() {
    let store = seeded_store().await;
    let roll_no = add_recipient(&store, "MYS/35/53", "A. Kumar").await;

    let body = serde_json::json!({ "roll_no": "MYS/35/53" });
    let response = post_json(common::build_test_app(store.clone()), MARK_PAID, body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let stored = store.recipient(&roll_no).await.unwrap();
    assert_eq!(stored.status, PayoutStatus::Unpaid);
}

#[tokio::test]
async fn agent_marks_paid_then_other_agent_cannot_revert_but_admin_can() {
    let store = seeded_store().await;
    let roll_no = add_recipient(&store, "MYS/35/53", "A. Kumar").await;
    let body = serde_json::json!({ "roll_no": "MYS/35/53" });

    // Agent A confirms the payout.
    let response = post_json_auth(
        common::build_test_app(store.clone()),
        MARK_PAID,
        body.clone(),
        &agent_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "paid");
    assert_eq!(json["data"]["updated_by"], AGENT_ID);
    assert!(json["data"]["paid_at"].is_string());

    // Agent B is not an admin.
    let response = post_json_auth(
        common::build_test_app(store.clone()),
        MARK_UNPAID,
        body.clone(),
        &token_for(OTHER_AGENT_ID, OTHER_AGENT_EMAIL),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");

    let stored = store.recipient(&roll_no).await.unwrap();
    assert_eq!(stored.status, PayoutStatus::Paid);
    assert_eq!(stored.updated_by, Some(AGENT_ID));

    // Admin C reverts.
    let response = post_json_auth(
        common::build_test_app(store.clone()),
        MARK_UNPAID,
        body,
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "unpaid");
    assert!(json["data"]["paid_at"].is_null());
    assert_eq!(json["data"]["updated_by"], ADMIN_ID);
}

#[tokio::test]
async fn marking_paid_twice_restamps() {
    let store = seeded_store().await;
    let roll_no = add_recipient(&store, "MYS/35/53", "A. Kumar").await;
    let body = serde_json::json!({ "roll_no": "mys/35/53" });

    let first = post_json_auth(
        common::build_test_app(store.clone()),
        MARK_PAID,
        body.clone(),
        &agent_token(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);
    let first_paid_at = store.recipient(&roll_no).await.unwrap().paid_at.unwrap();

    let second = post_json_auth(
        common::build_test_app(store.clone()),
        MARK_PAID,
        body,
        &admin_token(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::OK);

    let stored = store.recipient(&roll_no).await.unwrap();
    assert_eq!(stored.status, PayoutStatus::Paid);
    assert_eq!(stored.updated_by, Some(ADMIN_ID));
    assert!(stored.paid_at.unwrap() >= first_paid_at);
}

#[tokio::test]
async fn mark_paid_unknown_roll_number_is_404() {
    let app = common::build_test_app(seeded_store().await);

    let body = serde_json::json!({ "roll_no": "NOPE/1" });
    let response = post_json_auth(app, MARK_PAID, body, &agent_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn demoted_admin_loses_revert_immediately() {
    let store = seeded_store().await;
    add_recipient(&store, "MYS/35/53", "A. Kumar").await;
    let token = admin_token();
    let body = serde_json::json!({ "roll_no": "MYS/35/53" });

    store.set_role(ADMIN_ID, Some(Role::Agent)).await;

    let response = post_json_auth(common::build_test_app(store), MARK_UNPAID, body, &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
