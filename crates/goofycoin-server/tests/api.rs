//! Router tests, driven in-process without binding a socket.

use std::path::PathBuf;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use goofycoin_server::{AppState, RecordView, ServerConfig};

fn test_config() -> ServerConfig {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    ServerConfig {
        public_dir: root.join("public"),
        assets_dir: root.join("assets"),
        ..ServerConfig::default()
    }
}

fn app() -> Router {
    goofycoin_server::create_router(AppState::new(test_config()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn create_users(app: &Router, names: &[&str]) -> Vec<String> {
    for name in names {
        let (status, body) = post_json(app, "/api/user", json!({ "userName": name })).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }
    let (_, body) = get(app, "/api/user").await;
    let users: Vec<Value> = serde_json::from_slice(&body).unwrap();
    users
        .iter()
        .map(|u| u["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_endpoint() {
    let app = app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health, json!({ "status": "ok", "identities": 0, "transactions": 0 }));
}

#[tokio::test]
async fn users_are_listed_in_creation_order_without_keys() {
    let app = app();
    create_users(&app, &["goofy", "alice", "bob"]).await;

    let (status, body) = get(&app, "/api/user").await;
    assert_eq!(status, StatusCode::OK);

    let users: Vec<Value> = serde_json::from_slice(&body).unwrap();
    let names: Vec<&str> = users.iter().map(|u| u["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["goofy", "alice", "bob"]);

    for user in &users {
        let object = user.as_object().unwrap();
        assert_eq!(object.len(), 2, "only id and name are exposed: {user}");
        assert!(user["id"].as_str().unwrap().parse::<goofycoin::IdentityId>().is_ok());
    }
}

#[tokio::test]
async fn malformed_user_body_is_bad_request() {
    let app = app();

    let (status, _) = post_json(&app, "/api/user", json!({ "name": "goofy" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/user")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(&app, "/api/user", json!({ "userName": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mint_transfer_and_verify() {
    let app = app();
    let ids = create_users(&app, &["goofy", "alice", "bob", "claire"]).await;

    let (status, body) =
        post_json(&app, "/api/mint", json!({ "userId": ids[0], "amount": 10 })).await;
    assert_eq!(status, StatusCode::OK);
    let mint: RecordView = serde_json::from_slice(&body).unwrap();
    assert!(mint.payload.starts_with("goofy created 10 coins with mint-id "));
    assert!(mint.previous_hash.is_none());

    let (status, body) = post_json(
        &app,
        "/api/transfer",
        json!({ "senderId": ids[1], "receiverId": ids[2], "amount": 10 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let transfer: RecordView = serde_json::from_slice(&body).unwrap();
    assert_eq!(transfer.payload, "alice paid bob 10 coins");
    assert_eq!(transfer.previous_hash.as_deref(), Some(mint.current_hash.as_str()));

    let (status, _) = post_json(
        &app,
        "/api/transfer",
        json!({ "senderId": ids[2], "receiverId": ids[3], "amount": 10 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/api/ledger").await;
    let ledger: Vec<RecordView> = serde_json::from_slice(&body).unwrap();
    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger[0], mint);
    assert_eq!(ledger[1], transfer);
    assert_eq!(ledger[0].current_hash.len(), 64);

    let (_, body) = get(&app, "/api/ledger/verify").await;
    let verify: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(verify, json!({ "valid": true, "length": 3 }));

    let (_, body) = get(&app, "/health").await;
    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["identities"], 4);
    assert_eq!(health["transactions"], 3);
}

#[tokio::test]
async fn non_genesis_mint_is_forbidden() {
    let app = app();
    let ids = create_users(&app, &["goofy", "alice"]).await;

    let (status, body) =
        post_json(&app, "/api/mint", json!({ "userId": ids[1], "amount": 10 })).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert!(error["error"].as_str().unwrap().contains("invalid minter"));

    let (_, body) = get(&app, "/api/ledger").await;
    let ledger: Vec<Value> = serde_json::from_slice(&body).unwrap();
    assert!(ledger.is_empty());
}

#[tokio::test]
async fn unknown_identity_is_not_found() {
    let app = app();
    let ids = create_users(&app, &["goofy"]).await;
    let stranger = "00000000-0000-4000-8000-000000000000";

    let (status, _) = post_json(
        &app,
        "/api/transfer",
        json!({ "senderId": ids[0], "receiverId": stranger, "amount": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bad_ids_and_amounts_are_bad_requests() {
    let app = app();
    let ids = create_users(&app, &["goofy"]).await;

    let (status, _) =
        post_json(&app, "/api/mint", json!({ "userId": "goofy", "amount": 10 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
        post_json(&app, "/api/mint", json!({ "userId": ids[0], "amount": -5 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn static_pages_are_served() {
    let app = app();

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("<title>Goofycoin</title>"));

    let (status, _) = get(&app, "/dashboard").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, "/js/script.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("createUser"));

    let (status, _) = get(&app, "/css/style.css").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&app, "/css/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
