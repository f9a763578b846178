use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use goofycoin::{IdentityId, IdentitySummary, TransactionRecord};
use serde::{Deserialize, Serialize};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let public_dir = state.config.public_dir.clone();
    let assets_dir = state.config.assets_dir.clone();

    Router::new()
        // Pages
        .route_service("/", ServeFile::new(public_dir.join("index.html")))
        .route_service("/dashboard", ServeFile::new(public_dir.join("dashboard.html")))
        .nest_service("/js", ServeDir::new(assets_dir.join("js")))
        .nest_service("/css", ServeDir::new(assets_dir.join("css")))
        // Health
        .route("/health", get(health))
        // Identities
        .route("/api/user", post(create_user).get(list_users))
        // Ledger
        .route("/api/mint", post(mint))
        .route("/api/transfer", post(transfer))
        .route("/api/ledger", get(get_ledger))
        .route("/api/ledger/verify", get(verify_ledger))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============ Wire Types ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub user_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub user_id: IdentityId,
    pub amount: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub sender_id: IdentityId,
    pub receiver_id: IdentityId,
    pub amount: u64,
}

/// A ledger record as sent over the wire: hashes in lowercase hex,
/// payload as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView {
    pub timestamp: i64,
    pub payload: String,
    pub previous_hash: Option<String>,
    pub current_hash: String,
}

impl From<&TransactionRecord> for RecordView {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            timestamp: record.timestamp,
            payload: record.payload_text(),
            previous_hash: record.previous_hash.as_ref().map(|h| h.to_hex()),
            current_hash: record.current_hash.to_hex(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub identities: usize,
    pub transactions: usize,
}

// ============ Health ============

async fn health(State(state): State<Arc<AppState>>) -> ApiResult<Json<HealthResponse>> {
    let service = state.service.lock().await;
    let identities = service.registry().len()?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        identities,
        transactions: service.ledger().len(),
    }))
}

// ============ Identities ============

async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(req) = body?;
    if req.user_name.trim().is_empty() {
        return Err(ApiError::BadRequest("userName must not be empty".into()));
    }

    state.service.lock().await.create_identity(&req.user_name)?;
    Ok(StatusCode::OK)
}

async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<IdentitySummary>>> {
    let users = state.service.lock().await.identities()?;
    Ok(Json(users))
}

// ============ Ledger ============

async fn mint(
    State(state): State<Arc<AppState>>,
    body: Result<Json<MintRequest>, JsonRejection>,
) -> ApiResult<Json<RecordView>> {
    let Json(req) = body?;
    let record = state.service.lock().await.mint(&req.user_id, req.amount)?;
    Ok(Json(RecordView::from(&record)))
}

async fn transfer(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TransferRequest>, JsonRejection>,
) -> ApiResult<Json<RecordView>> {
    let Json(req) = body?;
    let record = state
        .service
        .lock()
        .await
        .transfer(&req.sender_id, &req.receiver_id, req.amount)?;
    Ok(Json(RecordView::from(&record)))
}

async fn get_ledger(State(state): State<Arc<AppState>>) -> Json<Vec<RecordView>> {
    let service = state.service.lock().await;
    Json(service.ledger().iter().map(RecordView::from).collect())
}

async fn verify_ledger(State(state): State<Arc<AppState>>) -> Json<VerifyResponse> {
    let service = state.service.lock().await;
    let result = service.verify_chain();
    Json(VerifyResponse {
        valid: result.is_ok(),
        length: service.ledger().len(),
        error: result.err().map(|e| e.to_string()),
    })
}
