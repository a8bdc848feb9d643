use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::errors::JournalError;
use crate::models::{
    CreatedEntry, EntryUpdate, JournalEntry, JournalStats, NewEntry, PatternAnalysis,
    SentimentResult,
};
use crate::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub total_entries: usize,
    pub available_endpoints: Vec<String>,
}

fn status_for(err: &JournalError) -> StatusCode {
    match err {
        JournalError::EntryNotFound(_) => StatusCode::NOT_FOUND,
        JournalError::InvalidEntry(_) | JournalError::InvalidImport(_) | JournalError::JsonError(_) => {
            StatusCode::BAD_REQUEST
        }
        JournalError::TaskError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reject(context: &str, err: JournalError) -> StatusCode {
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!("{}: {}", context, err);
    } else {
        tracing::warn!("{}: {}", context, err);
    }
    status
}

// Analyze free text without saving it
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<SentimentResult>, StatusCode> {
    state
        .journal
        .analyze_text(&req.text)
        .await
        .map(Json)
        .map_err(|e| reject("Analysis failed", e))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<JournalEntry>>, StatusCode> {
    state
        .journal
        .entries(params.q.as_deref())
        .await
        .map(Json)
        .map_err(|e| reject("Listing entries failed", e))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(new_entry): Json<NewEntry>,
) -> Result<(StatusCode, Json<CreatedEntry>), StatusCode> {
    let created = state
        .journal
        .create_entry(new_entry)
        .await
        .map_err(|e| reject("Saving entry failed", e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JournalEntry>, StatusCode> {
    state
        .journal
        .entry(&id)
        .await
        .map(Json)
        .map_err(|e| reject("Loading entry failed", e))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<EntryUpdate>,
) -> Result<Json<JournalEntry>, StatusCode> {
    state
        .journal
        .update_entry(&id, update)
        .await
        .map(Json)
        .map_err(|e| reject("Updating entry failed", e))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    state
        .journal
        .delete_entry(&id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| reject("Deleting entry failed", e))
}

pub async fn clear_entries(State(state): State<AppState>) -> Result<StatusCode, StatusCode> {
    state
        .journal
        .clear()
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| reject("Clearing entries failed", e))
}

pub async fn insights(State(state): State<AppState>) -> Result<Json<PatternAnalysis>, StatusCode> {
    state
        .journal
        .insights()
        .await
        .map(Json)
        .map_err(|e| reject("Computing insights failed", e))
}

pub async fn stats(State(state): State<AppState>) -> Result<Json<JournalStats>, StatusCode> {
    state
        .journal
        .stats()
        .await
        .map(Json)
        .map_err(|e| reject("Computing stats failed", e))
}

pub async fn export_entries(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let body = state
        .journal
        .export()
        .await
        .map_err(|e| reject("Export failed", e))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

pub async fn import_entries(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<Value>, StatusCode> {
    let imported = state
        .journal
        .import(&body)
        .await
        .map_err(|e| reject("Import failed", e))?;
    Ok(Json(json!({ "status": "success", "imported": imported })))
}

pub async fn load_demo(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let loaded = state
        .journal
        .load_demo_data()
        .await
        .map_err(|e| reject("Loading demo data failed", e))?;
    Ok(Json(json!({ "status": "success", "loaded": loaded })))
}

// Service health check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "MindSafe Journal API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn get_status(State(state): State<AppState>) -> Result<Json<StatusResponse>, StatusCode> {
    let total_entries = state
        .journal
        .stats()
        .await
        .map_err(|e| reject("Status failed", e))?
        .total_entries;

    Ok(Json(StatusResponse {
        status: "ready".to_string(),
        total_entries,
        available_endpoints: vec![
            "/".to_string(),
            "/status".to_string(),
            "/api/analyze".to_string(),
            "/api/entries".to_string(),
            "/api/entries/:id".to_string(),
            "/api/insights".to_string(),
            "/api/stats".to_string(),
            "/api/export".to_string(),
            "/api/import".to_string(),
            "/api/demo".to_string(),
        ],
    }))
}

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/status", get(get_status))
        .route("/api/analyze", post(analyze_text))
        .route(
            "/api/entries",
            get(list_entries).post(create_entry).delete(clear_entries),
        )
        .route(
            "/api/entries/:id",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
        .route("/api/insights", get(insights))
        .route("/api/stats", get(stats))
        .route("/api/export", get(export_entries))
        .route("/api/import", post(import_entries))
        .route("/api/demo", post(load_demo))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
