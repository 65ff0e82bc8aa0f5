//! HTTP server.
//!
//! Exposes the roster over a small JSON API. The dataset is loaded once at
//! startup and shared read-only with every handler.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/health` | Health check (returns version) |
//! | `GET`  | `/employees/search` | Exact-match filter: `skill` (repeatable), `min_experience`, `availability` |
//! | `POST` | `/chat` | Free-text query: `{"query": "...", "top_k": 5}` |
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "min_experience must be an integer" } }
//! ```
//!
//! Error codes: `bad_request` (400), `invalid_request` (422).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so the browser chat
//! frontend can be served from anywhere.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use roster_match_core::models::EmployeeRecord;
use roster_match_core::roster::Roster;

use crate::chat::{answer_query, ChatResponse};
use crate::config::Config;
use crate::dataset;
use crate::directory::{search_directory, DirectoryFilter};

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
struct AppState {
    /// Immutable roster snapshot.
    roster: Arc<Roster>,
    /// Used when a chat request omits `top_k`.
    default_top_k: i64,
}

/// Build the router for `roster`.
///
/// Exposed separately from [`run_server`] so tests and embedding binaries
/// can serve it on a listener of their choosing.
pub fn router(config: &Config, roster: Arc<Roster>) -> Router {
    let state = AppState {
        roster,
        default_top_k: config.retrieval.default_top_k,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/employees/search", get(handle_directory_search))
        .route("/chat", post(handle_chat))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Loads the dataset named in `[data].path` and serves until Ctrl-C.
///
/// This is the entry point used by `roster serve`.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let roster = Arc::new(dataset::load_from_config(config)?);
    run_server_with_roster(config, roster).await
}

/// Serves an already-loaded roster on `[server].bind`.
pub async fn run_server_with_roster(config: &Config, roster: Arc<Roster>) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();
    let employees = roster.len();
    let app = router(config, roster);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, employees, "roster server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("roster server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    /// Machine-readable error code (e.g., `"bad_request"`).
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

fn invalid_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        code: "invalid_request".to_string(),
        message: message.into(),
    }
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    /// Always `"ok"` when the server is running.
    status: String,
    /// The crate version from `Cargo.toml`.
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /employees/search ============

/// Builds a [`DirectoryFilter`] from raw query pairs.
///
/// `skill` may repeat (`?skill=python&skill=aws`); unknown keys are ignored.
fn parse_directory_filter(pairs: Vec<(String, String)>) -> Result<DirectoryFilter, AppError> {
    let mut filter = DirectoryFilter::default();

    for (key, value) in pairs {
        match key.as_str() {
            "skill" => filter.skills.push(value),
            "min_experience" => {
                let min = value.trim().parse::<i64>().map_err(|_| {
                    bad_request(format!("min_experience must be an integer, got '{}'", value))
                })?;
                filter.min_experience = Some(min);
            }
            "availability" => filter.availability = Some(value),
            _ => {}
        }
    }

    Ok(filter)
}

async fn handle_directory_search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<EmployeeRecord>>, AppError> {
    let filter = parse_directory_filter(pairs)?;
    Ok(Json(search_directory(&state.roster, &filter)))
}

// ============ POST /chat ============

#[derive(Debug, Deserialize)]
struct ChatRequest {
    query: String,
    #[serde(default)]
    top_k: Option<i64>,
}

/// Handler for `POST /chat`.
///
/// The ranking itself never fails; only a malformed body is rejected.
async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(req) = payload.map_err(|e| invalid_request(e.body_text()))?;
    let top_k = req.top_k.unwrap_or(state.default_top_k);
    Ok(Json(answer_query(&state.roster, &req.query, top_k)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_directory_filter_repeated_skills() {
        let filter = parse_directory_filter(pairs(&[
            ("skill", "Python"),
            ("skill", "AWS"),
            ("min_experience", "3"),
            ("availability", "busy"),
            ("page", "2"),
        ]))
        .ok()
        .unwrap();
        assert_eq!(filter.skills, vec!["Python", "AWS"]);
        assert_eq!(filter.min_experience, Some(3));
        assert_eq!(filter.availability.as_deref(), Some("busy"));
    }

    #[test]
    fn test_parse_directory_filter_rejects_bad_integer() {
        let err = parse_directory_filter(pairs(&[("min_experience", "three")]))
            .err()
            .unwrap();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("three"));
    }
}
