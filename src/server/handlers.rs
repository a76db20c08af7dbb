// HTTP request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use super::ChatServer;

/// Create the main application router
pub fn create_router(server: Arc<ChatServer>) -> Router {
    Router::new()
        // Browser chat page
        .route("/", get(home))
        // Chat API; /chat is kept as an alias for older clients
        .route("/api/chat", post(handle_chat))
        .route("/chat", post(handle_chat))
        // Health
        .route("/api/health", get(health_check))
        .fallback(not_found)
        .with_state(server)
}

/// Request body for the chat endpoints
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message; validated for presence and non-emptiness here,
    /// before the engine is ever invoked
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body for the chat endpoints
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub status: String,
    pub timestamp: i64,
}

/// Handle POST /api/chat - Main chat endpoint
///
/// Any rejection from the JSON extractor (wrong content type, unparseable
/// body) is reported the same way as an absent `message` field.
async fn handle_chat(
    State(server): State<Arc<ChatServer>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = match payload {
        Ok(Json(ChatRequest {
            message: Some(message),
        })) => message,
        _ => return Err(ApiError::BadRequest("No message provided")),
    };

    let message = message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("Empty message"));
    }

    let engine = server.engine();
    let kind = engine.classify(message);
    let response = engine.pick(kind);

    tracing::debug!(category = %engine.label(kind), "Selected response");

    Ok(Json(ChatResponse {
        response: response.to_string(),
        status: "success".to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    }))
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub port: u16,
}

/// Handle GET /api/health - Health check endpoint
pub async fn health_check(State(server): State<Arc<ChatServer>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: "MindBridge API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        port: server.config().port,
    })
}

/// Handle GET / - Serve the embedded chat page
async fn home() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Fallback for unmatched routes
async fn not_found() -> Response {
    let body = serde_json::json!({ "error": "Endpoint not found" });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

/// Application error wrapper for proper HTTP error responses
///
/// Internal failures are logged but never leaked: clients only ever see
/// the fixed error strings.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                let body = serde_json::json!({ "error": message });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Internal(error) => {
                tracing::error!(error = %error, "Request failed");

                let body = serde_json::json!({ "error": "Internal server error" });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
