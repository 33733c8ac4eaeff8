//! API request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, warn};

use crate::classifier::{Label, ModelStats, SpamFilter};
use crate::error::{Result, SpamError};

/// Shared application state
pub struct AppState {
    pub filter: Arc<SpamFilter>,
}

/// Spam check response
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckSpamResponse {
    pub prediction: Label,
    pub probability: f64,
    pub is_spam: bool,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

/// Map a classifier error to a JSON error response without exposing internals
fn error_response(err: SpamError) -> Response {
    match err {
        SpamError::InvalidInput(msg) => {
            warn!("Rejected spam check: {}", msg);
            (StatusCode::BAD_REQUEST, Json(ApiError::new(&msg))).into_response()
        }
        other => {
            error!("Spam check failed: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Failed to classify message")),
            )
                .into_response()
        }
    }
}

/// Pull a non-empty `message` string out of the request body
fn extract_message(payload: std::result::Result<Json<Value>, JsonRejection>) -> Result<String> {
    let Json(body) = payload.map_err(|rejection| {
        warn!("Unreadable spam check body: {}", rejection.body_text());
        SpamError::InvalidInput("No JSON data provided".to_string())
    })?;

    match body.get("message") {
        None | Some(Value::Null) => Err(SpamError::InvalidInput("No message provided".to_string())),
        Some(Value::String(message)) if message.is_empty() => {
            Err(SpamError::InvalidInput("No message provided".to_string()))
        }
        Some(Value::String(message)) => Ok(message.clone()),
        Some(_) => Err(SpamError::InvalidInput("Message must be a string".to_string())),
    }
}

/// GET /health - Service health check
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "spam-filter",
        "version": env!("CARGO_PKG_VERSION"),
        "model_trained": state.filter.is_trained(),
    }))
}

/// POST /check_spam - Classify a message
pub async fn check_spam(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Response {
    let result = extract_message(payload).and_then(|message| state.filter.predict(&message));

    match result {
        Ok(prediction) => (
            StatusCode::OK,
            Json(CheckSpamResponse {
                prediction: prediction.label,
                probability: prediction.probability,
                is_spam: prediction.label.is_spam(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/stats - Trained model statistics
pub async fn stats(
    State(state): State<Arc<AppState>>,
) -> std::result::Result<Json<ModelStats>, (StatusCode, Json<ApiError>)> {
    state.filter.stats().map(Json).map_err(|e| {
        error!("Failed to compute model stats: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::new("Model unavailable")),
        )
    })
}
