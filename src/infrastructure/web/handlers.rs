//! Route handlers for the monkey API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::domain::models::Monkey;
use crate::domain::ports::{ConnectivityService, MonkeyService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub monkey_service: Arc<dyn MonkeyService>,
    pub connectivity: Arc<dyn ConnectivityService>,
}

/// Error body returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// `GET /api/monkeys`
pub async fn list_monkeys(State(state): State<AppState>) -> Json<Vec<Monkey>> {
    let monkeys = state.monkey_service.get_monkeys().await;
    debug!(count = monkeys.len(), "serving monkey list");
    Json(monkeys)
}

/// `GET /api/monkeys/:name`
///
/// Only consults the cache; a cold server answers 404 until the list has
/// been fetched once.
pub async fn get_monkey(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Monkey>, ApiError> {
    state
        .monkey_service
        .get_monkey_by_name(&name)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Monkey not found: {name}")))
}

/// `GET /api/connectivity`
pub async fn connectivity_status(State(state): State<AppState>) -> impl IntoResponse {
    let connected = state.connectivity.is_connected().await;
    Json(json!({
        "connected": connected,
        "mode": state.connectivity.name(),
    }))
}

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
