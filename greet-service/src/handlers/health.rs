use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::startup::AppState;

/// Liveness probe. The service has no dependencies, so reaching the handler
/// means it is healthy.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": state.config.service_name,
        "version": state.config.service_version,
    }))
}
