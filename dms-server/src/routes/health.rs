//! NAS-health diagnostic endpoint and the ingress gate (§4.9, §6): `degraded`
//! still takes traffic, `unhealthy` returns `503 NAS_UNAVAILABLE` before any
//! command service runs.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<dms_core::health::HealthSnapshot> {
    Json(state.health.snapshot())
}

pub async fn nas_ingress_gate(State(state): State<Arc<AppState>>, request: Request, next: Next) -> Response {
    if state.health.status().blocks_ingress() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({"error": "NAS_UNAVAILABLE", "message": "NAS is currently unhealthy"})),
        )
            .into_response();
    }
    next.run(request).await
}
