//! Axum HTTP layer over `dms_core`. `main` only wires ports and starts the
//! listener; the router and its handlers live here so integration tests can
//! build the same app in-process.

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::state::AppState;

/// Assembles the full router (§4.10, §6): command routes nested under
/// `/api/v1` and wrapped in the NAS-health ingress gate, the two
/// diagnostic/read sync-status endpoints left ungated, and a bare `/healthz`
/// liveness probe outside the nested router entirely — unaffected by NAS
/// health since it only answers "is the process up".
pub fn build_router(state: Arc<AppState>) -> Router {
    let folder_routes = Router::new()
        .route("/folders", post(routes::folder::create))
        .route("/folders/{id}/rename", patch(routes::folder::rename))
        .route("/folders/{id}/move", patch(routes::folder::move_folder))
        .route("/folders/{id}/trash", post(routes::folder::trash))
        .route("/folders/{id}/restore", post(routes::folder::restore))
        .route("/folders/{id}", axum::routing::delete(routes::folder::purge));

    let file_routes = Router::new()
        .route("/files/{id}/rename", patch(routes::file::rename))
        .route("/files/{id}/move", patch(routes::file::move_file))
        .route("/files/{id}/trash", post(routes::file::trash))
        .route("/files/{id}/restore", post(routes::file::restore))
        .route("/files/{id}", axum::routing::delete(routes::file::purge));

    let upload_routes = Router::new()
        .route("/uploads", post(routes::upload::initiate))
        .route("/uploads/{id}/parts/{part_number}", put(routes::upload::upload_part))
        .route("/uploads/{id}/complete", post(routes::upload::complete))
        .route("/uploads/{id}/abort", post(routes::upload::abort))
        .route("/uploads/{id}", get(routes::upload::get_status))
        .route("/uploads/queue/{ticket}", get(routes::upload::poll_ticket))
        .route("/uploads/queue/{ticket}/cancel", post(routes::upload::cancel_ticket))
        .route("/uploads/queue/{ticket}/claim", post(routes::upload::claim_ticket));

    let gated = Router::new()
        .merge(folder_routes)
        .merge(file_routes)
        .merge(upload_routes)
        .layer(from_fn_with_state(state.clone(), routes::health::nas_ingress_gate));

    let diagnostic = Router::new()
        .route("/folders/{id}/sync-status", get(routes::folder::sync_status))
        .route("/files/{id}/sync-status", get(routes::file::sync_status))
        .route("/sync-events/{id}", get(routes::sync_status::get_sync_event))
        .route("/health", get(routes::health::get_health));

    let api_v1 = Router::new().merge(gated).merge(diagnostic).with_state(state);

    Router::new()
        .route("/healthz", get(|| async { axum::http::StatusCode::OK }))
        .nest("/api/v1", api_v1)
}
