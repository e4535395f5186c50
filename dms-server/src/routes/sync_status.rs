//! The per-event sync-status diagnostic (§6): surfaces the outbox state
//! machine for a single `SyncEvent` by id.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use dms_core::model::SyncEvent;
use uuid::Uuid;

use crate::error::HttpError;
use crate::state::AppState;

pub async fn get_sync_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SyncEvent>, HttpError> {
    let event = state
        .metadata
        .get_sync_event(id)
        .await
        .map_err(HttpError)?
        .ok_or_else(|| HttpError(dms_core::AppError::not_found("sync event not found")))?;
    Ok(Json(event))
}
