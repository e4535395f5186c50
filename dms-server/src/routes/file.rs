//! File command endpoints (§4.5, §6). File *creation* has no endpoint here
//! — see `routes::upload` — this module covers rename/move/trash/restore
//! /purge plus the per-file sync status diagnostic.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use uuid::Uuid;

use crate::dto::{FileResponse, MoveFileRequest, RenameRequest, SyncStatusResponse};
use crate::error::HttpError;
use crate::routes::latest_sync_event_id;
use crate::state::AppState;

async fn respond(state: &AppState, file: dms_core::model::File) -> FileResponse {
    let sync_event_id = latest_sync_event_id(&state.metadata, file.id).await;
    FileResponse { file, sync_event_id }
}

pub async fn rename(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<RenameRequest>,
) -> Result<Json<FileResponse>, HttpError> {
    let file = state.files.rename(id, &req.name, req.conflict_strategy).await?;
    Ok(Json(respond(&state, file).await))
}

pub async fn move_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<MoveFileRequest>,
) -> Result<Json<FileResponse>, HttpError> {
    let file = state
        .files
        .move_file(id, req.target_folder_id, req.conflict_strategy)
        .await?;
    Ok(Json(respond(&state, file).await))
}

pub async fn trash(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<FileResponse>, HttpError> {
    let file = state.files.trash(id, "api-user").await?;
    Ok(Json(respond(&state, file).await))
}

pub async fn restore(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<FileResponse>, HttpError> {
    let file = state.files.restore(id).await?;
    Ok(Json(respond(&state, file).await))
}

pub async fn purge(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<FileResponse>, HttpError> {
    let file = state.files.purge(id).await?;
    Ok(Json(respond(&state, file).await))
}

pub async fn sync_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SyncStatusResponse>, HttpError> {
    let events = state
        .metadata
        .get_sync_status_for_entity(id)
        .await
        .map_err(HttpError)?;
    Ok(Json(SyncStatusResponse { events }))
}
