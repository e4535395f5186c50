//! Folder command endpoints (§4.5, §6): each maps 1:1 onto a
//! `FolderCommands` method and returns the updated folder plus the
//! `syncEventId` the command produced.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use uuid::Uuid;

use crate::dto::{CreateFolderRequest, FolderResponse, MoveFolderRequest, RenameRequest, SyncStatusResponse};
use crate::error::HttpError;
use crate::routes::latest_sync_event_id;
use crate::state::AppState;

async fn respond(state: &AppState, folder: dms_core::model::Folder) -> FolderResponse {
    let sync_event_id = latest_sync_event_id(&state.metadata, folder.id).await;
    FolderResponse { folder, sync_event_id }
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<FolderResponse>, HttpError> {
    let folder = state
        .folders
        .create(req.parent_id, &req.name, "api-user", req.conflict_strategy)
        .await?;
    Ok(Json(respond(&state, folder).await))
}

pub async fn rename(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<RenameRequest>,
) -> Result<Json<FolderResponse>, HttpError> {
    let folder = state.folders.rename(id, &req.name, req.conflict_strategy).await?;
    Ok(Json(respond(&state, folder).await))
}

pub async fn move_folder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<MoveFolderRequest>,
) -> Result<Json<FolderResponse>, HttpError> {
    let folder = state
        .folders
        .move_folder(id, req.target_parent_id, req.conflict_strategy)
        .await?;
    Ok(Json(respond(&state, folder).await))
}

pub async fn trash(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<FolderResponse>, HttpError> {
    let folder = state.folders.trash(id, "api-user").await?;
    Ok(Json(respond(&state, folder).await))
}

pub async fn restore(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<FolderResponse>, HttpError> {
    let folder = state.folders.restore(id).await?;
    Ok(Json(respond(&state, folder).await))
}

pub async fn purge(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<FolderResponse>, HttpError> {
    let folder = state.folders.purge(id).await?;
    Ok(Json(respond(&state, folder).await))
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
