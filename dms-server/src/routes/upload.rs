//! Multipart upload endpoints (§4.7, §4.8, §6): `initiate` goes through the
//! admission queue (`201 ACTIVE` or `202 WAITING`), the rest of the session
//! lifecycle talks to `UploadCommands` directly. Every terminal transition
//! (`complete`/`abort`/lazy-expiry on `get_status`) releases the admission
//! slot the session held so a waiting ticket can be promoted.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use bytes::Bytes;
use dms_core::model::UploadStatus;
use dms_core::services::admission::AdmissionOutcome;
use uuid::Uuid;

use crate::dto::{
    InitiateUploadRequest, InitiateUploadResponse, QueueTicketResponse, UploadPartResponse, UploadStatusResponse,
};
use crate::error::HttpError;
use crate::state::AppState;

pub async fn initiate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InitiateUploadRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let args = dms_core::model::InitiateArgs {
        file_name: req.file_name,
        folder_id: req.folder_id,
        total_size: req.total_size,
        mime_type: req.mime_type,
        conflict_strategy: req.conflict_strategy,
    };
    let outcome = state.admission.initiate_or_enqueue(args, "api-user").await?;
    match outcome {
        AdmissionOutcome::Active(session) => {
            Ok((StatusCode::CREATED, Json(InitiateUploadResponse::from(session))))
        }
        AdmissionOutcome::Waiting {
            ticket,
            position,
            estimated_wait_seconds,
        } => Ok((
            StatusCode::ACCEPTED,
            Json(InitiateUploadResponse::Waiting {
                queue_ticket: ticket,
                position,
                estimated_wait_seconds,
            }),
        )),
    }
}

/// Releases the admission slot if `upload_part`/`complete` discovers the
/// session has lazily expired, mirroring `get_status`'s own release-on-expiry
/// check (an expired session is terminal and won't produce a later release).
async fn release_if_expired(state: &AppState, session_id: Uuid) {
    if let Ok(Some(session)) = state.metadata.get_upload_session(session_id).await {
        if session.status == UploadStatus::Expired {
            state.admission.release(session.total_size);
        }
    }
}

pub async fn upload_part(
    State(state): State<Arc<AppState>>,
    Path((session_id, part_number)): Path<(Uuid, u32)>,
    body: Bytes,
) -> Result<Json<UploadPartResponse>, HttpError> {
    let result = state.upload.upload_part(session_id, part_number, body).await;
    if result.is_err() {
        release_if_expired(&state, session_id).await;
    }
    let progress = result?;
    Ok(Json(UploadPartResponse {
        uploaded_bytes: progress.uploaded_bytes,
        progress_percent: progress.progress_percent,
    }))
}

pub async fn complete(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<dms_core::model::File>, HttpError> {
    let session = state.upload.get_status(session_id).await.ok();
    let file = state.upload.complete(session_id).await;
    if file.is_err() {
        release_if_expired(&state, session_id).await;
    }
    let file = file?;
    if let Some(session) = session {
        state.admission.release(session.total_size);
    }
    Ok(Json(file))
}

pub async fn abort(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<dms_core::model::UploadSession>, HttpError> {
    let session = state.upload.abort(session_id).await?;
    state.admission.release(session.total_size);
    Ok(Json(session))
}

pub async fn get_status(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<UploadStatusResponse>, HttpError> {
    match state.upload.get_status(session_id).await {
        Ok(session) => Ok(Json(UploadStatusResponse::from(session))),
        Err(err) => {
            // `get_status` flips a past-deadline session to EXPIRED and
            // returns a Precondition error rather than the (now terminal)
            // session; release the admission slot it held either way.
            if let Ok(Some(session)) = state.metadata.get_upload_session(session_id).await {
                if session.status == UploadStatus::Expired {
                    state.admission.release(session.total_size);
                }
            }
            Err(HttpError(err))
        }
    }
}

pub async fn poll_ticket(
    State(state): State<Arc<AppState>>,
    Path(ticket_id): Path<Uuid>,
) -> Result<Json<QueueTicketResponse>, HttpError> {
    let ticket = state
        .admission
        .poll(ticket_id)
        .ok_or_else(|| HttpError(dms_core::AppError::not_found("queue ticket not found")))?;
    Ok(Json(QueueTicketResponse {
        ticket: ticket.ticket,
        status: ticket.status,
        position: ticket.position,
    }))
}

pub async fn cancel_ticket(State(state): State<Arc<AppState>>, Path(ticket_id): Path<Uuid>) -> StatusCode {
    state.admission.cancel(ticket_id);
    StatusCode::NO_CONTENT
}

pub async fn claim_ticket(
    State(state): State<Arc<AppState>>,
    Path(ticket_id): Path<Uuid>,
) -> Result<Json<dms_core::model::UploadSession>, HttpError> {
    let session = state.admission.claim(ticket_id, "api-user").await?;
    Ok(Json(session))
}
