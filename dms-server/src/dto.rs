//! Request/response shapes for the HTTP surface (§6: "shape only, not
//! bit-exact"). Folder/File/SyncEvent/UploadSession are returned as-is since
//! the core's model types already carry `serde` derives; these are only the
//! request bodies and the thin wrapper the command endpoints return.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dms_core::model::{ConflictStrategy, File, Folder, SyncEvent, UploadSession};

fn default_conflict_strategy() -> ConflictStrategy {
    ConflictStrategy::Error
}

#[derive(Debug, Deserialize)]
pub struct CreateFolderRequest {
    pub name: String,
    pub parent_id: Uuid,
    #[serde(default = "default_conflict_strategy")]
    pub conflict_strategy: ConflictStrategy,
}

#[derive(Debug, Deserialize)]
pub struct RenameRequest {
    pub name: String,
    #[serde(default = "default_conflict_strategy")]
    pub conflict_strategy: ConflictStrategy,
}

#[derive(Debug, Deserialize)]
pub struct MoveFolderRequest {
    pub target_parent_id: Uuid,
    #[serde(default = "default_conflict_strategy")]
    pub conflict_strategy: ConflictStrategy,
}

#[derive(Debug, Deserialize)]
pub struct MoveFileRequest {
    pub target_folder_id: Uuid,
    #[serde(default = "default_conflict_strategy")]
    pub conflict_strategy: ConflictStrategy,
}

#[derive(Debug, Serialize)]
pub struct FolderResponse {
    #[serde(flatten)]
    pub folder: Folder,
    pub sync_event_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct FileResponse {
    #[serde(flatten)]
    pub file: File,
    pub sync_event_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct SyncStatusResponse {
    pub events: Vec<SyncEvent>,
}

#[derive(Debug, Deserialize)]
pub struct InitiateUploadRequest {
    pub file_name: String,
    pub folder_id: Uuid,
    pub total_size: u64,
    pub mime_type: String,
    #[serde(default = "default_conflict_strategy")]
    pub conflict_strategy: ConflictStrategy,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status")]
pub enum InitiateUploadResponse {
    #[serde(rename = "ACTIVE")]
    Active {
        session_id: Uuid,
        part_size: u64,
        total_parts: u32,
        expires_at: chrono::DateTime<chrono::Utc>,
    },
    #[serde(rename = "WAITING")]
    Waiting {
        queue_ticket: Uuid,
        position: u64,
        estimated_wait_seconds: u64,
    },
}

impl From<UploadSession> for InitiateUploadResponse {
    fn from(s: UploadSession) -> Self {
        InitiateUploadResponse::Active {
            session_id: s.id,
            part_size: s.part_size,
            total_parts: s.total_parts,
            expires_at: s.expires_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadPartResponse {
    pub uploaded_bytes: u64,
    pub progress_percent: f64,
}

/// `GET /uploads/{id}` (§4.7: "session fields plus the next missing part
/// number, if any, and remaining bytes"). Both extra fields are derived from
/// `completed_parts`/`uploaded_bytes` rather than stored, so they're added
/// here rather than on `UploadSession` itself.
#[derive(Debug, Serialize)]
pub struct UploadStatusResponse {
    #[serde(flatten)]
    pub session: UploadSession,
    pub next_missing_part: Option<u32>,
    pub remaining_bytes: u64,
}

impl From<UploadSession> for UploadStatusResponse {
    fn from(session: UploadSession) -> Self {
        let next_missing_part = session.next_missing_part();
        let remaining_bytes = session.remaining_bytes();
        UploadStatusResponse { session, next_missing_part, remaining_bytes }
    }
}

#[derive(Debug, Serialize)]
pub struct QueueTicketResponse {
    pub ticket: Uuid,
    pub status: dms_core::model::TicketStatus,
    pub position: u64,
}
