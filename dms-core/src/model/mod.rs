//! The transactional metadata model (§3): folders, files, storage objects,
//! the sync-event outbox row, trash metadata, upload sessions, queue
//! tickets, and the durable job-queue row.

mod file;
mod folder;
mod job;
mod queue_ticket;
mod storage_object;
mod sync_event;
mod trash;
mod upload;

pub use file::File;
pub use folder::{Folder, join_path};
pub use job::{JobStatus, QueuedJob};
pub use queue_ticket::{InitiateArgs, QueueTicket, TicketStatus};
pub use storage_object::{AvailabilityStatus, StorageObject, Tier};
pub use sync_event::{EventType, SyncEvent, SyncStatus, TargetType};
pub use trash::{TRASH_PREFIX, TrashMetadata};
pub use upload::{CompletedPart, UploadSession, UploadStatus, total_parts};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shared lifecycle for folders and files (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityState {
    Active,
    Trashed,
    Deleted,
}

/// Which kind of entity a sync event / job targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Folder,
    File,
}

/// The conflict-resolution strategy a caller supplies to create/rename/move
/// commands (§4.5 step 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictStrategy {
    #[default]
    Error,
    Rename,
    Skip,
    Overwrite,
}

/// Generates a fresh v7 UUID (time-ordered, matching the teacher's choice of
/// `uuid` feature set).
pub fn new_id() -> Uuid {
    Uuid::now_v7()
}
