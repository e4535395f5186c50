use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Create,
    Rename,
    Move,
    Trash,
    Restore,
    Purge,
}

/// Kept as a separate alias so call sites that think in terms of "folder or
/// file" read naturally; it is exactly `EntityKind`.
pub type TargetType = EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncStatus {
    Pending,
    Queued,
    Processing,
    Retrying,
    Done,
    Failed,
}

impl SyncStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SyncStatus::Done | SyncStatus::Failed)
    }
}

/// The outbox row (§3 SyncEvent, §4.4). Written in the same transaction as
/// the metadata mutation that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncEvent {
    #[serde(rename = "_key")]
    pub id: Uuid,
    pub event_type: EventType,
    pub target_type: TargetType,
    pub folder_id: Option<Uuid>,
    pub file_id: Option<Uuid>,
    pub source_path: String,
    pub target_path: String,
    pub status: SyncStatus,
    pub retry_count: u32,
    pub max_retries: u32,
    pub error_message: Option<String>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

impl SyncEvent {
    pub const DEFAULT_MAX_RETRIES: u32 = 3;

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        event_type: EventType,
        target_type: TargetType,
        folder_id: Option<Uuid>,
        file_id: Option<Uuid>,
        source_path: impl Into<String>,
        target_path: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        SyncEvent {
            id: super::new_id(),
            event_type,
            target_type,
            folder_id,
            file_id,
            source_path: source_path.into(),
            target_path: target_path.into(),
            status: SyncStatus::Pending,
            retry_count: 0,
            max_retries: Self::DEFAULT_MAX_RETRIES,
            error_message: None,
            metadata: Map::new(),
            created_at: now,
            updated_at: now,
            processed_at: None,
        }
    }

    pub fn entity_id(&self) -> Uuid {
        match self.target_type {
            EntityKind::Folder => self.folder_id.expect("folder event missing folder_id"),
            EntityKind::File => self.file_id.expect("file event missing file_id"),
        }
    }
}
