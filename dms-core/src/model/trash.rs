use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// §3 TrashMetadata: created on trash, deleted on restore or purge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrashMetadata {
    #[serde(rename = "_key")]
    pub id: Uuid,
    pub folder_id: Option<Uuid>,
    pub file_id: Option<Uuid>,
    pub original_path: String,
    pub original_parent_id: Option<Uuid>,
    pub deleted_by: String,
    pub deleted_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl TrashMetadata {
    /// The reserved NAS-side path for a trashed entity (§4.5 step 5, §6).
    pub fn trash_object_key(&self, name: &str) -> String {
        format!(".trash/{}__{}", self.id, name)
    }
}

/// The prefix every trashed entity's NAS path starts with. User-chosen
/// names must never begin with this (§4.5 step 1, §6).
pub const TRASH_PREFIX: &str = ".trash";
