use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EntityState;

/// A leaf document (§3 File).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    #[serde(rename = "_key")]
    pub id: Uuid,
    pub name: String,
    pub folder_id: Uuid,
    pub size_bytes: u64,
    pub mime_type: String,
    pub checksum: Option<String>,
    pub state: EntityState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}
