use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::ConflictStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UploadStatus {
    Init,
    Uploading,
    Completed,
    Aborted,
    Expired,
}

impl UploadStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            UploadStatus::Completed | UploadStatus::Aborted | UploadStatus::Expired
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedPart {
    pub part_number: u32,
    pub etag: String,
    pub size: u64,
}

/// §3 UploadSession: session + part lifecycle for the multipart engine (§4.7).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSession {
    #[serde(rename = "_key")]
    pub id: Uuid,
    pub file_name: String,
    pub folder_id: Uuid,
    pub total_size: u64,
    pub part_size: u64,
    pub total_parts: u32,
    pub mime_type: String,
    pub status: UploadStatus,
    /// Keyed by part number so re-uploads overwrite in place (§4.7).
    pub completed_parts: BTreeMap<u32, CompletedPart>,
    pub uploaded_bytes: u64,
    pub expires_at: DateTime<Utc>,
    pub created_by: String,
    pub file_id: Option<Uuid>,
    /// Conflict strategy for the File row `complete` creates (§4.5 step 3
    /// applied to file creation, which only ever happens here).
    pub conflict_strategy: ConflictStrategy,
}

impl UploadSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        !self.status.is_terminal() && now > self.expires_at
    }

    pub fn is_complete(&self) -> bool {
        self.completed_parts.len() as u32 == self.total_parts
            && (1..=self.total_parts).all(|n| self.completed_parts.contains_key(&n))
    }

    /// The lowest part number not yet uploaded, if any (used by `get_status`).
    pub fn next_missing_part(&self) -> Option<u32> {
        (1..=self.total_parts).find(|n| !self.completed_parts.contains_key(n))
    }

    pub fn remaining_bytes(&self) -> u64 {
        self.total_size.saturating_sub(self.uploaded_bytes)
    }

    pub fn cache_key_for_part(session_id: Uuid, part_number: u32) -> String {
        format!("sessions/{session_id}/parts/{part_number}")
    }

    pub fn progress_percent(&self) -> f64 {
        if self.total_size == 0 {
            100.0
        } else {
            (self.uploaded_bytes as f64 / self.total_size as f64) * 100.0
        }
    }
}

pub fn total_parts(total_size: u64, part_size: u64) -> u32 {
    debug_assert!(part_size > 0);
    total_size.div_ceil(part_size) as u32
}
