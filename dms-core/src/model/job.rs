use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    Processing,
    Done,
    Failed,
}

/// §3 QueuedJob: the concrete row backing the abstract job-queue port's
/// durability guarantee for this repo's single-process deployment (see
/// DESIGN.md and SPEC_FULL.md §9 "Single-process job queue and lock").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedJob {
    #[serde(rename = "_key")]
    pub id: Uuid,
    pub stream_name: String,
    pub payload: Value,
    pub status: JobStatus,
    pub attempts_made: u32,
    pub max_attempts: u32,
    pub next_run_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QueuedJob {
    pub fn new(stream_name: impl Into<String>, payload: Value, max_attempts: u32) -> Self {
        let now = Utc::now();
        QueuedJob {
            id: Uuid::now_v7(),
            stream_name: stream_name.into(),
            payload,
            status: JobStatus::Pending,
            attempts_made: 0,
            max_attempts,
            next_run_at: now,
            created_at: now,
            updated_at: now,
        }
    }
}
