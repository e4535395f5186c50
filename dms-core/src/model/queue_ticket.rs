use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ConflictStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Waiting,
    Ready,
    Active,
    Expired,
    Cancelled,
}

/// The pending `initiate` arguments a waiting caller supplied, replayed
/// against the admission queue when a slot opens (§4.8).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitiateArgs {
    pub file_name: String,
    pub folder_id: Uuid,
    pub total_size: u64,
    pub mime_type: String,
    pub conflict_strategy: ConflictStrategy,
}

/// §3 QueueTicket: one FIFO entry in the admission queue (§4.8).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueTicket {
    pub ticket: Uuid,
    pub status: TicketStatus,
    pub position: u64,
    pub ready_deadline: Option<DateTime<Utc>>,
    pub initiate_args: InitiateArgs,
    pub user_id: String,
}
