//! Sync dispatcher (§4.6): routes a job's `action` to the matching handler
//! under the per-entity distributed lock. The dispatcher itself carries no
//! business logic — that lives in `handlers::folder` / `handlers::file`.

pub mod handlers;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::error::AppError;
use crate::health::NasHealthCache;
use crate::model::{EntityKind, EventType, SyncEvent};
use crate::ports::lock::with_lock;
use crate::ports::{DistributedLock, JobHandler, JobHandlerFuture, JobQueue, MetadataStore, StoragePort};

pub const FOLDER_STREAM: &str = "nas-folder-sync";
pub const FILE_STREAM: &str = "nas-file-sync";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncAction {
    Mkdir,
    /// File-only: promote a freshly completed upload's assembled bytes from
    /// the cache tier (`source_path`) to the NAS tier (`target_path`).
    IngestContent,
    Rename,
    Move,
    Trash,
    Restore,
    Purge,
}

/// The job payload shape (§6): discriminated by `action`, carrying every
/// path the handler needs. `target_parent_id`/`original_parent_id` are only
/// populated for `Move` (and consumed by the compensation path).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncJobPayload {
    pub action: SyncAction,
    pub entity_kind: EntityKind,
    pub folder_id: Option<Uuid>,
    pub file_id: Option<Uuid>,
    pub sync_event_id: Option<Uuid>,
    pub source_path: String,
    pub target_path: String,
    pub target_parent_id: Option<Uuid>,
    pub original_parent_id: Option<Uuid>,
}

impl SyncJobPayload {
    pub fn entity_id(&self) -> Uuid {
        match self.entity_kind {
            EntityKind::Folder => self.folder_id.expect("folder payload missing folder_id"),
            EntityKind::File => self.file_id.expect("file payload missing file_id"),
        }
    }

    /// Entity-scoped lock key (§4.2): `folder-sync:{id}` / `file-sync:{id}`.
    pub fn lock_key(&self) -> String {
        match self.entity_kind {
            EntityKind::Folder => format!("folder-sync:{}", self.entity_id()),
            EntityKind::File => format!("file-sync:{}", self.entity_id()),
        }
    }
}

/// Shared wiring the dispatcher and handlers need (§4.1, §4.2, §4.9).
pub struct SyncContext {
    pub metadata: Arc<dyn MetadataStore>,
    pub nas: Arc<dyn StoragePort>,
    pub cache: Arc<dyn StoragePort>,
    pub lock: Arc<dyn DistributedLock>,
    pub health: Arc<NasHealthCache>,
    pub config: Arc<Config>,
}

async fn dispatch(ctx: Arc<SyncContext>, payload: SyncJobPayload) -> Result<(), AppError> {
    match payload.entity_kind {
        EntityKind::Folder => handlers::folder::handle(&ctx, &payload).await,
        EntityKind::File => handlers::file::handle(&ctx, &payload).await,
    }
}

async fn run_locked(ctx: Arc<SyncContext>, payload: SyncJobPayload) -> Result<(), AppError> {
    let key = payload.lock_key();
    let opts = ctx.config.lock_options();
    let lock = ctx.lock.clone();
    let ctx_for_body = ctx.clone();
    let result = with_lock(lock.as_ref(), &key, opts, move || {
        let ctx_for_body = ctx_for_body.clone();
        let payload = payload.clone();
        async move { dispatch(ctx_for_body, payload).await }
    })
    .await;
    match result {
        Ok(inner) => inner,
        Err(lock_err) => Err(AppError::from(anyhow::anyhow!("lock error: {lock_err}"))),
    }
}

struct DispatcherHandler {
    ctx: Arc<SyncContext>,
}

impl JobHandler for DispatcherHandler {
    fn handle(&self, payload: serde_json::Value) -> JobHandlerFuture {
        let ctx = self.ctx.clone();
        Box::pin(async move {
            let payload: SyncJobPayload = serde_json::from_value(payload)
                .map_err(|e| AppError::from(anyhow::anyhow!("malformed sync job payload: {e}")))?;
            run_locked(ctx, payload).await
        })
    }
}

/// The stream a sweeper-recovered event belongs on (§4.4, §9). Used by
/// `dms_server`'s outbox sweep, which only has the bare `SyncEvent` row to
/// work from.
pub fn stream_for_sweep(event: &SyncEvent) -> &'static str {
    match event.target_type {
        EntityKind::Folder => FOLDER_STREAM,
        EntityKind::File => FILE_STREAM,
    }
}

/// Rebuilds a best-effort `SyncJobPayload` from a bare `SyncEvent` row for
/// sweeper re-delivery. `target_parent_id`/`original_parent_id` are not part
/// of the persisted schema (§6), so a swept `MOVE` loses its compensation
/// context; this mirrors the source's sweep, which is explicitly out of
/// scope for this spec beyond "must be possible with the recorded schema".
pub fn payload_for_sweep(event: &SyncEvent) -> SyncJobPayload {
    let action = match event.event_type {
        EventType::Create => match event.target_type {
            EntityKind::Folder => SyncAction::Mkdir,
            EntityKind::File => SyncAction::IngestContent,
        },
        EventType::Rename => SyncAction::Rename,
        EventType::Move => SyncAction::Move,
        EventType::Trash => SyncAction::Trash,
        EventType::Restore => SyncAction::Restore,
        EventType::Purge => SyncAction::Purge,
    };
    SyncJobPayload {
        action,
        entity_kind: event.target_type,
        folder_id: event.folder_id,
        file_id: event.file_id,
        sync_event_id: Some(event.id),
        source_path: event.source_path.clone(),
        target_path: event.target_path.clone(),
        target_parent_id: None,
        original_parent_id: None,
    }
}

/// Registers both per-entity-kind worker pools (§2 control flow, §4.6).
pub async fn spawn_dispatcher(ctx: Arc<SyncContext>, queue: Arc<dyn JobQueue>, concurrency: usize) {
    let handler: Arc<dyn JobHandler> = Arc::new(DispatcherHandler { ctx: ctx.clone() });
    queue.clone().process_jobs(FOLDER_STREAM, handler.clone(), concurrency).await;
    queue.process_jobs(FILE_STREAM, handler, concurrency).await;
}
