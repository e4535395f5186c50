//! Sync-event outbox helpers (§4.4): the lifecycle transitions shared by
//! every sync handler, plus the periodic sweep that recovers events stuck in
//! `PENDING` after a crash between commit and enqueue.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, chain_to_string};
use crate::model::{SyncEvent, SyncStatus};
use crate::ports::{JobQueue, MetadataStore};

/// Insert `event` in the same transaction as the metadata mutation that
/// produced it (§3, §4.4 invariant). Callers hold the transaction open
/// across this call and the preceding metadata write.
pub async fn record(
    store: &dyn MetadataStore,
    event: SyncEvent,
    tx: Option<&mut crate::ports::BoxTransaction>,
) -> Result<(), AppError> {
    store.create_sync_event(event, tx).await
}

/// Enqueue the job for a freshly committed event and transition it to
/// `QUEUED` on success (§4.5 step 7). Called strictly after the originating
/// transaction commits.
pub async fn enqueue(
    store: &dyn MetadataStore,
    queue: &dyn JobQueue,
    stream_name: &str,
    mut event: SyncEvent,
    payload: serde_json::Value,
) -> Result<(), AppError> {
    queue.enqueue(stream_name, payload).await?;
    event.status = SyncStatus::Queued;
    event.updated_at = Utc::now();
    store.update_sync_event(event, None).await
}

/// Step 2 of every handler: mark the event `PROCESSING`.
pub async fn mark_processing(store: &dyn MetadataStore, id: Uuid) -> Result<Option<SyncEvent>, AppError> {
    let Some(mut event) = store.get_sync_event(id).await? else {
        return Ok(None);
    };
    event.status = SyncStatus::Processing;
    event.updated_at = Utc::now();
    store.update_sync_event(event.clone(), None).await?;
    Ok(Some(event))
}

/// Step 9 of every handler: mark the event `DONE`.
pub async fn mark_done(store: &dyn MetadataStore, mut event: SyncEvent) -> Result<(), AppError> {
    let now = Utc::now();
    event.status = SyncStatus::Done;
    event.updated_at = now;
    event.processed_at = Some(now);
    event.error_message = None;
    store.update_sync_event(event, None).await
}

/// The retry helper (§4.4, §7): on handler failure, increment `retry_count`;
/// if still below `max_retries`, go back to `PENDING` so the next queue
/// delivery (or the sweep) re-drives the handler; otherwise terminal `FAILED`
/// with an alert-grade log line carrying the full error chain.
pub async fn retry_or_fail(
    store: &dyn MetadataStore,
    mut event: SyncEvent,
    action: &str,
    entity_id: Uuid,
    err: &anyhow::Error,
) -> Result<(), AppError> {
    event.retry_count += 1;
    event.error_message = Some(err.to_string());
    event.updated_at = Utc::now();

    if event.retry_count < event.max_retries {
        event.status = SyncStatus::Pending;
        store.update_sync_event(event, None).await
    } else {
        event.status = SyncStatus::Failed;
        event.processed_at = Some(Utc::now());
        log::error!(
            "sync event FAILED action={action} entity_id={entity_id} sync_event_id={} error_chain={}",
            event.id,
            chain_to_string(err),
        );
        store.update_sync_event(event, None).await
    }
}

/// Periodic sweep (§4.4, §9): scans rows stuck in `PENDING`/`RETRYING` and
/// re-enqueues them, recovering from a crash between commit and enqueue.
/// `stream_for` maps a sync event to the stream its job belongs on.
pub async fn sweep_pending(
    store: &dyn MetadataStore,
    queue: &dyn JobQueue,
    limit: u32,
    stream_for: impl Fn(&SyncEvent) -> &'static str,
    payload_for: impl Fn(&SyncEvent) -> serde_json::Value,
) -> Result<u32, AppError> {
    let pending = store.list_pending_sync_events(limit).await?;
    let mut swept = 0u32;
    for event in pending {
        let stream = stream_for(&event);
        let payload = payload_for(&event);
        if let Err(err) = enqueue(store, queue, stream, event.clone(), payload).await {
            log::warn!("outbox sweep failed to re-enqueue sync_event_id={}: {err}", event.id);
            continue;
        }
        swept += 1;
    }
    Ok(swept)
}

/// Spawns a Tokio interval task running `sweep_pending` forever. Returns the
/// `JoinHandle` so the caller can hold/abort it at shutdown.
pub fn spawn_sweeper(
    store: Arc<dyn MetadataStore>,
    queue: Arc<dyn JobQueue>,
    interval_ms: u64,
    limit: u32,
    stream_for: impl Fn(&SyncEvent) -> &'static str + Send + Sync + 'static,
    payload_for: impl Fn(&SyncEvent) -> serde_json::Value + Send + Sync + 'static,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_millis(interval_ms));
        loop {
            ticker.tick().await;
            match sweep_pending(store.as_ref(), queue.as_ref(), limit, &stream_for, &payload_for).await {
                Ok(0) => {}
                Ok(n) => log::info!("outbox sweep re-enqueued {n} pending sync event(s)"),
                Err(err) => log::warn!("outbox sweep failed: {err}"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntityKind, EventType};
    use crate::queue_impl::InProcessJobQueue;
    use crate::store::memory::InMemoryMetadataStore;

    #[tokio::test]
    async fn retry_below_max_goes_back_to_pending() {
        let store = InMemoryMetadataStore::new();
        let event = SyncEvent::new(EventType::Create, EntityKind::Folder, Some(Uuid::now_v7()), None, "/a", "/a");
        store.create_sync_event(event.clone(), None).await.unwrap();
        let err = anyhow::anyhow!("disk full");
        retry_or_fail(&store, event.clone(), "mkdir", event.entity_id(), &err)
            .await
            .unwrap();
        let reloaded = store.get_sync_event(event.id).await.unwrap().unwrap();
        assert_eq!(reloaded.status, SyncStatus::Pending);
        assert_eq!(reloaded.retry_count, 1);
    }

    #[tokio::test]
    async fn retry_at_max_terminates_failed() {
        let store = InMemoryMetadataStore::new();
        let mut event = SyncEvent::new(EventType::Create, EntityKind::Folder, Some(Uuid::now_v7()), None, "/a", "/a");
        event.retry_count = event.max_retries - 1;
        store.create_sync_event(event.clone(), None).await.unwrap();
        let err = anyhow::anyhow!("disk full");
        retry_or_fail(&store, event.clone(), "mkdir", event.entity_id(), &err)
            .await
            .unwrap();
        let reloaded = store.get_sync_event(event.id).await.unwrap().unwrap();
        assert_eq!(reloaded.status, SyncStatus::Failed);
    }

    #[tokio::test]
    async fn sweep_reenqueues_pending_events() {
        let store = Arc::new(InMemoryMetadataStore::new());
        let queue = Arc::new(InProcessJobQueue::new(store.clone()));
        let event = SyncEvent::new(EventType::Create, EntityKind::Folder, Some(Uuid::now_v7()), None, "/a", "/a");
        store.create_sync_event(event.clone(), None).await.unwrap();

        let swept = sweep_pending(
            store.as_ref(),
            queue.as_ref(),
            10,
            |_| "nas-folder-sync",
            |e| serde_json::json!({ "sync_event_id": e.id }),
        )
        .await
        .unwrap();
        assert_eq!(swept, 1);
        let reloaded = store.get_sync_event(event.id).await.unwrap().unwrap();
        assert_eq!(reloaded.status, SyncStatus::Queued);
    }
}
