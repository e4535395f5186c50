//! The six idempotent NAS action handlers (§4.6). `folder` and `file` share
//! the same nine-step shape but differ on what's leased, what cascades to
//! descendants, and what the compensation path restores.

pub mod file;
pub mod folder;

use crate::error::AppError;
use crate::model::SyncEvent;
use crate::outbox;
use crate::ports::MetadataStore;
use crate::ports::StorageError;

/// Outcome of loading a job's event row before the action runs.
pub(super) enum Begin {
    /// No `sync_event_id` on the payload; proceed without outbox tracking.
    Untracked,
    /// Event already in a terminal state — a duplicate delivery racing a
    /// prior completion. The handler must do nothing.
    AlreadyDone,
    /// Event marked `PROCESSING`; run the action and call `finish` with it.
    Processing(SyncEvent),
}

/// Steps 1+2 of every handler: load the event (if any) and mark it
/// `PROCESSING`, short-circuiting duplicate deliveries of an already-
/// terminal event.
pub(super) async fn begin(
    store: &dyn MetadataStore,
    sync_event_id: Option<uuid::Uuid>,
) -> Result<Begin, AppError> {
    let Some(id) = sync_event_id else {
        return Ok(Begin::Untracked);
    };
    let Some(event) = store.get_sync_event(id).await? else {
        return Ok(Begin::Untracked);
    };
    if event.status.is_terminal() {
        return Ok(Begin::AlreadyDone);
    }
    match outbox::mark_processing(store, id).await? {
        Some(event) => Ok(Begin::Processing(event)),
        None => Ok(Begin::Untracked),
    }
}

/// Step 9 (success path) / retry-or-fail (failure path), applied uniformly
/// by both handlers so the dispatcher's caller never has to special-case a
/// missing event.
pub(super) async fn finish(
    store: &dyn MetadataStore,
    event: Option<SyncEvent>,
    action: &str,
    entity_id: uuid::Uuid,
    result: Result<(), AppError>,
) -> Result<(), AppError> {
    match (event, result) {
        (Some(ev), Ok(())) => outbox::mark_done(store, ev).await,
        (None, Ok(())) => Ok(()),
        (Some(ev), Err(err)) => {
            let wrapped = anyhow::anyhow!(err.to_string());
            outbox::retry_or_fail(store, ev, action, entity_id, &wrapped).await?;
            Err(err)
        }
        (None, Err(err)) => Err(err),
    }
}

/// `true` when a storage error from the NAS/cache port represents a state
/// a retried operation would already have reached — i.e. it's safe to treat
/// as success rather than propagate (§4.6 step 6).
pub(super) fn is_idempotent_outcome(err: &StorageError) -> bool {
    matches!(err, StorageError::NotFound(_) | StorageError::AlreadyExists(_))
}

/// Swallows the idempotent `StorageError` variants, converting everything
/// else into an `AppError` the retry machinery will act on.
pub(super) fn swallow_idempotent(result: Result<(), StorageError>) -> Result<(), AppError> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if is_idempotent_outcome(&e) => Ok(()),
        Err(e) => Err(AppError::from(anyhow::anyhow!(e))),
    }
}
