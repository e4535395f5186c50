//! File sync handler (§4.6). Files carry a lease count gating the
//! destructive operations (trash, purge, move) per §5: while a streaming
//! collaborator holds a lease, those three retry with backoff instead of
//! running.

use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::model::{AvailabilityStatus, EntityState, StorageObject, Tier};
use crate::sync::{SyncAction, SyncContext, SyncJobPayload};

use super::{Begin, begin, finish, swallow_idempotent};

pub async fn handle(ctx: &SyncContext, payload: &SyncJobPayload) -> Result<(), AppError> {
    let file_id = payload.file_id.expect("file sync job missing file_id");
    let event = match begin(ctx.metadata.as_ref(), payload.sync_event_id).await? {
        Begin::AlreadyDone => return Ok(()),
        Begin::Untracked => None,
        Begin::Processing(event) => Some(event),
    };

    let result = run_action(ctx, payload, file_id).await;
    finish(ctx.metadata.as_ref(), event, action_name(payload.action), file_id, result).await
}

fn action_name(action: SyncAction) -> &'static str {
    match action {
        SyncAction::Mkdir => "mkdir",
        SyncAction::IngestContent => "ingest_content",
        SyncAction::Rename => "rename",
        SyncAction::Move => "move",
        SyncAction::Trash => "trash",
        SyncAction::Restore => "restore",
        SyncAction::Purge => "purge",
    }
}

fn is_destructive(action: SyncAction) -> bool {
    matches!(action, SyncAction::Trash | SyncAction::Purge | SyncAction::Move)
}

async fn run_action(ctx: &SyncContext, payload: &SyncJobPayload, file_id: Uuid) -> Result<(), AppError> {
    // Step 3: entity has no NAS storage object left to act on.
    let Some(storage) = ctx.metadata.get_storage_object(file_id, Tier::Nas).await? else {
        return Ok(());
    };

    // Step 4: a retry of a job whose NAS op already landed.
    if storage.availability_status == AvailabilityStatus::Available
        && storage.object_key == payload.target_path
    {
        return Ok(());
    }

    if is_destructive(payload.action) && storage.is_leased() {
        return Err(AppError::precondition(format!(
            "file {file_id} is leased (lease_count={}), cannot {}",
            storage.lease_count,
            action_name(payload.action)
        )));
    }

    match payload.action {
        SyncAction::Mkdir => Err(AppError::from(anyhow::anyhow!(
            "MKDIR is not a valid action for a file entity"
        ))),
        SyncAction::IngestContent => do_ingest(ctx, payload, storage).await,
        SyncAction::Rename | SyncAction::Trash => relocate(ctx, payload, storage).await,
        SyncAction::Restore => do_restore(ctx, payload, file_id, storage).await,
        SyncAction::Move => do_move(ctx, payload, file_id, storage).await,
        SyncAction::Purge => do_purge(ctx, payload, file_id, storage).await,
    }
}

/// Promotes a freshly uploaded file's assembled bytes from the cache tier
/// to the NAS tier (§4.7 complete, §4.6). Unlike `relocate`, the source
/// lives on a different storage port entirely, so this reads from `cache`
/// and writes to `nas` rather than moving within one port.
async fn do_ingest(
    ctx: &SyncContext,
    payload: &SyncJobPayload,
    mut storage: StorageObject,
) -> Result<(), AppError> {
    let bytes = ctx
        .cache
        .read_file(&payload.source_path)
        .await
        .map_err(|e| AppError::from(anyhow::anyhow!("cache read failed during ingest: {e}")))?;
    swallow_idempotent(ctx.nas.write_file(&payload.target_path, bytes).await)?;
    storage.object_key = payload.target_path.clone();
    storage.availability_status = AvailabilityStatus::Available;
    ctx.metadata.update_storage_object(storage, None).await
}

/// Physically relocates the file from `source_path` to `target_path`.
/// Shared by rename, trash, restore, and the non-compensating branch of
/// move — files are leaves, so there's no descendant cascade to run.
async fn relocate(
    ctx: &SyncContext,
    payload: &SyncJobPayload,
    mut storage: StorageObject,
) -> Result<(), AppError> {
    swallow_idempotent(
        ctx.nas
            .move_file(&payload.source_path, &payload.target_path)
            .await,
    )?;
    storage.object_key = payload.target_path.clone();
    storage.availability_status = AvailabilityStatus::Available;
    ctx.metadata.update_storage_object(storage, None).await
}

/// Reverse of trash: relocates the file back from the trash path and, on
/// success, flips it back to ACTIVE, re-parents it to its original folder,
/// and removes the TrashMetadata row (§4.6 restore).
async fn do_restore(
    ctx: &SyncContext,
    payload: &SyncJobPayload,
    file_id: Uuid,
    storage: StorageObject,
) -> Result<(), AppError> {
    relocate(ctx, payload, storage).await?;

    if let Some(mut file) = ctx.metadata.get_file(file_id).await? {
        file.state = EntityState::Active;
        if let Some(original_parent_id) = payload.original_parent_id {
            file.folder_id = original_parent_id;
        }
        file.updated_at = Utc::now();
        ctx.metadata.update_file(file, None).await?;
    }

    if let Some(trash) = ctx.metadata.get_trash_metadata(None, Some(file_id)).await? {
        ctx.metadata.delete_trash_metadata(trash.id, None).await?;
    }
    Ok(())
}

async fn do_move(
    ctx: &SyncContext,
    payload: &SyncJobPayload,
    file_id: Uuid,
    storage: StorageObject,
) -> Result<(), AppError> {
    let target_parent_id = payload
        .target_parent_id
        .expect("move payload missing target_parent_id");
    let target_parent = ctx.metadata.get_folder(target_parent_id).await?;
    let target_parent_active = matches!(&target_parent, Some(p) if p.state == EntityState::Active);

    if target_parent_active {
        relocate(ctx, payload, storage).await
    } else {
        compensate_move(ctx, payload, file_id, storage).await
    }
}

/// The target folder was concurrently trashed between command-time
/// validation and handler execution: revert the metadata move instead of
/// relocating the file under a now-invalid folder.
async fn compensate_move(
    ctx: &SyncContext,
    payload: &SyncJobPayload,
    file_id: Uuid,
    mut storage: StorageObject,
) -> Result<(), AppError> {
    let Some(mut file) = ctx.metadata.get_file(file_id).await? else {
        return Ok(());
    };
    let Some(original_parent_id) = payload.original_parent_id else {
        return Ok(());
    };

    file.folder_id = original_parent_id;
    file.updated_at = Utc::now();
    ctx.metadata.update_file(file, None).await?;

    storage.object_key = payload.source_path.clone();
    storage.availability_status = AvailabilityStatus::Available;
    ctx.metadata.update_storage_object(storage, None).await?;

    log::warn!(
        "move compensated: target folder {target_parent_id:?} no longer ACTIVE, file {file_id} reverted to folder {original_parent_id}",
        target_parent_id = payload.target_parent_id,
    );
    Ok(())
}

async fn do_purge(
    ctx: &SyncContext,
    payload: &SyncJobPayload,
    file_id: Uuid,
    _storage: StorageObject,
) -> Result<(), AppError> {
    swallow_idempotent(ctx.nas.delete_file(&payload.target_path).await)?;

    if let Some(mut file) = ctx.metadata.get_file(file_id).await? {
        file.state = EntityState::Deleted;
        file.updated_at = Utc::now();
        ctx.metadata.update_file(file, None).await?;
    }
    ctx.metadata.delete_storage_object(file_id, Tier::Nas).await?;

    if let Some(cache_object) = ctx.metadata.get_storage_object(file_id, Tier::Cache).await? {
        if let Err(err) = ctx.cache.delete_file(&cache_object.object_key).await {
            log::warn!("cache cleanup failed for purged file {file_id}: {err}");
        }
        ctx.metadata.delete_storage_object(file_id, Tier::Cache).await?;
    }

    if let Some(trash) = ctx.metadata.get_trash_metadata(None, Some(file_id)).await? {
        ctx.metadata.delete_trash_metadata(trash.id, None).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::health::NasHealthCache;
    use crate::lock_impl::InProcessLock;
    use crate::model::{EntityKind, EntityState, File, new_id};
    use crate::ports::MetadataStore;
    use crate::storage_impl::rooted_fs::RootedFsStorage;
    use crate::store::memory::InMemoryMetadataStore;

    fn test_config() -> Arc<Config> {
        Arc::new(Config {
            host: "0.0.0.0".into(),
            port: 8080,
            nas_mount_path: "/tmp".into(),
            cache_mount_path: "/tmp".into(),
            part_size_bytes: 10,
            multipart_threshold_bytes: 20,
            max_active_sessions: 5,
            max_total_upload_bytes: 1_000_000,
            sync_max_retries: 3,
            sync_backoff_ms: 3000,
            sync_concurrency: 5,
            lock_ttl_ms: 60_000,
            lock_renew_interval_ms: 25_000,
            lock_wait_timeout_ms: 30_000,
            health_probe_interval_ms: 30_000,
            trash_retention_days: 30,
            outbox_sweep_interval_ms: 15_000,
            database_connection_string: "http://localhost:8529".into(),
            database_name: "dms".into(),
            database_user: "root".into(),
            database_password: String::new(),
        })
    }

    async fn setup() -> (SyncContext, tempfile::TempDir, File) {
        let store: Arc<dyn MetadataStore> = Arc::new(InMemoryMetadataStore::new());
        let dir = tempfile::tempdir().unwrap();
        let nas: Arc<dyn crate::ports::StoragePort> = Arc::new(RootedFsStorage::new(dir.path()));
        let cache: Arc<dyn crate::ports::StoragePort> = Arc::new(RootedFsStorage::new(dir.path()));

        let file = File {
            id: new_id(),
            name: "report.csv".into(),
            folder_id: new_id(),
            size_bytes: 10,
            mime_type: "text/csv".into(),
            checksum: None,
            state: EntityState::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            created_by: "user1".into(),
        };
        store.create_file(file.clone(), None).await.unwrap();
        nas.write_file("report.csv", bytes::Bytes::from_static(b"0123456789"))
            .await
            .unwrap();
        let storage = StorageObject::new(
            file.id,
            EntityKind::File,
            Tier::Nas,
            "report.csv",
            AvailabilityStatus::Available,
        );
        store.create_storage_object(storage, None).await.unwrap();

        let ctx = SyncContext {
            metadata: store,
            nas,
            cache,
            lock: Arc::new(InProcessLock::new()),
            health: Arc::new(NasHealthCache::new()),
            config: test_config(),
        };
        (ctx, dir, file)
    }

    fn payload(action: SyncAction, file_id: Uuid, source_path: &str, target_path: &str) -> SyncJobPayload {
        SyncJobPayload {
            action,
            entity_kind: EntityKind::File,
            folder_id: None,
            file_id: Some(file_id),
            sync_event_id: None,
            source_path: source_path.into(),
            target_path: target_path.into(),
            target_parent_id: None,
            original_parent_id: None,
        }
    }

    #[tokio::test]
    async fn leased_file_refuses_trash() {
        let (ctx, _dir, file) = setup().await;
        ctx.metadata.adjust_lease_count(file.id, Tier::Nas, 1).await.unwrap();

        let result = run_action(
            &ctx,
            &payload(SyncAction::Trash, file.id, "report.csv", ".trash/x__report.csv"),
            file.id,
        )
        .await;

        assert!(matches!(result, Err(AppError::Precondition(_))));
        let storage = ctx.metadata.get_storage_object(file.id, Tier::Nas).await.unwrap().unwrap();
        assert_eq!(storage.object_key, "report.csv");
    }

    #[tokio::test]
    async fn unleased_file_trash_relocates_on_nas() {
        let (ctx, _dir, file) = setup().await;

        run_action(
            &ctx,
            &payload(SyncAction::Trash, file.id, "report.csv", ".trash/x__report.csv"),
            file.id,
        )
        .await
        .unwrap();

        let storage = ctx.metadata.get_storage_object(file.id, Tier::Nas).await.unwrap().unwrap();
        assert_eq!(storage.object_key, ".trash/x__report.csv");
        assert!(ctx.nas.exists(".trash/x__report.csv").await.unwrap());
        assert!(!ctx.nas.exists("report.csv").await.unwrap());
    }

    #[tokio::test]
    async fn lease_release_unblocks_trash() {
        let (ctx, _dir, file) = setup().await;
        ctx.metadata.adjust_lease_count(file.id, Tier::Nas, 1).await.unwrap();
        ctx.metadata.adjust_lease_count(file.id, Tier::Nas, -1).await.unwrap();

        run_action(
            &ctx,
            &payload(SyncAction::Trash, file.id, "report.csv", ".trash/x__report.csv"),
            file.id,
        )
        .await
        .unwrap();
    }
}
