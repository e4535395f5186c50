//! Folder sync handler (§4.6). Handles the five folder-destined actions
//! plus `purge`; folders carry no lease count, so the only precondition
//! beyond ordinary idempotency is `move`'s compensation check.

use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::model::{AvailabilityStatus, EntityKind, EntityState, StorageObject, Tier, join_path};
use crate::sync::{SyncAction, SyncContext, SyncJobPayload};

use super::{Begin, begin, finish, swallow_idempotent};

pub async fn handle(ctx: &SyncContext, payload: &SyncJobPayload) -> Result<(), AppError> {
    let folder_id = payload.folder_id.expect("folder sync job missing folder_id");
    let event = match begin(ctx.metadata.as_ref(), payload.sync_event_id).await? {
        Begin::AlreadyDone => return Ok(()),
        Begin::Untracked => None,
        Begin::Processing(event) => Some(event),
    };

    let result = run_action(ctx, payload, folder_id).await;
    finish(ctx.metadata.as_ref(), event, action_name(payload.action), folder_id, result).await
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

async fn run_action(ctx: &SyncContext, payload: &SyncJobPayload, folder_id: Uuid) -> Result<(), AppError> {
    // Step 3: entity has no NAS storage object left to act on.
    let Some(storage) = ctx.metadata.get_storage_object(folder_id, Tier::Nas).await? else {
        return Ok(());
    };

    // Step 4: a retry of a job whose NAS op already landed.
    if storage.availability_status == AvailabilityStatus::Available
        && storage.object_key == payload.target_path
    {
        return Ok(());
    }

    match payload.action {
        SyncAction::Mkdir => do_mkdir(ctx, payload, storage).await,
        SyncAction::IngestContent => Err(AppError::from(anyhow::anyhow!(
            "INGEST_CONTENT is not a valid action for a folder entity"
        ))),
        SyncAction::Rename | SyncAction::Trash => relocate(ctx, payload, storage).await,
        SyncAction::Restore => do_restore(ctx, payload, folder_id, storage).await,
        SyncAction::Move => do_move(ctx, payload, folder_id, storage).await,
        SyncAction::Purge => do_purge(ctx, payload, folder_id, storage).await,
    }
}

async fn do_mkdir(
    ctx: &SyncContext,
    payload: &SyncJobPayload,
    mut storage: StorageObject,
) -> Result<(), AppError> {
    swallow_idempotent(ctx.nas.mkdir(&payload.target_path).await)?;
    storage.object_key = payload.target_path.clone();
    storage.availability_status = AvailabilityStatus::Available;
    ctx.metadata.update_storage_object(storage, None).await
}

/// Physically relocates the folder's NAS directory from `source_path` to
/// `target_path` and then bulk-rewrites every descendant storage object's
/// key under the same anchored prefix (§4.6 step 8). Shared by rename,
/// trash, restore, and the non-compensating branch of move — all four are,
/// physically, the same directory-move operation.
async fn relocate(
    ctx: &SyncContext,
    payload: &SyncJobPayload,
    mut storage: StorageObject,
) -> Result<(), AppError> {
    swallow_idempotent(
        ctx.nas
            .move_dir(&payload.source_path, &payload.target_path)
            .await,
    )?;
    storage.object_key = payload.target_path.clone();
    storage.availability_status = AvailabilityStatus::Available;
    ctx.metadata.update_storage_object(storage, None).await?;

    for kind in [EntityKind::Folder, EntityKind::File] {
        if let Err(err) = ctx
            .metadata
            .rewrite_storage_object_key_prefix(kind, &payload.source_path, &payload.target_path)
            .await
        {
            log::warn!(
                "descendant storage-object key rewrite failed kind={kind:?} old={} new={}: {err}",
                payload.source_path,
                payload.target_path,
            );
        }
    }
    Ok(())
}

/// Reverse of trash: relocates the NAS directory back from the trash path
/// and, on success, flips the entity back to ACTIVE, re-parents it, and
/// removes the TrashMetadata row (§4.6 restore).
async fn do_restore(
    ctx: &SyncContext,
    payload: &SyncJobPayload,
    folder_id: Uuid,
    storage: StorageObject,
) -> Result<(), AppError> {
    relocate(ctx, payload, storage).await?;

    if let Some(mut folder) = ctx.metadata.get_folder(folder_id).await? {
        folder.state = EntityState::Active;
        folder.parent_id = payload.original_parent_id;
        folder.path = payload.target_path.clone();
        folder.updated_at = Utc::now();
        ctx.metadata.update_folder(folder, None).await?;
    }

    if let Some(trash) = ctx.metadata.get_trash_metadata(Some(folder_id), None).await? {
        ctx.metadata.delete_trash_metadata(trash.id, None).await?;
    }
    Ok(())
}

async fn do_move(
    ctx: &SyncContext,
    payload: &SyncJobPayload,
    folder_id: Uuid,
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
        compensate_move(ctx, payload, folder_id, storage).await
    }
}

/// The target parent was concurrently trashed between command-time
/// validation and handler execution: revert the metadata move instead of
/// relocating the folder under a now-invalid parent (§4.6 move compensation).
async fn compensate_move(
    ctx: &SyncContext,
    payload: &SyncJobPayload,
    folder_id: Uuid,
    mut storage: StorageObject,
) -> Result<(), AppError> {
    let Some(mut folder) = ctx.metadata.get_folder(folder_id).await? else {
        return Ok(());
    };

    let original_parent_path = match payload.original_parent_id {
        Some(parent_id) => ctx
            .metadata
            .get_folder(parent_id)
            .await?
            .map(|p| p.path)
            .unwrap_or_else(|| "/".to_string()),
        None => "/".to_string(),
    };
    let restored_path = join_path(&original_parent_path, &folder.name);

    folder.parent_id = payload.original_parent_id;
    folder.path = restored_path.clone();
    folder.updated_at = Utc::now();
    ctx.metadata.update_folder(folder, None).await?;

    storage.object_key = payload.source_path.clone();
    storage.availability_status = AvailabilityStatus::Available;
    ctx.metadata.update_storage_object(storage, None).await?;

    log::warn!(
        "move compensated: target parent {target_parent_id:?} no longer ACTIVE, folder {folder_id} reverted to {restored_path}",
        target_parent_id = payload.target_parent_id,
    );
    Ok(())
}

/// Folders may only be trashed while empty (§4.5), so a trashed folder has
/// no descendants left to cascade — purge only has to remove its own entry.
async fn do_purge(
    ctx: &SyncContext,
    payload: &SyncJobPayload,
    folder_id: Uuid,
    _storage: StorageObject,
) -> Result<(), AppError> {
    swallow_idempotent(ctx.nas.rmdir(&payload.target_path, true).await)?;

    if let Some(mut folder) = ctx.metadata.get_folder(folder_id).await? {
        folder.state = EntityState::Deleted;
        folder.updated_at = Utc::now();
        ctx.metadata.update_folder(folder, None).await?;
    }
    ctx.metadata.delete_storage_object(folder_id, Tier::Nas).await?;
    if let Some(trash) = ctx.metadata.get_trash_metadata(Some(folder_id), None).await? {
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
    use crate::model::Folder;
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

    /// Builds active folders `/x` and `/y`, each with an AVAILABLE NAS
    /// storage object at its path, plus the `SyncContext` to run handlers
    /// against.
    async fn setup() -> (SyncContext, tempfile::TempDir, Folder, Folder) {
        let store: Arc<dyn MetadataStore> = Arc::new(InMemoryMetadataStore::new());
        let dir = tempfile::tempdir().unwrap();
        let nas: Arc<dyn crate::ports::StoragePort> = Arc::new(RootedFsStorage::new(dir.path()));
        let cache: Arc<dyn crate::ports::StoragePort> = Arc::new(RootedFsStorage::new(dir.path()));

        let mut x = Folder::root("user1");
        x.name = "x".into();
        x.path = "/x".into();
        let mut y = Folder::root("user1");
        y.name = "y".into();
        y.path = "/y".into();

        for folder in [&x, &y] {
            store.create_folder(folder.clone(), None).await.unwrap();
            nas.mkdir(&folder.path).await.unwrap();
            let storage = StorageObject::new(
                folder.id,
                EntityKind::Folder,
                Tier::Nas,
                folder.path.clone(),
                AvailabilityStatus::Available,
            );
            store.create_storage_object(storage, None).await.unwrap();
        }

        let ctx = SyncContext {
            metadata: store,
            nas,
            cache,
            lock: Arc::new(InProcessLock::new()),
            health: Arc::new(NasHealthCache::new()),
            config: test_config(),
        };
        (ctx, dir, x, y)
    }

    fn move_payload(x: &Folder, y: &Folder) -> SyncJobPayload {
        SyncJobPayload {
            action: SyncAction::Move,
            entity_kind: EntityKind::Folder,
            folder_id: Some(x.id),
            file_id: None,
            sync_event_id: None,
            source_path: x.path.clone(),
            target_path: format!("{}/{}", y.path, x.name),
            target_parent_id: Some(y.id),
            original_parent_id: x.parent_id,
        }
    }

    #[tokio::test]
    async fn move_into_active_target_relocates() {
        let (ctx, _dir, x, y) = setup().await;
        let payload = move_payload(&x, &y);

        run_action(&ctx, &payload, x.id).await.unwrap();

        let storage = ctx.metadata.get_storage_object(x.id, Tier::Nas).await.unwrap().unwrap();
        assert_eq!(storage.object_key, "/y/x");
        assert!(ctx.nas.exists("/y/x").await.unwrap());
    }

    #[tokio::test]
    async fn move_into_trashed_target_compensates() {
        let (ctx, _dir, x, y) = setup().await;
        let payload = move_payload(&x, &y);

        let mut trashed_y = ctx.metadata.get_folder(y.id).await.unwrap().unwrap();
        trashed_y.state = EntityState::Trashed;
        ctx.metadata.update_folder(trashed_y, None).await.unwrap();

        run_action(&ctx, &payload, x.id).await.unwrap();

        let reverted = ctx.metadata.get_folder(x.id).await.unwrap().unwrap();
        assert_eq!(reverted.parent_id, x.parent_id);
        assert_eq!(reverted.path, "/x");

        let storage = ctx.metadata.get_storage_object(x.id, Tier::Nas).await.unwrap().unwrap();
        assert_eq!(storage.object_key, "/x");
        assert!(ctx.nas.exists("/x").await.unwrap());
        assert!(!ctx.nas.exists("/y/x").await.unwrap());
    }
}
