//! File command service (§4.5): rename/move/trash/restore/purge. File
//! *creation* has no standalone command — the only way bytes enter the
//! system is through the multipart upload engine (§4.7), whose `complete`
//! step builds the File row directly (see `services::upload`). This module
//! covers every metadata-only mutation on an already-created file.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::model::{
    AvailabilityStatus, ConflictStrategy, EntityKind, EntityState, EventType, File, StorageObject,
    SyncEvent, Tier, TrashMetadata, new_id,
};
use crate::outbox;
use crate::ports::MetadataStore;
use crate::sync::{FILE_STREAM, SyncAction, SyncJobPayload};
use crate::validation::naming::validate_entity_name;

use super::{ConflictOutcome, ServiceContext, find_free_name};

pub struct FileCommands {
    ctx: Arc<ServiceContext>,
}

impl FileCommands {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        FileCommands { ctx }
    }

    pub async fn rename(
        &self,
        file_id: Uuid,
        new_name: &str,
        conflict: ConflictStrategy,
    ) -> Result<File, AppError> {
        validate_entity_name(new_name).map_err(AppError::validation)?;

        let mut file = self.active_file(file_id).await?;
        let mut storage = self.unsyncing_storage(file_id).await?;

        if new_name == file.name {
            return Ok(file);
        }

        let final_name = self
            .resolve_and_apply_conflict(file.folder_id, new_name, conflict, file_id)
            .await?;
        let Some(final_name) = final_name else {
            // SKIP: the caller's own lookup after this call observes the
            // untouched existing sibling; nothing further to do here.
            return self.active_file(file_id).await;
        };

        let old_key = storage.object_key.clone();
        let new_key = sibling_key(&old_key, &final_name);

        file.name = final_name;
        file.updated_at = Utc::now();
        storage.object_key = new_key.clone();
        storage.availability_status = AvailabilityStatus::Syncing;

        let event = SyncEvent::new(
            EventType::Rename,
            EntityKind::File,
            None,
            Some(file_id),
            &old_key,
            &new_key,
        );

        let mut tx = self.ctx.metadata.begin_transaction().await?;
        self.ctx.metadata.update_file(file.clone(), tx.as_mut()).await?;
        self.ctx
            .metadata
            .update_storage_object(storage, tx.as_mut())
            .await?;
        outbox::record(self.ctx.metadata.as_ref(), event.clone(), tx.as_mut()).await?;
        if let Some(mut t) = tx {
            t.commit().await?;
        }

        self.enqueue(SyncAction::Rename, file_id, &old_key, &new_key, event, None, None)
            .await?;
        Ok(file)
    }

    pub async fn move_file(
        &self,
        file_id: Uuid,
        target_folder_id: Uuid,
        conflict: ConflictStrategy,
    ) -> Result<File, AppError> {
        let mut file = self.active_file(file_id).await?;
        let mut storage = self.unsyncing_storage(file_id).await?;

        if target_folder_id == file.folder_id {
            return Err(AppError::conflict("file is already in the target folder"));
        }
        let target_folder = self
            .ctx
            .metadata
            .get_folder(target_folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("target folder not found"))?;
        if target_folder.state != EntityState::Active {
            return Err(AppError::precondition("target folder is not ACTIVE"));
        }

        let final_name = self
            .resolve_and_apply_conflict(target_folder_id, &file.name, conflict, file_id)
            .await?;
        let Some(final_name) = final_name else {
            return self.active_file(file_id).await;
        };

        let old_key = storage.object_key.clone();
        let original_folder_id = file.folder_id;
        let new_key = format!("{}/{}", target_folder.path.trim_end_matches('/'), final_name);
        let new_key = new_key.trim_start_matches('/').to_string();

        file.folder_id = target_folder_id;
        file.name = final_name;
        file.updated_at = Utc::now();
        storage.object_key = new_key.clone();
        storage.availability_status = AvailabilityStatus::Syncing;

        let event = SyncEvent::new(
            EventType::Move,
            EntityKind::File,
            None,
            Some(file_id),
            &old_key,
            &new_key,
        );

        let mut tx = self.ctx.metadata.begin_transaction().await?;
        self.ctx.metadata.update_file(file.clone(), tx.as_mut()).await?;
        self.ctx
            .metadata
            .update_storage_object(storage, tx.as_mut())
            .await?;
        outbox::record(self.ctx.metadata.as_ref(), event.clone(), tx.as_mut()).await?;
        if let Some(mut t) = tx {
            t.commit().await?;
        }

        self.enqueue(
            SyncAction::Move,
            file_id,
            &old_key,
            &new_key,
            event,
            Some(target_folder_id),
            Some(original_folder_id),
        )
        .await?;
        Ok(file)
    }

    /// Files have no "must be empty" restriction (§4.5 file delete policy).
    pub async fn trash(&self, file_id: Uuid, deleted_by: &str) -> Result<File, AppError> {
        let mut file = self.active_file(file_id).await?;
        let mut storage = self.unsyncing_storage(file_id).await?;

        let trash_id = new_id();
        let trash_key = format!(".trash/{trash_id}__{}", file.name);
        let old_key = storage.object_key.clone();

        let trash_meta = TrashMetadata {
            id: trash_id,
            folder_id: None,
            file_id: Some(file_id),
            original_path: old_key.clone(),
            original_parent_id: Some(file.folder_id),
            deleted_by: deleted_by.to_string(),
            deleted_at: Utc::now(),
            expires_at: Utc::now() + chrono::Duration::days(self.ctx.config.trash_retention_days as i64),
        };

        file.state = EntityState::Trashed;
        file.updated_at = Utc::now();
        storage.object_key = trash_key.clone();
        storage.availability_status = AvailabilityStatus::Syncing;

        let event = SyncEvent::new(
            EventType::Trash,
            EntityKind::File,
            None,
            Some(file_id),
            &old_key,
            &trash_key,
        );

        let mut tx = self.ctx.metadata.begin_transaction().await?;
        self.ctx.metadata.update_file(file.clone(), tx.as_mut()).await?;
        self.ctx
            .metadata
            .update_storage_object(storage, tx.as_mut())
            .await?;
        self.ctx
            .metadata
            .create_trash_metadata(trash_meta, tx.as_mut())
            .await?;
        outbox::record(self.ctx.metadata.as_ref(), event.clone(), tx.as_mut()).await?;
        if let Some(mut t) = tx {
            t.commit().await?;
        }

        self.enqueue(SyncAction::Trash, file_id, &old_key, &trash_key, event, None, None)
            .await?;
        Ok(file)
    }

    /// Command-time the file stays `TRASHED`; the handler flips it back to
    /// `ACTIVE` and re-parents it only once the physical move succeeds
    /// (§4.6 restore).
    pub async fn restore(&self, file_id: Uuid) -> Result<File, AppError> {
        let file = self
            .ctx
            .metadata
            .get_file(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("file not found"))?;
        if file.state != EntityState::Trashed {
            return Err(AppError::precondition("file is not TRASHED"));
        }
        let mut storage = self.unsyncing_storage(file_id).await?;
        let trash = self
            .ctx
            .metadata
            .get_trash_metadata(None, Some(file_id))
            .await?
            .ok_or_else(|| AppError::not_found("trash metadata not found"))?;

        let original_folder_id = trash.original_parent_id.unwrap_or(file.folder_id);
        let original_folder = self
            .ctx
            .metadata
            .get_folder(original_folder_id)
            .await?
            .ok_or_else(|| AppError::conflict("original folder no longer exists"))?;
        if original_folder.state != EntityState::Active {
            return Err(AppError::conflict("original folder is not ACTIVE"));
        }
        if let Some(existing) = self
            .ctx
            .metadata
            .get_file_by_folder_and_name(original_folder_id, &file.name)
            .await?
        {
            if existing.id != file_id && existing.state == EntityState::Active {
                return Err(AppError::conflict(
                    "a file with this name already exists at the restore destination",
                ));
            }
        }

        let trash_key = storage.object_key.clone();
        storage.object_key = trash.original_path.clone();
        storage.availability_status = AvailabilityStatus::Syncing;

        let event = SyncEvent::new(
            EventType::Restore,
            EntityKind::File,
            None,
            Some(file_id),
            &trash_key,
            &trash.original_path,
        );

        let mut tx = self.ctx.metadata.begin_transaction().await?;
        self.ctx
            .metadata
            .update_storage_object(storage, tx.as_mut())
            .await?;
        outbox::record(self.ctx.metadata.as_ref(), event.clone(), tx.as_mut()).await?;
        if let Some(mut t) = tx {
            t.commit().await?;
        }

        self.enqueue(
            SyncAction::Restore,
            file_id,
            &trash_key,
            &trash.original_path,
            event,
            None,
            Some(original_folder_id),
        )
        .await?;
        Ok(file)
    }

    /// Permanently deletes a trashed file. The entity stays `TRASHED` until
    /// the handler confirms the NAS delete and flips it to `DELETED`.
    pub async fn purge(&self, file_id: Uuid) -> Result<File, AppError> {
        let file = self
            .ctx
            .metadata
            .get_file(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("file not found"))?;
        if file.state != EntityState::Trashed {
            return Err(AppError::precondition("only TRASHED files can be purged"));
        }
        let mut storage = self.unsyncing_storage(file_id).await?;
        let key = storage.object_key.clone();
        storage.availability_status = AvailabilityStatus::Syncing;

        let event = SyncEvent::new(EventType::Purge, EntityKind::File, None, Some(file_id), &key, &key);

        let mut tx = self.ctx.metadata.begin_transaction().await?;
        self.ctx
            .metadata
            .update_storage_object(storage, tx.as_mut())
            .await?;
        outbox::record(self.ctx.metadata.as_ref(), event.clone(), tx.as_mut()).await?;
        if let Some(mut t) = tx {
            t.commit().await?;
        }

        self.enqueue(SyncAction::Purge, file_id, &key, &key, event, None, None)
            .await?;
        Ok(file)
    }

    // ---- helpers ----

    async fn active_file(&self, id: Uuid) -> Result<File, AppError> {
        let file = self
            .ctx
            .metadata
            .get_file(id)
            .await?
            .ok_or_else(|| AppError::not_found("file not found"))?;
        if file.state != EntityState::Active {
            return Err(AppError::precondition("file is not ACTIVE"));
        }
        Ok(file)
    }

    async fn unsyncing_storage(&self, file_id: Uuid) -> Result<StorageObject, AppError> {
        let storage = self
            .ctx
            .metadata
            .get_storage_object(file_id, Tier::Nas)
            .await?
            .ok_or_else(|| AppError::not_found("file storage object not found"))?;
        if storage.availability_status == AvailabilityStatus::Syncing {
            return Err(AppError::conflict("file has a sync operation in flight (FILE_SYNCING)"));
        }
        Ok(storage)
    }

    /// Runs conflict resolution and, for `OVERWRITE`, trashes the
    /// conflicting sibling before returning the name to proceed with.
    /// Returns `None` for `SKIP` (caller should return the existing entity
    /// unchanged); `Some(name)` otherwise.
    async fn resolve_and_apply_conflict(
        &self,
        folder_id: Uuid,
        name: &str,
        conflict: ConflictStrategy,
        exclude_id: Uuid,
    ) -> Result<Option<String>, AppError> {
        match resolve_conflict(self.ctx.metadata.as_ref(), folder_id, name, conflict, exclude_id).await? {
            ConflictOutcome::Proceed(name) => Ok(Some(name)),
            ConflictOutcome::Skip(_existing) => Ok(None),
            ConflictOutcome::Overwrite(existing) => {
                self.trash(existing.id, "system-overwrite").await?;
                Ok(Some(name.to_string()))
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn enqueue(
        &self,
        action: SyncAction,
        file_id: Uuid,
        source_path: &str,
        target_path: &str,
        event: SyncEvent,
        target_parent_id: Option<Uuid>,
        original_parent_id: Option<Uuid>,
    ) -> Result<(), AppError> {
        let payload = SyncJobPayload {
            action,
            entity_kind: EntityKind::File,
            folder_id: None,
            file_id: Some(file_id),
            sync_event_id: Some(event.id),
            source_path: source_path.to_string(),
            target_path: target_path.to_string(),
            target_parent_id,
            original_parent_id,
        };
        let payload_json = serde_json::to_value(&payload)
            .map_err(|e| AppError::from(anyhow::anyhow!("failed to serialize sync payload: {e}")))?;
        outbox::enqueue(
            self.ctx.metadata.as_ref(),
            self.ctx.queue.as_ref(),
            FILE_STREAM,
            event,
            payload_json,
        )
        .await
    }
}

/// Conflict resolution against active siblings under `folder_id` (§4.5
/// step 3), shared between `FileCommands` and the multipart completion
/// path in `services::upload` (both need it to finalize a file's name).
/// `exclude_id` lets a rename/move ignore the entity's own current row when
/// it happens to share a folder with itself (a no-op collision).
pub(crate) async fn resolve_conflict(
    metadata: &dyn MetadataStore,
    folder_id: Uuid,
    name: &str,
    conflict: ConflictStrategy,
    exclude_id: Uuid,
) -> Result<ConflictOutcome<File>, AppError> {
    let existing = metadata
        .get_file_by_folder_and_name(folder_id, name)
        .await?
        .filter(|f| f.state == EntityState::Active && f.id != exclude_id);
    let Some(existing) = existing else {
        return Ok(ConflictOutcome::Proceed(name.to_string()));
    };

    match conflict {
        ConflictStrategy::Error => Err(AppError::conflict(format!("a file named '{name}' already exists"))),
        ConflictStrategy::Skip => Ok(ConflictOutcome::Skip(existing)),
        ConflictStrategy::Overwrite => Ok(ConflictOutcome::Overwrite(existing)),
        ConflictStrategy::Rename => {
            let free = find_free_name(name, |candidate| async move {
                let collision = metadata
                    .get_file_by_folder_and_name(folder_id, &candidate)
                    .await?
                    .is_some_and(|f| f.state == EntityState::Active && f.id != exclude_id);
                Ok(collision)
            })
            .await?;
            Ok(ConflictOutcome::Proceed(free))
        }
    }
}

/// Derives a sibling NAS key by swapping the last path segment of `key` for
/// `new_name`, used by rename (where the containing folder doesn't change).
fn sibling_key(key: &str, new_name: &str) -> String {
    match key.rfind('/') {
        Some(idx) => format!("{}/{}", &key[..idx], new_name),
        None => new_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::{AvailabilityStatus, EntityKind, Folder, SyncStatus};
    use crate::queue_impl::InProcessJobQueue;
    use crate::store::memory::InMemoryMetadataStore;

    fn test_config() -> Arc<Config> {
        Arc::new(Config {
            host: "0.0.0.0".into(),
            port: 8080,
            nas_mount_path: "/tmp".into(),
            cache_mount_path: "/tmp".into(),
            part_size_bytes: 10 * 1024 * 1024,
            multipart_threshold_bytes: 100 * 1024 * 1024,
            max_active_sessions: 10,
            max_total_upload_bytes: 5 * 1024 * 1024 * 1024,
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

    async fn seed_file(store: &InMemoryMetadataStore, folder_id: Uuid, name: &str) -> File {
        let file = File {
            id: new_id(),
            name: name.to_string(),
            folder_id,
            size_bytes: 10,
            mime_type: "text/plain".into(),
            checksum: None,
            state: EntityState::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            created_by: "user1".into(),
        };
        store.create_file(file.clone(), None).await.unwrap();
        let storage = StorageObject::new(
            file.id,
            EntityKind::File,
            Tier::Nas,
            format!("/{name}"),
            AvailabilityStatus::Available,
        );
        store.create_storage_object(storage, None).await.unwrap();
        file
    }

    fn commands(store: Arc<InMemoryMetadataStore>) -> FileCommands {
        let queue = Arc::new(InProcessJobQueue::new(store.clone()));
        let ctx = Arc::new(ServiceContext::new(store, queue, test_config()));
        FileCommands::new(ctx)
    }

    async fn setup() -> (FileCommands, Arc<InMemoryMetadataStore>, Folder) {
        let store = Arc::new(InMemoryMetadataStore::new());
        let root = Folder::root("system");
        store.create_folder(root.clone(), None).await.unwrap();
        let commands = commands(store.clone());
        (commands, store, root)
    }

    #[tokio::test]
    async fn rename_produces_sync_event() {
        let (commands, store, root) = setup().await;
        let file = seed_file(&store, root.id, "a.txt").await;
        let renamed = commands.rename(file.id, "b.txt", ConflictStrategy::Error).await.unwrap();
        assert_eq!(renamed.name, "b.txt");
        let events = store.get_sync_status_for_entity(file.id).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].status, SyncStatus::Queued);
    }

    #[tokio::test]
    async fn rename_to_colliding_name_errors_by_default() {
        let (commands, store, root) = setup().await;
        let _a = seed_file(&store, root.id, "a.txt").await;
        let b = seed_file(&store, root.id, "b.txt").await;
        let err = commands
            .rename(b.id, "a.txt", ConflictStrategy::Error)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn overwrite_trashes_the_conflicting_sibling() {
        let (commands, store, root) = setup().await;
        let a = seed_file(&store, root.id, "a.txt").await;
        let b = seed_file(&store, root.id, "b.txt").await;
        commands
            .rename(b.id, "a.txt", ConflictStrategy::Overwrite)
            .await
            .unwrap();
        let original = store.get_file(a.id).await.unwrap().unwrap();
        assert_eq!(original.state, EntityState::Trashed);
    }

    #[tokio::test]
    async fn trash_then_restore_round_trips() {
        let (commands, store, root) = setup().await;
        let file = seed_file(&store, root.id, "a.txt").await;
        commands.trash(file.id, "user1").await.unwrap();
        let trashed = store.get_file(file.id).await.unwrap().unwrap();
        assert_eq!(trashed.state, EntityState::Trashed);

        commands.restore(file.id).await.unwrap();
        let events = store.get_sync_status_for_entity(file.id).await.unwrap();
        assert!(events.iter().any(|e| e.event_type == EventType::Restore));
    }

    #[tokio::test]
    async fn move_into_same_folder_is_rejected() {
        let (commands, store, root) = setup().await;
        let file = seed_file(&store, root.id, "a.txt").await;
        let err = commands
            .move_file(file.id, root.id, ConflictStrategy::Error)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
