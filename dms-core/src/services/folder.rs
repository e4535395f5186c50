//! Folder command service (§4.5): create/rename/move/trash/restore/purge.
//! Every command follows the same shape — validate, load + lock the target
//! row, resolve naming conflicts, mutate metadata and the outbox in one
//! transaction, commit, enqueue. NAS/cache I/O never happens here; the
//! command only ever touches the metadata store and the job queue.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::model::{
    AvailabilityStatus, ConflictStrategy, EntityKind, EntityState, EventType, Folder,
    StorageObject, SyncEvent, Tier, TrashMetadata, join_path, new_id, path_is_self_or_descendant,
};
use crate::outbox;
use crate::sync::{FOLDER_STREAM, SyncAction, SyncJobPayload};
use crate::validation::naming::validate_entity_name;

use super::{ConflictOutcome, ServiceContext, find_free_name};

pub struct FolderCommands {
    ctx: Arc<ServiceContext>,
}

impl FolderCommands {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        FolderCommands { ctx }
    }

    /// Root folder bootstrap (§4.5 special case): on startup, create the
    /// root if absent, with a pre-`AVAILABLE` NAS storage object since the
    /// root directory is assumed to already exist on disk. Idempotent —
    /// safe to call on every process start.
    pub async fn ensure_root(&self, created_by: &str) -> Result<Folder, AppError> {
        if let Some(root) = self
            .ctx
            .metadata
            .get_folder_by_parent_and_name(None, "")
            .await?
        {
            return Ok(root);
        }
        let root = Folder::root(created_by);
        self.ctx.metadata.create_folder(root.clone(), None).await?;
        let storage = StorageObject::new(
            root.id,
            EntityKind::Folder,
            Tier::Nas,
            "/",
            AvailabilityStatus::Available,
        );
        self.ctx.metadata.create_storage_object(storage, None).await?;
        Ok(root)
    }

    pub async fn create(
        &self,
        parent_id: Uuid,
        name: &str,
        created_by: &str,
        conflict: ConflictStrategy,
    ) -> Result<Folder, AppError> {
        reject_overwrite(conflict)?;
        validate_entity_name(name).map_err(AppError::validation)?;

        let parent = self.active_folder(parent_id).await?;

        let final_name = match self.resolve_conflict(parent_id, name, conflict).await? {
            ConflictOutcome::Proceed(name) => name,
            ConflictOutcome::Skip(existing) => return Ok(existing),
            ConflictOutcome::Overwrite(_) => unreachable!("folders reject OVERWRITE before conflict resolution runs"),
        };

        let path = join_path(&parent.path, &final_name);
        let folder = Folder {
            id: new_id(),
            name: final_name,
            parent_id: Some(parent_id),
            path: path.clone(),
            state: EntityState::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            created_by: created_by.to_string(),
        };
        let storage = StorageObject::new(
            folder.id,
            EntityKind::Folder,
            Tier::Nas,
            path.clone(),
            AvailabilityStatus::Syncing,
        );
        let event = SyncEvent::new(EventType::Create, EntityKind::Folder, Some(folder.id), None, &path, &path);

        let mut tx = self.ctx.metadata.begin_transaction().await?;
        self.ctx.metadata.create_folder(folder.clone(), tx.as_mut()).await?;
        self.ctx
            .metadata
            .create_storage_object(storage, tx.as_mut())
            .await?;
        outbox::record(self.ctx.metadata.as_ref(), event.clone(), tx.as_mut()).await?;
        if let Some(mut t) = tx {
            t.commit().await?;
        }

        self.enqueue(SyncAction::Mkdir, folder.id, &path, &path, event, None, None)
            .await?;
        Ok(folder)
    }

    pub async fn rename(
        &self,
        folder_id: Uuid,
        new_name: &str,
        conflict: ConflictStrategy,
    ) -> Result<Folder, AppError> {
        reject_overwrite(conflict)?;
        validate_entity_name(new_name).map_err(AppError::validation)?;

        let mut folder = self.active_non_root_folder(folder_id).await?;
        let mut storage = self.unsyncing_storage(folder_id).await?;

        if new_name == folder.name {
            return Ok(folder);
        }

        let parent_id = folder.parent_id.expect("non-root folder missing parent_id");
        let final_name = match self.resolve_conflict(parent_id, new_name, conflict).await? {
            ConflictOutcome::Proceed(name) => name,
            ConflictOutcome::Skip(existing) => return Ok(existing),
            ConflictOutcome::Overwrite(_) => unreachable!("folders reject OVERWRITE before conflict resolution runs"),
        };

        let parent = self.active_folder(parent_id).await?;
        let old_path = folder.path.clone();
        let new_path = join_path(&parent.path, &final_name);

        folder.name = final_name;
        folder.path = new_path.clone();
        folder.updated_at = Utc::now();
        storage.object_key = new_path.clone();
        storage.availability_status = AvailabilityStatus::Syncing;

        let event = SyncEvent::new(
            EventType::Rename,
            EntityKind::Folder,
            Some(folder_id),
            None,
            &old_path,
            &new_path,
        );

        let mut tx = self.ctx.metadata.begin_transaction().await?;
        self.ctx
            .metadata
            .update_folder(folder.clone(), tx.as_mut())
            .await?;
        self.ctx
            .metadata
            .rewrite_folder_path_prefix(&old_path, &new_path, tx.as_mut())
            .await?;
        self.ctx
            .metadata
            .update_storage_object(storage, tx.as_mut())
            .await?;
        outbox::record(self.ctx.metadata.as_ref(), event.clone(), tx.as_mut()).await?;
        if let Some(mut t) = tx {
            t.commit().await?;
        }

        self.enqueue(SyncAction::Rename, folder_id, &old_path, &new_path, event, None, None)
            .await?;
        Ok(folder)
    }

    pub async fn move_folder(
        &self,
        folder_id: Uuid,
        target_parent_id: Uuid,
        conflict: ConflictStrategy,
    ) -> Result<Folder, AppError> {
        reject_overwrite(conflict)?;

        let mut folder = self.active_non_root_folder(folder_id).await?;
        let mut storage = self.unsyncing_storage(folder_id).await?;

        if target_parent_id == folder_id {
            return Err(AppError::conflict("cannot move a folder into itself"));
        }
        let target_parent = self.active_folder(target_parent_id).await?;
        if path_is_self_or_descendant(&folder.path, &target_parent.path) {
            return Err(AppError::conflict(
                "cannot move a folder into its own descendant",
            ));
        }

        let final_name = match self.resolve_conflict(target_parent_id, &folder.name, conflict).await? {
            ConflictOutcome::Proceed(name) => name,
            ConflictOutcome::Skip(existing) => return Ok(existing),
            ConflictOutcome::Overwrite(_) => unreachable!("folders reject OVERWRITE before conflict resolution runs"),
        };

        let old_path = folder.path.clone();
        let original_parent_id = folder.parent_id;
        let new_path = join_path(&target_parent.path, &final_name);

        folder.parent_id = Some(target_parent_id);
        folder.name = final_name;
        folder.path = new_path.clone();
        folder.updated_at = Utc::now();
        storage.object_key = new_path.clone();
        storage.availability_status = AvailabilityStatus::Syncing;

        let event = SyncEvent::new(
            EventType::Move,
            EntityKind::Folder,
            Some(folder_id),
            None,
            &old_path,
            &new_path,
        );

        let mut tx = self.ctx.metadata.begin_transaction().await?;
        self.ctx
            .metadata
            .update_folder(folder.clone(), tx.as_mut())
            .await?;
        self.ctx
            .metadata
            .rewrite_folder_path_prefix(&old_path, &new_path, tx.as_mut())
            .await?;
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
            folder_id,
            &old_path,
            &new_path,
            event,
            Some(target_parent_id),
            original_parent_id,
        )
        .await?;
        Ok(folder)
    }

    /// Only empty folders may be trashed (§4.5 folder delete policy,
    /// `FOLDER_NOT_EMPTY`). The entity flips to `TRASHED` immediately at
    /// commit time; the physical relocation into `.trash/` is asynchronous.
    pub async fn trash(&self, folder_id: Uuid, deleted_by: &str) -> Result<Folder, AppError> {
        let mut folder = self.active_non_root_folder(folder_id).await?;
        let mut storage = self.unsyncing_storage(folder_id).await?;

        let children = self.ctx.metadata.list_folder_children(folder_id).await?;
        let files = self.ctx.metadata.list_folder_files(folder_id).await?;
        if !children.is_empty() || !files.is_empty() {
            return Err(AppError::conflict("folder is not empty (FOLDER_NOT_EMPTY)"));
        }

        let trash_id = new_id();
        let trash_key = format!(".trash/{trash_id}__{}", folder.name);
        let old_path = folder.path.clone();

        let trash_meta = TrashMetadata {
            id: trash_id,
            folder_id: Some(folder_id),
            file_id: None,
            original_path: old_path.clone(),
            original_parent_id: folder.parent_id,
            deleted_by: deleted_by.to_string(),
            deleted_at: Utc::now(),
            expires_at: Utc::now() + chrono::Duration::days(self.ctx.config.trash_retention_days as i64),
        };

        folder.state = EntityState::Trashed;
        folder.updated_at = Utc::now();
        storage.object_key = trash_key.clone();
        storage.availability_status = AvailabilityStatus::Syncing;

        let event = SyncEvent::new(
            EventType::Trash,
            EntityKind::Folder,
            Some(folder_id),
            None,
            &old_path,
            &trash_key,
        );

        let mut tx = self.ctx.metadata.begin_transaction().await?;
        self.ctx
            .metadata
            .update_folder(folder.clone(), tx.as_mut())
            .await?;
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

        self.enqueue(SyncAction::Trash, folder_id, &old_path, &trash_key, event, None, None)
            .await?;
        Ok(folder)
    }

    /// The entity stays `TRASHED` at commit time; the handler flips it back
    /// to `ACTIVE` and re-parents it only once the physical move succeeds
    /// (§4.6 restore), so a crashed/retried restore never leaves the tree
    /// in a half-restored state.
    pub async fn restore(&self, folder_id: Uuid) -> Result<Folder, AppError> {
        let folder = self
            .ctx
            .metadata
            .get_folder(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("folder not found"))?;
        if folder.state != EntityState::Trashed {
            return Err(AppError::precondition("folder is not TRASHED"));
        }
        let mut storage = self.unsyncing_storage(folder_id).await?;
        let trash = self
            .ctx
            .metadata
            .get_trash_metadata(Some(folder_id), None)
            .await?
            .ok_or_else(|| AppError::not_found("trash metadata not found"))?;

        if let Some(parent_id) = trash.original_parent_id {
            let parent = self
                .ctx
                .metadata
                .get_folder(parent_id)
                .await?
                .ok_or_else(|| AppError::conflict("original parent folder no longer exists"))?;
            if parent.state != EntityState::Active {
                return Err(AppError::conflict("original parent folder is not ACTIVE"));
            }
        }
        if let Some(existing) = self
            .ctx
            .metadata
            .get_folder_by_parent_and_name(trash.original_parent_id, &folder.name)
            .await?
        {
            if existing.id != folder_id && existing.state == EntityState::Active {
                return Err(AppError::conflict(
                    "a folder with this name already exists at the restore destination",
                ));
            }
        }

        let trash_key = storage.object_key.clone();
        storage.object_key = trash.original_path.clone();
        storage.availability_status = AvailabilityStatus::Syncing;

        let event = SyncEvent::new(
            EventType::Restore,
            EntityKind::Folder,
            Some(folder_id),
            None,
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
            folder_id,
            &trash_key,
            &trash.original_path,
            event,
            None,
            trash.original_parent_id,
        )
        .await?;
        Ok(folder)
    }

    /// Permanently deletes a trashed folder. The entity stays `TRASHED`
    /// until the handler confirms the NAS delete and flips it to `DELETED`.
    pub async fn purge(&self, folder_id: Uuid) -> Result<Folder, AppError> {
        let folder = self
            .ctx
            .metadata
            .get_folder(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("folder not found"))?;
        if folder.state != EntityState::Trashed {
            return Err(AppError::precondition("only TRASHED folders can be purged"));
        }
        let mut storage = self.unsyncing_storage(folder_id).await?;
        let key = storage.object_key.clone();
        storage.availability_status = AvailabilityStatus::Syncing;

        let event = SyncEvent::new(EventType::Purge, EntityKind::Folder, Some(folder_id), None, &key, &key);

        let mut tx = self.ctx.metadata.begin_transaction().await?;
        self.ctx
            .metadata
            .update_storage_object(storage, tx.as_mut())
            .await?;
        outbox::record(self.ctx.metadata.as_ref(), event.clone(), tx.as_mut()).await?;
        if let Some(mut t) = tx {
            t.commit().await?;
        }

        self.enqueue(SyncAction::Purge, folder_id, &key, &key, event, None, None)
            .await?;
        Ok(folder)
    }

    // ---- helpers ----

    async fn active_folder(&self, id: Uuid) -> Result<Folder, AppError> {
        let folder = self
            .ctx
            .metadata
            .get_folder(id)
            .await?
            .ok_or_else(|| AppError::not_found("folder not found"))?;
        if folder.state != EntityState::Active {
            return Err(AppError::precondition("folder is not ACTIVE"));
        }
        Ok(folder)
    }

    async fn active_non_root_folder(&self, id: Uuid) -> Result<Folder, AppError> {
        let folder = self.active_folder(id).await?;
        if folder.is_root() {
            return Err(AppError::precondition("the root folder cannot be renamed, moved, or trashed"));
        }
        Ok(folder)
    }

    async fn unsyncing_storage(&self, folder_id: Uuid) -> Result<StorageObject, AppError> {
        let storage = self
            .ctx
            .metadata
            .get_storage_object(folder_id, Tier::Nas)
            .await?
            .ok_or_else(|| AppError::not_found("folder storage object not found"))?;
        if storage.availability_status == AvailabilityStatus::Syncing {
            return Err(AppError::conflict("folder has a sync operation in flight (FOLDER_SYNCING)"));
        }
        Ok(storage)
    }

    /// Conflict resolution against active siblings under `parent_id`
    /// (§4.5 step 3). `ERROR`/`SKIP`/`RENAME`; `OVERWRITE` is rejected
    /// earlier by `reject_overwrite` since it only applies to files.
    async fn resolve_conflict(
        &self,
        parent_id: Uuid,
        name: &str,
        conflict: ConflictStrategy,
    ) -> Result<ConflictOutcome<Folder>, AppError> {
        let existing = self
            .ctx
            .metadata
            .get_folder_by_parent_and_name(Some(parent_id), name)
            .await?
            .filter(|f| f.state == EntityState::Active);
        let Some(existing) = existing else {
            return Ok(ConflictOutcome::Proceed(name.to_string()));
        };

        match conflict {
            ConflictStrategy::Error => Err(AppError::conflict(format!(
                "a folder named '{name}' already exists"
            ))),
            ConflictStrategy::Skip => Ok(ConflictOutcome::Skip(existing)),
            ConflictStrategy::Overwrite => Err(AppError::validation(
                "OVERWRITE conflict strategy is only valid for files",
            )),
            ConflictStrategy::Rename => {
                let metadata = self.ctx.metadata.clone();
                let free = find_free_name(name, move |candidate| {
                    let metadata = metadata.clone();
                    async move {
                        let collision = metadata
                            .get_folder_by_parent_and_name(Some(parent_id), &candidate)
                            .await?
                            .is_some_and(|f| f.state == EntityState::Active);
                        Ok(collision)
                    }
                })
                .await?;
                Ok(ConflictOutcome::Proceed(free))
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn enqueue(
        &self,
        action: SyncAction,
        folder_id: Uuid,
        source_path: &str,
        target_path: &str,
        event: SyncEvent,
        target_parent_id: Option<Uuid>,
        original_parent_id: Option<Uuid>,
    ) -> Result<(), AppError> {
        let payload = SyncJobPayload {
            action,
            entity_kind: EntityKind::Folder,
            folder_id: Some(folder_id),
            file_id: None,
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
            FOLDER_STREAM,
            event,
            payload_json,
        )
        .await
    }
}

fn reject_overwrite(conflict: ConflictStrategy) -> Result<(), AppError> {
    if conflict == ConflictStrategy::Overwrite {
        Err(AppError::validation(
            "OVERWRITE conflict strategy is only valid for files",
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::SyncStatus;
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

    fn setup() -> (FolderCommands, Arc<InMemoryMetadataStore>) {
        let store = Arc::new(InMemoryMetadataStore::new());
        let queue = Arc::new(InProcessJobQueue::new(store.clone()));
        let ctx = Arc::new(ServiceContext::new(store.clone(), queue, test_config()));
        (FolderCommands::new(ctx), store)
    }

    #[tokio::test]
    async fn create_nested_folder_produces_one_sync_event() {
        let (commands, store) = setup();
        let root = commands.ensure_root("system").await.unwrap();

        let folder = commands
            .create(root.id, "a", "user1", ConflictStrategy::Error)
            .await
            .unwrap();
        assert_eq!(folder.path, "/a");

        let storage = store
            .get_storage_object(folder.id, Tier::Nas)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(storage.availability_status, AvailabilityStatus::Syncing);

        let events = store.get_sync_status_for_entity(folder.id).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventType::Create);
    }

    #[tokio::test]
    async fn duplicate_name_errors_by_default() {
        let (commands, _store) = setup();
        let root = commands.ensure_root("system").await.unwrap();
        commands
            .create(root.id, "a", "user1", ConflictStrategy::Error)
            .await
            .unwrap();
        let err = commands
            .create(root.id, "a", "user1", ConflictStrategy::Error)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn duplicate_name_with_rename_strategy_appends_suffix() {
        let (commands, _store) = setup();
        let root = commands.ensure_root("system").await.unwrap();
        commands
            .create(root.id, "a", "user1", ConflictStrategy::Error)
            .await
            .unwrap();
        let second = commands
            .create(root.id, "a", "user1", ConflictStrategy::Rename)
            .await
            .unwrap();
        assert_eq!(second.name, "a (1)");
    }

    #[tokio::test]
    async fn move_into_self_is_rejected() {
        let (commands, _store) = setup();
        let root = commands.ensure_root("system").await.unwrap();
        let a = commands
            .create(root.id, "a", "user1", ConflictStrategy::Error)
            .await
            .unwrap();
        let err = commands
            .move_folder(a.id, a.id, ConflictStrategy::Error)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn move_into_own_descendant_is_rejected() {
        let (commands, _store) = setup();
        let root = commands.ensure_root("system").await.unwrap();
        let a = commands
            .create(root.id, "a", "user1", ConflictStrategy::Error)
            .await
            .unwrap();
        let b = commands
            .create(a.id, "b", "user1", ConflictStrategy::Error)
            .await
            .unwrap();
        let err = commands
            .move_folder(a.id, b.id, ConflictStrategy::Error)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn trash_requires_empty_folder() {
        let (commands, _store) = setup();
        let root = commands.ensure_root("system").await.unwrap();
        let a = commands
            .create(root.id, "a", "user1", ConflictStrategy::Error)
            .await
            .unwrap();
        commands
            .create(a.id, "b", "user1", ConflictStrategy::Error)
            .await
            .unwrap();
        let err = commands.trash(a.id, "user1").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn trash_then_restore_round_trips_to_active() {
        let (commands, store) = setup();
        let root = commands.ensure_root("system").await.unwrap();
        let a = commands
            .create(root.id, "a", "user1", ConflictStrategy::Error)
            .await
            .unwrap();

        let trashed = commands.trash(a.id, "user1").await.unwrap();
        assert_eq!(trashed.state, EntityState::Trashed);
        let trash_meta = store
            .get_trash_metadata(Some(a.id), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(trash_meta.original_path, "/a");

        let restored = commands.restore(a.id).await.unwrap();
        // Command-time restore leaves state TRASHED; the handler flips it.
        assert_eq!(restored.state, EntityState::Trashed);
        let events = store.get_sync_status_for_entity(a.id).await.unwrap();
        assert!(events.iter().any(|e| e.event_type == EventType::Restore));
    }

    #[tokio::test]
    async fn rename_to_same_name_is_a_no_op() {
        let (commands, store) = setup();
        let root = commands.ensure_root("system").await.unwrap();
        let a = commands
            .create(root.id, "a", "user1", ConflictStrategy::Error)
            .await
            .unwrap();
        let events_before = store.get_sync_status_for_entity(a.id).await.unwrap().len();
        commands
            .rename(a.id, "a", ConflictStrategy::Error)
            .await
            .unwrap();
        let events_after = store.get_sync_status_for_entity(a.id).await.unwrap().len();
        assert_eq!(events_before, events_after);
    }

    #[tokio::test]
    async fn root_cannot_be_renamed_or_trashed() {
        let (commands, _store) = setup();
        let root = commands.ensure_root("system").await.unwrap();
        assert!(
            commands
                .rename(root.id, "new", ConflictStrategy::Error)
                .await
                .is_err()
        );
        assert!(commands.trash(root.id, "user1").await.is_err());
    }

    #[tokio::test]
    async fn enqueue_transitions_event_to_queued() {
        let (commands, store) = setup();
        let root = commands.ensure_root("system").await.unwrap();
        let a = commands
            .create(root.id, "a", "user1", ConflictStrategy::Error)
            .await
            .unwrap();
        let events = store.get_sync_status_for_entity(a.id).await.unwrap();
        assert_eq!(events[0].status, SyncStatus::Queued);
    }
}
