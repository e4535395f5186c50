//! Multipart upload engine (§4.7): `initiate` / `upload_part` / `complete` /
//! `abort` / `get_status`. `initiate` is only ever reached once the
//! admission gate (`services::admission`) has confirmed there's a slot —
//! this module owns the session state machine and the actual byte
//! movement, not the waiting-queue semantics around it.

use std::sync::Arc;

use bytes::Bytes;
use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::AppError;
use crate::model::{
    AvailabilityStatus, CompletedPart, EntityKind, EntityState, EventType, File, InitiateArgs,
    StorageObject, SyncEvent, Tier, UploadSession, UploadStatus, join_path, new_id, total_parts,
};
use crate::outbox;
use crate::ports::{StorageError, StoragePort};
use crate::sync::{FILE_STREAM, SyncAction, SyncJobPayload};
use crate::validation::naming::validate_entity_name;

use super::file::{FileCommands, resolve_conflict};
use super::{ConflictOutcome, ServiceContext};

/// Sessions older than this are reclaimed even if never explicitly
/// completed or aborted (§4.7 state machine, §5 lazy expiry). Not an
/// environment variable — §6's configuration list has no session-TTL key,
/// so this stays a fixed constant rather than an invented knob.
const SESSION_TTL_HOURS: i64 = 24;

pub struct PartProgress {
    pub uploaded_bytes: u64,
    pub progress_percent: f64,
}

pub struct UploadCommands {
    ctx: Arc<ServiceContext>,
    cache: Arc<dyn StoragePort>,
}

impl UploadCommands {
    pub fn new(ctx: Arc<ServiceContext>, cache: Arc<dyn StoragePort>) -> Self {
        UploadCommands { ctx, cache }
    }

    /// Validates the target and size, then creates the session in `INIT`.
    /// Admission control is the caller's responsibility.
    pub async fn initiate(&self, args: InitiateArgs, created_by: &str) -> Result<UploadSession, AppError> {
        validate_entity_name(&args.file_name).map_err(AppError::validation)?;
        if args.total_size < self.ctx.config.multipart_threshold_bytes {
            return Err(AppError::validation(format!(
                "total_size {} is below the multipart threshold of {} bytes; use a direct write instead",
                args.total_size, self.ctx.config.multipart_threshold_bytes
            )));
        }
        let folder = self
            .ctx
            .metadata
            .get_folder(args.folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("target folder not found"))?;
        if folder.state != EntityState::Active {
            return Err(AppError::precondition("target folder is not ACTIVE"));
        }

        let part_size = self.ctx.config.part_size_bytes;
        let session = UploadSession {
            id: new_id(),
            file_name: args.file_name,
            folder_id: args.folder_id,
            total_size: args.total_size,
            part_size,
            total_parts: total_parts(args.total_size, part_size),
            mime_type: args.mime_type,
            status: UploadStatus::Init,
            completed_parts: Default::default(),
            uploaded_bytes: 0,
            expires_at: Utc::now() + Duration::hours(SESSION_TTL_HOURS),
            created_by: created_by.to_string(),
            file_id: None,
            conflict_strategy: args.conflict_strategy,
        };
        self.ctx.metadata.create_upload_session(session.clone()).await?;
        Ok(session)
    }

    /// Streams one part to the cache tier. Re-uploading a part number is
    /// idempotent: the etag/size are overwritten and `uploaded_bytes` is
    /// adjusted by the delta rather than double-counted.
    pub async fn upload_part(
        &self,
        session_id: Uuid,
        part_number: u32,
        data: Bytes,
    ) -> Result<PartProgress, AppError> {
        let mut session = self.live_session(session_id).await?;
        if part_number == 0 || part_number > session.total_parts {
            return Err(AppError::validation(format!(
                "part_number {part_number} out of range (1..={})",
                session.total_parts
            )));
        }

        let is_final = part_number == session.total_parts;
        let size = data.len() as u64;
        if !is_final && size != session.part_size {
            return Err(AppError::validation(format!(
                "non-final part {part_number} must be exactly {} bytes, got {size}",
                session.part_size
            )));
        }
        if is_final && size > session.part_size {
            return Err(AppError::validation(format!(
                "final part {part_number} exceeds part_size {}",
                session.part_size
            )));
        }

        let etag = hex_sha256(&data);
        let key = UploadSession::cache_key_for_part(session_id, part_number);
        self.cache
            .write_file(&key, data)
            .await
            .map_err(|e| AppError::from(anyhow::anyhow!("cache write failed for part {part_number}: {e}")))?;

        let previous_size = session.completed_parts.get(&part_number).map(|p| p.size).unwrap_or(0);
        session.uploaded_bytes = session.uploaded_bytes - previous_size + size;
        session
            .completed_parts
            .insert(part_number, CompletedPart { part_number, etag, size });
        if session.status == UploadStatus::Init {
            session.status = UploadStatus::Uploading;
        }
        self.ctx.metadata.update_upload_session(session.clone()).await?;

        Ok(PartProgress {
            uploaded_bytes: session.uploaded_bytes,
            progress_percent: session.progress_percent(),
        })
    }

    /// Verifies every part landed, resolves the naming conflict against the
    /// target folder, and transactionally creates the File row plus both
    /// storage objects before enqueuing the NAS ingest job.
    pub async fn complete(&self, session_id: Uuid) -> Result<File, AppError> {
        let mut session = self.live_session(session_id).await?;
        if !session.is_complete() {
            return Err(AppError::validation("not all parts have been uploaded"));
        }

        let folder = self
            .ctx
            .metadata
            .get_folder(session.folder_id)
            .await?
            .ok_or_else(|| AppError::conflict("target folder no longer exists"))?;
        if folder.state != EntityState::Active {
            return Err(AppError::conflict("target folder is no longer ACTIVE"));
        }

        let outcome = resolve_conflict(
            self.ctx.metadata.as_ref(),
            session.folder_id,
            &session.file_name,
            session.conflict_strategy,
            Uuid::nil(),
        )
        .await?;
        let final_name = match outcome {
            ConflictOutcome::Proceed(name) => name,
            ConflictOutcome::Skip(existing) => {
                session.status = UploadStatus::Completed;
                session.file_id = Some(existing.id);
                self.ctx.metadata.update_upload_session(session.clone()).await?;
                self.cleanup_parts(&session).await;
                return Ok(existing);
            }
            ConflictOutcome::Overwrite(existing) => {
                FileCommands::new(self.ctx.clone())
                    .trash(existing.id, "system-overwrite")
                    .await?;
                session.file_name.clone()
            }
        };

        let assembled = self.assemble_parts(&session).await?;
        let nas_path = join_path(&folder.path, &final_name);
        let cache_key = format!("files/{}", session.id);
        self.cache
            .write_file(&cache_key, assembled)
            .await
            .map_err(|e| AppError::from(anyhow::anyhow!("cache write failed: {e}")))?;

        let file = File {
            id: new_id(),
            name: final_name,
            folder_id: session.folder_id,
            size_bytes: session.total_size,
            mime_type: session.mime_type.clone(),
            checksum: None,
            state: EntityState::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            created_by: session.created_by.clone(),
        };
        let cache_storage = StorageObject::new(
            file.id,
            EntityKind::File,
            Tier::Cache,
            cache_key.clone(),
            AvailabilityStatus::Available,
        );
        let nas_storage = StorageObject::new(
            file.id,
            EntityKind::File,
            Tier::Nas,
            nas_path.clone(),
            AvailabilityStatus::Syncing,
        );
        let event = SyncEvent::new(
            EventType::Create,
            EntityKind::File,
            None,
            Some(file.id),
            &cache_key,
            &nas_path,
        );

        let mut tx = self.ctx.metadata.begin_transaction().await?;
        self.ctx.metadata.create_file(file.clone(), tx.as_mut()).await?;
        self.ctx
            .metadata
            .create_storage_object(cache_storage, tx.as_mut())
            .await?;
        self.ctx
            .metadata
            .create_storage_object(nas_storage, tx.as_mut())
            .await?;
        outbox::record(self.ctx.metadata.as_ref(), event.clone(), tx.as_mut()).await?;
        if let Some(mut t) = tx {
            t.commit().await?;
        }

        session.status = UploadStatus::Completed;
        session.file_id = Some(file.id);
        self.ctx.metadata.update_upload_session(session.clone()).await?;
        self.cleanup_parts(&session).await;

        let payload = SyncJobPayload {
            action: SyncAction::IngestContent,
            entity_kind: EntityKind::File,
            folder_id: None,
            file_id: Some(file.id),
            sync_event_id: Some(event.id),
            source_path: cache_key,
            target_path: nas_path,
            target_parent_id: None,
            original_parent_id: None,
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
        .await?;

        Ok(file)
    }

    pub async fn abort(&self, session_id: Uuid) -> Result<UploadSession, AppError> {
        let mut session = self.get_session(session_id).await?;
        if session.status.is_terminal() {
            return Err(AppError::precondition("upload session is already terminal"));
        }
        session.status = UploadStatus::Aborted;
        self.ctx.metadata.update_upload_session(session.clone()).await?;
        self.cleanup_parts(&session).await;
        Ok(session)
    }

    pub async fn get_status(&self, session_id: Uuid) -> Result<UploadSession, AppError> {
        self.live_session(session_id).await
    }

    // ---- helpers ----

    async fn get_session(&self, session_id: Uuid) -> Result<UploadSession, AppError> {
        self.ctx
            .metadata
            .get_upload_session(session_id)
            .await?
            .ok_or_else(|| AppError::not_found("upload session not found"))
    }

    /// Lazy expiry check (§4.7, §5): a non-terminal session past
    /// `expires_at` flips to `EXPIRED` on next access instead of waiting
    /// for the admission queue's periodic sweep.
    async fn live_session(&self, session_id: Uuid) -> Result<UploadSession, AppError> {
        let mut session = self.get_session(session_id).await?;
        if session.is_expired(Utc::now()) {
            session.status = UploadStatus::Expired;
            self.ctx.metadata.update_upload_session(session.clone()).await?;
            self.cleanup_parts(&session).await;
            return Err(AppError::precondition("upload session has expired"));
        }
        if session.status.is_terminal() {
            return Err(AppError::precondition("upload session is already terminal"));
        }
        Ok(session)
    }

    async fn assemble_parts(&self, session: &UploadSession) -> Result<Bytes, AppError> {
        let mut buf = Vec::with_capacity(session.total_size as usize);
        for part_number in 1..=session.total_parts {
            let key = UploadSession::cache_key_for_part(session.id, part_number);
            let data = self
                .cache
                .read_file(&key)
                .await
                .map_err(|e| AppError::from(anyhow::anyhow!("cache read failed for part {part_number}: {e}")))?;
            buf.extend_from_slice(&data);
        }
        Ok(Bytes::from(buf))
    }

    async fn cleanup_parts(&self, session: &UploadSession) {
        for part_number in 1..=session.total_parts {
            let key = UploadSession::cache_key_for_part(session.id, part_number);
            if let Err(err) = self.cache.delete_file(&key).await {
                if !matches!(err, StorageError::NotFound(_)) {
                    log::warn!("failed to clean up upload part cache key {key}: {err}");
                }
            }
        }
    }
}

fn hex_sha256(data: &Bytes) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::{ConflictStrategy, Folder};
    use crate::queue_impl::InProcessJobQueue;
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

    async fn setup() -> (UploadCommands, Arc<InMemoryMetadataStore>, Folder, tempfile::TempDir) {
        let store = Arc::new(InMemoryMetadataStore::new());
        let root = Folder::root("system");
        store.create_folder(root.clone(), None).await.unwrap();
        let queue = Arc::new(InProcessJobQueue::new(store.clone()));
        let ctx = Arc::new(ServiceContext::new(store.clone(), queue, test_config()));
        let dir = tempfile::tempdir().unwrap();
        let cache: Arc<dyn StoragePort> = Arc::new(RootedFsStorage::new(dir.path()));
        (UploadCommands::new(ctx, cache), store, root, dir)
    }

    fn args(root: &Folder) -> InitiateArgs {
        InitiateArgs {
            file_name: "report.pdf".into(),
            folder_id: root.id,
            total_size: 25,
            mime_type: "application/pdf".into(),
            conflict_strategy: ConflictStrategy::Error,
        }
    }

    #[tokio::test]
    async fn initiate_below_threshold_is_rejected() {
        let (commands, _store, root, _dir) = setup().await;
        let mut a = args(&root);
        a.total_size = 5;
        let err = commands.initiate(a, "user1").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn full_upload_round_trip_creates_file() {
        let (commands, store, root, _dir) = setup().await;
        let session = commands.initiate(args(&root), "user1").await.unwrap();
        assert_eq!(session.total_parts, 3);

        commands
            .upload_part(session.id, 1, Bytes::from(vec![0u8; 10]))
            .await
            .unwrap();
        commands
            .upload_part(session.id, 2, Bytes::from(vec![0u8; 10]))
            .await
            .unwrap();
        let progress = commands
            .upload_part(session.id, 3, Bytes::from(vec![0u8; 5]))
            .await
            .unwrap();
        assert_eq!(progress.uploaded_bytes, 25);

        let file = commands.complete(session.id).await.unwrap();
        assert_eq!(file.name, "report.pdf");
        assert_eq!(file.size_bytes, 25);

        let completed = store.get_upload_session(session.id).await.unwrap().unwrap();
        assert_eq!(completed.status, UploadStatus::Completed);
        assert_eq!(completed.file_id, Some(file.id));

        let events = store.get_sync_status_for_entity(file.id).await.unwrap();
        assert_eq!(events.len(), 1);
    }

    #[tokio::test]
    async fn reupload_same_part_does_not_double_count_bytes() {
        let (commands, _store, root, _dir) = setup().await;
        let session = commands.initiate(args(&root), "user1").await.unwrap();
        commands
            .upload_part(session.id, 1, Bytes::from(vec![1u8; 10]))
            .await
            .unwrap();
        let progress = commands
            .upload_part(session.id, 1, Bytes::from(vec![2u8; 10]))
            .await
            .unwrap();
        assert_eq!(progress.uploaded_bytes, 10);
    }

    #[tokio::test]
    async fn complete_before_all_parts_fails() {
        let (commands, _store, root, _dir) = setup().await;
        let session = commands.initiate(args(&root), "user1").await.unwrap();
        commands
            .upload_part(session.id, 1, Bytes::from(vec![0u8; 10]))
            .await
            .unwrap();
        let err = commands.complete(session.id).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn abort_marks_terminal_and_rejects_further_parts() {
        let (commands, _store, root, _dir) = setup().await;
        let session = commands.initiate(args(&root), "user1").await.unwrap();
        let aborted = commands.abort(session.id).await.unwrap();
        assert_eq!(aborted.status, UploadStatus::Aborted);
        let err = commands
            .upload_part(session.id, 1, Bytes::from(vec![0u8; 10]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Precondition(_)));
    }

    #[tokio::test]
    async fn wrong_size_non_final_part_is_rejected() {
        let (commands, _store, root, _dir) = setup().await;
        let session = commands.initiate(args(&root), "user1").await.unwrap();
        let err = commands
            .upload_part(session.id, 1, Bytes::from(vec![0u8; 3]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
