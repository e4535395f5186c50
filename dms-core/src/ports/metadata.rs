use std::any::Any;

use crate::error::AppError;
use crate::model::{
    File, Folder, QueuedJob, StorageObject, SyncEvent, TrashMetadata, UploadSession,
};
use async_trait::async_trait;
use uuid::Uuid;

/// A server-side transaction handle (§4.3: "the metadata mutation and the
/// SyncEvent insert happen in the same transaction"). Implementors downcast
/// via `as_any` to recover their concrete handle (e.g. an `arangors`
/// `Transaction<ReqwestClient>`) when issuing further calls against it.
#[async_trait]
pub trait Transaction: Send + Sync {
    async fn commit(&mut self) -> Result<(), AppError>;
    async fn abort(&mut self) -> Result<(), AppError>;
    fn as_any(&mut self) -> &mut dyn Any;
}

pub type BoxTransaction = Box<dyn Transaction>;

/// The metadata store port (§3, §4.3). Every write that must be atomic with
/// a SyncEvent insert takes an optional transaction handle; callers that
/// don't need cross-row atomicity pass `None` and get auto-commit semantics.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    async fn begin_transaction(&self) -> Result<Option<BoxTransaction>, AppError>;

    // ---- folders ----
    async fn create_folder(
        &self,
        folder: Folder,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError>;
    async fn get_folder(&self, id: Uuid) -> Result<Option<Folder>, AppError>;
    async fn get_folder_by_parent_and_name(
        &self,
        parent_id: Option<Uuid>,
        name: &str,
    ) -> Result<Option<Folder>, AppError>;
    async fn list_folder_children(&self, parent_id: Uuid) -> Result<Vec<Folder>, AppError>;
    async fn update_folder(
        &self,
        folder: Folder,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError>;

    /// Rewrite `path` for every folder whose path equals or starts with
    /// `old_prefix` at a `/`-boundary (§4.4: "bulk path-prefix rewrite"),
    /// replacing the matched prefix with `new_prefix`.
    async fn rewrite_folder_path_prefix(
        &self,
        old_prefix: &str,
        new_prefix: &str,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<u64, AppError>;

    // ---- files ----
    async fn create_file(
        &self,
        file: File,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError>;
    async fn get_file(&self, id: Uuid) -> Result<Option<File>, AppError>;
    async fn get_file_by_folder_and_name(
        &self,
        folder_id: Uuid,
        name: &str,
    ) -> Result<Option<File>, AppError>;
    async fn list_folder_files(&self, folder_id: Uuid) -> Result<Vec<File>, AppError>;
    async fn update_file(
        &self,
        file: File,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError>;

    // ---- storage objects ----
    async fn create_storage_object(
        &self,
        object: StorageObject,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError>;
    async fn get_storage_object(
        &self,
        entity_id: Uuid,
        tier: crate::model::Tier,
    ) -> Result<Option<StorageObject>, AppError>;
    async fn update_storage_object(
        &self,
        object: StorageObject,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError>;

    /// Remove the storage-object row for `(entity_id, tier)`, if any
    /// (§4.6 purge: cascade-deletes the storage pointer once the underlying
    /// bytes are gone).
    async fn delete_storage_object(
        &self,
        entity_id: Uuid,
        tier: crate::model::Tier,
    ) -> Result<(), AppError>;

    /// Rewrite `object_key` for every storage object of `entity_kind` whose
    /// key equals or starts with `old_prefix` at a `/`-boundary, replacing
    /// the matched prefix with `new_prefix` (§4.6 step 8: descendant
    /// storage-object keys follow the renamed/moved folder). Best-effort:
    /// callers log failures as warnings rather than failing the job.
    async fn rewrite_storage_object_key_prefix(
        &self,
        entity_kind: crate::model::EntityKind,
        old_prefix: &str,
        new_prefix: &str,
    ) -> Result<u64, AppError>;

    /// Atomically adjust `lease_count` by `delta` (may be negative),
    /// returning the post-adjustment row. Used by the lease-reservation
    /// mechanism (§4.9) without a read-modify-write race.
    async fn adjust_lease_count(
        &self,
        entity_id: Uuid,
        tier: crate::model::Tier,
        delta: i64,
    ) -> Result<StorageObject, AppError>;

    // ---- sync events ----
    async fn create_sync_event(
        &self,
        event: SyncEvent,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError>;
    async fn get_sync_event(&self, id: Uuid) -> Result<Option<SyncEvent>, AppError>;
    async fn update_sync_event(
        &self,
        event: SyncEvent,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError>;
    async fn list_pending_sync_events(&self, limit: u32) -> Result<Vec<SyncEvent>, AppError>;
    async fn get_sync_status_for_entity(
        &self,
        entity_id: Uuid,
    ) -> Result<Vec<SyncEvent>, AppError>;

    // ---- trash ----
    async fn create_trash_metadata(
        &self,
        trash: TrashMetadata,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError>;
    async fn get_trash_metadata(
        &self,
        folder_id: Option<Uuid>,
        file_id: Option<Uuid>,
    ) -> Result<Option<TrashMetadata>, AppError>;
    async fn delete_trash_metadata(
        &self,
        id: Uuid,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError>;
    async fn list_expired_trash(&self, limit: u32) -> Result<Vec<TrashMetadata>, AppError>;

    // ---- upload sessions ----
    async fn create_upload_session(&self, session: UploadSession) -> Result<(), AppError>;
    async fn get_upload_session(&self, id: Uuid) -> Result<Option<UploadSession>, AppError>;
    async fn update_upload_session(&self, session: UploadSession) -> Result<(), AppError>;
    async fn list_expired_upload_sessions(&self, limit: u32) -> Result<Vec<UploadSession>, AppError>;

    // ---- queued jobs (durable single-process queue backing store, §9) ----
    async fn create_queued_job(
        &self,
        job: QueuedJob,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError>;
    async fn claim_next_queued_job(
        &self,
        stream_name: &str,
    ) -> Result<Option<QueuedJob>, AppError>;
    async fn update_queued_job(&self, job: QueuedJob) -> Result<(), AppError>;
}
