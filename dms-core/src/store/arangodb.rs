use std::any::Any;
use std::collections::HashMap as StdHashMap;

use anyhow::anyhow;
use arangors::Connection;
use arangors::client::reqwest::ReqwestClient;
use arangors::collection::Collection;
use arangors::database::Database;
use arangors::document::Document;
use arangors::transaction::{
    Transaction as ArangoInnerTx, TransactionCollections, TransactionSettings,
};
use async_trait::async_trait;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::error::AppError;
use crate::model::{
    File, Folder, JobStatus, QueuedJob, StorageObject, SyncEvent, SyncStatus, Tier,
    TrashMetadata, UploadSession, UploadStatus,
};
use crate::ports::metadata::{BoxTransaction, MetadataStore, Transaction as TxTrait};

const FOLDERS: &str = "folders";
const FILES: &str = "files";
const STORAGE_OBJECTS: &str = "storage_objects";
const SYNC_EVENTS: &str = "sync_events";
const TRASH_METADATA: &str = "trash_metadata";
const UPLOAD_SESSIONS: &str = "upload_sessions";
const QUEUED_JOBS: &str = "queued_jobs";

fn arango_err(e: impl std::fmt::Display) -> AppError {
    AppError::from(anyhow!(e.to_string()))
}

/// Concrete transaction wrapper delegating to `arangors`' own transaction
/// handle, matching the teacher's `ArangoTx` (§4.3).
pub struct ArangoTx {
    inner: ArangoInnerTx<ReqwestClient>,
}

impl ArangoTx {
    pub fn new(inner: ArangoInnerTx<ReqwestClient>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl TxTrait for ArangoTx {
    async fn commit(&mut self) -> Result<(), AppError> {
        self.inner.commit().await.map_err(arango_err)?;
        Ok(())
    }

    async fn abort(&mut self) -> Result<(), AppError> {
        self.inner.abort().await.map_err(arango_err)?;
        Ok(())
    }

    fn as_any(&mut self) -> &mut dyn Any {
        self
    }
}

fn downcast_tx(tx: &mut BoxTransaction) -> Result<&mut ArangoTx, AppError> {
    tx.as_any()
        .downcast_mut::<ArangoTx>()
        .ok_or_else(|| arango_err("transaction is not an ArangoTx"))
}

/// ArangoDB-backed `MetadataStore` (§3, §4.3). All seven collections are
/// document collections; the only multi-document write this backend needs
/// beyond single-key CRUD is the AQL `UPDATE ... FOR` bulk prefix rewrite
/// (§4.4) used by folder rename/move cascades.
pub struct ArangoMetadataStore {
    pub conn: Connection,
    pub db: Database<ReqwestClient>,
    folders: Collection<ReqwestClient>,
    files: Collection<ReqwestClient>,
    storage_objects: Collection<ReqwestClient>,
    sync_events: Collection<ReqwestClient>,
    trash_metadata: Collection<ReqwestClient>,
    upload_sessions: Collection<ReqwestClient>,
    queued_jobs: Collection<ReqwestClient>,
}

macro_rules! ensure_collection {
    ($db:expr, $name:expr) => {
        match $db.collection($name).await {
            Ok(collection) => collection,
            Err(_) => $db
                .create_collection($name)
                .await
                .map_err(|e| anyhow!(e.to_string()))?,
        }
    };
}

impl ArangoMetadataStore {
    /// Connect with basic auth against an existing, already-provisioned
    /// database (production path).
    pub async fn connect_basic(
        url: &str,
        user: &str,
        pass: &str,
        db_name: &str,
    ) -> anyhow::Result<Self> {
        let conn = Connection::establish_basic_auth(url, user, pass)
            .await
            .map_err(|e| anyhow!(e.to_string()))?;
        let db = conn.db(db_name).await.map_err(|e| anyhow!(e.to_string()))?;
        Self::from_db(conn, db).await
    }

    /// Connect anonymously, creating the database and all collections if
    /// they don't already exist (local dev / integration tests).
    pub async fn connect_anon(url: &str, db_name: &str) -> anyhow::Result<Self> {
        let conn = Connection::establish_without_auth(url)
            .await
            .map_err(|e| anyhow!(e.to_string()))?;
        let db = match conn.db(db_name).await {
            Ok(db) => db,
            Err(_) => {
                conn.create_database(db_name)
                    .await
                    .map_err(|e| anyhow!(e.to_string()))?;
                conn.db(db_name).await.map_err(|e| anyhow!(e.to_string()))?
            }
        };
        Self::from_db(conn, db).await
    }

    async fn from_db(conn: Connection, db: Database<ReqwestClient>) -> anyhow::Result<Self> {
        let folders = ensure_collection!(db, FOLDERS);
        let files = ensure_collection!(db, FILES);
        let storage_objects = ensure_collection!(db, STORAGE_OBJECTS);
        let sync_events = ensure_collection!(db, SYNC_EVENTS);
        let trash_metadata = ensure_collection!(db, TRASH_METADATA);
        let upload_sessions = ensure_collection!(db, UPLOAD_SESSIONS);
        let queued_jobs = ensure_collection!(db, QUEUED_JOBS);

        Ok(Self {
            conn,
            db,
            folders,
            files,
            storage_objects,
            sync_events,
            trash_metadata,
            upload_sessions,
            queued_jobs,
        })
    }

    async fn put<T>(
        &self,
        collection_name: &str,
        collection: &Collection<ReqwestClient>,
        key: &str,
        doc: T,
        tx: Option<&mut BoxTransaction>,
        is_update: bool,
    ) -> Result<(), AppError>
    where
        T: serde::Serialize + Send + Sync,
    {
        let body = Document::new(doc);
        if let Some(tr) = tx {
            let ar = downcast_tx(tr)?;
            let col = ar
                .inner
                .collection(collection_name)
                .await
                .map_err(arango_err)?;
            if is_update {
                col.replace_document(key, body, Default::default(), None)
                    .await
                    .map_err(arango_err)?;
            } else {
                col.create_document(body, Default::default())
                    .await
                    .map_err(arango_err)?;
            }
        } else if is_update {
            collection
                .replace_document(key, body, Default::default(), None)
                .await
                .map_err(arango_err)?;
        } else {
            collection
                .create_document(body, Default::default())
                .await
                .map_err(arango_err)?;
        }
        Ok(())
    }

    async fn get_by_key<T>(
        &self,
        collection: &Collection<ReqwestClient>,
        key: &str,
    ) -> Result<Option<T>, AppError>
    where
        T: serde::de::DeserializeOwned,
    {
        match collection.document::<T>(key).await {
            Ok(doc) => Ok(Some(doc.document)),
            Err(arangors::ClientError::Arango(e)) if e.code() == 404 => Ok(None),
            Err(e) => Err(arango_err(e)),
        }
    }

    async fn aql<T>(&self, query: &str, vars: StdHashMap<&str, Value>) -> Result<Vec<T>, AppError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.db.aql_bind_vars(query, vars).await.map_err(arango_err)
    }
}

#[async_trait]
impl MetadataStore for ArangoMetadataStore {
    async fn begin_transaction(&self) -> Result<Option<BoxTransaction>, AppError> {
        let collections = TransactionCollections::builder()
            .write(vec![
                FOLDERS.to_string(),
                FILES.to_string(),
                STORAGE_OBJECTS.to_string(),
                SYNC_EVENTS.to_string(),
                TRASH_METADATA.to_string(),
                UPLOAD_SESSIONS.to_string(),
                QUEUED_JOBS.to_string(),
            ])
            .build();
        let settings = TransactionSettings::builder()
            .collections(collections)
            .wait_for_sync(true)
            .build();
        let tx = self
            .db
            .begin_transaction(settings)
            .await
            .map_err(arango_err)?;
        Ok(Some(Box::new(ArangoTx::new(tx))))
    }

    async fn create_folder(
        &self,
        folder: Folder,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError> {
        let key = folder.id.to_string();
        self.put(FOLDERS, &self.folders, &key, folder, tx, false)
            .await
    }

    async fn get_folder(&self, id: Uuid) -> Result<Option<Folder>, AppError> {
        self.get_by_key(&self.folders, &id.to_string()).await
    }

    async fn get_folder_by_parent_and_name(
        &self,
        parent_id: Option<Uuid>,
        name: &str,
    ) -> Result<Option<Folder>, AppError> {
        let query = r#"
            FOR f IN folders
                FILTER f.parent_id == @parent_id AND f.name == @name
                LIMIT 1
                RETURN f
        "#;
        let vars = StdHashMap::from([
            ("parent_id", json!(parent_id)),
            ("name", json!(name)),
        ]);
        let mut results: Vec<Folder> = self.aql(query, vars).await?;
        Ok(results.pop())
    }

    async fn list_folder_children(&self, parent_id: Uuid) -> Result<Vec<Folder>, AppError> {
        let query = "FOR f IN folders FILTER f.parent_id == @parent_id RETURN f";
        let vars = StdHashMap::from([("parent_id", json!(parent_id))]);
        self.aql(query, vars).await
    }

    async fn update_folder(
        &self,
        folder: Folder,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError> {
        let key = folder.id.to_string();
        self.put(FOLDERS, &self.folders, &key, folder, tx, true)
            .await
    }

    async fn rewrite_folder_path_prefix(
        &self,
        old_prefix: &str,
        new_prefix: &str,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<u64, AppError> {
        // Matches `old_prefix` exactly or at a `/`-boundary, mirroring the
        // in-memory store's `has_prefix_at_boundary` (§4.4).
        let query = r#"
            FOR f IN folders
                FILTER f.path == @old_prefix
                    OR STARTS_WITH(f.path, CONCAT(@old_prefix, "/"))
                UPDATE f WITH {
                    path: CONCAT(@new_prefix, SUBSTRING(f.path, LENGTH(@old_prefix)))
                } IN folders
                RETURN 1
        "#;
        let vars = StdHashMap::from([
            ("old_prefix", json!(old_prefix)),
            ("new_prefix", json!(new_prefix)),
        ]);
        let rewritten: Vec<Value> = if let Some(tr) = tx {
            let ar = downcast_tx(tr)?;
            ar.inner
                .aql_bind_vars(query, vars)
                .await
                .map_err(arango_err)?
        } else {
            self.db
                .aql_bind_vars(query, vars)
                .await
                .map_err(arango_err)?
        };
        Ok(rewritten.len() as u64)
    }

    async fn create_file(
        &self,
        file: File,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError> {
        let key = file.id.to_string();
        self.put(FILES, &self.files, &key, file, tx, false).await
    }

    async fn get_file(&self, id: Uuid) -> Result<Option<File>, AppError> {
        self.get_by_key(&self.files, &id.to_string()).await
    }

    async fn get_file_by_folder_and_name(
        &self,
        folder_id: Uuid,
        name: &str,
    ) -> Result<Option<File>, AppError> {
        let query = r#"
            FOR f IN files
                FILTER f.folder_id == @folder_id AND f.name == @name
                LIMIT 1
                RETURN f
        "#;
        let vars = StdHashMap::from([
            ("folder_id", json!(folder_id)),
            ("name", json!(name)),
        ]);
        let mut results: Vec<File> = self.aql(query, vars).await?;
        Ok(results.pop())
    }

    async fn list_folder_files(&self, folder_id: Uuid) -> Result<Vec<File>, AppError> {
        let query = "FOR f IN files FILTER f.folder_id == @folder_id RETURN f";
        let vars = StdHashMap::from([("folder_id", json!(folder_id))]);
        self.aql(query, vars).await
    }

    async fn update_file(
        &self,
        file: File,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError> {
        let key = file.id.to_string();
        self.put(FILES, &self.files, &key, file, tx, true).await
    }

    async fn create_storage_object(
        &self,
        object: StorageObject,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError> {
        let key = object.id.to_string();
        self.put(STORAGE_OBJECTS, &self.storage_objects, &key, object, tx, false)
            .await
    }

    async fn get_storage_object(
        &self,
        entity_id: Uuid,
        tier: Tier,
    ) -> Result<Option<StorageObject>, AppError> {
        let query = r#"
            FOR o IN storage_objects
                FILTER o.entity_id == @entity_id AND o.tier == @tier
                LIMIT 1
                RETURN o
        "#;
        let vars = StdHashMap::from([
            ("entity_id", json!(entity_id)),
            ("tier", json!(tier)),
        ]);
        let mut results: Vec<StorageObject> = self.aql(query, vars).await?;
        Ok(results.pop())
    }

    async fn update_storage_object(
        &self,
        object: StorageObject,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError> {
        let key = object.id.to_string();
        self.put(STORAGE_OBJECTS, &self.storage_objects, &key, object, tx, true)
            .await
    }

    async fn delete_storage_object(&self, entity_id: Uuid, tier: Tier) -> Result<(), AppError> {
        let query = r#"
            FOR o IN storage_objects
                FILTER o.entity_id == @entity_id AND o.tier == @tier
                REMOVE o IN storage_objects
        "#;
        let vars = StdHashMap::from([
            ("entity_id", json!(entity_id)),
            ("tier", json!(tier)),
        ]);
        let _: Vec<Value> = self.aql(query, vars).await?;
        Ok(())
    }

    async fn rewrite_storage_object_key_prefix(
        &self,
        entity_kind: crate::model::EntityKind,
        old_prefix: &str,
        new_prefix: &str,
    ) -> Result<u64, AppError> {
        let query = r#"
            FOR o IN storage_objects
                FILTER o.entity_kind == @entity_kind
                    AND (o.object_key == @old_prefix
                        OR STARTS_WITH(o.object_key, CONCAT(@old_prefix, "/")))
                UPDATE o WITH {
                    object_key: CONCAT(@new_prefix, SUBSTRING(o.object_key, LENGTH(@old_prefix)))
                } IN storage_objects
                RETURN 1
        "#;
        let vars = StdHashMap::from([
            ("entity_kind", json!(entity_kind)),
            ("old_prefix", json!(old_prefix)),
            ("new_prefix", json!(new_prefix)),
        ]);
        let rewritten: Vec<Value> = self.aql(query, vars).await?;
        Ok(rewritten.len() as u64)
    }

    async fn adjust_lease_count(
        &self,
        entity_id: Uuid,
        tier: Tier,
        delta: i64,
    ) -> Result<StorageObject, AppError> {
        // Single AQL UPDATE so the read-modify-write is atomic server-side
        // and never races a concurrent lease acquire/release (§4.9).
        let query = r#"
            FOR o IN storage_objects
                FILTER o.entity_id == @entity_id AND o.tier == @tier
                UPDATE o WITH { lease_count: o.lease_count + @delta } IN storage_objects
                RETURN NEW
        "#;
        let vars = StdHashMap::from([
            ("entity_id", json!(entity_id)),
            ("tier", json!(tier)),
            ("delta", json!(delta)),
        ]);
        let mut results: Vec<StorageObject> = self.aql(query, vars).await?;
        let object = results
            .pop()
            .ok_or_else(|| AppError::not_found("storage object not found"))?;
        if (object.lease_count as i64) < 0 {
            return Err(AppError::precondition("lease_count cannot go negative"));
        }
        Ok(object)
    }

    async fn create_sync_event(
        &self,
        event: SyncEvent,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError> {
        let key = event.id.to_string();
        self.put(SYNC_EVENTS, &self.sync_events, &key, event, tx, false)
            .await
    }

    async fn get_sync_event(&self, id: Uuid) -> Result<Option<SyncEvent>, AppError> {
        self.get_by_key(&self.sync_events, &id.to_string()).await
    }

    async fn update_sync_event(
        &self,
        event: SyncEvent,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError> {
        let key = event.id.to_string();
        self.put(SYNC_EVENTS, &self.sync_events, &key, event, tx, true)
            .await
    }

    async fn list_pending_sync_events(&self, limit: u32) -> Result<Vec<SyncEvent>, AppError> {
        let query = r#"
            FOR e IN sync_events
                FILTER e.status == @pending OR e.status == @retrying
                SORT e.created_at ASC
                LIMIT @limit
                RETURN e
        "#;
        let vars = StdHashMap::from([
            ("pending", json!(SyncStatus::Pending)),
            ("retrying", json!(SyncStatus::Retrying)),
            ("limit", json!(limit)),
        ]);
        self.aql(query, vars).await
    }

    async fn get_sync_status_for_entity(
        &self,
        entity_id: Uuid,
    ) -> Result<Vec<SyncEvent>, AppError> {
        let query = r#"
            FOR e IN sync_events
                FILTER e.folder_id == @id OR e.file_id == @id
                SORT e.created_at ASC
                RETURN e
        "#;
        let vars = StdHashMap::from([("id", json!(entity_id))]);
        self.aql(query, vars).await
    }

    async fn create_trash_metadata(
        &self,
        trash: TrashMetadata,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError> {
        let key = trash.id.to_string();
        self.put(TRASH_METADATA, &self.trash_metadata, &key, trash, tx, false)
            .await
    }

    async fn get_trash_metadata(
        &self,
        folder_id: Option<Uuid>,
        file_id: Option<Uuid>,
    ) -> Result<Option<TrashMetadata>, AppError> {
        let query = r#"
            FOR t IN trash_metadata
                FILTER t.folder_id == @folder_id AND t.file_id == @file_id
                LIMIT 1
                RETURN t
        "#;
        let vars = StdHashMap::from([
            ("folder_id", json!(folder_id)),
            ("file_id", json!(file_id)),
        ]);
        let mut results: Vec<TrashMetadata> = self.aql(query, vars).await?;
        Ok(results.pop())
    }

    async fn delete_trash_metadata(
        &self,
        id: Uuid,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError> {
        let key = id.to_string();
        if let Some(tr) = tx {
            let ar = downcast_tx(tr)?;
            let col = ar
                .inner
                .collection(TRASH_METADATA)
                .await
                .map_err(arango_err)?;
            col.remove_document::<TrashMetadata>(&key, Default::default(), None)
                .await
                .map_err(arango_err)?;
        } else {
            self.trash_metadata
                .remove_document::<TrashMetadata>(&key, Default::default(), None)
                .await
                .map_err(arango_err)?;
        }
        Ok(())
    }

    async fn list_expired_trash(&self, limit: u32) -> Result<Vec<TrashMetadata>, AppError> {
        let query = r#"
            FOR t IN trash_metadata
                FILTER t.expires_at <= @now
                SORT t.expires_at ASC
                LIMIT @limit
                RETURN t
        "#;
        let vars = StdHashMap::from([
            ("now", json!(chrono::Utc::now())),
            ("limit", json!(limit)),
        ]);
        self.aql(query, vars).await
    }

    async fn create_upload_session(&self, session: UploadSession) -> Result<(), AppError> {
        let key = session.id.to_string();
        self.put(UPLOAD_SESSIONS, &self.upload_sessions, &key, session, None, false)
            .await
    }

    async fn get_upload_session(&self, id: Uuid) -> Result<Option<UploadSession>, AppError> {
        self.get_by_key(&self.upload_sessions, &id.to_string()).await
    }

    async fn update_upload_session(&self, session: UploadSession) -> Result<(), AppError> {
        let key = session.id.to_string();
        self.put(UPLOAD_SESSIONS, &self.upload_sessions, &key, session, None, true)
            .await
    }

    async fn list_expired_upload_sessions(
        &self,
        limit: u32,
    ) -> Result<Vec<UploadSession>, AppError> {
        let query = r#"
            FOR s IN upload_sessions
                FILTER s.status != @completed
                    AND s.status != @aborted
                    AND s.status != @expired
                    AND s.expires_at <= @now
                SORT s.expires_at ASC
                LIMIT @limit
                RETURN s
        "#;
        let vars = StdHashMap::from([
            ("completed", json!(UploadStatus::Completed)),
            ("aborted", json!(UploadStatus::Aborted)),
            ("expired", json!(UploadStatus::Expired)),
            ("now", json!(chrono::Utc::now())),
            ("limit", json!(limit)),
        ]);
        self.aql(query, vars).await
    }

    async fn create_queued_job(
        &self,
        job: QueuedJob,
        tx: Option<&mut BoxTransaction>,
    ) -> Result<(), AppError> {
        let key = job.id.to_string();
        self.put(QUEUED_JOBS, &self.queued_jobs, &key, job, tx, false)
            .await
    }

    async fn claim_next_queued_job(
        &self,
        stream_name: &str,
    ) -> Result<Option<QueuedJob>, AppError> {
        // A single UPDATE-and-return query claims the oldest eligible job
        // and flips it to PROCESSING atomically, so two workers racing the
        // same stream never claim the same row (§9).
        let query = r#"
            FOR j IN queued_jobs
                FILTER j.stream_name == @stream_name
                    AND j.status == @pending
                    AND j.next_run_at <= @now
                SORT j.next_run_at ASC
                LIMIT 1
                UPDATE j WITH { status: @processing, updated_at: @now } IN queued_jobs
                RETURN NEW
        "#;
        let now = chrono::Utc::now();
        let vars = StdHashMap::from([
            ("stream_name", json!(stream_name)),
            ("pending", json!(JobStatus::Pending)),
            ("processing", json!(JobStatus::Processing)),
            ("now", json!(now)),
        ]);
        let mut results: Vec<QueuedJob> = self.aql(query, vars).await?;
        Ok(results.pop())
    }

    async fn update_queued_job(&self, job: QueuedJob) -> Result<(), AppError> {
        let key = job.id.to_string();
        self.put(QUEUED_JOBS, &self.queued_jobs, &key, job, None, true)
            .await
    }
}
