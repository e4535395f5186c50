//! Wires the core's ports/services/sync context into one shared handle the
//! HTTP layer holds in axum's `State` (§2 control flow).

use std::sync::Arc;

use dms_core::config::Config;
use dms_core::health::NasHealthCache;
use dms_core::ports::{DistributedLock, JobQueue, MetadataStore, StoragePort};
use dms_core::services::admission::AdmissionQueue;
use dms_core::services::file::FileCommands;
use dms_core::services::folder::FolderCommands;
use dms_core::services::upload::UploadCommands;
use dms_core::services::ServiceContext;
use dms_core::sync::SyncContext;

pub struct AppState {
    pub config: Arc<Config>,
    pub metadata: Arc<dyn MetadataStore>,
    pub queue: Arc<dyn JobQueue>,
    pub health: Arc<NasHealthCache>,
    pub folders: FolderCommands,
    pub files: FileCommands,
    pub upload: Arc<UploadCommands>,
    pub admission: Arc<AdmissionQueue>,
    pub sync: Arc<SyncContext>,
}

impl AppState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: Arc<Config>,
        metadata: Arc<dyn MetadataStore>,
        queue: Arc<dyn JobQueue>,
        lock: Arc<dyn DistributedLock>,
        nas: Arc<dyn StoragePort>,
        cache: Arc<dyn StoragePort>,
        health: Arc<NasHealthCache>,
    ) -> Self {
        let ctx = Arc::new(ServiceContext::new(metadata.clone(), queue.clone(), config.clone()));
        let folders = FolderCommands::new(ctx.clone());
        let files = FileCommands::new(ctx.clone());
        let upload = Arc::new(UploadCommands::new(ctx.clone(), cache.clone()));
        let admission = Arc::new(AdmissionQueue::new(
            upload.clone(),
            config.max_active_sessions,
            config.max_total_upload_bytes,
        ));
        let sync = Arc::new(SyncContext {
            metadata,
            nas,
            cache,
            lock,
            health: health.clone(),
            config: config.clone(),
        });

        AppState {
            config,
            metadata: ctx.metadata.clone(),
            queue,
            health,
            folders,
            files,
            upload,
            admission,
            sync,
        }
    }
}
