//! Shared harness for the HTTP integration tests: builds a full `AppState`
//! against in-memory/tempdir adapters, the same wiring `main` does minus the
//! network listener, then hands back a `TestServer`.

use std::sync::Arc;

use axum::Router;
use dms_core::config::Config;
use dms_core::health::NasHealthCache;
use dms_core::lock_impl::InProcessLock;
use dms_core::ports::{DistributedLock, JobQueue, MetadataStore, StoragePort};
use dms_core::queue_impl::InProcessJobQueue;
use dms_core::services::folder::FolderCommands;
use dms_core::services::ServiceContext;
use dms_core::storage_impl::rooted_fs::RootedFsStorage;
use dms_core::store::memory::InMemoryMetadataStore;
use dms_server::state::AppState;

pub struct TestApp {
    pub server: axum_test::TestServer,
    pub root_folder_id: uuid::Uuid,
    pub health: Arc<NasHealthCache>,
    // Keeps the tempdirs alive for the lifetime of the test.
    _nas_dir: tempfile::TempDir,
    _cache_dir: tempfile::TempDir,
}

pub async fn spawn_app() -> TestApp {
    let nas_dir = tempfile::tempdir().unwrap();
    let cache_dir = tempfile::tempdir().unwrap();

    let mut config = Config::from_env().unwrap();
    config.nas_mount_path = nas_dir.path().to_string_lossy().into_owned();
    config.cache_mount_path = cache_dir.path().to_string_lossy().into_owned();
    config.multipart_threshold_bytes = 1;
    config.part_size_bytes = 4;
    config.max_active_sessions = 1;
    config.max_total_upload_bytes = 1_000_000;
    let config = Arc::new(config);

    let metadata: Arc<dyn MetadataStore> = Arc::new(InMemoryMetadataStore::new());
    let queue: Arc<dyn JobQueue> = Arc::new(InProcessJobQueue::new(metadata.clone()));
    let lock: Arc<dyn DistributedLock> = Arc::new(InProcessLock::new());
    let nas: Arc<dyn StoragePort> = Arc::new(RootedFsStorage::new(config.nas_mount_path.clone()));
    let cache: Arc<dyn StoragePort> = Arc::new(RootedFsStorage::new(config.cache_mount_path.clone()));
    let health = Arc::new(NasHealthCache::new());

    tokio::fs::create_dir_all(&config.nas_mount_path).await.unwrap();
    tokio::fs::create_dir_all(&config.cache_mount_path).await.unwrap();

    let root_ctx = Arc::new(ServiceContext::new(metadata.clone(), queue.clone(), config.clone()));
    let root = FolderCommands::new(root_ctx).ensure_root("test").await.unwrap();

    let state = Arc::new(AppState::new(
        config, metadata, queue, lock, nas, cache, health.clone(),
    ));

    let app: Router = dms_server::build_router(state);
    let server = axum_test::TestServer::new(app).unwrap();

    TestApp {
        server,
        root_folder_id: root.id,
        health,
        _nas_dir: nas_dir,
        _cache_dir: cache_dir,
    }
}
