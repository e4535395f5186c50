use std::sync::Arc;

use dms_core::config::Config;
use dms_core::health::NasHealthCache;
use dms_core::lock_impl::InProcessLock;
use dms_core::outbox;
use dms_core::ports::{DistributedLock, JobQueue, MetadataStore, StoragePort};
use dms_core::queue_impl::InProcessJobQueue;
use dms_core::services::folder::FolderCommands;
use dms_core::services::ServiceContext;
use dms_core::storage_impl::rooted_fs::RootedFsStorage;
use dms_core::store::memory::InMemoryMetadataStore;
use dms_core::sync::{payload_for_sweep, spawn_dispatcher, stream_for_sweep};
use dms_server::state::AppState;
use log::info;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the in-memory metadata store used for local dev and tests. A
/// production deployment swaps this for `dms_core::store::arangodb::ArangoMetadataStore`
/// behind the same `MetadataStore` port without touching anything above it.
fn build_metadata_store() -> Arc<dyn MetadataStore> {
    Arc::new(InMemoryMetadataStore::new())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let config = Arc::new(Config::from_env()?);

    info!("starting dms-server");
    info!("  host: {}", config.host);
    info!("  port: {}", config.port);
    info!("  nas mount: {}", config.nas_mount_path);
    info!("  cache mount: {}", config.cache_mount_path);

    let metadata = build_metadata_store();
    let queue: Arc<dyn JobQueue> = Arc::new(InProcessJobQueue::new(metadata.clone()));
    let lock: Arc<dyn DistributedLock> = Arc::new(InProcessLock::new());
    let nas: Arc<dyn StoragePort> = Arc::new(RootedFsStorage::new(config.nas_mount_path.clone()));
    let cache: Arc<dyn StoragePort> = Arc::new(RootedFsStorage::new(config.cache_mount_path.clone()));
    let health = Arc::new(NasHealthCache::new());

    tokio::fs::create_dir_all(&config.nas_mount_path).await?;
    tokio::fs::create_dir_all(&config.cache_mount_path).await?;

    let root_ctx = Arc::new(ServiceContext::new(metadata.clone(), queue.clone(), config.clone()));
    FolderCommands::new(root_ctx).ensure_root("system").await?;

    let state = Arc::new(AppState::new(
        config.clone(),
        metadata.clone(),
        queue.clone(),
        lock.clone(),
        nas.clone(),
        cache.clone(),
        health.clone(),
    ));

    spawn_dispatcher(state.sync.clone(), queue.clone(), config.sync_concurrency).await;
    dms_core::health::spawn_probe(health.clone(), nas.clone(), config.health_probe_interval_ms);
    outbox::spawn_sweeper(
        metadata.clone(),
        queue.clone(),
        config.outbox_sweep_interval_ms,
        100,
        stream_for_sweep,
        |event| serde_json::to_value(payload_for_sweep(event)).unwrap_or(serde_json::Value::Null),
    );

    let app = dms_server::build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;
    info!("listening on {}:{}", config.host, config.port);
    axum::serve(listener, app).await?;
    Ok(())
}
