//! Command services (§4.5): validate → mutate metadata + outbox in one
//! transaction → enqueue a sync job after commit. `folder` and `file` hold
//! the per-entity-kind commands; `upload` is the multipart engine (§4.7);
//! `admission` is the waiting-queue gate in front of it (§4.8).

pub mod admission;
pub mod file;
pub mod folder;
pub mod upload;

use std::future::Future;
use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::ports::{JobQueue, MetadataStore};

/// Shared wiring every command service needs: the metadata store for the
/// transactional mutation, the job queue for post-commit enqueue, and the
/// config for the constants commands validate against (part size, upload
/// threshold, trash retention). NAS/cache I/O never happens here — only in
/// the sync handlers (§1, §4.5).
pub struct ServiceContext {
    pub metadata: Arc<dyn MetadataStore>,
    pub queue: Arc<dyn JobQueue>,
    pub config: Arc<Config>,
}

impl ServiceContext {
    pub fn new(metadata: Arc<dyn MetadataStore>, queue: Arc<dyn JobQueue>, config: Arc<Config>) -> Self {
        ServiceContext { metadata, queue, config }
    }
}

/// What a create/rename/move command ends up doing once conflict resolution
/// runs (§4.5 step 3). `Skip` carries the untouched existing entity and
/// produces no outbox row. `Overwrite` carries the existing entity the
/// caller must trash before proceeding — folders never produce this
/// variant (`OVERWRITE` is files-only; see `reject_overwrite` in
/// `services::folder`).
pub enum ConflictOutcome<T> {
    Proceed(String),
    Skip(T),
    Overwrite(T),
}

/// Walks `" (1)"`, `" (2)"`, ... until `exists` reports no collision,
/// implementing the `RENAME` conflict strategy (§4.5 step 3).
pub async fn find_free_name<F, Fut>(base: &str, mut exists: F) -> Result<String, AppError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, AppError>>,
{
    if !exists(base.to_string()).await? {
        return Ok(base.to_string());
    }
    let mut n: u32 = 1;
    loop {
        let candidate = format!("{base} ({n})");
        if !exists(candidate.clone()).await? {
            return Ok(candidate);
        }
        n += 1;
    }
}
