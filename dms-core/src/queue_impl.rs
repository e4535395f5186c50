//! In-process `JobQueue` port implementation (§4.2, §9 "Single-process job
//! queue and lock"). Durability comes from `QueuedJob` rows in the metadata
//! store rather than an external broker; a multi-node deployment would swap
//! this for a real broker behind the same trait without touching command
//! services or handlers.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;
use crate::model::{JobStatus, QueuedJob};
use crate::ports::{JobHandler, JobQueue, MetadataStore};

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const BACKOFF: Duration = Duration::from_secs(3);
const POLL_INTERVAL: Duration = Duration::from_millis(200);

pub struct InProcessJobQueue {
    store: Arc<dyn MetadataStore>,
}

impl InProcessJobQueue {
    pub fn new(store: Arc<dyn MetadataStore>) -> Self {
        InProcessJobQueue { store }
    }
}

#[async_trait]
impl JobQueue for InProcessJobQueue {
    async fn enqueue(&self, stream_name: &str, payload: Value) -> Result<(), AppError> {
        let job = QueuedJob::new(stream_name, payload, DEFAULT_MAX_ATTEMPTS);
        self.store.create_queued_job(job, None).await
    }

    async fn process_jobs(
        self: Arc<Self>,
        stream_name: &str,
        handler: Arc<dyn JobHandler>,
        concurrency: usize,
    ) {
        for _ in 0..concurrency {
            let store = self.store.clone();
            let handler = handler.clone();
            let stream_name = stream_name.to_string();
            tokio::spawn(async move {
                worker_loop(store, handler, stream_name).await;
            });
        }
    }
}

async fn worker_loop(store: Arc<dyn MetadataStore>, handler: Arc<dyn JobHandler>, stream_name: String) {
    loop {
        match store.claim_next_queued_job(&stream_name).await {
            Ok(Some(job)) => run_one(store.as_ref(), handler.as_ref(), job).await,
            Ok(None) => tokio::time::sleep(POLL_INTERVAL).await,
            Err(err) => {
                log::warn!("job queue claim failed on stream {stream_name}: {err}");
                tokio::time::sleep(POLL_INTERVAL).await;
            }
        }
    }
}

async fn run_one(store: &dyn MetadataStore, handler: &dyn JobHandler, mut job: QueuedJob) {
    let result = handler.handle(job.payload.clone()).await;
    let now = chrono::Utc::now();
    match result {
        Ok(()) => {
            job.status = JobStatus::Done;
            job.updated_at = now;
        }
        Err(err) => {
            job.attempts_made += 1;
            job.updated_at = now;
            if job.attempts_made >= job.max_attempts {
                job.status = JobStatus::Failed;
                log::error!(
                    "job permanently failed stream={} id={} attempts={} error={err}",
                    job.stream_name,
                    job.id,
                    job.attempts_made,
                );
            } else {
                job.status = JobStatus::Pending;
                job.next_run_at = now + chrono::Duration::from_std(BACKOFF).unwrap();
                log::warn!(
                    "job failed, retrying stream={} id={} attempt={}/{}: {err}",
                    job.stream_name,
                    job.id,
                    job.attempts_made,
                    job.max_attempts,
                );
            }
        }
    }
    if let Err(err) = store.update_queued_job(job).await {
        log::error!("failed to persist job status update: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::JobHandlerFuture;
    use crate::store::memory::InMemoryMetadataStore;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct CountingHandler {
        calls: AtomicU32,
        fail_first_n: u32,
    }

    impl JobHandler for CountingHandler {
        fn handle(&self, _payload: Value) -> JobHandlerFuture {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            let should_fail = n < self.fail_first_n;
            Box::pin(async move {
                if should_fail {
                    Err(AppError::from(anyhow::anyhow!("boom")))
                } else {
                    Ok(())
                }
            })
        }
    }

    #[tokio::test]
    async fn enqueue_then_claim_round_trips() {
        let store = Arc::new(InMemoryMetadataStore::new());
        let queue = InProcessJobQueue::new(store.clone());
        queue.enqueue("test-stream", serde_json::json!({"a": 1})).await.unwrap();
        let job = store.claim_next_queued_job("test-stream").await.unwrap().unwrap();
        assert_eq!(job.payload, serde_json::json!({"a": 1}));
        assert_eq!(job.status, JobStatus::Processing);
    }

    #[tokio::test]
    async fn failed_job_is_requeued_with_backoff() {
        let store = Arc::new(InMemoryMetadataStore::new());
        let queue = InProcessJobQueue::new(store.clone());
        queue.enqueue("s", serde_json::json!({})).await.unwrap();
        let job = store.claim_next_queued_job("s").await.unwrap().unwrap();
        let handler = CountingHandler { calls: AtomicU32::new(0), fail_first_n: 1 };
        run_one(store.as_ref(), &handler, job).await;
        // next_run_at is in the future, so immediate re-claim finds nothing.
        let reclaimed = store.claim_next_queued_job("s").await.unwrap();
        assert!(reclaimed.is_none());
    }

    #[tokio::test]
    async fn job_failing_past_max_attempts_terminates_failed() {
        let store = Arc::new(InMemoryMetadataStore::new());
        let queue = InProcessJobQueue::new(store.clone());
        queue.enqueue("s", serde_json::json!({})).await.unwrap();
        let mut job = store.claim_next_queued_job("s").await.unwrap().unwrap();
        job.attempts_made = job.max_attempts - 1;
        store.update_queued_job(job.clone()).await.unwrap();
        let handler = CountingHandler { calls: AtomicU32::new(0), fail_first_n: 1 };
        run_one(store.as_ref(), &handler, job.clone()).await;
        // Re-fetch isn't directly exposed; rely on claim returning None since
        // status is now Failed, not Pending.
        let claimed = store.claim_next_queued_job("s").await.unwrap();
        assert!(claimed.is_none());
    }
}
