use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::AppError;

/// A handler registered with `process_jobs` (§4.2). Boxed so the port can be
/// object-safe; concrete handlers are plain async closures wrapped via
/// `JobHandlerFn`.
pub type JobHandlerFuture = Pin<Box<dyn Future<Output = Result<(), AppError>> + Send>>;

pub trait JobHandler: Send + Sync {
    fn handle(&self, payload: Value) -> JobHandlerFuture;
}

impl<F> JobHandler for F
where
    F: Fn(Value) -> JobHandlerFuture + Send + Sync,
{
    fn handle(&self, payload: Value) -> JobHandlerFuture {
        (self)(payload)
    }
}

/// The job-queue port (§4.2): submit a typed job to a named stream; the
/// implementation guarantees at-least-once, one-consumer-at-a-time delivery
/// that survives process restarts.
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Enqueue `payload` onto `stream_name`. Always called *after* the
    /// originating transaction has committed (§4.2, §4.5 step 7).
    async fn enqueue(&self, stream_name: &str, payload: Value) -> Result<(), AppError>;

    /// Register a worker pool of `concurrency` tasks draining `stream_name`.
    /// Returns immediately; the pool runs until the returned handle is
    /// dropped or the process exits.
    async fn process_jobs(
        self: Arc<Self>,
        stream_name: &str,
        handler: Arc<dyn JobHandler>,
        concurrency: usize,
    );
}
