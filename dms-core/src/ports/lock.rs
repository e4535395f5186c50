use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LockError {
    #[error("timed out waiting for lock {0}")]
    Timeout(String),
    #[error("lock error: {0}")]
    Other(#[source] anyhow::Error),
}

/// Tuning for a single lock hold (§4.2, §6). Defaults match the per-entity
/// sync lock: a 60s hold with auto-renewal every 25s so a slow NAS op never
/// loses its lock mid-flight, and a 30s wait before giving up on a
/// contended key.
#[derive(Debug, Clone, Copy)]
pub struct LockOptions {
    pub ttl: Duration,
    pub wait_timeout: Duration,
    pub auto_renew: bool,
    pub renew_interval: Duration,
}

impl Default for LockOptions {
    fn default() -> Self {
        LockOptions {
            ttl: Duration::from_secs(60),
            wait_timeout: Duration::from_secs(30),
            auto_renew: true,
            renew_interval: Duration::from_secs(25),
        }
    }
}

/// An opaque handle identifying one held lock, returned by `acquire` and
/// consumed by `release`/`renew`. Implementations stash whatever bookkeeping
/// they need (fencing token, owning task id) behind this.
#[derive(Debug, Clone)]
pub struct LockGuard {
    pub key: String,
    pub token: u64,
}

/// Per-key mutual exclusion (§4.2: `folder-sync:{id}` / `file-sync:{id}`).
/// Kept deliberately low-level (acquire/renew/release rather than a
/// closure-taking `with_lock`) so it stays object-safe and callers can hold
/// `Arc<dyn DistributedLock>` in shared state. The `with_lock` convenience
/// wrapper below does the acquire/renew-loop/release orchestration on top.
#[async_trait]
pub trait DistributedLock: Send + Sync {
    /// Block up to `opts.wait_timeout` for `key`, then return a guard.
    async fn acquire(&self, key: &str, opts: LockOptions) -> Result<LockGuard, LockError>;

    /// Extend the TTL on an already-held guard. Returns `LockError::Timeout`
    /// if the guard has expired or been stolen.
    async fn renew(&self, guard: &LockGuard, ttl: Duration) -> Result<(), LockError>;

    /// Release a held guard. Idempotent: releasing twice is not an error.
    async fn release(&self, guard: &LockGuard) -> Result<(), LockError>;
}

/// Acquire `key`, run `body`, release on the way out — auto-renewing in the
/// background per `opts.auto_renew`/`opts.renew_interval` so a body slower
/// than the TTL doesn't get its lock stolen mid-flight (§4.2). Used by the
/// sync dispatcher to wrap each handler invocation.
pub async fn with_lock<L, F, Fut, T>(
    lock: &L,
    key: &str,
    opts: LockOptions,
    body: F,
) -> Result<T, LockError>
where
    L: DistributedLock + ?Sized,
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = T>,
{
    let guard = lock.acquire(key, opts).await?;

    if !opts.auto_renew {
        let result = body().await;
        lock.release(&guard).await?;
        return Ok(result);
    }

    // Race the body against a renewal tick in the same task rather than
    // spawning: `lock`/`guard` are borrowed, not `'static`, and the body
    // itself is not `Send`-agnostic, so a background task would need an
    // `Arc` we don't have here.
    tokio::pin!(body());
    let mut ticker = tokio::time::interval(opts.renew_interval);
    ticker.tick().await; // first tick fires immediately; consume it

    let result = loop {
        tokio::select! {
            result = &mut body => break result,
            _ = ticker.tick() => {
                if let Err(err) = lock.renew(&guard, opts.ttl).await {
                    log::warn!("failed to renew lock {key}: {err}");
                }
            }
        }
    };

    lock.release(&guard).await?;
    Ok(result)
}
