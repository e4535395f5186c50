//! In-process `DistributedLock` implementation (§4.2, §9). An async-mutex
//! lease table keyed by lock name stands in for a real coordination service
//! (e.g. Redis/etcd) within this single-node deployment; a multi-node
//! deployment would swap this behind the same trait.

use std::collections::HashMap;
use std::sync::Mutex as StdMutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::ports::lock::{DistributedLock, LockError, LockGuard, LockOptions};

struct Lease {
    token: u64,
    expires_at: Instant,
}

#[derive(Default)]
pub struct InProcessLock {
    leases: StdMutex<HashMap<String, Lease>>,
    notify: Notify,
    next_token: StdMutex<u64>,
}

impl InProcessLock {
    pub fn new() -> Self {
        Self::default()
    }

    fn try_acquire(&self, key: &str, ttl: Duration) -> Option<LockGuard> {
        let mut leases = self.leases.lock().unwrap();
        let now = Instant::now();
        let free = match leases.get(key) {
            None => true,
            Some(lease) => lease.expires_at <= now,
        };
        if !free {
            return None;
        }
        let mut next_token = self.next_token.lock().unwrap();
        *next_token += 1;
        let token = *next_token;
        leases.insert(
            key.to_string(),
            Lease {
                token,
                expires_at: now + ttl,
            },
        );
        Some(LockGuard { key: key.to_string(), token })
    }
}

#[async_trait]
impl DistributedLock for InProcessLock {
    async fn acquire(&self, key: &str, opts: LockOptions) -> Result<LockGuard, LockError> {
        let deadline = Instant::now() + opts.wait_timeout;
        loop {
            if let Some(guard) = self.try_acquire(key, opts.ttl) {
                return Ok(guard);
            }
            if Instant::now() >= deadline {
                return Err(LockError::Timeout(key.to_string()));
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            let wait = remaining.min(Duration::from_millis(50));
            let _ = tokio::time::timeout(wait, self.notify.notified()).await;
        }
    }

    async fn renew(&self, guard: &LockGuard, ttl: Duration) -> Result<(), LockError> {
        let mut leases = self.leases.lock().unwrap();
        match leases.get_mut(&guard.key) {
            Some(lease) if lease.token == guard.token => {
                lease.expires_at = Instant::now() + ttl;
                Ok(())
            }
            _ => Err(LockError::Timeout(guard.key.clone())),
        }
    }

    async fn release(&self, guard: &LockGuard) -> Result<(), LockError> {
        let mut leases = self.leases.lock().unwrap();
        if let Some(lease) = leases.get(&guard.key) {
            if lease.token == guard.token {
                leases.remove(&guard.key);
            }
        }
        drop(leases);
        self.notify.notify_waiters();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::lock::with_lock;

    #[tokio::test]
    async fn second_acquire_waits_for_release() {
        let lock = InProcessLock::new();
        let opts = LockOptions {
            ttl: Duration::from_secs(5),
            wait_timeout: Duration::from_secs(2),
            auto_renew: false,
            renew_interval: Duration::from_secs(1),
        };
        let guard = lock.acquire("k", opts).await.unwrap();

        let lock_ref = &lock;
        let waiter = async {
            lock_ref.acquire("k", opts).await
        };
        tokio::pin!(waiter);

        tokio::time::sleep(Duration::from_millis(20)).await;
        lock.release(&guard).await.unwrap();
        let second = waiter.await.unwrap();
        assert_eq!(second.key, "k");
    }

    #[tokio::test]
    async fn timeout_when_never_released() {
        let lock = InProcessLock::new();
        let opts = LockOptions {
            ttl: Duration::from_secs(60),
            wait_timeout: Duration::from_millis(100),
            auto_renew: false,
            renew_interval: Duration::from_secs(1),
        };
        let _guard = lock.acquire("k", opts).await.unwrap();
        let err = lock.acquire("k", opts).await.unwrap_err();
        assert!(matches!(err, LockError::Timeout(_)));
    }

    #[tokio::test]
    async fn with_lock_runs_body_and_releases() {
        let lock = InProcessLock::new();
        let opts = LockOptions::default();
        let result = with_lock(&lock, "k", opts, || async { 42 }).await.unwrap();
        assert_eq!(result, 42);
        // Lock released: a second acquire succeeds immediately.
        let guard = lock.acquire("k", opts).await.unwrap();
        lock.release(&guard).await.unwrap();
    }
}
