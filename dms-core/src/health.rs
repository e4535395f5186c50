//! Process-wide NAS health cache (§4.9). A three-state cell with two
//! distinct writers: the periodic scheduler probe (any transition) and sync
//! workers reporting I/O failure (one-way to `Unhealthy`, never recovery).

use std::sync::Arc;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::StoragePort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    /// Any status string a manual override or probe doesn't recognize
    /// normalizes to `Unhealthy` rather than silently defaulting to
    /// `Healthy` (§4.9).
    pub fn parse_normalized(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "healthy" => HealthStatus::Healthy,
            "degraded" => HealthStatus::Degraded,
            _ => HealthStatus::Unhealthy,
        }
    }

    pub fn blocks_ingress(&self) -> bool {
        matches!(self, HealthStatus::Unhealthy)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthSnapshot {
    pub status: HealthStatus,
    pub last_checked_at: DateTime<Utc>,
    pub last_error: Option<String>,
}

struct Inner {
    status: HealthStatus,
    last_checked_at: DateTime<Utc>,
    last_error: Option<String>,
}

/// Shared handle; cheap to clone the `Arc` around workers and the scheduler
/// task. Optimistic at cold start (`Healthy`) so early traffic is accepted
/// before the first probe runs (§4.9).
pub struct NasHealthCache {
    inner: RwLock<Inner>,
}

impl Default for NasHealthCache {
    fn default() -> Self {
        Self::new()
    }
}

impl NasHealthCache {
    pub fn new() -> Self {
        NasHealthCache {
            inner: RwLock::new(Inner {
                status: HealthStatus::Healthy,
                last_checked_at: Utc::now(),
                last_error: None,
            }),
        }
    }

    pub fn snapshot(&self) -> HealthSnapshot {
        let inner = self.inner.read().unwrap();
        HealthSnapshot {
            status: inner.status,
            last_checked_at: inner.last_checked_at,
            last_error: inner.last_error.clone(),
        }
    }

    pub fn status(&self) -> HealthStatus {
        self.inner.read().unwrap().status
    }

    /// Scheduler writer: may transition to any state (§4.9).
    pub fn set_status(&self, status: HealthStatus, error: Option<String>) {
        let mut inner = self.inner.write().unwrap();
        inner.status = status;
        inner.last_checked_at = Utc::now();
        inner.last_error = error;
    }

    /// Worker writer: one-way to `Unhealthy`. Never downgrades an already
    /// `Unhealthy` or improves a `Healthy`/`Degraded` reading — recovery is
    /// exclusively the scheduler's job.
    pub fn report_unhealthy(&self, error: impl Into<String>) {
        let mut inner = self.inner.write().unwrap();
        inner.status = HealthStatus::Unhealthy;
        inner.last_checked_at = Utc::now();
        inner.last_error = Some(error.into());
    }
}

/// Spawns the scheduler-side periodic probe (§4.9): cheap NAS reachability
/// check (`exists("/")`) on a fixed interval, able to transition to any
/// state including recovery back from `Unhealthy` — the one thing worker
/// failure reports can never do.
pub fn spawn_probe(
    health: Arc<NasHealthCache>,
    nas: Arc<dyn StoragePort>,
    interval_ms: u64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_millis(interval_ms));
        loop {
            ticker.tick().await;
            match nas.exists("/").await {
                Ok(_) => health.set_status(HealthStatus::Healthy, None),
                Err(err) => {
                    log::warn!("NAS health probe failed: {err}");
                    health.set_status(HealthStatus::Unhealthy, Some(err.to_string()));
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_healthy() {
        let cache = NasHealthCache::new();
        assert_eq!(cache.status(), HealthStatus::Healthy);
        assert!(!cache.status().blocks_ingress());
    }

    #[test]
    fn worker_report_is_one_way() {
        let cache = NasHealthCache::new();
        cache.report_unhealthy("nas timeout");
        assert_eq!(cache.status(), HealthStatus::Unhealthy);
        assert!(cache.status().blocks_ingress());
    }

    #[test]
    fn scheduler_can_recover() {
        let cache = NasHealthCache::new();
        cache.report_unhealthy("nas timeout");
        cache.set_status(HealthStatus::Healthy, None);
        assert_eq!(cache.status(), HealthStatus::Healthy);
    }

    #[test]
    fn unknown_status_normalizes_unhealthy() {
        assert_eq!(HealthStatus::parse_normalized("weird"), HealthStatus::Unhealthy);
        assert_eq!(HealthStatus::parse_normalized("DEGRADED"), HealthStatus::Degraded);
    }

    #[test]
    fn degraded_does_not_block_ingress() {
        assert!(!HealthStatus::Degraded.blocks_ingress());
    }
}
