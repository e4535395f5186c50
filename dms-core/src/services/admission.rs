//! Admission queue for large uploads (§4.8). A process-wide gate in front of
//! `UploadCommands::initiate`: while both caps (`max_active_sessions`,
//! `max_total_upload_bytes`) have headroom, `initiate_or_enqueue` creates the
//! session immediately; otherwise the caller's args are parked as a FIFO
//! `QueueTicket` and promoted once a slot opens on a terminal session
//! transition.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::error::AppError;
use crate::model::{InitiateArgs, QueueTicket, TicketStatus, UploadSession};

use super::upload::UploadCommands;

/// READY tickets are claimed via a follow-up `initiate` call; unclaimed
/// after this window, the ticket expires and the slot is offered to the
/// next ticket in line (§4.8). Not a §6 config key, so this stays a fixed
/// constant.
const READY_CLAIM_SECONDS: i64 = 60;

/// Stand-in for a real historical-duration tracker (§4.8: "a fixed
/// configured constant in this repo — there is no real historical-duration
/// tracker in scope"). `estimated_wait_seconds = position * this`.
const AVERAGE_SESSION_DURATION_SECONDS: u64 = 30;

pub enum AdmissionOutcome {
    Active(UploadSession),
    Waiting {
        ticket: Uuid,
        position: u64,
        estimated_wait_seconds: u64,
    },
}

struct Inner {
    active_sessions: u32,
    total_upload_bytes: u64,
    waiting: VecDeque<QueueTicket>,
    next_position: u64,
}

/// Process-wide; one instance shared across the HTTP surface. `upload` owns
/// the session state machine this queue gates (§4.7); this module owns only
/// the waiting-queue semantics layered in front of it.
pub struct AdmissionQueue {
    max_active_sessions: u32,
    max_total_upload_bytes: u64,
    upload: Arc<UploadCommands>,
    inner: Mutex<Inner>,
}

impl AdmissionQueue {
    pub fn new(upload: Arc<UploadCommands>, max_active_sessions: u32, max_total_upload_bytes: u64) -> Self {
        AdmissionQueue {
            max_active_sessions,
            max_total_upload_bytes,
            upload,
            inner: Mutex::new(Inner {
                active_sessions: 0,
                total_upload_bytes: 0,
                waiting: VecDeque::new(),
                next_position: 1,
            }),
        }
    }

    fn has_headroom(inner: &Inner, total_size: u64, max_active: u32, max_bytes: u64) -> bool {
        inner.active_sessions < max_active && inner.total_upload_bytes.saturating_add(total_size) <= max_bytes
    }

    /// §4.8 initiate-or-enqueue. Admits immediately when both caps have
    /// headroom; otherwise parks a `WAITING` ticket at the back of the FIFO.
    pub async fn initiate_or_enqueue(
        &self,
        args: InitiateArgs,
        user_id: &str,
    ) -> Result<AdmissionOutcome, AppError> {
        let admit_now = {
            let mut inner = self.inner.lock().unwrap();
            let ok = inner.waiting.is_empty()
                && Self::has_headroom(&inner, args.total_size, self.max_active_sessions, self.max_total_upload_bytes);
            if ok {
                inner.active_sessions += 1;
                inner.total_upload_bytes += args.total_size;
            }
            ok
        };

        if admit_now {
            match self.upload.initiate(args.clone(), user_id).await {
                Ok(session) => return Ok(AdmissionOutcome::Active(session)),
                Err(err) => {
                    let mut inner = self.inner.lock().unwrap();
                    inner.active_sessions = inner.active_sessions.saturating_sub(1);
                    inner.total_upload_bytes = inner.total_upload_bytes.saturating_sub(args.total_size);
                    return Err(err);
                }
            }
        }

        let mut inner = self.inner.lock().unwrap();
        let position = inner.next_position;
        inner.next_position += 1;
        let ticket = QueueTicket {
            ticket: Uuid::now_v7(),
            status: TicketStatus::Waiting,
            position,
            ready_deadline: None,
            initiate_args: args,
            user_id: user_id.to_string(),
        };
        let ticket_id = ticket.ticket;
        inner.waiting.push_back(ticket);
        let estimated_wait_seconds = position * AVERAGE_SESSION_DURATION_SECONDS;
        Ok(AdmissionOutcome::Waiting {
            ticket: ticket_id,
            position,
            estimated_wait_seconds,
        })
    }

    /// Reported `position` must never increase between polls (§4.8). Returns
    /// `None` if the ticket is unknown (already claimed, cancelled, or
    /// expired and swept).
    pub fn poll(&self, ticket_id: Uuid) -> Option<QueueTicket> {
        let mut inner = self.inner.lock().unwrap();
        Self::expire_stale(&mut inner);
        inner.waiting.iter().find(|t| t.ticket == ticket_id).cloned()
    }

    /// Idempotent: cancelling an already-cancelled or missing ticket is not
    /// an error (§4.8).
    pub fn cancel(&self, ticket_id: Uuid) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(t) = inner.waiting.iter_mut().find(|t| t.ticket == ticket_id) {
            t.status = TicketStatus::Cancelled;
        }
        inner.waiting.retain(|t| t.ticket != ticket_id || t.status != TicketStatus::Cancelled);
        Self::renumber(&mut inner);
    }

    /// A `READY` ticket claims its slot by actually calling `initiate`. On
    /// admission failure (the headroom re-checked at promotion evaporated
    /// before the claim landed) the ticket goes back to the head of the
    /// FIFO rather than being lost (§4.8 "repeated admission failure
    /// requeue").
    pub async fn claim(&self, ticket_id: Uuid, user_id: &str) -> Result<UploadSession, AppError> {
        let (mut ticket, args) = {
            let mut inner = self.inner.lock().unwrap();
            Self::expire_stale(&mut inner);
            let idx = inner
                .waiting
                .iter()
                .position(|t| t.ticket == ticket_id && t.status == TicketStatus::Ready)
                .ok_or_else(|| AppError::not_found("queue ticket not found or not ready"))?;
            let ticket = inner.waiting.remove(idx).unwrap();
            inner.active_sessions += 1;
            inner.total_upload_bytes += ticket.initiate_args.total_size;
            let args = ticket.initiate_args.clone();
            (ticket, args)
        };
        match self.upload.initiate(args.clone(), user_id).await {
            Ok(session) => Ok(session),
            Err(err) => {
                let mut inner = self.inner.lock().unwrap();
                inner.active_sessions = inner.active_sessions.saturating_sub(1);
                inner.total_upload_bytes = inner.total_upload_bytes.saturating_sub(args.total_size);
                ticket.status = TicketStatus::Waiting;
                ticket.ready_deadline = None;
                inner.waiting.push_front(ticket);
                Self::renumber(&mut inner);
                Err(err)
            }
        }
    }

    /// Called on every terminal session transition (COMPLETED / ABORTED /
    /// EXPIRED): releases the slot the session held and promotes the head
    /// ticket, if any (§4.8).
    pub fn release(&self, total_size: u64) {
        let mut inner = self.inner.lock().unwrap();
        inner.active_sessions = inner.active_sessions.saturating_sub(1);
        inner.total_upload_bytes = inner.total_upload_bytes.saturating_sub(total_size);
        Self::expire_stale(&mut inner);
        if let Some(head) = inner.waiting.front() {
            if Self::has_headroom(
                &inner,
                head.initiate_args.total_size,
                self.max_active_sessions,
                self.max_total_upload_bytes,
            ) {
                let deadline = Utc::now() + Duration::seconds(READY_CLAIM_SECONDS);
                let front = inner.waiting.front_mut().unwrap();
                front.status = TicketStatus::Ready;
                front.ready_deadline = Some(deadline);
            }
        }
    }

    fn expire_stale(inner: &mut Inner) {
        let now = Utc::now();
        let before = inner.waiting.len();
        inner.waiting.retain(|t| {
            if t.status == TicketStatus::Ready {
                if let Some(deadline) = t.ready_deadline {
                    return now <= deadline;
                }
            }
            true
        });
        if inner.waiting.len() != before {
            Self::renumber(inner);
        }
    }

    /// Positions are monotonic within a ticket's lifetime but compact back
    /// down after removals so the head is always `position == 1`.
    fn renumber(inner: &mut Inner) {
        for (idx, ticket) in inner.waiting.iter_mut().enumerate() {
            ticket.position = (idx + 1) as u64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::{ConflictStrategy, Folder};
    use crate::queue_impl::InProcessJobQueue;
    use crate::services::ServiceContext;
    use crate::storage_impl::rooted_fs::RootedFsStorage;
    use crate::store::memory::InMemoryMetadataStore;

    fn test_config(max_active: u32, max_bytes: u64) -> Arc<Config> {
        Arc::new(Config {
            host: "0.0.0.0".into(),
            port: 8080,
            nas_mount_path: "/tmp".into(),
            cache_mount_path: "/tmp".into(),
            part_size_bytes: 10,
            multipart_threshold_bytes: 20,
            max_active_sessions: max_active,
            max_total_upload_bytes: max_bytes,
            sync_max_retries: 3,
            sync_backoff_ms: 3000,
            sync_concurrency: 5,
            lock_ttl_ms: 60_000,
            lock_renew_interval_ms: 25_000,
            lock_wait_timeout_ms: 30_000,
            health_probe_interval_ms: 30_000,
            trash_retention_days: 30,
            outbox_sweep_interval_ms: 15_000,
            database_connection_string: "http://localhost:8529".into(),
            database_name: "dms".into(),
            database_user: "root".into(),
            database_password: String::new(),
        })
    }

    async fn setup(max_active: u32, max_bytes: u64) -> (AdmissionQueue, Folder, tempfile::TempDir) {
        let store = Arc::new(InMemoryMetadataStore::new());
        let root = Folder::root("system");
        store.create_folder(root.clone(), None).await.unwrap();
        let queue = Arc::new(InProcessJobQueue::new(store.clone()));
        let config = test_config(max_active, max_bytes);
        let ctx = Arc::new(ServiceContext::new(store.clone(), queue, config.clone()));
        let dir = tempfile::tempdir().unwrap();
        let cache: Arc<dyn crate::ports::StoragePort> = Arc::new(RootedFsStorage::new(dir.path()));
        let upload = Arc::new(UploadCommands::new(ctx, cache));
        let admission = AdmissionQueue::new(upload, config.max_active_sessions, config.max_total_upload_bytes);
        (admission, root, dir)
    }

    fn args(root: &Folder, total_size: u64) -> InitiateArgs {
        InitiateArgs {
            file_name: "report.pdf".into(),
            folder_id: root.id,
            total_size,
            mime_type: "application/pdf".into(),
            conflict_strategy: ConflictStrategy::Error,
        }
    }

    #[tokio::test]
    async fn admits_immediately_when_headroom_available() {
        let (admission, root, _dir) = setup(1, 1_000).await;
        let outcome = admission.initiate_or_enqueue(args(&root, 25), "user1").await.unwrap();
        assert!(matches!(outcome, AdmissionOutcome::Active(_)));
    }

    #[tokio::test]
    async fn second_request_waits_when_active_cap_saturated() {
        let (admission, root, _dir) = setup(1, 1_000).await;
        let first = admission.initiate_or_enqueue(args(&root, 25), "user1").await.unwrap();
        assert!(matches!(first, AdmissionOutcome::Active(_)));

        let second = admission.initiate_or_enqueue(args(&root, 25), "user2").await.unwrap();
        match second {
            AdmissionOutcome::Waiting { position, .. } => assert_eq!(position, 1),
            _ => panic!("expected a WAITING outcome"),
        }
    }

    #[tokio::test]
    async fn release_promotes_head_ticket_to_ready() {
        let (admission, root, _dir) = setup(1, 1_000).await;
        admission.initiate_or_enqueue(args(&root, 25), "user1").await.unwrap();
        let second = admission.initiate_or_enqueue(args(&root, 25), "user2").await.unwrap();
        let ticket_id = match second {
            AdmissionOutcome::Waiting { ticket, .. } => ticket,
            _ => panic!("expected WAITING"),
        };

        admission.release(25);
        let ticket = admission.poll(ticket_id).expect("ticket still tracked");
        assert_eq!(ticket.status, TicketStatus::Ready);

        let claimed = admission.claim(ticket_id, "user2").await.unwrap();
        assert_eq!(claimed.total_size, 25);
    }

    #[tokio::test]
    async fn position_never_increases_between_polls() {
        let (admission, root, _dir) = setup(1, 1_000).await;
        admission.initiate_or_enqueue(args(&root, 25), "user1").await.unwrap();
        let t1 = match admission.initiate_or_enqueue(args(&root, 25), "user2").await.unwrap() {
            AdmissionOutcome::Waiting { ticket, .. } => ticket,
            _ => panic!("expected WAITING"),
        };
        let t2 = match admission.initiate_or_enqueue(args(&root, 25), "user3").await.unwrap() {
            AdmissionOutcome::Waiting { ticket, .. } => ticket,
            _ => panic!("expected WAITING"),
        };
        let pos_before = admission.poll(t2).unwrap().position;
        admission.cancel(t1);
        let pos_after = admission.poll(t2).unwrap().position;
        assert!(pos_after <= pos_before);
    }

    #[tokio::test]
    async fn cancel_is_idempotent() {
        let (admission, root, _dir) = setup(1, 1_000).await;
        admission.initiate_or_enqueue(args(&root, 25), "user1").await.unwrap();
        let ticket_id = match admission.initiate_or_enqueue(args(&root, 25), "user2").await.unwrap() {
            AdmissionOutcome::Waiting { ticket, .. } => ticket,
            _ => panic!("expected WAITING"),
        };
        admission.cancel(ticket_id);
        admission.cancel(ticket_id);
        assert!(admission.poll(ticket_id).is_none());
    }

    #[tokio::test]
    async fn byte_cap_forces_waiting_even_with_session_headroom() {
        let (admission, root, _dir) = setup(10, 30).await;
        admission.initiate_or_enqueue(args(&root, 25), "user1").await.unwrap();
        let second = admission.initiate_or_enqueue(args(&root, 25), "user2").await.unwrap();
        assert!(matches!(second, AdmissionOutcome::Waiting { .. }));
    }
}
