//! Abstract ports the core depends on (§1, §4.1, §4.2, §4.3). The core never
//! talks to a filesystem, a queue broker, a lock service, or a database
//! driver directly — only through these traits, so every concrete adapter
//! lives outside `dms-core::services`/`dms-core::sync`.

pub mod lock;
pub mod metadata;
pub mod queue;
pub mod storage;

pub use lock::{DistributedLock, LockError, LockGuard, LockOptions};
pub use metadata::{BoxTransaction, MetadataStore, Transaction};
pub use queue::{JobHandler, JobHandlerFuture, JobQueue};
pub use storage::{StorageError, StoragePort};
