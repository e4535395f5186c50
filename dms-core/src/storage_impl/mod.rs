//! Filesystem-backed `StoragePort` adapters (§4.1). Both tiers are rooted
//! directory trees on the machine running the worker — real directories so
//! that mkdir/rmdir/move_dir carry the semantics folder sync needs, which is
//! why this reaches for `tokio::fs` directly rather than the teacher's
//! `object_store` crate (see DESIGN.md).

pub mod rooted_fs;

pub use rooted_fs::RootedFsStorage;
