//! Core domain logic for the document-management backend: metadata model,
//! abstract ports, concrete adapters, command services, and the sync
//! outbox dispatcher. `dms-server` wires these into an HTTP surface.

pub mod config;
pub mod error;
pub mod health;
pub mod lock_impl;
pub mod model;
pub mod outbox;
pub mod ports;
pub mod queue_impl;
pub mod services;
pub mod store;
pub mod storage_impl;
pub mod sync;
pub mod validation;

pub use error::{AppError, AppResult};
