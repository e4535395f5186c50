use thiserror::Error;

/// Core error taxonomy (§7 of the spec). Command services and sync handlers
/// return this type; the HTTP layer maps each variant to a status code.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("capacity exceeded: {0}")]
    Capacity(String),

    #[error("NAS unavailable")]
    ServiceUnavailable,

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        AppError::Precondition(msg.into())
    }

    pub fn capacity(msg: impl Into<String>) -> Self {
        AppError::Capacity(msg.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Walks the `source()` chain of an error into a single log-friendly string.
/// Used by the outbox retry helper to produce the alert-grade log line
/// required at terminal `FAILED` (§4.4, §7).
pub fn chain_to_string(err: &anyhow::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = cause.source();
    }
    parts.join(" <- caused by: ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_to_string_walks_causes() {
        let root = anyhow::anyhow!("disk full");
        let wrapped = root.context("failed to write file");
        let s = chain_to_string(&wrapped);
        assert!(s.contains("failed to write file"));
        assert!(s.contains("disk full"));
    }
}
