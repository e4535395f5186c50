//! Typed runtime configuration (§4.11, §6), loaded eagerly at startup so a
//! misconfigured deployment fails fast rather than mid-request, matching the
//! teacher's `AppConfig::from_env` shape.

use std::env;

use dotenvy::dotenv;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,

    pub nas_mount_path: String,
    pub cache_mount_path: String,

    pub part_size_bytes: u64,
    pub multipart_threshold_bytes: u64,
    pub max_active_sessions: u32,
    pub max_total_upload_bytes: u64,

    pub sync_max_retries: u32,
    pub sync_backoff_ms: u64,
    pub sync_concurrency: usize,

    pub lock_ttl_ms: u64,
    pub lock_renew_interval_ms: u64,
    pub lock_wait_timeout_ms: u64,

    pub health_probe_interval_ms: u64,
    pub trash_retention_days: u32,
    pub outbox_sweep_interval_ms: u64,

    pub database_connection_string: String,
    pub database_name: String,
    pub database_user: String,
    pub database_password: String,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T, AppError>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| AppError::validation(format!("invalid {key}: {e}"))),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        Ok(Config {
            host: env_or("HOST", "0.0.0.0"),
            port: env_parse("PORT", 8080u16)?,

            nas_mount_path: env_or("NAS_MOUNT_PATH", "./data/nas"),
            cache_mount_path: env_or("CACHE_MOUNT_PATH", "./data/cache"),

            part_size_bytes: env_parse("PART_SIZE_BYTES", 10 * 1024 * 1024)?,
            multipart_threshold_bytes: env_parse("MULTIPART_THRESHOLD_BYTES", 100 * 1024 * 1024)?,
            max_active_sessions: env_parse("MAX_ACTIVE_SESSIONS", 10u32)?,
            max_total_upload_bytes: env_parse("MAX_TOTAL_UPLOAD_BYTES", 5 * 1024 * 1024 * 1024)?,

            sync_max_retries: env_parse("SYNC_MAX_RETRIES", 3u32)?,
            sync_backoff_ms: env_parse("SYNC_BACKOFF_MS", 3_000u64)?,
            sync_concurrency: env_parse("SYNC_CONCURRENCY", 5usize)?,

            lock_ttl_ms: env_parse("LOCK_TTL_MS", 60_000u64)?,
            lock_renew_interval_ms: env_parse("LOCK_RENEW_INTERVAL_MS", 25_000u64)?,
            lock_wait_timeout_ms: env_parse("LOCK_WAIT_TIMEOUT_MS", 30_000u64)?,

            health_probe_interval_ms: env_parse("HEALTH_PROBE_INTERVAL_MS", 30_000u64)?,
            trash_retention_days: env_parse("TRASH_RETENTION_DAYS", 30u32)?,
            outbox_sweep_interval_ms: env_parse("OUTBOX_SWEEP_INTERVAL_MS", 15_000u64)?,

            database_connection_string: env_or("DATABASE_CONNECTION_STRING", "http://localhost:8529"),
            database_name: env_or("DATABASE_NAME", "dms"),
            database_user: env_or("DATABASE_USER", "root"),
            database_password: env_or("DATABASE_PASSWORD", ""),
        })
    }

    pub fn lock_options(&self) -> crate::ports::lock::LockOptions {
        use std::time::Duration;
        crate::ports::lock::LockOptions {
            ttl: Duration::from_millis(self.lock_ttl_ms),
            wait_timeout: Duration::from_millis(self.lock_wait_timeout_ms),
            auto_renew: true,
            renew_interval: Duration::from_millis(self.lock_renew_interval_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn defaults_parse_without_env() {
        // SAFETY: test-only process-wide env mutation; #[serial] keeps this
        // from racing the other test in this module touching the same keys.
        unsafe {
            env::remove_var("PORT");
            env::remove_var("SYNC_MAX_RETRIES");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.sync_max_retries, 3);
        assert_eq!(config.sync_concurrency, 5);
    }

    #[test]
    #[serial]
    fn bad_numeric_env_is_validation_error() {
        unsafe {
            env::set_var("PORT", "not-a-number");
        }
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        unsafe {
            env::remove_var("PORT");
        }
    }
}
