//! Database connectivity probe.

use chrono::{DateTime, Utc};

use crate::models::config::AppMode;
use crate::repository::DatabaseProbe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseStatus {
    Demo,
    Connected,
    Error,
}

impl DatabaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseStatus::Demo => "demo",
            DatabaseStatus::Connected => "connected",
            DatabaseStatus::Error => "error",
        }
    }
}

#[derive(Debug)]
pub struct DatabaseHealth {
    pub status: DatabaseStatus,
    pub mode: AppMode,
    pub message: String,
    pub checked_at: DateTime<Utc>,
}

impl DatabaseHealth {
    pub fn is_healthy(&self) -> bool {
        self.status != DatabaseStatus::Error
    }
}

/// Probes the database unless the app runs in demo mode, where no database is used.
pub fn check_database<R>(repo: &R, mode: AppMode) -> DatabaseHealth
where
    R: DatabaseProbe + ?Sized,
{
    let (status, message) = if mode.is_demo() {
        (
            DatabaseStatus::Demo,
            "Running in demo mode, database checks are skipped".to_string(),
        )
    } else {
        match repo.ping() {
            Ok(()) => (
                DatabaseStatus::Connected,
                "Database connection is healthy".to_string(),
            ),
            Err(e) => {
                log::error!("Database health check failed: {e}");
                (DatabaseStatus::Error, format!("Database check failed: {e}"))
            }
        }
    };

    DatabaseHealth {
        status,
        mode,
        message,
        checked_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::repository::errors::{RepositoryError, RepositoryResult};

    struct Probe {
        healthy: bool,
        calls: Cell<usize>,
    }

    impl Probe {
        fn new(healthy: bool) -> Self {
            Self {
                healthy,
                calls: Cell::new(0),
            }
        }
    }

    impl DatabaseProbe for Probe {
        fn ping(&self) -> RepositoryResult<()> {
            self.calls.set(self.calls.get() + 1);
            if self.healthy {
                Ok(())
            } else {
                Err(RepositoryError::ConnectionError("unable to open database".into()))
            }
        }
    }

    #[test]
    fn demo_mode_skips_the_database() {
        let probe = Probe::new(false);

        let health = check_database(&probe, AppMode::Demo);

        assert_eq!(health.status, DatabaseStatus::Demo);
        assert!(health.is_healthy());
        assert_eq!(probe.calls.get(), 0);
    }

    #[test]
    fn production_reports_probe_result() {
        let ok = check_database(&Probe::new(true), AppMode::Production);
        assert_eq!(ok.status, DatabaseStatus::Connected);

        let failed = check_database(&Probe::new(false), AppMode::Production);
        assert_eq!(failed.status, DatabaseStatus::Error);
        assert!(!failed.is_healthy());
        assert!(failed.message.contains("unable to open database"));
    }
}
