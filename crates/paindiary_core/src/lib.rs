//! Core domain logic for the pain diary.
//! This crate owns entry storage, aggregation, chart projection and severity
//! colors; UI layers only call into it.

pub mod chart;
pub mod color;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod stats;

pub use chart::{project_daily, project_linear, ChartGeometry, ChartPoint, ChartSegment};
pub use color::{blend, severity_color, ColorError, Rgba};
pub use config::DiaryConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{EntryTimestamp, EntryValidationError, PainEntry};
pub use repo::entry_repo::{EntryRepository, RepoError, RepoResult, SqliteEntryRepository};
pub use service::diary_service::{ChartSize, DiaryService, DiarySnapshot};
pub use stats::average::{average_for_day, average_for_month};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
