//! Pain diary use-case service.
//!
//! # Responsibility
//! - Record and remove entries through the repository contract.
//! - Combine stored entries with aggregation and projection into read models.
//!
//! # Invariants
//! - The service holds no view state; every read returns a fresh snapshot.
//! - Entries are validated before reaching the repository.

use crate::chart::{project_daily, project_linear, samples_from_entries, ChartGeometry};
use crate::model::entry::{EntryTimestamp, PainEntry};
use crate::repo::entry_repo::{EntryRepository, RepoResult};
use crate::stats::average::{average_for_day, average_for_month};
use chrono::{DateTime, TimeZone};

/// Drawing surface size requested by the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSize {
    pub width: f32,
    pub height: f32,
}

/// Immutable read model for the diary home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DiarySnapshot {
    /// All entries in ascending timestamp order.
    pub entries: Vec<PainEntry>,
    /// Average level on the snapshot day; `0.0` without entries.
    pub day_average: f64,
    /// Average level in the snapshot month; `0.0` without entries.
    pub month_average: f64,
    /// Time-of-day chart for the snapshot day.
    pub daily_chart: ChartGeometry,
    /// Data-relative chart over every entry.
    pub all_time_chart: ChartGeometry,
}

/// Use-case service over an entry repository.
pub struct DiaryService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> DiaryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records `level` at `timestamp_ms`, replacing an entry at the same instant.
    pub fn record_entry(&self, level: f64, timestamp_ms: EntryTimestamp) -> RepoResult<PainEntry> {
        let entry = PainEntry::new(timestamp_ms, level)?;
        self.repo.add(&entry)?;
        Ok(entry)
    }

    /// Records `level` at the current instant.
    pub fn record_now(&self, level: f64) -> RepoResult<PainEntry> {
        let entry = PainEntry::now(level)?;
        self.repo.add(&entry)?;
        Ok(entry)
    }

    /// Removes the entry at `timestamp_ms`; a missing entry is not an error.
    pub fn remove_entry(&self, timestamp_ms: EntryTimestamp) -> RepoResult<()> {
        // Removal matches on the timestamp key only.
        let key = PainEntry {
            timestamp_ms,
            level: 0.0,
        };
        self.repo.remove(&key)
    }

    /// Every stored entry in ascending timestamp order.
    pub fn entries(&self) -> RepoResult<Vec<PainEntry>> {
        let mut entries = self.repo.get_all()?;
        entries.sort_by_key(|entry| entry.timestamp_ms);
        Ok(entries)
    }

    pub fn average_for_day<Tz: TimeZone>(&self, day: &DateTime<Tz>) -> RepoResult<f64> {
        Ok(average_for_day(&self.repo.get_all()?, day))
    }

    pub fn average_for_month<Tz: TimeZone>(&self, month: &DateTime<Tz>) -> RepoResult<f64> {
        Ok(average_for_month(&self.repo.get_all()?, month))
    }

    pub fn daily_chart<Tz: TimeZone>(
        &self,
        day: &DateTime<Tz>,
        size: ChartSize,
    ) -> RepoResult<ChartGeometry> {
        Ok(project_daily(
            &self.repo.get_all()?,
            day,
            size.width,
            size.height,
        ))
    }

    pub fn all_time_chart(&self, size: ChartSize) -> RepoResult<ChartGeometry> {
        let samples = samples_from_entries(&self.repo.get_all()?);
        Ok(project_linear(&samples, size.width, size.height))
    }

    /// Builds the home-screen read model for `now` from one repository read.
    pub fn snapshot<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        size: ChartSize,
    ) -> RepoResult<DiarySnapshot> {
        let entries = self.entries()?;
        let samples = samples_from_entries(&entries);
        Ok(DiarySnapshot {
            day_average: average_for_day(&entries, now),
            month_average: average_for_month(&entries, now),
            daily_chart: project_daily(&entries, now, size.width, size.height),
            all_time_chart: project_linear(&samples, size.width, size.height),
            entries,
        })
    }
}
