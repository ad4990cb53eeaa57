//! Pain entry domain model.
//!
//! # Responsibility
//! - Define the timestamped pain rating shared by storage, aggregation and
//!   chart projection.
//! - Provide calendar helpers that resolve the timestamp in a caller zone.
//!
//! # Invariants
//! - `timestamp_ms` is the identity key; two entries with the same timestamp
//!   describe the same record.
//! - `level` is finite and within `[MIN_LEVEL, MAX_LEVEL]`.
//! - Entries are immutable once created.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest accepted pain rating.
pub const MIN_LEVEL: f64 = 0.0;
/// Highest accepted pain rating.
pub const MAX_LEVEL: f64 = 10.0;

/// Unix epoch milliseconds; identity key of a pain entry.
pub type EntryTimestamp = i64;

/// Validation failures for [`PainEntry`] construction and persistence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryValidationError {
    LevelOutOfRange { level: f64 },
    NonFiniteLevel,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LevelOutOfRange { level } => write!(
                f,
                "pain level {level} is outside [{MIN_LEVEL}, {MAX_LEVEL}]"
            ),
            Self::NonFiniteLevel => write!(f, "pain level must be a finite number"),
        }
    }
}

impl Error for EntryValidationError {}

/// One user-submitted pain rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPainEntry")]
pub struct PainEntry {
    /// Unix epoch milliseconds of the moment the rating was recorded.
    pub timestamp_ms: EntryTimestamp,
    /// Rating on the fixed `0..=10` scale.
    pub level: f64,
}

impl PainEntry {
    /// Creates a validated entry.
    ///
    /// # Errors
    /// - `NonFiniteLevel` for NaN or infinite input.
    /// - `LevelOutOfRange` when `level` is outside `[0, 10]`.
    pub fn new(timestamp_ms: EntryTimestamp, level: f64) -> Result<Self, EntryValidationError> {
        let entry = Self {
            timestamp_ms,
            level,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Creates an entry stamped with the current instant.
    pub fn now(level: f64) -> Result<Self, EntryValidationError> {
        Self::new(chrono::Utc::now().timestamp_millis(), level)
    }

    /// Checks the level invariant.
    ///
    /// Fields are public, so write paths call this again before persisting.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        validate_level(self.level)
    }

    /// Resolves the entry timestamp in `tz`.
    ///
    /// Returns `None` for timestamps outside chrono's representable range.
    pub fn datetime_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        tz.timestamp_millis_opt(self.timestamp_ms).single()
    }
}

/// Validates a raw pain level against the fixed rating scale.
pub fn validate_level(level: f64) -> Result<(), EntryValidationError> {
    if !level.is_finite() {
        return Err(EntryValidationError::NonFiniteLevel);
    }
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(EntryValidationError::LevelOutOfRange { level });
    }
    Ok(())
}

#[derive(Deserialize)]
struct RawPainEntry {
    timestamp_ms: EntryTimestamp,
    level: f64,
}

impl TryFrom<RawPainEntry> for PainEntry {
    type Error = EntryValidationError;

    fn try_from(raw: RawPainEntry) -> Result<Self, Self::Error> {
        Self::new(raw.timestamp_ms, raw.level)
    }
}
