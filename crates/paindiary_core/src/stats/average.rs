//! Calendar-window averages.
//!
//! # Responsibility
//! - Group entries by calendar day or calendar month and average levels.
//!
//! # Invariants
//! - Calendar fields are resolved in the time zone of the window argument.
//! - Results depend only on the multiset of levels in the window, never on
//!   input order.
//! - An empty window averages to `0.0`; use [`mean_level`] to tell "no data"
//!   apart from a true zero.

use crate::model::entry::PainEntry;
use chrono::{DateTime, Datelike, TimeZone};

/// Average level of entries recorded on `day`'s calendar day.
///
/// Matches year and day-of-year in `day`'s zone. Returns `0.0` when no entry
/// falls on that day.
pub fn average_for_day<Tz: TimeZone>(entries: &[PainEntry], day: &DateTime<Tz>) -> f64 {
    mean_level(entries_on_day(entries, day)).unwrap_or(0.0)
}

/// Average level of entries recorded in `month`'s calendar month and year.
///
/// Returns `0.0` when no entry falls in that month.
pub fn average_for_month<Tz: TimeZone>(entries: &[PainEntry], month: &DateTime<Tz>) -> f64 {
    mean_level(entries_in_month(entries, month)).unwrap_or(0.0)
}

/// Entries whose calendar day (year + ordinal) equals `day`'s.
pub fn entries_on_day<'a, Tz: TimeZone + 'a>(
    entries: &'a [PainEntry],
    day: &DateTime<Tz>,
) -> impl Iterator<Item = &'a PainEntry> + 'a {
    let tz = day.timezone();
    let (year, ordinal) = (day.year(), day.ordinal());
    entries.iter().filter(move |entry| {
        entry
            .datetime_in(&tz)
            .is_some_and(|at| at.year() == year && at.ordinal() == ordinal)
    })
}

/// Entries whose calendar month and year equal `month`'s.
pub fn entries_in_month<'a, Tz: TimeZone + 'a>(
    entries: &'a [PainEntry],
    month: &DateTime<Tz>,
) -> impl Iterator<Item = &'a PainEntry> + 'a {
    let tz = month.timezone();
    let (year, number) = (month.year(), month.month());
    entries.iter().filter(move |entry| {
        entry
            .datetime_in(&tz)
            .is_some_and(|at| at.year() == year && at.month() == number)
    })
}

/// Arithmetic mean of the levels, or `None` for an empty iterator.
pub fn mean_level<'a>(entries: impl IntoIterator<Item = &'a PainEntry>) -> Option<f64> {
    let (sum, count) = entries
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, count), entry| {
            (sum + entry.level, count + 1)
        });
    (count > 0).then(|| sum / count as f64)
}
