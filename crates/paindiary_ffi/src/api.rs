//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose diary use cases as sync, never-panicking functions.
//! - Translate core errors into message envelopes the UI can display.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Calendar windows are resolved in the device local time zone.
//! - Each call opens the configured DB, runs one use case and drops the
//!   connection.

use chrono::{DateTime, Local, TimeZone};
use log::warn;
use paindiary_core::db::open_db;
use paindiary_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    severity_color as severity_color_inner, ChartGeometry, ChartSize, DiaryConfig, DiaryService,
    PainEntry, SqliteEntryRepository,
};
use std::path::PathBuf;
use std::sync::OnceLock;

static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One stored entry as seen by Dart.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryItem {
    pub timestamp_ms: i64,
    pub level: f64,
}

/// Result of a write use case.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryActionResponse {
    pub ok: bool,
    /// Timestamp key of the affected entry.
    pub timestamp_ms: Option<i64>,
    pub message: String,
}

impl EntryActionResponse {
    fn success(message: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            ok: true,
            timestamp_ms: Some(timestamp_ms),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            timestamp_ms: None,
            message: message.into(),
        }
    }
}

/// Entry listing envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryListResponse {
    pub ok: bool,
    pub items: Vec<EntryItem>,
    pub message: String,
}

/// Average envelope; `value` is `0.0` when the window has no entries.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageResponse {
    pub ok: bool,
    pub value: f64,
    pub message: String,
}

/// Flat chart geometry: segments as `[x0, y0, x1, y1]` quadruples and
/// markers as `[x, y]` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartResponse {
    pub ok: bool,
    pub segments: Vec<f32>,
    pub markers: Vec<f32>,
    pub message: String,
}

impl ChartResponse {
    fn from_geometry(geometry: &ChartGeometry) -> Self {
        Self {
            ok: true,
            segments: geometry
                .segments
                .iter()
                .flat_map(|s| [s.start.x, s.start.y, s.end.x, s.end.y])
                .collect(),
            markers: geometry.markers.iter().flat_map(|p| [p.x, p.y]).collect(),
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            segments: Vec::new(),
            markers: Vec::new(),
            message: message.into(),
        }
    }
}

/// Records `level` at `timestamp_ms`, replacing an entry at the same instant.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_add(level: f64, timestamp_ms: i64) -> EntryActionResponse {
    match with_diary_service(|service| service.record_entry(level, timestamp_ms)) {
        Ok(entry) => EntryActionResponse::success("Entry added.", entry.timestamp_ms),
        Err(err) => EntryActionResponse::failure(format!("entry_add failed: {err}")),
    }
}

/// Records `level` at the current instant.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_add_now(level: f64) -> EntryActionResponse {
    match with_diary_service(|service| service.record_now(level)) {
        Ok(entry) => EntryActionResponse::success("Entry added.", entry.timestamp_ms),
        Err(err) => EntryActionResponse::failure(format!("entry_add_now failed: {err}")),
    }
}

/// Removes the entry at `timestamp_ms`; succeeds when nothing matches.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_remove(timestamp_ms: i64) -> EntryActionResponse {
    match with_diary_service(|service| service.remove_entry(timestamp_ms)) {
        Ok(()) => EntryActionResponse::success("Entry removed.", timestamp_ms),
        Err(err) => EntryActionResponse::failure(format!("entry_remove failed: {err}")),
    }
}

/// Lists every entry in ascending timestamp order.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_list() -> EntryListResponse {
    match with_diary_service(|service| service.entries()) {
        Ok(entries) => EntryListResponse {
            ok: true,
            message: format!("Found {} entries.", entries.len()),
            items: entries.iter().map(to_entry_item).collect(),
        },
        Err(err) => EntryListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("entry_list failed: {err}"),
        },
    }
}

/// Average on the local calendar day containing `day_ms`.
#[flutter_rust_bridge::frb(sync)]
pub fn average_for_day(day_ms: i64) -> AverageResponse {
    average_response("average_for_day", day_ms, |service, day| {
        service.average_for_day(day)
    })
}

/// Average in the local calendar month containing `month_ms`.
#[flutter_rust_bridge::frb(sync)]
pub fn average_for_month(month_ms: i64) -> AverageResponse {
    average_response("average_for_month", month_ms, |service, month| {
        service.average_for_month(month)
    })
}

/// Time-of-day chart for the local calendar day containing `day_ms`.
#[flutter_rust_bridge::frb(sync)]
pub fn chart_daily(day_ms: i64, width: f32, height: f32) -> ChartResponse {
    let Some(day) = local_datetime(day_ms) else {
        return ChartResponse::failure(format!("chart_daily failed: invalid day {day_ms}"));
    };
    let size = ChartSize { width, height };
    match with_diary_service(|service| service.daily_chart(&day, size)) {
        Ok(geometry) => ChartResponse::from_geometry(&geometry),
        Err(err) => ChartResponse::failure(format!("chart_daily failed: {err}")),
    }
}

/// Data-relative chart over every stored entry.
#[flutter_rust_bridge::frb(sync)]
pub fn chart_all_time(width: f32, height: f32) -> ChartResponse {
    let size = ChartSize { width, height };
    match with_diary_service(|service| service.all_time_chart(size)) {
        Ok(geometry) => ChartResponse::from_geometry(&geometry),
        Err(err) => ChartResponse::failure(format!("chart_all_time failed: {err}")),
    }
}

/// Slider color for `level` packed as `0xAARRGGBB`.
///
/// Out-of-range levels are clamped; the slider cannot produce them, so a
/// clamp here only guards against a miswired caller.
#[flutter_rust_bridge::frb(sync)]
pub fn severity_color(level: f32) -> u32 {
    let clamped = if level.is_nan() {
        0.0
    } else {
        level.clamp(0.0, 10.0)
    };
    match severity_color_inner(clamped) {
        Ok(color) => color.to_argb(),
        Err(err) => {
            warn!("event=severity_color module=ffi status=error error={err}");
            paindiary_core::Rgba::GREEN.to_argb()
        }
    }
}

fn average_response(
    operation: &str,
    at_ms: i64,
    f: impl FnOnce(
        &DiaryService<SqliteEntryRepository<'_>>,
        &DateTime<Local>,
    ) -> paindiary_core::RepoResult<f64>,
) -> AverageResponse {
    let Some(at) = local_datetime(at_ms) else {
        return AverageResponse {
            ok: false,
            value: 0.0,
            message: format!("{operation} failed: invalid instant {at_ms}"),
        };
    };
    match with_diary_service(|service| f(service, &at)) {
        Ok(value) => AverageResponse {
            ok: true,
            value,
            message: String::new(),
        },
        Err(err) => AverageResponse {
            ok: false,
            value: 0.0,
            message: format!("{operation} failed: {err}"),
        },
    }
}

fn local_datetime(epoch_ms: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(epoch_ms).single()
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| DiaryConfig::from_env().db_path)
        .clone()
}

fn with_diary_service<T>(
    f: impl FnOnce(&DiaryService<SqliteEntryRepository<'_>>) -> paindiary_core::RepoResult<T>,
) -> Result<T, String> {
    let conn = open_db(resolve_db_path()).map_err(|err| format!("diary DB open failed: {err}"))?;
    let repo = SqliteEntryRepository::try_new(&conn)
        .map_err(|err| format!("diary repo init failed: {err}"))?;
    let service = DiaryService::new(repo);
    f(&service).map_err(|err| err.to_string())
}

fn to_entry_item(entry: &PainEntry) -> EntryItem {
    EntryItem {
        timestamp_ms: entry.timestamp_ms,
        level: entry.level,
    }
}
