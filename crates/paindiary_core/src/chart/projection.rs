//! Sample-to-screen projection for the single-day and all-time charts.
//!
//! # Responsibility
//! - Map logical samples onto a `width x height` drawing surface with the
//!   y-axis inverted (larger values draw higher).
//! - Emit polyline segments plus one marker per sample.
//!
//! # Invariants
//! - For `n` projected samples: `n - 1` segments and `n` markers.
//! - Marker `i + 1` coincides with the end of segment `i`.
//! - Projection never panics or produces NaN for finite surfaces.

use crate::model::entry::{PainEntry, MAX_LEVEL};
use crate::stats::average::entries_on_day;
use chrono::{DateTime, TimeZone, Timelike};
use std::cmp::Ordering;

/// Milliseconds in a nominal calendar day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Logical `(x, y)` chart sample.
pub type Sample = (f64, f64);

/// Screen-space position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f32,
    pub y: f32,
}

impl ChartPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Straight line between two consecutive projected samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSegment {
    pub start: ChartPoint,
    pub end: ChartPoint,
}

/// Drawable output of a projection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartGeometry {
    pub segments: Vec<ChartSegment>,
    pub markers: Vec<ChartPoint>,
}

impl ChartGeometry {
    /// Builds the polyline through `points` in the given order.
    pub fn from_points(points: Vec<ChartPoint>) -> Self {
        let segments = points
            .windows(2)
            .map(|pair| ChartSegment {
                start: pair[0],
                end: pair[1],
            })
            .collect();
        Self {
            segments,
            markers: points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Projects samples with data-relative scaling on both axes.
///
/// Samples are stable-sorted by x. Non-finite samples are dropped. When all
/// samples share one x (or one y), that axis is centered on the surface.
pub fn project_linear(samples: &[Sample], width: f32, height: f32) -> ChartGeometry {
    let mut sorted: Vec<Sample> = samples
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    if sorted.is_empty() {
        return ChartGeometry::default();
    }
    // `sort_by` is stable; numeric equality (so `-0.0 == 0.0`) keeps input order.
    sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let x_axis = AxisRange::from_values(sorted.iter().map(|(x, _)| *x));
    let y_axis = AxisRange::from_values(sorted.iter().map(|(_, y)| *y));

    let points = sorted
        .iter()
        .map(|&(x, y)| {
            ChartPoint::new(
                (x_axis.fraction(x) * f64::from(width)) as f32,
                (f64::from(height) - y_axis.fraction(y) * f64::from(height)) as f32,
            )
        })
        .collect();
    ChartGeometry::from_points(points)
}

/// Projects the entries recorded on `day`'s calendar date by time of day.
///
/// x is the fraction of the day elapsed since local midnight; y uses the
/// fixed `0..=10` rating scale rather than the data range.
pub fn project_daily<Tz: TimeZone>(
    entries: &[PainEntry],
    day: &DateTime<Tz>,
    width: f32,
    height: f32,
) -> ChartGeometry {
    let tz = day.timezone();
    let mut timed: Vec<(u32, f64)> = entries_on_day(entries, day)
        .filter_map(|entry| {
            let at = entry.datetime_in(&tz)?;
            Some((millis_since_midnight(&at), entry.level))
        })
        .collect();
    timed.sort_by_key(|(millis, _)| *millis);

    let points = timed
        .into_iter()
        .map(|(millis, level)| {
            ChartPoint::new(
                (f64::from(millis) / MILLIS_PER_DAY * f64::from(width)) as f32,
                (f64::from(height) - level / MAX_LEVEL * f64::from(height)) as f32,
            )
        })
        .collect();
    ChartGeometry::from_points(points)
}

/// Converts entries into `(timestamp_ms, level)` samples for [`project_linear`].
pub fn samples_from_entries(entries: &[PainEntry]) -> Vec<Sample> {
    entries
        .iter()
        .map(|entry| (entry.timestamp_ms as f64, entry.level))
        .collect()
}

fn millis_since_midnight<Tz: TimeZone>(at: &DateTime<Tz>) -> u32 {
    // Leap-second nanos (>= 1e9) are folded into the last second.
    let millis = at.nanosecond().min(999_999_999) / 1_000_000;
    at.num_seconds_from_midnight() * 1_000 + millis
}

#[derive(Debug, Clone, Copy)]
struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    fn from_values(values: impl Iterator<Item = f64>) -> Self {
        values.fold(
            Self {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |range, v| Self {
                min: range.min.min(v),
                max: range.max.max(v),
            },
        )
    }

    /// Position of `v` within the range as a `0..=1` fraction.
    ///
    /// A span that overflows `f64` is measured in halves.
    fn fraction(&self, v: f64) -> f64 {
        let span = self.max - self.min;
        if span.is_finite() {
            if span > 0.0 {
                return (v - self.min) / span;
            }
            return 0.5;
        }
        let half_span = self.max / 2.0 - self.min / 2.0;
        (v / 2.0 - self.min / 2.0) / half_span
    }
}
