//! Chart geometry for the diary screens.
//!
//! The projector only computes positions; drawing belongs to the UI.

pub mod projection;

pub use projection::{
    project_daily, project_linear, samples_from_entries, ChartGeometry, ChartPoint, ChartSegment,
    Sample,
};
