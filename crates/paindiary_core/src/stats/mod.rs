//! Time-windowed aggregation over pain entries.

pub mod average;
