//! History aggregation.
//!
//! Turns a fetched history snapshot into the totals, per-indicator counts and
//! chart series shown on the dashboard.

mod summary;


pub use summary::{
    aggregate, IndicatorCount, MlTally, PieSlice, Summary, BLACKLISTED_SLICE, CHART_INDICATORS,
    SAFE_SLICE,
};
