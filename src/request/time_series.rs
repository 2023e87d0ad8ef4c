//! Time series data request parameters

/// Time series weekly request builder
pub mod weekly;

pub use weekly::TimeSeriesWeekly;
