//! Endpoint implementations returning raw JSON strings

pub mod fundamentals;
pub mod quote;
pub mod technical;
pub mod time_series;
