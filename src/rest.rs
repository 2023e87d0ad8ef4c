//! REST API endpoints for the market data service
pub mod raw;

// Re-export raw module for convenience.
pub use raw::*;
