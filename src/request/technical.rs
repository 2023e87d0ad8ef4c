//! Technical indicator request parameters

/// Simple moving average request builder
pub mod sma;
/// MACD request builder
pub mod macd;
/// Relative strength index request builder
pub mod rsi;
/// Bollinger bands request builder
pub mod bbands;

pub use bbands::Bbands;
pub use macd::Macd;
pub use rsi::Rsi;
pub use sma::Sma;
