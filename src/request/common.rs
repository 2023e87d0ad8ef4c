//! Common parameter types used across multiple endpoints
//!
//! Every closed-set parameter is a tagged enum with an explicit wire-format
//! serialization, matching exactly what the remote service expects.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sampling interval for indicator calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    /// Daily data points
    Daily,
    /// Weekly data points
    Weekly,
    /// Monthly data points
    Monthly,
}

impl Interval {
    /// All wire values in declaration order
    pub const WIRE: &'static [&'static str] = &["daily", "weekly", "monthly"];
}

impl FromStr for Interval {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Interval::Daily),
            "weekly" => Ok(Interval::Weekly),
            "monthly" => Ok(Interval::Monthly),
            _ => Err(crate::error::Error::Custom(format!("Invalid interval: {s}"))),
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interval::Daily => write!(f, "daily"),
            Interval::Weekly => write!(f, "weekly"),
            Interval::Monthly => write!(f, "monthly"),
        }
    }
}

/// Price series the indicator is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    /// Closing price
    Close,
    /// Opening price
    Open,
    /// Daily high
    High,
    /// Daily low
    Low,
}

impl SeriesType {
    /// All wire values in declaration order
    pub const WIRE: &'static [&'static str] = &["close", "open", "high", "low"];
}

impl FromStr for SeriesType {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "close" => Ok(SeriesType::Close),
            "open" => Ok(SeriesType::Open),
            "high" => Ok(SeriesType::High),
            "low" => Ok(SeriesType::Low),
            _ => Err(crate::error::Error::Custom(format!("Invalid series type: {s}"))),
        }
    }
}

impl std::fmt::Display for SeriesType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesType::Close => write!(f, "close"),
            SeriesType::Open => write!(f, "open"),
            SeriesType::High => write!(f, "high"),
            SeriesType::Low => write!(f, "low"),
        }
    }
}

/// Moving average variant for the BBANDS `matype` parameter.
///
/// The wire format is the numeric index, not the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovingAverageType {
    /// Simple Moving Average
    #[serde(rename = "0")]
    Sma = 0,
    /// Exponential Moving Average
    #[serde(rename = "1")]
    Ema = 1,
    /// Weighted Moving Average
    #[serde(rename = "2")]
    Wma = 2,
    /// Double Exponential Moving Average
    #[serde(rename = "3")]
    Dema = 3,
    /// Triple Exponential Moving Average
    #[serde(rename = "4")]
    Tema = 4,
    /// Triangular Moving Average
    #[serde(rename = "5")]
    Trima = 5,
    /// T3 Moving Average
    #[serde(rename = "6")]
    T3 = 6,
    /// Kaufman Adaptive Moving Average
    #[serde(rename = "7")]
    Kama = 7,
    /// MESA Adaptive Moving Average
    #[serde(rename = "8")]
    Mama = 8,
}

impl MovingAverageType {
    /// All wire values in declaration order
    pub const WIRE: &'static [&'static str] = &["0", "1", "2", "3", "4", "5", "6", "7", "8"];

    /// Numeric wire value expected by the remote service
    pub fn wire(self) -> u8 {
        self as u8
    }
}

impl FromStr for MovingAverageType {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" | "sma" | "SMA" => Ok(MovingAverageType::Sma),
            "1" | "ema" | "EMA" => Ok(MovingAverageType::Ema),
            "2" | "wma" | "WMA" => Ok(MovingAverageType::Wma),
            "3" | "dema" | "DEMA" => Ok(MovingAverageType::Dema),
            "4" | "tema" | "TEMA" => Ok(MovingAverageType::Tema),
            "5" | "trima" | "TRIMA" => Ok(MovingAverageType::Trima),
            "6" | "t3" | "T3" => Ok(MovingAverageType::T3),
            "7" | "kama" | "KAMA" => Ok(MovingAverageType::Kama),
            "8" | "mama" | "MAMA" => Ok(MovingAverageType::Mama),
            _ => Err(crate::error::Error::Custom(format!(
                "Invalid moving average type: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for MovingAverageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire())
    }
}

/// Response encoding requested from the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// JSON response body
    Json,
    /// CSV response body
    Csv,
}

impl DataType {
    /// All wire values in declaration order
    pub const WIRE: &'static [&'static str] = &["json", "csv"];
}

impl FromStr for DataType {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(DataType::Json),
            "csv" => Ok(DataType::Csv),
            _ => Err(crate::error::Error::Custom(format!("Invalid data type: {s}"))),
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Json => write!(f, "json"),
            DataType::Csv => write!(f, "csv"),
        }
    }
}
