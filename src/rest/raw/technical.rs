//! Technical indicator endpoint implementations returning raw JSON strings

use crate::client::MarketData;
use crate::processor::Raw;
use crate::request::Request;
use crate::request::common::{Interval, SeriesType};
use crate::request::technical::{Bbands, Macd, Rsi, Sma};

/// Get the simple moving average for a stock
///
/// Returns a request builder that will return results as raw JSON string.
///
/// # Example
/// ```no_run
/// # use finadvisor::MarketData;
/// # async fn example() {
/// # let client = MarketData::default().with_key("api-key");
/// let json = finadvisor::rest::technical::sma(&client, "AAPL")
///     .time_period(20)
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn sma<'a, Client: Request>(
    client: &'a MarketData<Client>,
    symbol: impl Into<String>,
) -> Sma<'a, Client, Raw> {
    Sma::new(client, symbol)
}

/// Get the moving average convergence/divergence for a stock
///
/// Returns a request builder that will return results as raw JSON string.
pub fn macd<'a, Client: Request>(
    client: &'a MarketData<Client>,
    symbol: impl Into<String>,
) -> Macd<'a, Client, Raw> {
    Macd::new(client, symbol)
}

/// Get the relative strength index for a stock
///
/// Returns a request builder that will return results as raw JSON string.
pub fn rsi<'a, Client: Request>(
    client: &'a MarketData<Client>,
    symbol: impl Into<String>,
    interval: Interval,
    time_period: u32,
    series_type: SeriesType,
) -> Rsi<'a, Client, Raw> {
    Rsi::new(client, symbol, interval, time_period, series_type)
}

/// Get the Bollinger bands for a stock
///
/// Returns a request builder that will return results as raw JSON string.
pub fn bbands<'a, Client: Request>(
    client: &'a MarketData<Client>,
    symbol: impl Into<String>,
    interval: Interval,
    time_period: u32,
    series_type: SeriesType,
) -> Bbands<'a, Client, Raw> {
    Bbands::new(client, symbol, interval, time_period, series_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> MarketData<reqwest::Client> {
        MarketData::from_env().expect("Failed to create client. Make sure ALPHAVANTAGE_API_KEY is set in .env file")
    }

    #[tokio::test]
    #[ignore] // Run with: cargo test -- --ignored --test-threads=1
    async fn test_sma() {
        let client = setup();
        let result = sma(&client, "AAPL").get().await;
        assert!(result.is_ok(), "Failed to fetch SMA data: {result:?}");
    }

    #[tokio::test]
    #[ignore]
    async fn test_rsi() {
        let client = setup();
        let result = rsi(&client, "AAPL", Interval::Daily, 14, SeriesType::Close)
            .get()
            .await;
        assert!(result.is_ok(), "Failed to fetch RSI data: {result:?}");
    }

    #[tokio::test]
    #[ignore]
    async fn test_bbands() {
        let client = setup();
        let result = bbands(&client, "AAPL", Interval::Daily, 20, SeriesType::Close)
            .get()
            .await;
        assert!(result.is_ok(), "Failed to fetch BBANDS data: {result:?}");
    }
}
