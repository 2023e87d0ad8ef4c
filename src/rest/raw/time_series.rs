//! Time series endpoint implementations returning raw JSON strings

use crate::client::MarketData;
use crate::processor::Raw;
use crate::request::Request;
use crate::request::time_series::TimeSeriesWeekly;

/// Get weekly time series for a stock
///
/// Returns a request builder that will return results as raw JSON string.
///
/// # Example
/// ```no_run
/// # use finadvisor::MarketData;
/// # async fn example() {
/// # let client = MarketData::default().with_key("api-key");
/// let json = finadvisor::rest::time_series::weekly(&client, "AAPL")
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn weekly<'a, Client: Request>(
    client: &'a MarketData<Client>,
    symbol: impl Into<String>,
) -> TimeSeriesWeekly<'a, Client, Raw> {
    TimeSeriesWeekly::new(client, symbol)
}
