//! Fundamental data endpoint implementations returning raw JSON strings

use crate::client::MarketData;
use crate::processor::Raw;
use crate::request::Request;
use crate::request::fundamentals::{BalanceSheet, CompanyOverview};

/// Get company overview for a stock
///
/// Returns a request builder that will return results as raw JSON string.
///
/// # Example
/// ```no_run
/// # use finadvisor::MarketData;
/// # async fn example() {
/// # let client = MarketData::default().with_key("api-key");
/// let json = finadvisor::rest::fundamentals::company_overview(&client, "AAPL")
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn company_overview<'a, Client: Request>(
    client: &'a MarketData<Client>,
    symbol: impl Into<String>,
) -> CompanyOverview<'a, Client, Raw> {
    CompanyOverview::new(client, symbol)
}

/// Get balance sheet for a stock
pub fn balance_sheet<'a, Client: Request>(
    client: &'a MarketData<Client>,
    symbol: impl Into<String>,
) -> BalanceSheet<'a, Client, Raw> {
    BalanceSheet::new(client, symbol)
}
