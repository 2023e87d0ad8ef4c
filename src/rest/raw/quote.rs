//! Quote endpoint implementations returning raw JSON strings

use crate::client::MarketData;
use crate::processor::Raw;
use crate::request::Request;
use crate::request::quote::GlobalQuote;

/// Get the latest global quote for a stock
///
/// Returns a request builder that will return results as raw JSON string.
pub fn global_quote<'a, Client: Request>(
    client: &'a MarketData<Client>,
    symbol: impl Into<String>,
) -> GlobalQuote<'a, Client, Raw> {
    GlobalQuote::new(client, symbol)
}
