use serde::{Deserialize, Serialize};

use crate::client::MarketData;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::{Processor, Raw};
use crate::request::Request;
use crate::request::common::{DataType, Interval, SeriesType};

/// Relative strength index request builder.
///
/// Unlike [`Sma`](crate::request::technical::Sma), the interval, lookback
/// period, and series type carry no service defaults and must be supplied
/// up front.
pub struct Rsi<'a, Client: Request, P: Processor = Raw> {
    client: &'a MarketData<Client>,
    /// Stock symbol
    pub symbol: String,
    /// Sampling interval
    pub interval: Interval,
    /// Number of data points per RSI value
    pub time_period: u32,
    /// Price series type
    pub series_type: SeriesType,
    /// Response encoding (default: json)
    pub datatype: DataType,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> Rsi<'a, C, Raw> {
    /// Create new RSI request (returns raw JSON by default)
    pub fn new(
        client: &'a MarketData<C>,
        symbol: impl Into<String>,
        interval: Interval,
        time_period: u32,
        series_type: SeriesType,
    ) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            interval,
            time_period,
            series_type,
            datatype: DataType::Json,
            processor: Raw,
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> Rsi<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// Set the response encoding
    pub fn datatype(mut self, datatype: DataType) -> Self {
        self.datatype = datatype;
        self
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for Rsi<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let api_key = self
            .client
            .api_key()
            .ok_or(crate::error::Error::MissingApiKey("ALPHAVANTAGE_API_KEY"))?;

        let params = vec![
            format!("function=RSI"),
            format!("symbol={}", self.symbol),
            format!("interval={}", self.interval),
            format!("time_period={}", self.time_period),
            format!("series_type={}", self.series_type),
            format!("datatype={}", self.datatype),
            format!("apikey={}", api_key),
        ];

        let url = format!("https://www.alphavantage.co/query?{}", params.join("&"));

        let response = self.client.client().get(&url).await;

        self.processor.process(response)
    }
}

/// JSON-serializable parameters (no client reference)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Stock symbol
    pub symbol: String,
    /// Sampling interval
    pub interval: Interval,
    /// Lookback period
    pub time_period: u32,
    /// Price series type
    pub series_type: SeriesType,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Response encoding
    pub datatype: Option<DataType>,
}
