use serde::{Deserialize, Serialize};

use crate::client::MarketData;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::{Processor, Raw};
use crate::request::Request;
use crate::request::common::{Interval, SeriesType};

/// Simple moving average request builder
pub struct Sma<'a, Client: Request, P: Processor = Raw> {
    client: &'a MarketData<Client>,
    /// Stock symbol
    pub symbol: String,
    /// Sampling interval (default: daily)
    pub interval: Interval,
    /// Number of data points per SMA value (default: 60)
    pub time_period: u32,
    /// Price series to average (default: close)
    pub series_type: SeriesType,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> Sma<'a, C, Raw> {
    /// Create new SMA request with the service defaults (returns raw JSON)
    pub fn new(client: &'a MarketData<C>, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            interval: Interval::Daily,
            time_period: 60,
            series_type: SeriesType::Close,
            processor: Raw,
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> Sma<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// Set the sampling interval
    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Set the lookback period
    pub fn time_period(mut self, time_period: u32) -> Self {
        self.time_period = time_period;
        self
    }

    /// Set the price series type
    pub fn series_type(mut self, series_type: SeriesType) -> Self {
        self.series_type = series_type;
        self
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for Sma<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        // Build URL
        let api_key = self
            .client
            .api_key()
            .ok_or(crate::error::Error::MissingApiKey("ALPHAVANTAGE_API_KEY"))?;

        let params = vec![
            format!("function=SMA"),
            format!("symbol={}", self.symbol),
            format!("interval={}", self.interval),
            format!("time_period={}", self.time_period),
            format!("series_type={}", self.series_type),
            format!("apikey={}", api_key),
        ];

        let url = format!("https://www.alphavantage.co/query?{}", params.join("&"));

        // Make request using Request trait
        let response = self.client.client().get(&url).await;

        // Process using associated Processor type
        self.processor.process(response)
    }
}

/// JSON-serializable parameters (no client reference)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Stock symbol
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Sampling interval
    pub interval: Option<Interval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Lookback period
    pub time_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Price series type
    pub series_type: Option<SeriesType>,
}
