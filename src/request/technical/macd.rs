use serde::{Deserialize, Serialize};

use crate::client::MarketData;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::{Processor, Raw};
use crate::request::Request;
use crate::request::common::{DataType, Interval, SeriesType};

/// Moving average convergence/divergence request builder
pub struct Macd<'a, Client: Request, P: Processor = Raw> {
    client: &'a MarketData<Client>,
    /// Stock symbol
    pub symbol: String,
    /// Sampling interval (default: daily)
    pub interval: Interval,
    /// Price series type (default: close)
    pub series_type: SeriesType,
    /// Fast EMA period (default: 12)
    pub fastperiod: u32,
    /// Slow EMA period (default: 26)
    pub slowperiod: u32,
    /// Signal EMA period (default: 9)
    pub signalperiod: u32,
    /// Response encoding (default: json)
    pub datatype: DataType,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> Macd<'a, C, Raw> {
    /// Create new MACD request with the service defaults (returns raw JSON)
    pub fn new(client: &'a MarketData<C>, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            interval: Interval::Daily,
            series_type: SeriesType::Close,
            fastperiod: 12,
            slowperiod: 26,
            signalperiod: 9,
            datatype: DataType::Json,
            processor: Raw,
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> Macd<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// Set the sampling interval
    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Set the price series type
    pub fn series_type(mut self, series_type: SeriesType) -> Self {
        self.series_type = series_type;
        self
    }

    /// Set the fast EMA period
    pub fn fastperiod(mut self, fastperiod: u32) -> Self {
        self.fastperiod = fastperiod;
        self
    }

    /// Set the slow EMA period
    pub fn slowperiod(mut self, slowperiod: u32) -> Self {
        self.slowperiod = slowperiod;
        self
    }

    /// Set the signal EMA period
    pub fn signalperiod(mut self, signalperiod: u32) -> Self {
        self.signalperiod = signalperiod;
        self
    }

    /// Set the response encoding
    pub fn datatype(mut self, datatype: DataType) -> Self {
        self.datatype = datatype;
        self
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for Macd<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let api_key = self
            .client
            .api_key()
            .ok_or(crate::error::Error::MissingApiKey("ALPHAVANTAGE_API_KEY"))?;

        let params = vec![
            format!("function=MACD"),
            format!("symbol={}", self.symbol),
            format!("interval={}", self.interval),
            format!("series_type={}", self.series_type),
            format!("fastperiod={}", self.fastperiod),
            format!("slowperiod={}", self.slowperiod),
            format!("signalperiod={}", self.signalperiod),
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
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Sampling interval
    pub interval: Option<Interval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Price series type
    pub series_type: Option<SeriesType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Fast EMA period
    pub fastperiod: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Slow EMA period
    pub slowperiod: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Signal EMA period
    pub signalperiod: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Response format
    pub datatype: Option<DataType>,
}
