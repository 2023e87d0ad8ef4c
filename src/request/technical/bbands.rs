use serde::{Deserialize, Serialize};

use crate::client::MarketData;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::{Processor, Raw};
use crate::request::Request;
use crate::request::common::{DataType, Interval, MovingAverageType, SeriesType};

/// Bollinger bands request builder
pub struct Bbands<'a, Client: Request, P: Processor = Raw> {
    client: &'a MarketData<Client>,
    /// Stock symbol
    pub symbol: String,
    /// Sampling interval
    pub interval: Interval,
    /// Number of data points per BBANDS value
    pub time_period: u32,
    /// Price series type
    pub series_type: SeriesType,
    /// Standard deviation multiplier of the upper band (default: 2)
    pub nbdevup: u32,
    /// Standard deviation multiplier of the lower band (default: 2)
    pub nbdevdn: u32,
    /// Moving average variant (default: SMA)
    pub matype: MovingAverageType,
    /// Response encoding (default: json)
    pub datatype: DataType,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> Bbands<'a, C, Raw> {
    /// Create new BBANDS request (returns raw JSON by default)
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
            nbdevup: 2,
            nbdevdn: 2,
            matype: MovingAverageType::Sma,
            datatype: DataType::Json,
            processor: Raw,
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> Bbands<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// Set the upper band standard deviation multiplier
    pub fn nbdevup(mut self, nbdevup: u32) -> Self {
        self.nbdevup = nbdevup;
        self
    }

    /// Set the lower band standard deviation multiplier
    pub fn nbdevdn(mut self, nbdevdn: u32) -> Self {
        self.nbdevdn = nbdevdn;
        self
    }

    /// Set the moving average variant
    pub fn matype(mut self, matype: MovingAverageType) -> Self {
        self.matype = matype;
        self
    }

    /// Set the response encoding
    pub fn datatype(mut self, datatype: DataType) -> Self {
        self.datatype = datatype;
        self
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for Bbands<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let api_key = self
            .client
            .api_key()
            .ok_or(crate::error::Error::MissingApiKey("ALPHAVANTAGE_API_KEY"))?;

        let params = vec![
            format!("function=BBANDS"),
            format!("symbol={}", self.symbol),
            format!("interval={}", self.interval),
            format!("time_period={}", self.time_period),
            format!("series_type={}", self.series_type),
            format!("nbdevup={}", self.nbdevup),
            format!("nbdevdn={}", self.nbdevdn),
            format!("matype={}", self.matype),
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
    /// Upper band multiplier
    pub nbdevup: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Lower band multiplier
    pub nbdevdn: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Moving average variant
    pub matype: Option<MovingAverageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Response format
    pub datatype: Option<DataType>,
}
