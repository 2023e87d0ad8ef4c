use serde::{Deserialize, Serialize};

use crate::client::MarketData;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::{Processor, Raw};
use crate::request::Request;

/// Company overview request builder
pub struct CompanyOverview<'a, Client: Request, P: Processor = Raw> {
    client: &'a MarketData<Client>,
    /// Stock symbol
    pub symbol: String,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> CompanyOverview<'a, C, Raw> {
    /// Create new company overview request (returns raw JSON by default)
    pub fn new(client: &'a MarketData<C>, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            processor: Raw,
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> CompanyOverview<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for CompanyOverview<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let api_key = self
            .client
            .api_key()
            .ok_or(crate::error::Error::MissingApiKey("ALPHAVANTAGE_API_KEY"))?;

        let params = vec![
            format!("function=OVERVIEW"),
            format!("symbol={}", self.symbol),
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
}
