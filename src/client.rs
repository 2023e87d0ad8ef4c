//! Main market data API client

use crate::request::Request;

/// Client for the Alpha Vantage market data API.
///
/// Generic over the HTTP client so tests can substitute a mock transport;
/// defaults to `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct MarketData<Client: Request = reqwest::Client> {
    client: Client,
    api_key: Option<String>,
}

impl<Client: Request> MarketData<Client> {
    /// Create a new market data client.
    ///
    /// Loads the API key from the `ALPHAVANTAGE_API_KEY` environment variable
    /// (a `.env` file is honored via dotenvy).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingApiKey`] if the variable is not set.
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok(); // Try to load .env file, ignore errors

        let api_key = std::env::var("ALPHAVANTAGE_API_KEY")
            .map_err(|_| crate::Error::MissingApiKey("ALPHAVANTAGE_API_KEY"))?;

        Ok(Self {
            client: Client::new(),
            api_key: Some(api_key),
        })
    }

    /// Sets the HTTP client for this instance.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the API key for this instance.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use finadvisor::MarketData;
    ///
    /// let client = MarketData::default().with_key("my_api_key");
    /// ```
    pub fn with_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Get the API key for this instance.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Get a reference to the underlying HTTP client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl<Client: Request> Default for MarketData<Client> {
    /// Create a default client with no API key set.
    ///
    /// You must call [`with_key`](Self::with_key) before making requests.
    fn default() -> Self {
        Self {
            client: Client::new(),
            api_key: None,
        }
    }
}
