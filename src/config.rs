//! Startup configuration
//!
//! Both secrets are loaded once at process start and treated as read-only
//! for the process lifetime. A missing secret is a fatal configuration
//! error, not something to recover from at runtime.

use crate::error::{Error, Result};

/// Environment variable holding the Alpha Vantage API key
pub const ALPHAVANTAGE_API_KEY: &str = "ALPHAVANTAGE_API_KEY";

/// Environment variable holding the OpenAI API key
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// The two secrets the crate needs to talk to its remote services
#[derive(Debug, Clone)]
pub struct Config {
    /// Key for the market data service
    pub alphavantage_api_key: String,
    /// Key for the chat completion service
    pub openai_api_key: String,
}

impl Config {
    /// Load both API keys from the environment (or a `.env` file).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] naming the first absent variable.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let alphavantage_api_key = std::env::var(ALPHAVANTAGE_API_KEY)
            .map_err(|_| Error::MissingApiKey(ALPHAVANTAGE_API_KEY))?;
        let openai_api_key =
            std::env::var(OPENAI_API_KEY).map_err(|_| Error::MissingApiKey(OPENAI_API_KEY))?;

        Ok(Self {
            alphavantage_api_key,
            openai_api_key,
        })
    }

    /// Build a market data client carrying the configured key
    pub fn market_client(&self) -> crate::MarketData {
        crate::MarketData::default().with_key(self.alphavantage_api_key.clone())
    }

    /// Build a chat client carrying the configured key
    pub fn chat_client(&self) -> crate::ChatClient {
        crate::ChatClient::default().with_key(self.openai_api_key.clone())
    }
}
