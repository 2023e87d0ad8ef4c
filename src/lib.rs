//! Market data operations with an OpenAI function-calling front end
//!
//! Fetches technical indicators and company fundamentals from Alpha
//! Vantage and exposes them as named operations that can be invoked
//! directly, batched through the [`command::Dispatcher`], or selected by
//! a language model from the generated operation schemas.
//!
//! # Quick Start
//!
//! ```no_run
//! use finadvisor::MarketData;
//! use finadvisor::command::{Command, Dispatcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MarketData::default().with_key("your_api_key");
//!     let batch = [
//!         Command::for_symbol("get_pe_ratio", "IBM"),
//!         Command::for_symbol("get_current_price", "IBM"),
//!     ];
//!     let results = Dispatcher.execute(&client, &batch).await?;
//!     println!("{}", serde_json::Value::Object(results));
//!     Ok(())
//! }
//! ```
//!
//! # Endpoint API
//!
//! The raw endpoints mirror the remote service one to one. Each returns a
//! request builder; call `.get()` to execute:
//!
//! ```no_run
//! use finadvisor::MarketData;
//! use finadvisor::rest::technical;
//! use finadvisor::request::common::Interval;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MarketData::default().with_key("your_api_key");
//!
//! // Raw JSON response
//! let json = technical::sma(&client, "AAPL").get().await?;
//!
//! // With options
//! let json = technical::sma(&client, "AAPL")
//!     .interval(Interval::Weekly)
//!     .time_period(20)
//!     .get()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Asking the model
//!
//! [`advisor::run`] sends a question plus every operation schema to the
//! chat completion service and executes the single operation the model
//! selects, if any.
//!
//! # Aggregation keys
//!
//! Batch results are keyed by operation name. Two commands with the same
//! operation name in one batch therefore collapse to one entry holding
//! the later result. This mirrors the behavior the registry was designed
//! around; key by a caller-side label before dispatch if both results are
//! needed.

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod rest;

pub mod advisor;
pub mod command;
pub mod config;
pub mod execute;
pub mod metrics;
pub mod ops;
pub mod processor;

pub use advisor::ChatClient;
pub use config::Config;
pub use error::{Error, Result};
pub use request::Request;
pub use response::Response;

/// The market data client with the default HTTP backend.
pub type MarketData = client::MarketData<reqwest::Client>;

static STATIC_INSTANCE: std::sync::LazyLock<arc_swap::ArcSwap<MarketData>> =
    std::sync::LazyLock::new(|| arc_swap::ArcSwap::from_pointee(MarketData::default()));

/// Initialize a static market data instance.
pub fn initialize(client: MarketData) -> std::sync::Arc<MarketData> {
    STATIC_INSTANCE.swap(std::sync::Arc::from(client))
}

/// Get the static market data instance.
pub fn instance() -> std::sync::Arc<MarketData> {
    STATIC_INSTANCE.load_full()
}
