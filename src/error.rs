//! Error and result types

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the client, the dispatcher, and the advisor loop.
///
/// Every error propagates to the immediate caller undecorated. There are no
/// retries and no partial-result suppression anywhere in the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required API key was not found at startup
    #[error("missing API key: {0} is not set")]
    MissingApiKey(&'static str),

    /// The remote service answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api {
        /// Request id, if the service reported one
        request_id: Option<String>,
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Transport-level failure from the HTTP client
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The expected key was absent from the remote JSON response.
    ///
    /// Alpha Vantage reports invalid symbols and rate limits as an error
    /// body instead of a non-success status, so this is also what such
    /// replies surface as.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// A field was present but could not be parsed as a number
    #[error("malformed value for {field}: {value:?}")]
    Malformed {
        /// JSON key that failed to parse
        field: String,
        /// Raw value as returned by the service
        value: String,
    },

    /// Total shareholder equity was zero when computing debt-to-equity
    #[error("total shareholder equity is zero, debt-to-equity is undefined")]
    ZeroEquity,

    /// The dispatcher was asked to run a name with no registered operation
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The model requested a tool with arguments that do not decode
    #[error("invalid tool arguments: {0}")]
    BadArguments(String),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Anything else
    #[error("{0}")]
    Custom(String),
}
