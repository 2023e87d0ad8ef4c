//! Command batching and sequential dispatch

use serde_json::{Map, Value, json};
use tracing::debug;

use crate::client::MarketData;
use crate::error::{Error, Result};
use crate::ops;
use crate::request::Request;

/// A request to run one registered operation with concrete arguments.
///
/// The operation name is not checked against the registry at construction
/// time; an unknown name fails when the command is executed.
#[derive(Debug, Clone)]
pub struct Command {
    /// Registered operation name
    pub operation: String,
    /// JSON-encoded argument object
    pub args: Value,
}

impl Command {
    /// Create a command with an explicit argument object
    pub fn new(operation: impl Into<String>, args: Value) -> Self {
        Self {
            operation: operation.into(),
            args,
        }
    }

    /// Create a command that only takes a ticker symbol
    pub fn for_symbol(operation: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::new(operation, json!({ "symbol": symbol.into() }))
    }
}

/// Sequential executor for ordered command batches
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher;

impl Dispatcher {
    /// Execute a batch of commands strictly in order and aggregate the
    /// results under each operation's name.
    ///
    /// Every operation name is resolved against the registry before any
    /// network traffic happens, so a batch containing an unknown name
    /// fails without issuing a single request. Execution is one command
    /// at a time; the first failure aborts the batch and propagates,
    /// discarding any partial results.
    ///
    /// Running the same operation name twice in one batch is allowed;
    /// the later result overwrites the earlier one (see the crate docs
    /// on aggregation keys).
    pub async fn execute<C: Request>(
        &self,
        client: &MarketData<C>,
        batch: &[Command],
    ) -> Result<Map<String, Value>> {
        for command in batch {
            if ops::find(&command.operation).is_none() {
                return Err(Error::UnknownOperation(command.operation.clone()));
            }
        }

        let mut results = Map::new();
        for command in batch {
            debug!(operation = %command.operation, "dispatching command");
            let outcome = ops::call(client, &command.operation, &command.args).await?;
            results.insert(command.operation.clone(), outcome.into());
        }
        Ok(results)
    }
}
