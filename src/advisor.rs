//! Single-shot bridge between a natural-language question and the
//! operation registry
//!
//! The question is sent to the chat completion service together with every
//! registered operation schema. If the model answers with a tool request,
//! the named operation runs once and its result is returned; otherwise the
//! plain-text reply comes back as-is. There is no second round-trip with
//! the tool result.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::client::MarketData;
use crate::command::{Command, Dispatcher};
use crate::error::{Error, Result};
use crate::ops;
use crate::request::Request;
use crate::response::Response;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// One message in the chat transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role (`user`, `system`, ...)
    pub role: String,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Build a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A structured tool request returned by the model
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionCall {
    /// Requested operation name
    pub name: String,
    /// JSON-encoded argument object, as a string
    pub arguments: String,
}

/// The assistant message of the first completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    /// Plain-text reply, when the model did not request a tool
    pub content: Option<String>,
    /// Tool request, when the model selected an operation
    pub function_call: Option<FunctionCall>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

/// Client for the OpenAI chat completion service.
///
/// Shares the [`Request`] transport abstraction with [`MarketData`], so
/// tests can drive it with a mock backend.
#[derive(Debug, Clone)]
pub struct ChatClient<Client: Request = reqwest::Client> {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl<Client: Request> ChatClient<Client> {
    /// Create a new chat client, loading the API key from the
    /// `OPENAI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] if the variable is not set.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| Error::MissingApiKey("OPENAI_API_KEY"))?;

        Ok(Self {
            client: Client::new(),
            api_key: Some(api_key),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Sets the HTTP client for this instance.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the API key for this instance.
    pub fn with_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the model name for this instance.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Send one completion request carrying the message list and the
    /// available operation schemas, and return the assistant message.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        functions: &[Value],
    ) -> Result<AssistantMessage> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(Error::MissingApiKey("OPENAI_API_KEY"))?;

        let body = json!({
            "model": self.model,
            "messages": messages,
            "functions": functions,
            "function_call": "auto",
        });

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL, &body.to_string(), Some(api_key))
            .await?;
        if response.status() != 200 {
            return Err(Error::Api {
                request_id: response.request_id().to_owned(),
                status: response.status(),
                message: response.body().to_owned(),
            });
        }

        let completion: ChatCompletion = serde_json::from_str(response.body())?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| Error::Custom("completion carried no choices".to_string()))
    }
}

impl<Client: Request> Default for ChatClient<Client> {
    /// Create a default chat client with no API key set.
    ///
    /// You must call [`with_key`](Self::with_key) before making requests.
    fn default() -> Self {
        Self {
            client: Client::new(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// How a model-selected operation is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Route the tool request through the [`Dispatcher`] as a one-command
    /// batch; the result comes back keyed by operation name
    Advisory,
    /// Call the operation directly and return its bare result
    Exploratory,
}

/// Outcome of one advisor round
#[derive(Debug, Clone)]
pub enum Reply {
    /// The model answered in plain text without requesting a tool
    Text(String),
    /// The model requested an operation; this is its result
    Data(Value),
}

/// Ask a natural-language question and run at most one model-selected
/// operation.
pub async fn run<C: Request, M: Request>(
    market: &MarketData<C>,
    chat: &ChatClient<M>,
    question: &str,
    mode: Mode,
) -> Result<Reply> {
    let messages = [ChatMessage::user(question)];
    let functions = ops::schemas();
    let reply = chat.complete(&messages, &functions).await?;

    let Some(call) = reply.function_call else {
        return Ok(Reply::Text(reply.content.unwrap_or_default()));
    };

    debug!(operation = %call.name, "model requested an operation");
    let args: Value = serde_json::from_str(&call.arguments)
        .map_err(|e| Error::BadArguments(format!("{}: {e}", call.name)))?;

    match mode {
        Mode::Advisory => {
            let batch = [Command::new(call.name, args)];
            let results = Dispatcher.execute(market, &batch).await?;
            Ok(Reply::Data(Value::Object(results)))
        }
        Mode::Exploratory => {
            let outcome = ops::call(market, &call.name, &args).await?;
            Ok(Reply::Data(outcome.into()))
        }
    }
}
