//! Offline tests for the model-directed orchestration loop

mod common;

use common::MockHttp;
use finadvisor::Error;
use finadvisor::advisor::{self, ChatClient, Mode, Reply};
use finadvisor::client::MarketData;
use serde_json::{Value, json};

fn completion_with_call(name: &str, arguments: &str) -> String {
    json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": null,
                "function_call": {"name": name, "arguments": arguments},
            }
        }]
    })
    .to_string()
}

#[tokio::test]
async fn tool_request_runs_through_the_dispatcher_in_advisory_mode() {
    let market = MarketData::default()
        .with_client(MockHttp::new().route(
            "function=GLOBAL_QUOTE",
            json!({"Global Quote": {"05. price": "182.5"}}).to_string(),
        ))
        .with_key("market-key");
    let chat = ChatClient::default()
        .with_client(
            MockHttp::new()
                .on_post(completion_with_call("get_current_price", r#"{"symbol": "IBM"}"#)),
        )
        .with_key("model-key");

    let reply = advisor::run(&market, &chat, "What does IBM trade at?", Mode::Advisory)
        .await
        .unwrap();

    let Reply::Data(Value::Object(results)) = reply else {
        panic!("expected aggregated data");
    };
    assert_eq!(results["get_current_price"], json!(182.5));
}

#[tokio::test]
async fn exploratory_mode_returns_the_bare_operation_result() {
    let market = MarketData::default()
        .with_client(MockHttp::new().route(
            "function=OVERVIEW",
            json!({"PERatio": "31.4"}).to_string(),
        ))
        .with_key("market-key");
    let chat = ChatClient::default()
        .with_client(
            MockHttp::new().on_post(completion_with_call("get_pe_ratio", r#"{"symbol": "IBM"}"#)),
        )
        .with_key("model-key");

    let reply = advisor::run(&market, &chat, "What is IBM's P/E?", Mode::Exploratory)
        .await
        .unwrap();

    let Reply::Data(value) = reply else {
        panic!("expected data");
    };
    assert_eq!(value, json!(31.4));
}

#[tokio::test]
async fn plain_text_reply_passes_through_unchanged() {
    let market = MarketData::<MockHttp>::default().with_key("market-key");
    let chat = ChatClient::default()
        .with_client(MockHttp::new().on_post(
            json!({
                "choices": [{
                    "message": {
                        "role": "assistant",
                        "content": "I need a ticker symbol to look anything up.",
                    }
                }]
            })
            .to_string(),
        ))
        .with_key("model-key");

    let reply = advisor::run(&market, &chat, "hello", Mode::Advisory).await.unwrap();

    assert!(matches!(
        reply,
        Reply::Text(text) if text == "I need a ticker symbol to look anything up."
    ));
}

#[tokio::test]
async fn undecodable_tool_arguments_are_rejected() {
    let market = MarketData::<MockHttp>::default().with_key("market-key");
    let chat = ChatClient::default()
        .with_client(
            MockHttp::new().on_post(completion_with_call("get_pe_ratio", "not json at all")),
        )
        .with_key("model-key");

    let err = advisor::run(&market, &chat, "What is IBM's P/E?", Mode::Advisory)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::BadArguments(_)));
}

#[tokio::test]
async fn model_requesting_an_unknown_tool_fails_cleanly() {
    let market = MarketData::<MockHttp>::default().with_key("market-key");
    let chat = ChatClient::default()
        .with_client(
            MockHttp::new().on_post(completion_with_call("get_dividend_yield", r#"{"symbol": "IBM"}"#)),
        )
        .with_key("model-key");

    let err = advisor::run(&market, &chat, "dividend yield for IBM", Mode::Advisory)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnknownOperation(name) if name == "get_dividend_yield"));
}
