//! Offline tests for the dispatcher and the metric operations
//!
//! All network traffic goes through a canned-response mock transport, so
//! these run without API keys or quota.

mod common;

use common::MockHttp;
use finadvisor::Error;
use finadvisor::client::MarketData;
use finadvisor::command::{Command, Dispatcher};
use finadvisor::ops;
use serde_json::json;

fn overview_body(pe: &str) -> String {
    json!({
        "Symbol": "IBM",
        "PERatio": pe,
        "EPS": "6.5",
        "ReturnOnEquityTTM": "0.31",
        "QuarterlyRevenueGrowthYOY": "0.042",
    })
    .to_string()
}

fn balance_sheet_body(liabilities: &str, equity: &str) -> String {
    json!({
        "symbol": "IBM",
        "annualReports": [
            {
                "fiscalDateEnding": "2023-12-31",
                "totalLiabilities": liabilities,
                "totalShareholderEquity": equity,
            },
            {
                "fiscalDateEnding": "2022-12-31",
                "totalLiabilities": "999999",
                "totalShareholderEquity": "1",
            }
        ]
    })
    .to_string()
}

fn weekly_body() -> String {
    // Most-recent-first, as the service returns it.
    json!({
        "Meta Data": {"2. Symbol": "IBM"},
        "Weekly Time Series": {
            "2024-03-01": {"1. open": "10.0", "2. high": "10.5", "3. low": "9.0", "4. close": "10.2", "5. volume": "100"},
            "2024-02-23": {"1. open": "11.0", "2. high": "12.0", "3. low": "8.5", "4. close": "11.4", "5. volume": "100"},
            "2024-02-16": {"1. open": "9.5", "2. high": "9.8", "3. low": "9.2", "4. close": "9.6", "5. volume": "100"},
        }
    })
    .to_string()
}

fn market(mock: MockHttp) -> MarketData<MockHttp> {
    MarketData::default().with_client(mock).with_key("test-key")
}

#[tokio::test]
async fn unknown_operation_fails_before_any_network_call() {
    let mock = MockHttp::new().route("function=OVERVIEW", overview_body("31.4"));
    let client = market(mock.clone());

    let batch = [
        Command::for_symbol("get_pe_ratio", "IBM"),
        Command::for_symbol("get_sharpe_ratio", "IBM"),
    ];
    let err = Dispatcher.execute(&client, &batch).await.unwrap_err();

    assert!(matches!(err, Error::UnknownOperation(name) if name == "get_sharpe_ratio"));
    assert_eq!(mock.call_count(), 0, "registry miss must not touch the network");
}

#[tokio::test]
async fn batch_aborts_on_first_failure_and_discards_partials() {
    let mock = MockHttp::new()
        .route("function=OVERVIEW", overview_body("31.4"))
        .route("function=BALANCE_SHEET", balance_sheet_body("1000.0", "0.0"))
        .route("function=GLOBAL_QUOTE", json!({"Global Quote": {"05. price": "182.5"}}).to_string());
    let client = market(mock.clone());

    let batch = [
        Command::for_symbol("get_pe_ratio", "IBM"),
        Command::for_symbol("get_debt_to_equity", "IBM"),
        Command::for_symbol("get_current_price", "IBM"),
    ];
    let err = Dispatcher.execute(&client, &batch).await.unwrap_err();

    assert!(matches!(err, Error::ZeroEquity));
    // First two commands each made one request; the third never ran.
    assert_eq!(mock.call_count(), 2);
}

#[tokio::test]
async fn duplicate_operation_names_collapse_to_the_last_result() {
    let mock = MockHttp::new()
        .route("symbol=IBM", overview_body("31.4"))
        .route("symbol=MSFT", overview_body("35.0"));
    let client = market(mock);

    let batch = [
        Command::for_symbol("get_pe_ratio", "IBM"),
        Command::for_symbol("get_pe_ratio", "MSFT"),
    ];
    let results = Dispatcher.execute(&client, &batch).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results["get_pe_ratio"], json!(35.0));
}

#[tokio::test]
async fn batch_results_keep_command_order() {
    let mock = MockHttp::new()
        .route("function=OVERVIEW", overview_body("31.4"))
        .route("function=GLOBAL_QUOTE", json!({"Global Quote": {"05. price": "182.5"}}).to_string());
    let client = market(mock);

    let batch = [
        Command::for_symbol("get_current_price", "IBM"),
        Command::for_symbol("get_pe_ratio", "IBM"),
    ];
    let results = Dispatcher.execute(&client, &batch).await.unwrap();

    let keys: Vec<&String> = results.keys().collect();
    assert_eq!(keys, ["get_current_price", "get_pe_ratio"]);
    assert_eq!(results["get_current_price"], json!(182.5));
    assert_eq!(results["get_pe_ratio"], json!(31.4));
}

#[tokio::test]
async fn debt_to_equity_divides_latest_annual_report() {
    let mock = MockHttp::new().route("function=BALANCE_SHEET", balance_sheet_body("1000.0", "500.0"));
    let client = market(mock.clone());

    let outcome = ops::call(&client, "get_debt_to_equity", &json!({"symbol": "IBM"}))
        .await
        .unwrap();
    assert!(matches!(outcome, ops::Outcome::Scalar(ratio) if ratio == 2.0));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn fifty_two_week_extremes_scan_the_weekly_series() {
    let mock = MockHttp::new().route("function=TIME_SERIES_WEEKLY", weekly_body());
    let client = market(mock);

    let high = ops::call(&client, "get_52_week_high", &json!({"symbol": "IBM"}))
        .await
        .unwrap();
    assert!(matches!(high, ops::Outcome::Scalar(v) if v == 12.0));

    let low = ops::call(&client, "get_52_week_low", &json!({"symbol": "IBM"}))
        .await
        .unwrap();
    assert!(matches!(low, ops::Outcome::Scalar(v) if v == 8.5));
}

#[tokio::test]
async fn sma_series_preserves_remote_order() {
    let body = json!({
        "Technical Analysis: SMA": {
            "2024-03-01": {"SMA": "101.0"},
            "2024-02-29": {"SMA": "100.5"},
            "2024-02-28": {"SMA": "100.0"},
        }
    })
    .to_string();
    let mock = MockHttp::new().route("function=SMA", body);
    let client = market(mock);

    let outcome = ops::call(&client, "get_sma", &json!({"symbol": "IBM", "time_period": 20}))
        .await
        .unwrap();
    let ops::Outcome::Series(series) = outcome else {
        panic!("expected a series result");
    };
    let dates: Vec<&String> = series.keys().collect();
    assert_eq!(dates, ["2024-03-01", "2024-02-29", "2024-02-28"]);
}

#[tokio::test]
async fn error_body_without_expected_key_is_a_missing_field() {
    let mock = MockHttp::new().route(
        "function=RSI",
        json!({"Note": "Thank you for using Alpha Vantage! Our standard API rate limit..."}).to_string(),
    );
    let client = market(mock);

    let args = json!({
        "symbol": "IBM",
        "interval": "daily",
        "time_period": 14,
        "series_type": "close",
    });
    let err = ops::call(&client, "get_rsi", &args).await.unwrap_err();
    assert!(matches!(err, Error::MissingField(key) if key == "Technical Analysis: RSI"));
}

#[tokio::test]
async fn missing_required_arguments_fail_decoding_without_network() {
    let mock = MockHttp::new();
    let client = market(mock.clone());

    // RSI declares interval/time_period/series_type without defaults.
    let err = ops::call(&client, "get_rsi", &json!({"symbol": "IBM"}))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::BadArguments(_)));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn malformed_numeric_field_is_reported_as_such() {
    let mock = MockHttp::new().route("function=OVERVIEW", json!({"PERatio": "None"}).to_string());
    let client = market(mock);

    let err = ops::call(&client, "get_pe_ratio", &json!({"symbol": "IBM"}))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Malformed { field, .. } if field == "PERatio"));
}

#[test]
fn static_instance_holds_the_initialized_client() {
    finadvisor::initialize(finadvisor::MarketData::default().with_key("shared-key"));
    assert_eq!(finadvisor::instance().api_key(), Some("shared-key"));
}

#[tokio::test]
async fn non_success_status_surfaces_as_api_error() {
    // No route matches, so the mock answers 404.
    let mock = MockHttp::new();
    let client = market(mock);

    let err = ops::call(&client, "get_eps", &json!({"symbol": "IBM"}))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { status: 404, .. }));
}
