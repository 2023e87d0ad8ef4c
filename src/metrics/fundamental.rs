//! Company-financials operations

use serde_json::Value;
use tracing::debug;

use super::numeric_field;
use crate::client::MarketData;
use crate::error::{Error, Result};
use crate::request::Request;
use crate::request::fundamentals::{balance_sheet, overview};
use crate::rest;

/// Fetch the company overview and parse one numeric field out of it.
async fn overview_field<C: Request>(
    client: &MarketData<C>,
    symbol: String,
    field: &str,
) -> Result<f64> {
    let body = rest::fundamentals::company_overview(client, symbol).get().await?;
    let json: Value = serde_json::from_str(&body)?;
    // An error body comes back as an object without the requested field,
    // so the lookup itself distinguishes data from failure.
    numeric_field(&json, field)
}

/// Get the trailing-twelve-month earnings per share.
pub async fn eps<C: Request>(client: &MarketData<C>, params: overview::Params) -> Result<f64> {
    overview_field(client, params.symbol, "EPS").await
}

/// Get the price-to-earnings ratio.
pub async fn pe_ratio<C: Request>(client: &MarketData<C>, params: overview::Params) -> Result<f64> {
    overview_field(client, params.symbol, "PERatio").await
}

/// Get the trailing-twelve-month return on equity.
pub async fn roe<C: Request>(client: &MarketData<C>, params: overview::Params) -> Result<f64> {
    overview_field(client, params.symbol, "ReturnOnEquityTTM").await
}

/// Get the quarterly revenue growth, year over year.
pub async fn revenue_growth<C: Request>(
    client: &MarketData<C>,
    params: overview::Params,
) -> Result<f64> {
    overview_field(client, params.symbol, "QuarterlyRevenueGrowthYOY").await
}

/// Compute the debt-to-equity ratio from the latest annual balance sheet.
///
/// This is the one derived operation: total liabilities divided by total
/// shareholder equity. Zero equity is an explicit [`Error::ZeroEquity`],
/// never an infinite or NaN result.
pub async fn debt_to_equity<C: Request>(
    client: &MarketData<C>,
    params: balance_sheet::Params,
) -> Result<f64> {
    let body = rest::fundamentals::balance_sheet(client, params.symbol).get().await?;
    let json: Value = serde_json::from_str(&body)?;

    let report = json
        .get("annualReports")
        .and_then(|reports| reports.get(0))
        .ok_or_else(|| Error::MissingField("annualReports".to_string()))?;

    let liabilities = numeric_field(report, "totalLiabilities")?;
    let equity = numeric_field(report, "totalShareholderEquity")?;
    debug!(liabilities, equity, "computing debt-to-equity");

    if equity == 0.0 {
        return Err(Error::ZeroEquity);
    }
    Ok(liabilities / equity)
}
