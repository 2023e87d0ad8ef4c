//! Price-derived indicator operations

use serde_json::Value;

use super::{Series, numeric_field, series};
use crate::client::MarketData;
use crate::error::{Error, Result};
use crate::request::Request;
use crate::request::quote;
use crate::request::technical::{bbands, macd, rsi, sma};
use crate::request::time_series::weekly;
use crate::rest;

/// Get the simple moving average series for a stock.
///
/// Unset parameters fall back to the service defaults (daily interval,
/// 60-point period, close series).
pub async fn sma<C: Request>(client: &MarketData<C>, params: sma::Params) -> Result<Series> {
    let mut req = rest::technical::sma(client, params.symbol);
    if let Some(interval) = params.interval {
        req = req.interval(interval);
    }
    if let Some(time_period) = params.time_period {
        req = req.time_period(time_period);
    }
    if let Some(series_type) = params.series_type {
        req = req.series_type(series_type);
    }
    let body = req.get().await?;
    series(&body, "Technical Analysis: SMA")
}

/// Get the moving average convergence/divergence series for a stock.
pub async fn macd<C: Request>(client: &MarketData<C>, params: macd::Params) -> Result<Series> {
    let mut req = rest::technical::macd(client, params.symbol);
    if let Some(interval) = params.interval {
        req = req.interval(interval);
    }
    if let Some(series_type) = params.series_type {
        req = req.series_type(series_type);
    }
    if let Some(fastperiod) = params.fastperiod {
        req = req.fastperiod(fastperiod);
    }
    if let Some(slowperiod) = params.slowperiod {
        req = req.slowperiod(slowperiod);
    }
    if let Some(signalperiod) = params.signalperiod {
        req = req.signalperiod(signalperiod);
    }
    if let Some(datatype) = params.datatype {
        req = req.datatype(datatype);
    }
    let body = req.get().await?;
    series(&body, "Technical Analysis: MACD")
}

/// Get the relative strength index series for a stock.
pub async fn rsi<C: Request>(client: &MarketData<C>, params: rsi::Params) -> Result<Series> {
    let mut req = rest::technical::rsi(
        client,
        params.symbol,
        params.interval,
        params.time_period,
        params.series_type,
    );
    if let Some(datatype) = params.datatype {
        req = req.datatype(datatype);
    }
    let body = req.get().await?;
    series(&body, "Technical Analysis: RSI")
}

/// Get the Bollinger bands series for a stock.
pub async fn bbands<C: Request>(client: &MarketData<C>, params: bbands::Params) -> Result<Series> {
    let mut req = rest::technical::bbands(
        client,
        params.symbol,
        params.interval,
        params.time_period,
        params.series_type,
    );
    if let Some(nbdevup) = params.nbdevup {
        req = req.nbdevup(nbdevup);
    }
    if let Some(nbdevdn) = params.nbdevdn {
        req = req.nbdevdn(nbdevdn);
    }
    if let Some(matype) = params.matype {
        req = req.matype(matype);
    }
    if let Some(datatype) = params.datatype {
        req = req.datatype(datatype);
    }
    let body = req.get().await?;
    series(&body, "Technical Analysis: BBANDS")
}

/// Get the latest traded price for a stock.
pub async fn current_price<C: Request>(
    client: &MarketData<C>,
    params: quote::Params,
) -> Result<f64> {
    let body = rest::quote::global_quote(client, params.symbol).get().await?;
    let quote = series(&body, "Global Quote")?;
    numeric_field(&Value::Object(quote), "05. price")
}

/// Get the highest weekly high over the past 52 weeks.
pub async fn week_52_high<C: Request>(
    client: &MarketData<C>,
    params: weekly::Params,
) -> Result<f64> {
    weekly_extreme(client, params, "2. high", f64::max).await
}

/// Get the lowest weekly low over the past 52 weeks.
pub async fn week_52_low<C: Request>(
    client: &MarketData<C>,
    params: weekly::Params,
) -> Result<f64> {
    weekly_extreme(client, params, "3. low", f64::min).await
}

/// Scan the most recent 52 weekly entries for an extreme of `field`.
///
/// The weekly series arrives most-recent-first, so the first 52 entries
/// cover the trailing year.
async fn weekly_extreme<C: Request>(
    client: &MarketData<C>,
    params: weekly::Params,
    field: &str,
    pick: fn(f64, f64) -> f64,
) -> Result<f64> {
    let body = rest::time_series::weekly(client, params.symbol).get().await?;
    let weeks = series(&body, "Weekly Time Series")?;

    let mut extreme: Option<f64> = None;
    for entry in weeks.values().take(52) {
        let value = numeric_field(entry, field)?;
        extreme = Some(match extreme {
            Some(current) => pick(current, value),
            None => value,
        });
    }
    extreme.ok_or_else(|| Error::Custom("weekly time series is empty".to_string()))
}
