//! Operation registry and schema generation
//!
//! Every metric the crate can fetch is declared here as a static
//! [`OperationDef`]: its name, description, and parameter list with type
//! tags and default markers. The table is the single source of truth for
//! what the model may call; schemas are generated from it, and
//! [`call`] resolves names against it. Nothing is derived from runtime
//! introspection.

use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;

use crate::client::MarketData;
use crate::error::{Error, Result};
use crate::metrics::{Series, fundamental, technical};
use crate::request::common::{DataType, Interval, MovingAverageType, SeriesType};
use crate::request::{Request, fundamentals, quote, technical as treq, time_series};

/// Semantic type of one operation parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Free-form string
    Str,
    /// Integer
    Int,
    /// Closed set of allowed wire strings, in declaration order
    Enum(&'static [&'static str]),
}

/// One declared parameter of an operation
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Parameter name as it appears in tool-call arguments
    pub name: &'static str,
    /// Semantic type
    pub kind: ParamKind,
    /// Default wire value; `None` marks the parameter required
    pub default: Option<&'static str>,
}

impl ParamSpec {
    /// A parameter is required iff it declares no default
    pub fn required(&self) -> bool {
        self.default.is_none()
    }
}

/// Static descriptor of one registered operation
#[derive(Debug, Clone, Copy)]
pub struct OperationDef {
    /// Unique operation name
    pub name: &'static str,
    /// Human-readable description presented to the model, if any
    pub description: Option<&'static str>,
    /// Declared parameters
    pub params: &'static [ParamSpec],
}

impl OperationDef {
    /// Produce the function-calling schema for this operation.
    ///
    /// Pure reflection over the static declaration; never touches the
    /// network and never fails.
    pub fn schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in self.params {
            let prop = match param.kind {
                ParamKind::Enum(values) => json!({
                    "type": "string",
                    "enum": values,
                }),
                ParamKind::Str => json!({
                    "type": "string",
                    "description": format!("{} (string)", param.name),
                }),
                ParamKind::Int => json!({
                    "type": "integer",
                    "description": format!("{} (integer)", param.name),
                }),
            };
            properties.insert(param.name.to_string(), prop);
            if param.required() {
                required.push(param.name);
            }
        }

        let mut schema = json!({
            "name": self.name,
            "parameters": {
                "type": "object",
                "properties": properties,
                "required": required,
            },
        });
        if let Some(description) = self.description {
            schema["description"] = json!(description);
        }
        schema
    }
}

const SYMBOL: ParamSpec = ParamSpec {
    name: "symbol",
    kind: ParamKind::Str,
    default: None,
};

/// All registered operations, fixed at compile time.
pub const REGISTRY: &[OperationDef] = &[
    OperationDef {
        name: "get_sma",
        description: Some("Get the simple moving average series for a stock."),
        params: &[
            SYMBOL,
            ParamSpec { name: "interval", kind: ParamKind::Enum(Interval::WIRE), default: Some("daily") },
            ParamSpec { name: "time_period", kind: ParamKind::Int, default: Some("60") },
            ParamSpec { name: "series_type", kind: ParamKind::Enum(SeriesType::WIRE), default: Some("close") },
        ],
    },
    OperationDef {
        name: "get_macd",
        description: Some("Get the moving average convergence/divergence series for a stock."),
        params: &[
            SYMBOL,
            ParamSpec { name: "interval", kind: ParamKind::Enum(Interval::WIRE), default: Some("daily") },
            ParamSpec { name: "series_type", kind: ParamKind::Enum(SeriesType::WIRE), default: Some("close") },
            ParamSpec { name: "fastperiod", kind: ParamKind::Int, default: Some("12") },
            ParamSpec { name: "slowperiod", kind: ParamKind::Int, default: Some("26") },
            ParamSpec { name: "signalperiod", kind: ParamKind::Int, default: Some("9") },
            ParamSpec { name: "datatype", kind: ParamKind::Enum(DataType::WIRE), default: Some("json") },
        ],
    },
    OperationDef {
        name: "get_rsi",
        description: Some("Get the relative strength index series for a stock."),
        params: &[
            SYMBOL,
            ParamSpec { name: "interval", kind: ParamKind::Enum(Interval::WIRE), default: None },
            ParamSpec { name: "time_period", kind: ParamKind::Int, default: None },
            ParamSpec { name: "series_type", kind: ParamKind::Enum(SeriesType::WIRE), default: None },
            ParamSpec { name: "datatype", kind: ParamKind::Enum(DataType::WIRE), default: Some("json") },
        ],
    },
    OperationDef {
        name: "get_bbands",
        description: Some("Get the Bollinger bands series for a stock."),
        params: &[
            SYMBOL,
            ParamSpec { name: "interval", kind: ParamKind::Enum(Interval::WIRE), default: None },
            ParamSpec { name: "time_period", kind: ParamKind::Int, default: None },
            ParamSpec { name: "series_type", kind: ParamKind::Enum(SeriesType::WIRE), default: None },
            ParamSpec { name: "nbdevup", kind: ParamKind::Int, default: Some("2") },
            ParamSpec { name: "nbdevdn", kind: ParamKind::Int, default: Some("2") },
            ParamSpec { name: "matype", kind: ParamKind::Enum(MovingAverageType::WIRE), default: Some("0") },
            ParamSpec { name: "datatype", kind: ParamKind::Enum(DataType::WIRE), default: Some("json") },
        ],
    },
    OperationDef {
        name: "get_current_price",
        description: Some("Get the latest traded price for a stock."),
        params: &[SYMBOL],
    },
    OperationDef {
        name: "get_52_week_high",
        description: Some("Get the highest weekly high over the past 52 weeks."),
        params: &[SYMBOL],
    },
    OperationDef {
        name: "get_52_week_low",
        description: Some("Get the lowest weekly low over the past 52 weeks."),
        params: &[SYMBOL],
    },
    OperationDef {
        name: "get_eps",
        description: Some("Get the trailing-twelve-month earnings per share."),
        params: &[SYMBOL],
    },
    OperationDef {
        name: "get_pe_ratio",
        description: Some("Get the price-to-earnings ratio."),
        params: &[SYMBOL],
    },
    OperationDef {
        name: "get_roe",
        description: Some("Get the trailing-twelve-month return on equity."),
        params: &[SYMBOL],
    },
    OperationDef {
        name: "get_revenue_growth",
        description: Some("Get the quarterly revenue growth, year over year."),
        params: &[SYMBOL],
    },
    OperationDef {
        name: "get_debt_to_equity",
        description: Some("Get the debt-to-equity ratio from the latest annual balance sheet."),
        params: &[SYMBOL],
    },
];

/// Look up a registered operation by name
pub fn find(name: &str) -> Option<&'static OperationDef> {
    REGISTRY.iter().find(|op| op.name == name)
}

/// Function-calling schemas for every registered operation
pub fn schemas() -> Vec<Value> {
    REGISTRY.iter().map(OperationDef::schema).collect()
}

/// Result of one operation call
#[derive(Debug, Clone)]
pub enum Outcome {
    /// A single number (fundamentals, point-in-time prices)
    Scalar(f64),
    /// A date-keyed indicator series in wire order
    Series(Series),
}

impl From<Outcome> for Value {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Scalar(v) => json!(v),
            Outcome::Series(s) => Value::Object(s),
        }
    }
}

fn decode<T: DeserializeOwned>(args: &Value) -> Result<T> {
    serde_json::from_value(args.clone()).map_err(|e| Error::BadArguments(e.to_string()))
}

/// Run one registered operation by name with JSON-encoded arguments.
///
/// Argument values are validated only as far as decoding them into the
/// operation's parameter types; anything beyond that surfaces from the
/// remote service.
pub async fn call<C: Request>(
    client: &MarketData<C>,
    name: &str,
    args: &Value,
) -> Result<Outcome> {
    debug!(operation = name, "executing operation");
    match name {
        "get_sma" => Ok(Outcome::Series(
            technical::sma(client, decode::<treq::sma::Params>(args)?).await?,
        )),
        "get_macd" => Ok(Outcome::Series(
            technical::macd(client, decode::<treq::macd::Params>(args)?).await?,
        )),
        "get_rsi" => Ok(Outcome::Series(
            technical::rsi(client, decode::<treq::rsi::Params>(args)?).await?,
        )),
        "get_bbands" => Ok(Outcome::Series(
            technical::bbands(client, decode::<treq::bbands::Params>(args)?).await?,
        )),
        "get_current_price" => Ok(Outcome::Scalar(
            technical::current_price(client, decode::<quote::Params>(args)?).await?,
        )),
        "get_52_week_high" => Ok(Outcome::Scalar(
            technical::week_52_high(client, decode::<time_series::weekly::Params>(args)?).await?,
        )),
        "get_52_week_low" => Ok(Outcome::Scalar(
            technical::week_52_low(client, decode::<time_series::weekly::Params>(args)?).await?,
        )),
        "get_eps" => Ok(Outcome::Scalar(
            fundamental::eps(client, decode::<fundamentals::overview::Params>(args)?).await?,
        )),
        "get_pe_ratio" => Ok(Outcome::Scalar(
            fundamental::pe_ratio(client, decode::<fundamentals::overview::Params>(args)?).await?,
        )),
        "get_roe" => Ok(Outcome::Scalar(
            fundamental::roe(client, decode::<fundamentals::overview::Params>(args)?).await?,
        )),
        "get_revenue_growth" => Ok(Outcome::Scalar(
            fundamental::revenue_growth(client, decode::<fundamentals::overview::Params>(args)?)
                .await?,
        )),
        "get_debt_to_equity" => Ok(Outcome::Scalar(
            fundamental::debt_to_equity(
                client,
                decode::<fundamentals::balance_sheet::Params>(args)?,
            )
            .await?,
        )),
        _ => Err(Error::UnknownOperation(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_names_are_unique() {
        for (i, op) in REGISTRY.iter().enumerate() {
            assert!(
                REGISTRY[i + 1..].iter().all(|other| other.name != op.name),
                "duplicate operation name {}",
                op.name
            );
        }
    }

    #[test]
    fn every_operation_requires_a_symbol() {
        for op in REGISTRY {
            let symbol = op
                .params
                .iter()
                .find(|p| p.name == "symbol")
                .unwrap_or_else(|| panic!("{} lacks a symbol parameter", op.name));
            assert!(symbol.required());
        }
    }

    #[test]
    fn schema_marks_required_iff_no_default() {
        let op = find("get_sma").unwrap();
        let schema = op.schema();
        let required: Vec<&str> = schema["parameters"]["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, ["symbol"]);

        let op = find("get_rsi").unwrap();
        let required: Vec<String> = op.schema()["parameters"]["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        assert_eq!(required, ["symbol", "interval", "time_period", "series_type"]);
    }

    #[test]
    fn schema_enumerates_members_in_declaration_order() {
        let schema = find("get_bbands").unwrap().schema();
        let matype: Vec<&str> = schema["parameters"]["properties"]["matype"]["enum"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(matype, ["0", "1", "2", "3", "4", "5", "6", "7", "8"]);

        let interval: Vec<&str> = schema["parameters"]["properties"]["interval"]["enum"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(interval, ["daily", "weekly", "monthly"]);
    }

    #[test]
    fn schema_without_description_omits_the_field() {
        let op = OperationDef {
            name: "bare",
            description: None,
            params: &[SYMBOL],
        };
        let schema = op.schema();
        assert!(schema.get("description").is_none());
        assert_eq!(schema["name"], "bare");
    }

    #[test]
    fn non_enum_params_carry_name_and_type_description() {
        let schema = find("get_sma").unwrap().schema();
        assert_eq!(
            schema["parameters"]["properties"]["symbol"]["description"],
            "symbol (string)"
        );
        assert_eq!(
            schema["parameters"]["properties"]["time_period"]["description"],
            "time_period (integer)"
        );
        assert_eq!(
            schema["parameters"]["properties"]["time_period"]["type"],
            "integer"
        );
    }
}
