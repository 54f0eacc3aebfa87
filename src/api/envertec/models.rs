use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::quantity::{DegreesCelsius, KilowattHours, Watts};

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,

    #[serde(rename = "pwd")]
    pub password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryTerminalRealRequest {
    pub page: u32,
    pub per_page: u32,
    pub order_by: &'static str,

    /// JSON-encoded filter, sent as a string.
    pub where_condition: String,
}

#[derive(Deserialize)]
pub struct QueryTerminalRealResponse {
    #[serde(rename = "Data", default)]
    data: Option<QueryResultsPage>,
}

#[derive(Deserialize)]
struct QueryResultsPage {
    #[serde(rename = "QueryResults", default)]
    query_results: Option<Vec<InverterRecord>>,
}

impl From<QueryTerminalRealResponse> for Vec<InverterRecord> {
    fn from(response: QueryTerminalRealResponse) -> Self {
        response.data.and_then(|data| data.query_results).unwrap_or_default()
    }
}

/// Real-time data of a single micro-inverter.
#[derive(Clone, Debug, Deserialize)]
pub struct InverterRecord {
    #[serde(rename = "SNALIAS", default = "unknown", deserialize_with = "deserialize_label")]
    pub alias: String,

    #[serde(rename = "GATEWAYALIAS", default = "unknown", deserialize_with = "deserialize_label")]
    pub gateway_alias: String,

    #[serde(rename = "POWER", default)]
    pub power: Watts,

    #[serde(rename = "DAYENERGY", default)]
    pub day_energy: KilowattHours,

    #[serde(rename = "TEMPERATURE", default)]
    pub temperature: DegreesCelsius,
}

fn unknown() -> String {
    "unknown".to_owned()
}

fn deserialize_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(label) => label,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => unknown(),
    })
}
