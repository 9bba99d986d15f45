//! JSON output
//!
//! A calculation produces either `{"result": <number>}` or
//! `{"error": "<message>"}`.

use serde::Serialize;
use serde_json::{Number, Value};

/// Integral results below this magnitude are written as JSON integers
const JSON_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// The outcome of one calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    /// A successful calculation
    Result(Value),
    /// A failed calculation
    Error(String),
}

impl Response {
    /// Creates a successful response
    pub fn result(value: f64) -> Self {
        Self::Result(json_number(value))
    }

    /// Creates a failed response
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Serializes the response to a single line of JSON
    pub fn to_json(&self) -> String {
        // serializing a string or a finite number cannot fail
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

/// One entry of the operation listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationDoc {
    /// The name used to call the operation
    pub name: String,
    /// What the operation does
    pub description: String,
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is integral and within the exactly representable range"
)]
fn json_number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < JSON_INTEGER_LIMIT {
        Value::from(value as i64)
    } else {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}
