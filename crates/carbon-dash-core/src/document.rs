//! Opaque JSON documents.
//!
//! Corporate and association snapshots store nested structures whose shape is
//! owned by the dashboard that renders them. The server does not interpret
//! them, but it does refuse anything that is not a JSON object or array so a
//! bad write fails at insert time instead of on a later read.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DashboardError;

/// A JSON object or array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Document(Value);

impl Document {
    /// Borrow the underlying JSON value.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the underlying JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Whether the document is an empty object or array.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => true,
        }
    }
}

impl TryFrom<Value> for Document {
    type Error = DashboardError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(_) | Value::Array(_) => Ok(Self(value)),
            other => Err(DashboardError::InvalidDocument(format!(
                "expected object or array, got {}",
                kind_name(&other)
            ))),
        }
    }
}

impl From<Document> for Value {
    fn from(document: Document) -> Self {
        document.0
    }
}

impl FromStr for Document {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value =
            serde_json::from_str(s).map_err(|e| DashboardError::InvalidDocument(e.to_string()))?;
        Self::try_from(value)
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_objects_and_arrays() {
        let object: Document = r#"{"overall": 78.4}"#.parse().unwrap();
        assert_eq!(object.as_value()["overall"], 78.4);

        let array: Document = "[1, 2, 3]".parse().unwrap();
        assert!(!array.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = "{\"overall\": ".parse::<Document>().unwrap_err();
        assert!(matches!(err, DashboardError::InvalidDocument(_)));
    }

    #[test]
    fn rejects_scalars_and_null() {
        for value in [json!(null), json!(42), json!("text"), json!(true)] {
            assert!(Document::try_from(value).is_err());
        }
    }

    #[test]
    fn deserialization_enforces_shape() {
        let err = serde_json::from_str::<Document>("\"not a document\"").unwrap_err();
        assert!(err.to_string().contains("expected object or array"));
    }

    #[test]
    fn serializes_transparently() {
        let doc = Document::try_from(json!({"scope": [1, 2]})).unwrap();
        assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"scope":[1,2]}"#);
    }
}
