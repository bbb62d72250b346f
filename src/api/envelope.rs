//! The response envelope.
//!
//! Every JSON body the service produces has exactly two fields:
//! `Message` (any JSON value: a string, an entity, or a list) and
//! `Error` (a string, empty on success). Status code and body are set
//! independently by each handler.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform `{Message, Error}` wrapper around every response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "Message")]
    pub message: Value,

    #[serde(rename = "Error")]
    pub error: String,
}

impl Envelope {
    /// Success envelope carrying a payload
    pub fn message(payload: impl Serialize) -> Self {
        Self {
            message: serde_json::to_value(payload).unwrap_or(Value::Null),
            error: String::new(),
        }
    }

    /// Failure envelope carrying an error message
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            message: Value::Null,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = Envelope::message(json!({"id": "1"}));
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json, json!({"Message": {"id": "1"}, "Error": ""}));
    }

    #[test]
    fn test_error_envelope_shape() {
        let envelope = Envelope::error("boom");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json, json!({"Message": null, "Error": "boom"}));
    }

    #[test]
    fn test_exactly_two_fields() {
        let json = serde_json::to_value(Envelope::message("hi")).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
