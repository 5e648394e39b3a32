//! Wire format of the node's RPC.
//!
//! Requests are flat JSON objects tagged with an `action` field; the
//! response is a flat JSON object that carries an `error` field on
//! application-level failure, regardless of transport status. Success
//! fields are action-specific and treated as an external contract:
//! helpers here extract the documented field and nothing more.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::RpcError;

/// Builder for an action-tagged request body.
pub(crate) struct ActionRequest {
    action: &'static str,
    body: Map<String, Value>,
}

impl ActionRequest {
    pub(crate) fn new(action: &'static str) -> Self {
        let mut body = Map::new();
        body.insert("action".to_owned(), Value::String(action.to_owned()));
        ActionRequest { action, body }
    }

    pub(crate) fn arg(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.body.insert(key.to_owned(), value.into());
        self
    }

    pub(crate) fn action(&self) -> &'static str {
        self.action
    }

    pub(crate) fn into_value(self) -> Value {
        Value::Object(self.body)
    }
}

/// The node's application-level error message, if the response carries
/// one. Non-string `error` values are rendered as raw JSON.
pub(crate) fn response_error(response: &Value) -> Option<String> {
    response.get("error").map(|error| match error {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    })
}

/// Remove and return a named field from a response object.
pub(crate) fn take_field(
    response: &mut Value,
    action: &str,
    field: &str,
) -> Result<Value, RpcError> {
    response
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| RpcError::InvalidResponse(format!("missing `{field}` in {action} response")))
}

/// Deserialize a response value into its documented type.
pub(crate) fn decode<T: DeserializeOwned>(value: Value, action: &str) -> Result<T, RpcError> {
    serde_json::from_value(value)
        .map_err(|e| RpcError::InvalidResponse(format!("invalid {action} response: {e}")))
}

/// Parse block contents the node embeds as a JSON string.
pub(crate) fn parse_embedded(contents: &str, action: &str) -> Result<Value, RpcError> {
    serde_json::from_str(contents).map_err(|e| {
        RpcError::InvalidResponse(format!("invalid embedded block JSON in {action} response: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn action_request_builds_tagged_body() {
        let body = ActionRequest::new("account_balance")
            .arg("account", "xrb_1abc")
            .into_value();
        assert_eq!(
            body,
            json!({"action": "account_balance", "account": "xrb_1abc"})
        );
    }

    #[test]
    fn response_error_prefers_string_messages() {
        let response = json!({"error": "Wallet not found"});
        assert_eq!(
            response_error(&response).as_deref(),
            Some("Wallet not found")
        );

        let response = json!({"error": {"code": 1}});
        assert_eq!(response_error(&response).as_deref(), Some(r#"{"code":1}"#));

        assert_eq!(response_error(&json!({"balance": "1"})), None);
    }

    #[test]
    fn take_field_reports_missing_fields() {
        let mut response = json!({"balance": "10"});
        assert_eq!(
            take_field(&mut response, "account_balance", "balance").unwrap(),
            json!("10")
        );

        let err = take_field(&mut response, "account_balance", "pending").unwrap_err();
        assert!(err.to_string().contains("missing `pending`"));
    }

    #[test]
    fn parse_embedded_rejects_garbage() {
        assert!(parse_embedded(r#"{"type":"send"}"#, "block").is_ok());
        assert!(parse_embedded("not json", "block").is_err());
    }
}
