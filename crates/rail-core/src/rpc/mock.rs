//! Canned transport for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RpcError;

use super::transport::Transport;

/// A mock transport backend for testing. Answers each request by its
/// `action` field from a `HashMap` populated via the builder pattern,
/// and records every request body for assertions.
pub struct MockTransport {
    responses: HashMap<String, Value>,
    requests: Mutex<Vec<Value>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            responses: HashMap::new(),
        }
    }

    /// Every request body this transport has received, in order.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().expect("mock mutex poisoned").clone()
    }
}

pub struct MockTransportBuilder {
    responses: HashMap<String, Value>,
}

impl MockTransportBuilder {
    pub fn with_response(mut self, action: &str, response: Value) -> Self {
        self.responses.insert(action.to_owned(), response);
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            responses: self.responses,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, body: &Value) -> Result<Value, RpcError> {
        self.requests
            .lock()
            .expect("mock mutex poisoned")
            .push(body.clone());

        let action = body
            .get("action")
            .and_then(Value::as_str)
            .unwrap_or_default();
        self.responses.get(action).cloned().ok_or_else(|| {
            RpcError::InvalidResponse(format!("no canned response for action `{action}`"))
        })
    }
}
