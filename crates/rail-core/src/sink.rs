//! Injectable error reporting.
//!
//! The client reports every failure here before returning it, so hosts
//! can route node and transport errors to their own surface (UI toast,
//! log aggregation) without wrapping each call site.

use crate::error::CoreError;

/// Receives every error the client is about to return.
pub trait ErrorSink: Send + Sync {
    fn report(&self, error: &CoreError);
}

/// Default sink: reports through `tracing::error!`.
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, error: &CoreError) {
        tracing::error!(%error, "rpc client error");
    }
}

/// Test sink that collects rendered error messages for assertions.
#[cfg(test)]
pub(crate) struct CollectSink(pub(crate) std::sync::Mutex<Vec<String>>);

#[cfg(test)]
impl CollectSink {
    pub(crate) fn new() -> std::sync::Arc<Self> {
        std::sync::Arc::new(CollectSink(std::sync::Mutex::new(Vec::new())))
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.0.lock().expect("sink mutex poisoned").clone()
    }
}

#[cfg(test)]
impl ErrorSink for CollectSink {
    fn report(&self, error: &CoreError) {
        self.0
            .lock()
            .expect("sink mutex poisoned")
            .push(error.to_string());
    }
}
