//! Ledger node RPC adapter.
//!
//! Defines the [`Transport`] seam, its HTTP implementation
//! ([`HttpTransport`]), and the [`Client`] exposing the node's named
//! command surface, plus a [`blocking`] variant and a test mock
//! (`mock::MockTransport`).

pub mod blocking;
mod client;
mod endpoint;
#[cfg(test)]
pub mod mock;
mod protocol;
mod transport;
pub mod types;

pub use client::{Client, DEFAULT_COUNT, DEFAULT_FRONTIER_COUNT};
pub use endpoint::{resolve_endpoint, DEFAULT_PORT};
pub use transport::{HttpTransport, Transport};
