//! Client library for a RaiBlocks-style ledger node's action-tagged
//! JSON RPC, with lossless denomination arithmetic.
//!
//! Amounts cross every API boundary as decimal digit strings; see
//! [`amount`] for conversion between `raw` and the display
//! denominations.

pub mod amount;
pub mod error;
pub mod rpc;
pub mod sink;

pub use amount::Unit;
pub use error::{AmountError, CoreError, RpcError};
pub use rpc::Client;
