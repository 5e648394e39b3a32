//! Typed responses for actions that return whole objects.
//!
//! Amount-carrying fields stay decimal digit strings in raw; callers
//! convert for display with [`amount::convert`](crate::amount::convert).

use serde::Deserialize;

/// Confirmed and pending balance, both in raw. Returned per account by
/// `account_balance` / `accounts_balances` and for a whole wallet by
/// `wallet_balance_total`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountBalance {
    pub balance: String,
    pub pending: String,
}

/// Ledger block tally from `block_count`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockCount {
    /// Blocks cemented in the ledger.
    pub count: String,
    /// Blocks received but not yet settled.
    pub unchecked: String,
}

/// A private/public key pair with its derived account address, from
/// `key_create`, `key_expand`, and `deterministic_key`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyPair {
    pub private: String,
    pub public: String,
    pub account: String,
}

/// Node version report.
#[derive(Debug, Clone, Deserialize)]
pub struct Version {
    pub rpc_version: String,
    pub store_version: String,
    pub node_vendor: String,
}
