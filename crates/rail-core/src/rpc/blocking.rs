//! Blocking dispatch mode.
//!
//! [`Client`] wraps the async client and a current-thread tokio
//! runtime; each call suspends the calling thread until the node
//! responds or the transport fails, then returns the same result the
//! async method would. One outbound request per call, no timeout
//! beyond the transport's own, no cancellation.
//!
//! Must not be used from inside an async runtime; `block_on` panics
//! there. Async callers use [`rpc::Client`](super::Client) directly.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::amount::Unit;
use crate::error::CoreError;
use crate::sink::ErrorSink;

use super::transport::Transport;
use super::types::{AccountBalance, BlockCount, KeyPair, Version};

pub struct Client {
    inner: super::Client,
    runtime: tokio::runtime::Runtime,
}

impl Client {
    /// Connect to `base`, or the documented `http://localhost:7076`
    /// default when `base` is `None` or malformed.
    pub fn new(base: Option<&str>) -> Result<Self, CoreError> {
        Ok(Client {
            inner: super::Client::new(base),
            runtime: runtime()?,
        })
    }

    /// Build a blocking client over a custom transport and error sink.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        sink: Arc<dyn ErrorSink>,
    ) -> Result<Self, CoreError> {
        Ok(Client {
            inner: super::Client::with_transport(transport, sink),
            runtime: runtime()?,
        })
    }

    /// Send one raw request body and block until the parsed response
    /// (or failure) is available. Same error-field inspection as the
    /// async [`call`](super::Client::call).
    pub fn call(&self, request: Value) -> Result<Value, CoreError> {
        self.runtime.block_on(self.inner.call(request))
    }

    // ==========================================================================
    // Accounts
    // ==========================================================================

    pub fn account_balance(&self, account: &str) -> Result<AccountBalance, CoreError> {
        self.runtime.block_on(self.inner.account_balance(account))
    }

    pub fn account_block_count(&self, account: &str) -> Result<String, CoreError> {
        self.runtime
            .block_on(self.inner.account_block_count(account))
    }

    pub fn account_create(&self, wallet: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.account_create(wallet))
    }

    pub fn account_get(&self, key: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.account_get(key))
    }

    pub fn account_history(&self, account: &str, count: Option<u64>) -> Result<Value, CoreError> {
        self.runtime
            .block_on(self.inner.account_history(account, count))
    }

    pub fn account_key(&self, account: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.account_key(account))
    }

    pub fn account_list(&self, wallet: &str) -> Result<Vec<String>, CoreError> {
        self.runtime.block_on(self.inner.account_list(wallet))
    }

    pub fn account_move(
        &self,
        wallet: &str,
        source: &str,
        accounts: &[String],
    ) -> Result<String, CoreError> {
        self.runtime
            .block_on(self.inner.account_move(wallet, source, accounts))
    }

    pub fn account_remove(&self, wallet: &str, account: &str) -> Result<String, CoreError> {
        self.runtime
            .block_on(self.inner.account_remove(wallet, account))
    }

    pub fn account_representative(&self, account: &str) -> Result<String, CoreError> {
        self.runtime
            .block_on(self.inner.account_representative(account))
    }

    pub fn account_representative_set(
        &self,
        wallet: &str,
        account: &str,
        representative: &str,
    ) -> Result<String, CoreError> {
        self.runtime.block_on(
            self.inner
                .account_representative_set(wallet, account, representative),
        )
    }

    pub fn account_weight(&self, account: &str, unit: Unit) -> Result<String, CoreError> {
        self.runtime
            .block_on(self.inner.account_weight(account, unit))
    }

    pub fn accounts_balances(
        &self,
        accounts: &[String],
    ) -> Result<HashMap<String, AccountBalance>, CoreError> {
        self.runtime
            .block_on(self.inner.accounts_balances(accounts))
    }

    pub fn accounts_frontiers(
        &self,
        accounts: &[String],
    ) -> Result<HashMap<String, String>, CoreError> {
        self.runtime
            .block_on(self.inner.accounts_frontiers(accounts))
    }

    pub fn accounts_pending(
        &self,
        accounts: &[String],
        count: Option<u64>,
    ) -> Result<Value, CoreError> {
        self.runtime
            .block_on(self.inner.accounts_pending(accounts, count))
    }

    // ==========================================================================
    // Supply, blocks, and chains
    // ==========================================================================

    pub fn available_supply(&self, unit: Unit) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.available_supply(unit))
    }

    pub fn block(&self, hash: &str) -> Result<Value, CoreError> {
        self.runtime.block_on(self.inner.block(hash))
    }

    pub fn blocks(&self, hashes: &[String]) -> Result<HashMap<String, Value>, CoreError> {
        self.runtime.block_on(self.inner.blocks(hashes))
    }

    pub fn block_account(&self, hash: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.block_account(hash))
    }

    pub fn block_count(&self) -> Result<BlockCount, CoreError> {
        self.runtime.block_on(self.inner.block_count())
    }

    pub fn chain(&self, block: &str, count: Option<u64>) -> Result<Vec<String>, CoreError> {
        self.runtime.block_on(self.inner.chain(block, count))
    }

    pub fn frontiers(
        &self,
        account: &str,
        count: Option<u64>,
    ) -> Result<HashMap<String, String>, CoreError> {
        self.runtime.block_on(self.inner.frontiers(account, count))
    }

    pub fn frontier_count(&self) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.frontier_count())
    }

    pub fn history(&self, hash: &str, count: Option<u64>) -> Result<Value, CoreError> {
        self.runtime.block_on(self.inner.history(hash, count))
    }

    pub fn pending(&self, account: &str, count: Option<u64>) -> Result<Value, CoreError> {
        self.runtime.block_on(self.inner.pending(account, count))
    }

    pub fn process(&self, block: &Value) -> Result<Value, CoreError> {
        self.runtime.block_on(self.inner.process(block))
    }

    pub fn republish(&self, hash: &str) -> Result<(), CoreError> {
        self.runtime.block_on(self.inner.republish(hash))
    }

    pub fn successors(&self, block: &str, count: Option<u64>) -> Result<Vec<String>, CoreError> {
        self.runtime.block_on(self.inner.successors(block, count))
    }

    // ==========================================================================
    // Remote unit conversion
    // ==========================================================================

    pub fn mrai_from_raw(&self, amount: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.mrai_from_raw(amount))
    }

    pub fn mrai_to_raw(&self, amount: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.mrai_to_raw(amount))
    }

    pub fn krai_from_raw(&self, amount: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.krai_from_raw(amount))
    }

    pub fn krai_to_raw(&self, amount: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.krai_to_raw(amount))
    }

    pub fn rai_from_raw(&self, amount: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.rai_from_raw(amount))
    }

    pub fn rai_to_raw(&self, amount: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.rai_to_raw(amount))
    }

    // ==========================================================================
    // Keys
    // ==========================================================================

    pub fn key_create(&self) -> Result<KeyPair, CoreError> {
        self.runtime.block_on(self.inner.key_create())
    }

    pub fn key_expand(&self, key: &str) -> Result<KeyPair, CoreError> {
        self.runtime.block_on(self.inner.key_expand(key))
    }

    pub fn deterministic_key(&self, seed: &str, index: u64) -> Result<KeyPair, CoreError> {
        self.runtime
            .block_on(self.inner.deterministic_key(seed, index))
    }

    // ==========================================================================
    // Node
    // ==========================================================================

    pub fn bootstrap(&self, address: &str, port: u16) -> Result<(), CoreError> {
        self.runtime.block_on(self.inner.bootstrap(address, port))
    }

    pub fn bootstrap_any(&self) -> Result<(), CoreError> {
        self.runtime.block_on(self.inner.bootstrap_any())
    }

    pub fn keepalive(&self, address: &str, port: u16) -> Result<(), CoreError> {
        self.runtime.block_on(self.inner.keepalive(address, port))
    }

    pub fn peers(&self) -> Result<Value, CoreError> {
        self.runtime.block_on(self.inner.peers())
    }

    pub fn representatives(&self) -> Result<HashMap<String, String>, CoreError> {
        self.runtime.block_on(self.inner.representatives())
    }

    pub fn stop(&self) -> Result<(), CoreError> {
        self.runtime.block_on(self.inner.stop())
    }

    pub fn validate_account_number(&self, account: &str) -> Result<String, CoreError> {
        self.runtime
            .block_on(self.inner.validate_account_number(account))
    }

    pub fn version(&self) -> Result<Version, CoreError> {
        self.runtime.block_on(self.inner.version())
    }

    // ==========================================================================
    // Wallets
    // ==========================================================================

    pub fn password_change(&self, wallet: &str, password: &str) -> Result<String, CoreError> {
        self.runtime
            .block_on(self.inner.password_change(wallet, password))
    }

    pub fn password_enter(&self, wallet: &str, password: Option<&str>) -> Result<String, CoreError> {
        self.runtime
            .block_on(self.inner.password_enter(wallet, password))
    }

    pub fn password_valid(&self, wallet: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.password_valid(wallet))
    }

    pub fn wallet_add(&self, wallet: &str, key: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.wallet_add(wallet, key))
    }

    pub fn wallet_balance_total(&self, wallet: &str) -> Result<AccountBalance, CoreError> {
        self.runtime
            .block_on(self.inner.wallet_balance_total(wallet))
    }

    pub fn wallet_balances(
        &self,
        wallet: &str,
    ) -> Result<HashMap<String, AccountBalance>, CoreError> {
        self.runtime.block_on(self.inner.wallet_balances(wallet))
    }

    pub fn wallet_change_seed(&self, wallet: &str, seed: &str) -> Result<(), CoreError> {
        self.runtime
            .block_on(self.inner.wallet_change_seed(wallet, seed))
    }

    pub fn wallet_contains(&self, wallet: &str, account: &str) -> Result<String, CoreError> {
        self.runtime
            .block_on(self.inner.wallet_contains(wallet, account))
    }

    pub fn wallet_create(&self) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.wallet_create())
    }

    pub fn wallet_destroy(&self, wallet: &str) -> Result<(), CoreError> {
        self.runtime.block_on(self.inner.wallet_destroy(wallet))
    }

    pub fn wallet_export(&self, wallet: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.wallet_export(wallet))
    }

    pub fn wallet_frontiers(&self, wallet: &str) -> Result<HashMap<String, String>, CoreError> {
        self.runtime.block_on(self.inner.wallet_frontiers(wallet))
    }

    pub fn wallet_representative(&self, wallet: &str) -> Result<String, CoreError> {
        self.runtime
            .block_on(self.inner.wallet_representative(wallet))
    }

    pub fn wallet_representative_set(
        &self,
        wallet: &str,
        representative: &str,
    ) -> Result<String, CoreError> {
        self.runtime
            .block_on(self.inner.wallet_representative_set(wallet, representative))
    }

    pub fn search_pending(&self, wallet: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.search_pending(wallet))
    }

    // ==========================================================================
    // Payments
    // ==========================================================================

    pub fn payment_begin(&self, wallet: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.payment_begin(wallet))
    }

    pub fn payment_init(&self, wallet: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.payment_init(wallet))
    }

    pub fn payment_end(&self, account: &str, wallet: &str) -> Result<(), CoreError> {
        self.runtime
            .block_on(self.inner.payment_end(account, wallet))
    }

    pub fn payment_wait(
        &self,
        account: &str,
        amount: &str,
        timeout: u64,
    ) -> Result<String, CoreError> {
        self.runtime
            .block_on(self.inner.payment_wait(account, amount, timeout))
    }

    // ==========================================================================
    // Transfers
    // ==========================================================================

    pub fn send(
        &self,
        wallet: &str,
        source: &str,
        destination: &str,
        amount: &str,
        unit: Unit,
    ) -> Result<String, CoreError> {
        self.runtime
            .block_on(self.inner.send(wallet, source, destination, amount, unit))
    }

    pub fn receive(&self, wallet: &str, account: &str, block: &str) -> Result<String, CoreError> {
        self.runtime
            .block_on(self.inner.receive(wallet, account, block))
    }

    // ==========================================================================
    // Work
    // ==========================================================================

    pub fn work_generate(&self, hash: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.work_generate(hash))
    }

    pub fn work_cancel(&self, hash: &str) -> Result<(), CoreError> {
        self.runtime.block_on(self.inner.work_cancel(hash))
    }

    pub fn work_validate(&self, work: &str, hash: &str) -> Result<String, CoreError> {
        self.runtime.block_on(self.inner.work_validate(work, hash))
    }
}

fn runtime() -> Result<tokio::runtime::Runtime, CoreError> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::super::mock::MockTransport;
    use super::*;
    use crate::sink::CollectSink;
    use serde_json::json;

    #[test]
    fn blocking_calls_resolve_on_the_calling_thread() {
        let mock = Arc::new(
            MockTransport::builder()
                .with_response("block_count", json!({"count": "1000", "unchecked": "10"}))
                .build(),
        );
        let client = Client::with_transport(mock, CollectSink::new()).unwrap();

        let count = client.block_count().unwrap();
        assert_eq!(count.count, "1000");
        assert_eq!(count.unchecked, "10");
    }

    #[test]
    fn blocking_errors_match_the_async_taxonomy() {
        let mock = Arc::new(
            MockTransport::builder()
                .with_response("version", json!({"error": "RPC control is disabled"}))
                .build(),
        );
        let sink = CollectSink::new();
        let client = Client::with_transport(mock, sink.clone()).unwrap();

        let err = client.version().unwrap_err();
        assert!(matches!(err, CoreError::Node(_)));
        assert_eq!(sink.messages().len(), 1);
    }
}
