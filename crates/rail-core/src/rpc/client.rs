//! Async client exposing the node's named command surface.
//!
//! Every method builds one action-tagged request, sends it through the
//! [`Transport`], and extracts the documented response field. Amounts
//! cross this boundary as decimal digit strings in raw unless a method
//! takes an explicit [`Unit`].

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::amount::{self, Unit};
use crate::error::CoreError;
use crate::sink::{ErrorSink, TracingSink};

use super::endpoint::resolve_endpoint;
use super::protocol::{self, ActionRequest};
use super::transport::{HttpTransport, Transport};
use super::types::{AccountBalance, BlockCount, KeyPair, Version};

/// Default `count` argument for listing actions.
pub const DEFAULT_COUNT: u64 = 4096;

/// Default `count` for ledger-wide frontier listing, which enumerates
/// far more entries than per-account actions.
pub const DEFAULT_FRONTIER_COUNT: u64 = 1_048_576;

/// Client for a ledger node's action-tagged JSON RPC.
///
/// Stateless between calls apart from the resolved endpoint; each
/// method issues exactly one outbound request.
pub struct Client {
    transport: Arc<dyn Transport>,
    sink: Arc<dyn ErrorSink>,
}

impl Client {
    /// Connect to `base`, or the documented `http://localhost:7076`
    /// default when `base` is `None` or malformed.
    pub fn new(base: Option<&str>) -> Self {
        Client::with_transport(
            Arc::new(HttpTransport::new(resolve_endpoint(base))),
            Arc::new(TracingSink),
        )
    }

    /// Build a client over a custom transport and error sink.
    pub fn with_transport(transport: Arc<dyn Transport>, sink: Arc<dyn ErrorSink>) -> Self {
        Client { transport, sink }
    }

    /// Replace the error sink.
    pub fn with_error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Send one raw request body and return the parsed response.
    ///
    /// Every failure (transport, decode, or a response carrying an
    /// `error` field) is reported to the error sink before it is
    /// returned. An error-carrying response comes back as
    /// [`CoreError::Node`], never as success.
    pub async fn call(&self, request: Value) -> Result<Value, CoreError> {
        let response = self.surface(self.transport.send(&request).await)?;
        if let Some(message) = protocol::response_error(&response) {
            let error = CoreError::Node(message);
            self.sink.report(&error);
            return Err(error);
        }
        Ok(response)
    }

    fn surface<T, E: Into<CoreError>>(&self, result: Result<T, E>) -> Result<T, CoreError> {
        result.map_err(|error| {
            let error = error.into();
            self.sink.report(&error);
            error
        })
    }

    async fn dispatch(&self, request: ActionRequest) -> Result<Value, CoreError> {
        self.call(request.into_value()).await
    }

    /// Dispatch and extract one documented field of the response.
    async fn field<T: DeserializeOwned>(
        &self,
        request: ActionRequest,
        key: &'static str,
    ) -> Result<T, CoreError> {
        let action = request.action();
        let mut response = self.dispatch(request).await?;
        let value = self.surface(protocol::take_field(&mut response, action, key))?;
        self.surface(protocol::decode(value, action))
    }

    /// Dispatch and deserialize the whole response object.
    async fn typed<T: DeserializeOwned>(&self, request: ActionRequest) -> Result<T, CoreError> {
        let action = request.action();
        let response = self.dispatch(request).await?;
        self.surface(protocol::decode(response, action))
    }

    /// Dispatch and discard the (empty or trivial) success response.
    async fn acknowledge(&self, request: ActionRequest) -> Result<(), CoreError> {
        self.dispatch(request).await.map(|_| ())
    }

    // ==========================================================================
    // Accounts
    // ==========================================================================

    /// Confirmed and pending balance of an account, in raw.
    pub async fn account_balance(&self, account: &str) -> Result<AccountBalance, CoreError> {
        self.typed(ActionRequest::new("account_balance").arg("account", account))
            .await
    }

    /// Number of blocks in the account's chain.
    pub async fn account_block_count(&self, account: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("account_block_count").arg("account", account),
            "block_count",
        )
        .await
    }

    /// Create a new account inside a wallet.
    pub async fn account_create(&self, wallet: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("account_create").arg("wallet", wallet),
            "account",
        )
        .await
    }

    /// Account address for a public key.
    pub async fn account_get(&self, key: &str) -> Result<String, CoreError> {
        self.field(ActionRequest::new("account_get").arg("key", key), "account")
            .await
    }

    /// Recent send/receive entries for an account, newest first.
    pub async fn account_history(
        &self,
        account: &str,
        count: Option<u64>,
    ) -> Result<Value, CoreError> {
        self.field(
            ActionRequest::new("account_history")
                .arg("account", account)
                .arg("count", count_arg(count)),
            "history",
        )
        .await
    }

    /// Public key behind an account address.
    pub async fn account_key(&self, account: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("account_key").arg("account", account),
            "key",
        )
        .await
    }

    /// Accounts held by a wallet.
    pub async fn account_list(&self, wallet: &str) -> Result<Vec<String>, CoreError> {
        self.field(
            ActionRequest::new("account_list").arg("wallet", wallet),
            "accounts",
        )
        .await
    }

    /// Move accounts from one wallet into another.
    pub async fn account_move(
        &self,
        wallet: &str,
        source: &str,
        accounts: &[String],
    ) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("account_move")
                .arg("wallet", wallet)
                .arg("source", source)
                .arg("accounts", accounts.to_vec()),
            "moved",
        )
        .await
    }

    /// Remove an account from a wallet.
    pub async fn account_remove(&self, wallet: &str, account: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("account_remove")
                .arg("wallet", wallet)
                .arg("account", account),
            "removed",
        )
        .await
    }

    /// The representative an account delegates its voting weight to.
    pub async fn account_representative(&self, account: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("account_representative").arg("account", account),
            "representative",
        )
        .await
    }

    /// Change an account's representative; returns the change block hash.
    pub async fn account_representative_set(
        &self,
        wallet: &str,
        account: &str,
        representative: &str,
    ) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("account_representative_set")
                .arg("wallet", wallet)
                .arg("account", account)
                .arg("representative", representative),
            "block",
        )
        .await
    }

    /// Voting weight of an account, converted from raw into `unit`.
    pub async fn account_weight(&self, account: &str, unit: Unit) -> Result<String, CoreError> {
        let weight: String = self
            .field(
                ActionRequest::new("account_weight").arg("account", account),
                "weight",
            )
            .await?;
        self.surface(amount::convert(&weight, Unit::Raw, unit))
    }

    /// Balances of several accounts in one call.
    pub async fn accounts_balances(
        &self,
        accounts: &[String],
    ) -> Result<HashMap<String, AccountBalance>, CoreError> {
        self.field(
            ActionRequest::new("accounts_balances").arg("accounts", accounts.to_vec()),
            "balances",
        )
        .await
    }

    /// Frontier (most recent block hash) of each account.
    pub async fn accounts_frontiers(
        &self,
        accounts: &[String],
    ) -> Result<HashMap<String, String>, CoreError> {
        self.field(
            ActionRequest::new("accounts_frontiers").arg("accounts", accounts.to_vec()),
            "frontiers",
        )
        .await
    }

    /// Pending (receivable) blocks of several accounts.
    pub async fn accounts_pending(
        &self,
        accounts: &[String],
        count: Option<u64>,
    ) -> Result<Value, CoreError> {
        self.field(
            ActionRequest::new("accounts_pending")
                .arg("accounts", accounts.to_vec())
                .arg("count", count_arg(count)),
            "blocks",
        )
        .await
    }

    // ==========================================================================
    // Supply, blocks, and chains
    // ==========================================================================

    /// Total available supply, converted from raw into `unit`.
    pub async fn available_supply(&self, unit: Unit) -> Result<String, CoreError> {
        let available: String = self
            .field(ActionRequest::new("available_supply"), "available")
            .await?;
        self.surface(amount::convert(&available, Unit::Raw, unit))
    }

    /// A block's contents by hash, with the embedded JSON parsed.
    pub async fn block(&self, hash: &str) -> Result<Value, CoreError> {
        let contents: String = self
            .field(ActionRequest::new("block").arg("hash", hash), "contents")
            .await?;
        self.surface(protocol::parse_embedded(&contents, "block"))
    }

    /// Several blocks by hash, each with its embedded JSON parsed.
    pub async fn blocks(&self, hashes: &[String]) -> Result<HashMap<String, Value>, CoreError> {
        let raw: HashMap<String, String> = self
            .field(
                ActionRequest::new("blocks").arg("hashes", hashes.to_vec()),
                "blocks",
            )
            .await?;
        let mut parsed = HashMap::with_capacity(raw.len());
        for (hash, contents) in raw {
            let block = self.surface(protocol::parse_embedded(&contents, "blocks"))?;
            parsed.insert(hash, block);
        }
        Ok(parsed)
    }

    /// The account that owns a block.
    pub async fn block_account(&self, hash: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("block_account").arg("hash", hash),
            "account",
        )
        .await
    }

    /// Ledger block tally.
    pub async fn block_count(&self) -> Result<BlockCount, CoreError> {
        self.typed(ActionRequest::new("block_count")).await
    }

    /// Hashes in an account chain, starting at `block` and walking back.
    pub async fn chain(&self, block: &str, count: Option<u64>) -> Result<Vec<String>, CoreError> {
        self.field(
            ActionRequest::new("chain")
                .arg("block", block)
                .arg("count", count_arg(count)),
            "blocks",
        )
        .await
    }

    /// Frontier of every account at or after `account`.
    pub async fn frontiers(
        &self,
        account: &str,
        count: Option<u64>,
    ) -> Result<HashMap<String, String>, CoreError> {
        self.field(
            ActionRequest::new("frontiers")
                .arg("account", account)
                .arg("count", count.unwrap_or(DEFAULT_FRONTIER_COUNT).to_string()),
            "frontiers",
        )
        .await
    }

    /// Number of accounts in the ledger.
    pub async fn frontier_count(&self) -> Result<String, CoreError> {
        self.field(ActionRequest::new("frontier_count"), "count")
            .await
    }

    /// Send/receive history starting from a block hash.
    pub async fn history(&self, hash: &str, count: Option<u64>) -> Result<Value, CoreError> {
        self.field(
            ActionRequest::new("history")
                .arg("hash", hash)
                .arg("count", count_arg(count)),
            "history",
        )
        .await
    }

    /// Pending (receivable) block hashes for one account.
    pub async fn pending(&self, account: &str, count: Option<u64>) -> Result<Value, CoreError> {
        self.field(
            ActionRequest::new("pending")
                .arg("account", account)
                .arg("count", count_arg(count)),
            "blocks",
        )
        .await
    }

    /// Publish a block to the network.
    pub async fn process(&self, block: &Value) -> Result<Value, CoreError> {
        self.dispatch(ActionRequest::new("process").arg("block", block.clone()))
            .await
    }

    /// Rebroadcast a block and its successors.
    pub async fn republish(&self, hash: &str) -> Result<(), CoreError> {
        self.acknowledge(ActionRequest::new("republish").arg("hash", hash))
            .await
    }

    /// Hashes following `block` in its account chain.
    pub async fn successors(
        &self,
        block: &str,
        count: Option<u64>,
    ) -> Result<Vec<String>, CoreError> {
        self.field(
            ActionRequest::new("successors")
                .arg("block", block)
                .arg("count", count_arg(count)),
            "blocks",
        )
        .await
    }

    // ==========================================================================
    // Remote unit conversion
    //
    // The node-side equivalents of `amount::convert`; kept for wire
    // compatibility. Prefer the local conversion, which needs no
    // round-trip.
    // ==========================================================================

    pub async fn mrai_from_raw(&self, amount: &str) -> Result<String, CoreError> {
        self.remote_convert("mrai_from_raw", amount).await
    }

    pub async fn mrai_to_raw(&self, amount: &str) -> Result<String, CoreError> {
        self.remote_convert("mrai_to_raw", amount).await
    }

    pub async fn krai_from_raw(&self, amount: &str) -> Result<String, CoreError> {
        self.remote_convert("krai_from_raw", amount).await
    }

    pub async fn krai_to_raw(&self, amount: &str) -> Result<String, CoreError> {
        self.remote_convert("krai_to_raw", amount).await
    }

    pub async fn rai_from_raw(&self, amount: &str) -> Result<String, CoreError> {
        self.remote_convert("rai_from_raw", amount).await
    }

    pub async fn rai_to_raw(&self, amount: &str) -> Result<String, CoreError> {
        self.remote_convert("rai_to_raw", amount).await
    }

    async fn remote_convert(
        &self,
        action: &'static str,
        amount: &str,
    ) -> Result<String, CoreError> {
        self.field(ActionRequest::new(action).arg("amount", amount), "amount")
            .await
    }

    // ==========================================================================
    // Keys
    // ==========================================================================

    /// Generate a fresh random key pair.
    pub async fn key_create(&self) -> Result<KeyPair, CoreError> {
        self.typed(ActionRequest::new("key_create")).await
    }

    /// Derive the public key and account for a private key.
    pub async fn key_expand(&self, key: &str) -> Result<KeyPair, CoreError> {
        self.typed(ActionRequest::new("key_expand").arg("key", key))
            .await
    }

    /// Derive the key pair at `index` from a seed.
    pub async fn deterministic_key(&self, seed: &str, index: u64) -> Result<KeyPair, CoreError> {
        self.typed(
            ActionRequest::new("deterministic_key")
                .arg("seed", seed)
                .arg("index", index),
        )
        .await
    }

    // ==========================================================================
    // Node
    // ==========================================================================

    /// Bootstrap from a specific peer.
    pub async fn bootstrap(&self, address: &str, port: u16) -> Result<(), CoreError> {
        self.acknowledge(
            ActionRequest::new("bootstrap")
                .arg("address", address)
                .arg("port", port.to_string()),
        )
        .await
    }

    /// Bootstrap from any known peer.
    pub async fn bootstrap_any(&self) -> Result<(), CoreError> {
        self.acknowledge(ActionRequest::new("bootstrap_any")).await
    }

    /// Ask the node to keep a connection to a peer alive.
    pub async fn keepalive(&self, address: &str, port: u16) -> Result<(), CoreError> {
        self.acknowledge(
            ActionRequest::new("keepalive")
                .arg("address", address)
                .arg("port", port.to_string()),
        )
        .await
    }

    /// Connected peers and their protocol versions.
    pub async fn peers(&self) -> Result<Value, CoreError> {
        self.field(ActionRequest::new("peers"), "peers").await
    }

    /// Known representatives and their voting weight in raw.
    pub async fn representatives(&self) -> Result<HashMap<String, String>, CoreError> {
        self.field(ActionRequest::new("representatives"), "representatives")
            .await
    }

    /// Ask the node to shut down.
    pub async fn stop(&self) -> Result<(), CoreError> {
        self.acknowledge(ActionRequest::new("stop")).await
    }

    /// Check whether an account address is well-formed.
    pub async fn validate_account_number(&self, account: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("validate_account_number").arg("account", account),
            "valid",
        )
        .await
    }

    /// Node vendor and protocol versions.
    pub async fn version(&self) -> Result<Version, CoreError> {
        self.typed(ActionRequest::new("version")).await
    }

    // ==========================================================================
    // Wallets
    // ==========================================================================

    /// Change a wallet's password.
    pub async fn password_change(&self, wallet: &str, password: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("password_change")
                .arg("wallet", wallet)
                .arg("password", password),
            "changed",
        )
        .await
    }

    /// Unlock a wallet. A missing password unlocks with the empty
    /// string, as unprotected wallets expect.
    pub async fn password_enter(
        &self,
        wallet: &str,
        password: Option<&str>,
    ) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("password_enter")
                .arg("wallet", wallet)
                .arg("password", password.unwrap_or("")),
            "valid",
        )
        .await
    }

    /// Whether the wallet's cached password is currently valid.
    pub async fn password_valid(&self, wallet: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("password_valid").arg("wallet", wallet),
            "valid",
        )
        .await
    }

    /// Add an externally generated private key to a wallet.
    pub async fn wallet_add(&self, wallet: &str, key: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("wallet_add")
                .arg("wallet", wallet)
                .arg("key", key),
            "account",
        )
        .await
    }

    /// Combined balance of every account in a wallet, in raw.
    pub async fn wallet_balance_total(&self, wallet: &str) -> Result<AccountBalance, CoreError> {
        self.typed(ActionRequest::new("wallet_balance_total").arg("wallet", wallet))
            .await
    }

    /// Per-account balances of a wallet.
    pub async fn wallet_balances(
        &self,
        wallet: &str,
    ) -> Result<HashMap<String, AccountBalance>, CoreError> {
        self.field(
            ActionRequest::new("wallet_balances").arg("wallet", wallet),
            "balances",
        )
        .await
    }

    /// Re-seed a wallet; existing accounts are replaced by the new
    /// deterministic sequence.
    pub async fn wallet_change_seed(&self, wallet: &str, seed: &str) -> Result<(), CoreError> {
        self.acknowledge(
            ActionRequest::new("wallet_change_seed")
                .arg("wallet", wallet)
                .arg("seed", seed),
        )
        .await
    }

    /// Whether a wallet contains an account.
    pub async fn wallet_contains(&self, wallet: &str, account: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("wallet_contains")
                .arg("wallet", wallet)
                .arg("account", account),
            "exists",
        )
        .await
    }

    /// Create a new wallet; returns its identifier.
    pub async fn wallet_create(&self) -> Result<String, CoreError> {
        self.field(ActionRequest::new("wallet_create"), "wallet")
            .await
    }

    /// Destroy a wallet and every account it holds.
    pub async fn wallet_destroy(&self, wallet: &str) -> Result<(), CoreError> {
        self.acknowledge(ActionRequest::new("wallet_destroy").arg("wallet", wallet))
            .await
    }

    /// Wallet contents as a JSON string for external backup.
    pub async fn wallet_export(&self, wallet: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("wallet_export").arg("wallet", wallet),
            "json",
        )
        .await
    }

    /// Frontier of each account in a wallet.
    pub async fn wallet_frontiers(
        &self,
        wallet: &str,
    ) -> Result<HashMap<String, String>, CoreError> {
        self.field(
            ActionRequest::new("wallet_frontiers").arg("wallet", wallet),
            "frontiers",
        )
        .await
    }

    /// The wallet's default representative.
    pub async fn wallet_representative(&self, wallet: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("wallet_representative").arg("wallet", wallet),
            "representative",
        )
        .await
    }

    /// Set the wallet's default representative.
    pub async fn wallet_representative_set(
        &self,
        wallet: &str,
        representative: &str,
    ) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("wallet_representative_set")
                .arg("wallet", wallet)
                .arg("representative", representative),
            "set",
        )
        .await
    }

    /// Search a wallet for receivable blocks.
    pub async fn search_pending(&self, wallet: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("search_pending").arg("wallet", wallet),
            "started",
        )
        .await
    }

    // ==========================================================================
    // Payments
    // ==========================================================================

    /// Reserve an account of a wallet for a payment session.
    pub async fn payment_begin(&self, wallet: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("payment_begin").arg("wallet", wallet),
            "account",
        )
        .await
    }

    /// Mark a wallet as ready for payments.
    pub async fn payment_init(&self, wallet: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("payment_init").arg("wallet", wallet),
            "status",
        )
        .await
    }

    /// Release a payment-session account back to the wallet.
    pub async fn payment_end(&self, account: &str, wallet: &str) -> Result<(), CoreError> {
        self.acknowledge(
            ActionRequest::new("payment_end")
                .arg("account", account)
                .arg("wallet", wallet),
        )
        .await
    }

    /// Wait up to `timeout` milliseconds for `amount` raw to arrive on
    /// an account.
    pub async fn payment_wait(
        &self,
        account: &str,
        amount: &str,
        timeout: u64,
    ) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("payment_wait")
                .arg("account", account)
                .arg("amount", amount)
                .arg("timeout", timeout.to_string()),
            "status",
        )
        .await
    }

    // ==========================================================================
    // Transfers
    // ==========================================================================

    /// Send `amount` (denominated in `unit`, converted to raw on this
    /// side) from a wallet account; returns the send block hash.
    pub async fn send(
        &self,
        wallet: &str,
        source: &str,
        destination: &str,
        amount: &str,
        unit: Unit,
    ) -> Result<String, CoreError> {
        let raw_amount = self.surface(amount::convert(amount, unit, Unit::Raw))?;
        self.field(
            ActionRequest::new("send")
                .arg("wallet", wallet)
                .arg("source", source)
                .arg("destination", destination)
                .arg("amount", raw_amount),
            "block",
        )
        .await
    }

    /// Receive a pending block into a wallet account; returns the
    /// receive block hash.
    pub async fn receive(
        &self,
        wallet: &str,
        account: &str,
        block: &str,
    ) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("receive")
                .arg("wallet", wallet)
                .arg("account", account)
                .arg("block", block),
            "block",
        )
        .await
    }

    // ==========================================================================
    // Work
    // ==========================================================================

    /// Generate proof-of-work for a block hash.
    pub async fn work_generate(&self, hash: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("work_generate").arg("hash", hash),
            "work",
        )
        .await
    }

    /// Cancel an in-progress remote work generation. This is a remote
    /// operation; it does not cancel an in-flight client call.
    pub async fn work_cancel(&self, hash: &str) -> Result<(), CoreError> {
        self.acknowledge(ActionRequest::new("work_cancel").arg("hash", hash))
            .await
    }

    /// Check a work value against a block hash.
    pub async fn work_validate(&self, work: &str, hash: &str) -> Result<String, CoreError> {
        self.field(
            ActionRequest::new("work_validate")
                .arg("work", work)
                .arg("hash", hash),
            "valid",
        )
        .await
    }
}

/// Listing actions take their count as a decimal string on the wire.
fn count_arg(count: Option<u64>) -> String {
    count.unwrap_or(DEFAULT_COUNT).to_string()
}

#[cfg(test)]
mod tests {
    use super::super::mock::MockTransport;
    use super::*;
    use crate::error::RpcError;
    use crate::sink::CollectSink;
    use serde_json::json;

    fn client_with(mock: MockTransport) -> (Client, Arc<MockTransport>, Arc<CollectSink>) {
        let mock = Arc::new(mock);
        let sink = CollectSink::new();
        let client = Client::with_transport(mock.clone(), sink.clone());
        (client, mock, sink)
    }

    #[tokio::test]
    async fn account_balance_deserializes_the_response_object() {
        let (client, mock, _) = client_with(
            MockTransport::builder()
                .with_response(
                    "account_balance",
                    json!({"balance": "10000", "pending": "300"}),
                )
                .build(),
        );

        let balance = client.account_balance("xrb_1abc").await.unwrap();
        assert_eq!(balance.balance, "10000");
        assert_eq!(balance.pending, "300");

        let requests = mock.requests();
        assert_eq!(
            requests[0],
            json!({"action": "account_balance", "account": "xrb_1abc"})
        );
    }

    #[tokio::test]
    async fn error_responses_reach_the_sink_and_never_look_like_success() {
        let (client, _, sink) = client_with(
            MockTransport::builder()
                .with_response("wallet_frontiers", json!({"error": "Wallet not found"}))
                .build(),
        );

        let err = client.wallet_frontiers("0000").await.unwrap_err();
        assert!(matches!(err, CoreError::Node(ref message) if message == "Wallet not found"));

        let reported = sink.messages();
        assert_eq!(reported.len(), 1);
        assert!(reported[0].contains("Wallet not found"));
    }

    #[tokio::test]
    async fn transport_failures_are_reported_before_returning() {
        // No canned response at all: the mock fails the send.
        let (client, _, sink) = client_with(MockTransport::builder().build());

        let err = client.block_count().await.unwrap_err();
        assert!(matches!(err, CoreError::Rpc(RpcError::InvalidResponse(_))));
        assert_eq!(sink.messages().len(), 1);
    }

    #[tokio::test]
    async fn account_weight_converts_into_the_requested_unit() {
        let (client, _, _) = client_with(
            MockTransport::builder()
                .with_response(
                    "account_weight",
                    json!({"weight": "2000000000000000000000000000000"}),
                )
                .build(),
        );

        let weight = client.account_weight("xrb_1abc", Unit::Mega).await.unwrap();
        assert_eq!(weight, "2");
    }

    #[tokio::test]
    async fn send_converts_the_amount_to_raw_on_the_wire() {
        let (client, mock, _) = client_with(
            MockTransport::builder()
                .with_response("send", json!({"block": "1A2B"}))
                .build(),
        );

        let block = client
            .send("wallet", "xrb_1src", "xrb_1dst", "2", Unit::Mega)
            .await
            .unwrap();
        assert_eq!(block, "1A2B");

        let requests = mock.requests();
        assert_eq!(requests[0]["amount"], "2000000000000000000000000000000");
    }

    #[tokio::test]
    async fn send_with_a_bad_amount_fails_locally_without_a_request() {
        let (client, mock, sink) = client_with(MockTransport::builder().build());

        let err = client
            .send("wallet", "xrb_1src", "xrb_1dst", "2.5", Unit::Mega)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Amount(_)));
        assert!(mock.requests().is_empty());
        assert_eq!(sink.messages().len(), 1);
    }

    #[tokio::test]
    async fn block_parses_the_embedded_contents_json() {
        let (client, _, _) = client_with(
            MockTransport::builder()
                .with_response(
                    "block",
                    json!({"contents": "{\"type\":\"send\",\"balance\":\"0\"}"}),
                )
                .build(),
        );

        let block = client.block("1A2B").await.unwrap();
        assert_eq!(block["type"], "send");
    }

    #[tokio::test]
    async fn listing_actions_default_their_count_on_the_wire() {
        let (client, mock, _) = client_with(
            MockTransport::builder()
                .with_response("account_history", json!({"history": []}))
                .build(),
        );

        client.account_history("xrb_1abc", None).await.unwrap();
        client.account_history("xrb_1abc", Some(10)).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0]["count"], "4096");
        assert_eq!(requests[1]["count"], "10");
    }

    #[tokio::test]
    async fn missing_documented_fields_are_invalid_responses() {
        let (client, _, sink) = client_with(
            MockTransport::builder()
                .with_response("work_generate", json!({"unexpected": "1"}))
                .build(),
        );

        let err = client.work_generate("1A2B").await.unwrap_err();
        assert!(matches!(err, CoreError::Rpc(RpcError::InvalidResponse(_))));
        assert!(sink.messages()[0].contains("missing `work`"));
    }
}
