//! Error taxonomy for the client.
//!
//! Failures are local to the call that produced them; there is no global
//! error state. The RPC client reports every failure to its
//! [`ErrorSink`](crate::sink::ErrorSink) before returning it.

/// Top-level error returned by RPC client methods.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The request could not be completed at the transport layer.
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// The response parsed successfully but carries an `error` field.
    /// The node's message is preserved verbatim.
    #[error("node error: {0}")]
    Node(String),

    /// Denomination arithmetic precondition violation.
    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Transport-level failures: the request never produced a usable
/// response body.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Failures of the arbitrary-precision amount functions.
#[derive(Debug, thiserror::Error)]
pub enum AmountError {
    /// The input is not a plain decimal digit string.
    #[error("invalid amount `{0}`: expected an unsigned decimal digit string")]
    InvalidDigits(String),

    /// Subtraction would go below zero; the ledger has no negative
    /// balances.
    #[error("insufficient amount: cannot subtract {amount} from {base}")]
    Insufficient { base: String, amount: String },

    /// The value does not fit the 128-bit range the hex encoding
    /// requires.
    #[error("amount {0} exceeds the 128-bit representable range")]
    Overflow(String),
}
