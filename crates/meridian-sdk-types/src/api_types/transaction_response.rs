//! Transaction records and submission responses from the node API.

use crate::api_types::hash::HashValue;
use crate::api_types::numbers::U64;
use serde::{Deserialize, Serialize};

/// The type string the node uses for not-yet-committed transactions.
const PENDING_TRANSACTION_TYPE: &str = "pending_transaction";

/// Response from `POST /transactions`: the transaction is known to the
/// mempool but not yet committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingTransaction {
    /// The transaction hash to watch for commitment.
    pub hash: HashValue,
    /// The sender address as submitted.
    pub sender: String,
    /// The sequence number as submitted.
    pub sequence_number: U64,
    /// Maximum gas amount as submitted.
    pub max_gas_amount: U64,
    /// Gas unit price as submitted.
    pub gas_unit_price: U64,
    /// Expiration timestamp as submitted.
    pub expiration_timestamp_secs: U64,
}

/// A transaction record from `GET /transactions/by_hash/{hash}` or
/// `GET /transactions/by_version/{version}`.
///
/// The record may describe a pending or a committed transaction; the `type`
/// field discriminates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// The record type, e.g. `pending_transaction` or `user_transaction`.
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// The transaction hash.
    pub hash: HashValue,
    /// The ledger version, present once committed.
    #[serde(default)]
    pub version: Option<U64>,
    /// Whether execution succeeded, present once committed.
    #[serde(default)]
    pub success: Option<bool>,
    /// The VM status message, present once committed.
    #[serde(default)]
    pub vm_status: Option<String>,
    /// Gas used, present once committed.
    #[serde(default)]
    pub gas_used: Option<U64>,
}

impl Transaction {
    /// Returns true while the transaction is known but not committed.
    pub fn is_pending(&self) -> bool {
        self.transaction_type == PENDING_TRANSACTION_TYPE
    }

    /// Returns true once the transaction has reached a terminal on-chain
    /// state.
    pub fn is_committed(&self) -> bool {
        !self.is_pending()
    }

    /// Returns true if the transaction committed and executed successfully.
    pub fn is_success(&self) -> bool {
        self.is_committed() && self.success.unwrap_or(false)
    }
}

/// The error detail attached to one failed entry of a batch submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionFailureError {
    /// Human-readable message from the node.
    pub message: String,
    /// Machine-readable error code, when the node provides one.
    #[serde(default)]
    pub error_code: Option<String>,
}

/// One failed entry of a batch submission, identified by its position in
/// the submitted list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionFailure {
    /// Why this entry was rejected.
    pub error: TransactionFailureError,
    /// Index into the submitted batch.
    pub transaction_index: u64,
}

/// Response from `POST /transactions/batch`.
///
/// An empty failure list means every entry was accepted; the call itself
/// succeeding says nothing about individual entries, so callers must
/// inspect the list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchSubmitResult {
    /// The entries that were rejected, in submission order.
    pub transaction_failures: Vec<TransactionFailure>,
}

impl BatchSubmitResult {
    /// Returns true if every transaction in the batch was accepted.
    pub fn all_accepted(&self) -> bool {
        self.transaction_failures.is_empty()
    }
}
