//! Per-operation option bags.
//!
//! Each operation family takes one explicit options struct. Unset fields
//! fall back to on-chain estimation or the documented constants; explicit
//! values always win.

use meridian_sdk_types::api_types::address::AccountAddress;
use meridian_sdk_types::api_types::chain_id::ChainId;
use std::time::Duration;

/// Default poll period for the confirmation poller.
pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_millis(100);
/// Default poll timeout for the confirmation poller.
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(10);

/// Options for building a transaction.
///
/// All fields are additive overrides over defaults. The multi-agent build
/// additionally requires `additional_signers` and/or `fee_payer`.
#[derive(Debug, Clone, Default)]
pub struct TransactionOptions {
    /// Overrides the sequence number fetched from the sender's account.
    pub sequence_number: Option<u64>,
    /// Overrides the default maximum gas amount.
    pub max_gas_amount: Option<u64>,
    /// Overrides the default gas unit price.
    pub gas_unit_price: Option<u64>,
    /// Seconds from now until the transaction expires.
    pub expiration_seconds: Option<u64>,
    /// Overrides the cached/configured chain id.
    pub chain_id: Option<ChainId>,
    /// The sponsor covering gas cost, for fee-payer transactions.
    pub fee_payer: Option<AccountAddress>,
    /// Secondary signers, for multi-agent transactions.
    pub additional_signers: Vec<AccountAddress>,
    /// Resolve the gas unit price from the node's estimate.
    pub estimate_gas_unit_price: bool,
    /// Resolve the gas unit price from the node's prioritized estimate.
    pub estimate_prioritized_gas_unit_price: bool,
    /// Ask the node to compute the max gas amount during simulation.
    pub estimate_max_gas_amount: bool,
}

impl TransactionOptions {
    /// Returns true if any gas-price estimation flag is set.
    pub fn wants_gas_estimate(&self) -> bool {
        self.estimate_gas_unit_price || self.estimate_prioritized_gas_unit_price
    }
}

/// Options for transaction simulation.
///
/// These ride as query parameters; the node fills the corresponding fields
/// of the simulated result.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulateOptions {
    pub estimate_gas_unit_price: bool,
    pub estimate_max_gas_amount: bool,
    pub estimate_prioritized_gas_unit_price: bool,
}

/// Options for the confirmation poller.
#[derive(Debug, Clone, Copy)]
pub struct PollOptions {
    /// How long to suspend between poll iterations.
    pub poll_period: Duration,
    /// Total wall-time budget before reporting a timeout.
    pub poll_timeout: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            poll_period: DEFAULT_POLL_PERIOD,
            poll_timeout: DEFAULT_POLL_TIMEOUT,
        }
    }
}
