//! Transaction types.

use crate::api_types::address::AccountAddress;
use crate::api_types::chain_id::ChainId;
use crate::api_types::hash::HashValue;
use crate::api_types::payload::TransactionPayload;
use crate::api_types::transaction_authenticator::TransactionAuthenticator;
use crate::error::MeridianResult;
use serde::{Deserialize, Serialize};

/// An unsigned, fully-parameterized transaction ready for signing.
///
/// Every field is resolved at build time; no further network calls are
/// needed before signing. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Sender's address.
    pub sender: AccountAddress,
    /// Sequence number of this transaction, preventing replay.
    pub sequence_number: u64,
    /// The transaction payload.
    pub payload: TransactionPayload,
    /// Maximum gas units the sender is willing to pay.
    pub max_gas_amount: u64,
    /// Price per gas unit.
    pub gas_unit_price: u64,
    /// Expiration time in seconds since Unix epoch.
    pub expiration_timestamp_secs: u64,
    /// Chain ID to prevent cross-chain replay.
    pub chain_id: ChainId,
}

impl RawTransaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sender: AccountAddress,
        sequence_number: u64,
        payload: TransactionPayload,
        max_gas_amount: u64,
        gas_unit_price: u64,
        expiration_timestamp_secs: u64,
        chain_id: ChainId,
    ) -> Self {
        Self {
            sender,
            sequence_number,
            payload,
            max_gas_amount,
            gas_unit_price,
            expiration_timestamp_secs,
            chain_id,
        }
    }

    /// Generates the domain-separated signing message for this transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if BCS serialization of the transaction fails.
    pub fn signing_message(&self) -> MeridianResult<Vec<u8>> {
        let prefix = HashValue::sha3_256(b"MERIDIAN::RawTransaction");
        let bcs_bytes = bcs::to_bytes(self)?;

        let mut message = Vec::with_capacity(prefix.as_bytes().len() + bcs_bytes.len());
        message.extend_from_slice(prefix.as_bytes());
        message.extend_from_slice(&bcs_bytes);
        Ok(message)
    }

    /// Serializes this transaction to BCS bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if BCS serialization fails.
    pub fn to_bytes(&self) -> MeridianResult<Vec<u8>> {
        Ok(bcs::to_bytes(self)?)
    }
}

/// A raw transaction plus the extra addresses that multi-agent and
/// fee-payer variants carry.
///
/// Invariant (enforced by the builder): the multi-agent variant always has
/// at least one secondary signer or a fee payer.
///
/// Variant order is the canonical wire order and must not change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawTransactionWithData {
    /// A transaction with additional signers.
    MultiAgent {
        raw_txn: RawTransaction,
        secondary_signer_addresses: Vec<AccountAddress>,
    },
    /// A transaction where a sponsor covers the gas cost, optionally with
    /// additional signers.
    MultiAgentWithFeePayer {
        raw_txn: RawTransaction,
        secondary_signer_addresses: Vec<AccountAddress>,
        fee_payer_address: AccountAddress,
    },
}

impl RawTransactionWithData {
    /// Returns the inner raw transaction.
    pub fn raw_txn(&self) -> &RawTransaction {
        match self {
            Self::MultiAgent { raw_txn, .. } => raw_txn,
            Self::MultiAgentWithFeePayer { raw_txn, .. } => raw_txn,
        }
    }

    /// Returns the secondary signer addresses.
    pub fn secondary_signer_addresses(&self) -> &[AccountAddress] {
        match self {
            Self::MultiAgent {
                secondary_signer_addresses,
                ..
            } => secondary_signer_addresses,
            Self::MultiAgentWithFeePayer {
                secondary_signer_addresses,
                ..
            } => secondary_signer_addresses,
        }
    }

    /// Returns the fee payer address, if this is a fee-payer transaction.
    pub fn fee_payer_address(&self) -> Option<AccountAddress> {
        match self {
            Self::MultiAgent { .. } => None,
            Self::MultiAgentWithFeePayer {
                fee_payer_address, ..
            } => Some(*fee_payer_address),
        }
    }

    /// Generates the domain-separated signing message for this transaction.
    ///
    /// All parties (sender, secondary signers, fee payer) sign the same
    /// message.
    ///
    /// # Errors
    ///
    /// Returns an error if BCS serialization fails.
    pub fn signing_message(&self) -> MeridianResult<Vec<u8>> {
        let prefix = HashValue::sha3_256(b"MERIDIAN::RawTransactionWithData");
        let bcs_bytes = bcs::to_bytes(self)?;

        let mut message = Vec::with_capacity(prefix.as_bytes().len() + bcs_bytes.len());
        message.extend_from_slice(prefix.as_bytes());
        message.extend_from_slice(&bcs_bytes);
        Ok(message)
    }
}

/// A signed transaction ready for submission.
///
/// The authenticator is opaque to the submission pipeline; it is produced by
/// a collaborator signer and carried as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// The raw transaction.
    pub raw_txn: RawTransaction,
    /// The authenticator (signature(s) and public key(s)).
    pub authenticator: TransactionAuthenticator,
}

impl SignedTransaction {
    /// Creates a new signed transaction.
    pub fn new(raw_txn: RawTransaction, authenticator: TransactionAuthenticator) -> Self {
        Self {
            raw_txn,
            authenticator,
        }
    }

    /// Returns the sender address.
    pub fn sender(&self) -> AccountAddress {
        self.raw_txn.sender
    }

    /// Returns the sequence number.
    pub fn sequence_number(&self) -> u64 {
        self.raw_txn.sequence_number
    }

    /// Serializes this signed transaction to BCS bytes for submission.
    ///
    /// # Errors
    ///
    /// Returns an error if BCS serialization fails.
    pub fn to_bytes(&self) -> MeridianResult<Vec<u8>> {
        Ok(bcs::to_bytes(self)?)
    }
}
