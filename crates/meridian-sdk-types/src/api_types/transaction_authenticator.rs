//! Transaction authenticators and the signer boundary.
//!
//! Signing itself is a collaborator concern: the SDK never touches key
//! material. It carries authenticators as opaque data and can manufacture a
//! zero-signature authenticator from a signer's public identity for
//! simulation, which the node accepts in place of a real signature.

use crate::api_types::address::AccountAddress;
use crate::api_types::transaction::{RawTransaction, SignedTransaction};
use crate::error::MeridianResult;
use serde::{Deserialize, Serialize};

/// The length of an Ed25519 signature in bytes.
const ED25519_SIGNATURE_LENGTH: usize = 64;

/// An authenticator for a single account's signature.
///
/// Variant order is the canonical wire order and must not change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountAuthenticator {
    /// A single Ed25519 public key and signature.
    Ed25519 {
        #[serde(with = "serde_bytes")]
        public_key: Vec<u8>,
        #[serde(with = "serde_bytes")]
        signature: Vec<u8>,
    },
}

impl AccountAuthenticator {
    /// Creates an Ed25519 account authenticator.
    pub fn ed25519(public_key: Vec<u8>, signature: Vec<u8>) -> Self {
        Self::Ed25519 {
            public_key,
            signature,
        }
    }

    /// Creates a zero-signature authenticator from a public key, for
    /// simulation.
    pub fn simulation(public_key: Vec<u8>) -> Self {
        Self::Ed25519 {
            public_key,
            signature: vec![0u8; ED25519_SIGNATURE_LENGTH],
        }
    }
}

/// The authenticator attached to a signed transaction.
///
/// Variant order is the canonical wire order and must not change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionAuthenticator {
    /// A single-signer Ed25519 authenticator.
    Ed25519 {
        #[serde(with = "serde_bytes")]
        public_key: Vec<u8>,
        #[serde(with = "serde_bytes")]
        signature: Vec<u8>,
    },
    /// A multi-agent authenticator: sender plus secondary signers.
    MultiAgent {
        sender: AccountAuthenticator,
        secondary_signer_addresses: Vec<AccountAddress>,
        secondary_signers: Vec<AccountAuthenticator>,
    },
    /// A fee-payer authenticator: multi-agent plus the sponsor.
    FeePayer {
        sender: AccountAuthenticator,
        secondary_signer_addresses: Vec<AccountAddress>,
        secondary_signers: Vec<AccountAuthenticator>,
        fee_payer_address: AccountAddress,
        fee_payer_signer: AccountAuthenticator,
    },
}

impl TransactionAuthenticator {
    /// Creates a single-signer Ed25519 authenticator.
    pub fn ed25519(public_key: Vec<u8>, signature: Vec<u8>) -> Self {
        Self::Ed25519 {
            public_key,
            signature,
        }
    }

    /// Creates a zero-signature authenticator from a public key.
    ///
    /// Simulation never requires a real signature; the node checks the
    /// public identity only.
    pub fn simulation(public_key: Vec<u8>) -> Self {
        Self::Ed25519 {
            public_key,
            signature: vec![0u8; ED25519_SIGNATURE_LENGTH],
        }
    }

    /// Creates a multi-agent authenticator.
    pub fn multi_agent(
        sender: AccountAuthenticator,
        secondary_signer_addresses: Vec<AccountAddress>,
        secondary_signers: Vec<AccountAuthenticator>,
    ) -> Self {
        Self::MultiAgent {
            sender,
            secondary_signer_addresses,
            secondary_signers,
        }
    }

    /// Creates a fee-payer authenticator.
    pub fn fee_payer(
        sender: AccountAuthenticator,
        secondary_signer_addresses: Vec<AccountAddress>,
        secondary_signers: Vec<AccountAuthenticator>,
        fee_payer_address: AccountAddress,
        fee_payer_signer: AccountAuthenticator,
    ) -> Self {
        Self::FeePayer {
            sender,
            secondary_signer_addresses,
            secondary_signers,
            fee_payer_address,
            fee_payer_signer,
        }
    }
}

/// The collaborator boundary for signing.
///
/// Implementations hold key material and produce authenticators; the SDK
/// only consumes the trait.
pub trait TransactionSigner {
    /// The address this signer controls.
    fn address(&self) -> AccountAddress;

    /// The signer's public key bytes, used to build simulation
    /// authenticators.
    fn public_key_bytes(&self) -> Vec<u8>;

    /// Signs a raw transaction, producing a submittable signed transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the signing message cannot be derived or the
    /// underlying signer fails.
    fn sign_transaction(&self, raw_txn: &RawTransaction) -> MeridianResult<SignedTransaction>;
}
