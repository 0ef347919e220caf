//! The client facade.
//!
//! [`MeridianClient`] coordinates the node, faucet, and indexer clients
//! behind one surface. The faucet and indexer are independently
//! constructible collaborators: when a network does not configure one, the
//! corresponding operations fail with an unconfigured error instead of a
//! missing-member crash.

use crate::client::builder::MeridianClientBuilder;
use crate::client::config::MeridianNetwork;
use crate::client::faucet::MeridianFaucetClient;
use crate::client::indexer::MeridianIndexerClient;
use crate::client::options::{PollOptions, SimulateOptions, TransactionOptions};
use crate::client::rest_api::MeridianNodeClient;
use meridian_sdk_types::api_types::account::AccountInfo;
use meridian_sdk_types::api_types::address::AccountAddress;
use meridian_sdk_types::api_types::chain_id::ChainId;
use meridian_sdk_types::api_types::event::Event;
use meridian_sdk_types::api_types::gas::GasEstimation;
use meridian_sdk_types::api_types::hash::HashValue;
use meridian_sdk_types::api_types::ledger_info::{HealthCheckResponse, NodeInfo};
use meridian_sdk_types::api_types::payload::{TransactionPayload, ViewFunction};
use meridian_sdk_types::api_types::transaction::{
    RawTransaction, RawTransactionWithData, SignedTransaction,
};
use meridian_sdk_types::api_types::transaction_authenticator::TransactionSigner;
use meridian_sdk_types::api_types::transaction_response::{
    BatchSubmitResult, PendingTransaction, Transaction,
};
use meridian_sdk_types::{MeridianError, MeridianResult};
use serde::de::DeserializeOwned;

/// A facade over the node, faucet, and indexer clients.
///
/// Construct one with [`MeridianClientBuilder`]:
///
/// ```rust,no_run
/// use meridian_sdk::client::builder::MeridianClientBuilder;
/// use meridian_sdk::client::config::MeridianNetwork;
///
/// let client = MeridianClientBuilder::new(MeridianNetwork::devnet()).build().unwrap();
/// ```
#[derive(Debug)]
pub struct MeridianClient {
    node: MeridianNodeClient,
    faucet: Option<MeridianFaucetClient>,
    indexer: Option<MeridianIndexerClient>,
}

impl MeridianClient {
    /// Creates the facade from its collaborators. Use
    /// [`MeridianClientBuilder`] instead of calling this directly.
    pub(crate) fn new(
        node: MeridianNodeClient,
        faucet: Option<MeridianFaucetClient>,
        indexer: Option<MeridianIndexerClient>,
    ) -> Self {
        Self {
            node,
            faucet,
            indexer,
        }
    }

    /// Creates a builder for the given network.
    pub fn builder(network: MeridianNetwork) -> MeridianClientBuilder {
        MeridianClientBuilder::new(network)
    }

    /// Returns the node client.
    pub fn node(&self) -> &MeridianNodeClient {
        &self.node
    }

    /// Returns the faucet client, when the network configures one.
    pub fn faucet(&self) -> Option<&MeridianFaucetClient> {
        self.faucet.as_ref()
    }

    /// Returns the indexer client, when the network configures one.
    pub fn indexer(&self) -> Option<&MeridianIndexerClient> {
        self.indexer.as_ref()
    }

    // === Node delegation ===

    /// Retrieves node info: chain id and current ledger state.
    pub async fn info(&self) -> MeridianResult<NodeInfo> {
        self.node.info().await
    }

    /// Checks node health.
    pub async fn health_check(
        &self,
        duration_secs: Option<u64>,
    ) -> MeridianResult<HealthCheckResponse> {
        self.node.health_check(duration_secs).await
    }

    /// Retrieves the chain id, cached for the lifetime of the client.
    pub async fn get_chain_id(&self) -> MeridianResult<ChainId> {
        self.node.get_chain_id().await
    }

    /// Retrieves account state.
    pub async fn account(
        &self,
        address: AccountAddress,
        ledger_version: Option<u64>,
    ) -> MeridianResult<AccountInfo> {
        self.node.account(address, ledger_version).await
    }

    /// Retrieves the current gas price estimate.
    pub async fn estimate_gas_price(&self) -> MeridianResult<GasEstimation> {
        self.node.estimate_gas_price().await
    }

    /// Builds a fully-resolved single-signer raw transaction.
    pub async fn build_transaction(
        &self,
        sender: AccountAddress,
        payload: TransactionPayload,
        options: TransactionOptions,
    ) -> MeridianResult<RawTransaction> {
        self.node.build_transaction(sender, payload, options).await
    }

    /// Builds a multi-agent or fee-payer raw transaction.
    pub async fn build_transaction_multi_agent(
        &self,
        sender: AccountAddress,
        payload: TransactionPayload,
        options: TransactionOptions,
    ) -> MeridianResult<RawTransactionWithData> {
        self.node
            .build_transaction_multi_agent(sender, payload, options)
            .await
    }

    /// Submits one already-signed transaction.
    pub async fn submit_transaction(
        &self,
        signed_txn: &SignedTransaction,
    ) -> MeridianResult<PendingTransaction> {
        self.node.submit_transaction(signed_txn).await
    }

    /// Submits many signed transactions in one request; inspect the
    /// returned failure list even on success.
    pub async fn batch_submit_transaction(
        &self,
        signed_txns: &[SignedTransaction],
    ) -> MeridianResult<BatchSubmitResult> {
        self.node.batch_submit_transaction(signed_txns).await
    }

    /// Simulates a single-signer transaction without committing it.
    pub async fn simulate_transaction(
        &self,
        raw_txn: &RawTransaction,
        signer_public_key: &[u8],
        options: SimulateOptions,
    ) -> MeridianResult<Vec<Transaction>> {
        self.node
            .simulate_transaction(raw_txn, signer_public_key, options)
            .await
    }

    /// Simulates a multi-agent or fee-payer transaction.
    pub async fn simulate_transaction_multi_agent(
        &self,
        raw_txn: &RawTransactionWithData,
        sender_public_key: &[u8],
        secondary_public_keys: &[Vec<u8>],
        fee_payer_public_key: Option<&[u8]>,
        options: SimulateOptions,
    ) -> MeridianResult<Vec<Transaction>> {
        self.node
            .simulate_transaction_multi_agent(
                raw_txn,
                sender_public_key,
                secondary_public_keys,
                fee_payer_public_key,
                options,
            )
            .await
    }

    /// Builds, signs with the collaborator signer, and submits in one call.
    ///
    /// For finer control use the three steps separately.
    pub async fn build_sign_and_submit<S: TransactionSigner + ?Sized>(
        &self,
        signer: &S,
        payload: TransactionPayload,
        options: TransactionOptions,
    ) -> MeridianResult<PendingTransaction> {
        let raw_txn = self
            .node
            .build_transaction(signer.address(), payload, options)
            .await?;
        let signed = signer.sign_transaction(&raw_txn)?;
        self.node.submit_transaction(&signed).await
    }

    /// Gets a transaction record by hash; may still be pending.
    pub async fn transaction_by_hash(&self, hash: &HashValue) -> MeridianResult<Transaction> {
        self.node.transaction_by_hash(hash).await
    }

    /// Gets a committed transaction by ledger version.
    pub async fn transaction_by_version(&self, version: u64) -> MeridianResult<Transaction> {
        self.node.transaction_by_version(version).await
    }

    /// Waits for a transaction via the node's long-poll endpoint.
    pub async fn wait_transaction_by_hash(
        &self,
        hash: &HashValue,
    ) -> MeridianResult<Transaction> {
        self.node.wait_transaction_by_hash(hash).await
    }

    /// Polls until the transaction reaches a terminal state.
    pub async fn poll_for_transaction(
        &self,
        hash: &HashValue,
        options: PollOptions,
    ) -> MeridianResult<Transaction> {
        self.node.poll_for_transaction(hash, options).await
    }

    /// Polls a set of transactions; succeeds only when all commit.
    pub async fn poll_for_transactions(
        &self,
        hashes: &[HashValue],
        options: PollOptions,
    ) -> MeridianResult<()> {
        self.node.poll_for_transactions(hashes, options).await
    }

    /// Retrieves events by handle struct tag and field name.
    pub async fn events_by_handle(
        &self,
        account: AccountAddress,
        event_handle: &str,
        field_name: &str,
        start: Option<u64>,
        limit: Option<u64>,
    ) -> MeridianResult<Vec<Event>> {
        self.node
            .events_by_handle(account, event_handle, field_name, start, limit)
            .await
    }

    /// Retrieves events by numeric creation number.
    pub async fn events_by_creation_number(
        &self,
        account: AccountAddress,
        creation_number: u64,
        start: Option<u64>,
        limit: Option<u64>,
    ) -> MeridianResult<Vec<Event>> {
        self.node
            .events_by_creation_number(account, creation_number, start, limit)
            .await
    }

    /// Invokes a read-only view function.
    pub async fn view(
        &self,
        request: &ViewFunction,
        ledger_version: Option<u64>,
    ) -> MeridianResult<Vec<serde_json::Value>> {
        self.node.view(request, ledger_version).await
    }

    /// Invokes a view function and decodes the result into a caller-supplied
    /// shape.
    pub async fn view_with_response<T: DeserializeOwned>(
        &self,
        request: &ViewFunction,
        ledger_version: Option<u64>,
    ) -> MeridianResult<T> {
        self.node.view_with_response(request, ledger_version).await
    }

    // === Collaborator delegation ===

    /// Funds an account from the faucet.
    ///
    /// # Errors
    ///
    /// Fails with an unconfigured error when the network has no faucet.
    pub async fn fund(&self, address: AccountAddress, amount: u64) -> MeridianResult<Vec<String>> {
        self.faucet
            .as_ref()
            .ok_or(MeridianError::Unconfigured("faucet"))?
            .fund(address, amount)
            .await
    }

    /// Executes a raw GraphQL query against the indexer.
    ///
    /// # Errors
    ///
    /// Fails with an unconfigured error when the network has no indexer.
    pub async fn query_indexer(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> MeridianResult<serde_json::Value> {
        self.indexer
            .as_ref()
            .ok_or(MeridianError::Unconfigured("indexer"))?
            .query(query, variables)
            .await
    }
}
