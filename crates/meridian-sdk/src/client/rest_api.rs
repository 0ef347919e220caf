//! Node REST API client.
//!
//! [`MeridianNodeClient`] covers the full transaction lifecycle: request
//! defaulting and raw-transaction assembly, submission (single, batch,
//! simulate), confirmation polling, paginated event retrieval, and view
//! function invocation.

use crate::client::config::MeridianNetwork;
use crate::client::options::{PollOptions, SimulateOptions, TransactionOptions};
use futures::{pin_mut, stream, StreamExt};
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
use meridian_sdk_types::api_types::transaction_authenticator::{
    AccountAuthenticator, TransactionAuthenticator,
};
use meridian_sdk_types::api_types::transaction_response::{
    BatchSubmitResult, PendingTransaction, Transaction,
};
use meridian_sdk_types::headers::{
    CONTENT_TYPE_JSON, CONTENT_TYPE_SIGNED_TRANSACTION_BCS, CONTENT_TYPE_VIEW_FUNCTION_BCS,
};
use meridian_sdk_types::{MeridianError, MeridianResult};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tokio::sync::OnceCell;
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

/// Default maximum gas amount for built transactions.
pub const DEFAULT_MAX_GAS_AMOUNT: u64 = 100_000;
/// Default gas unit price: the network minimum.
pub const DEFAULT_GAS_UNIT_PRICE: u64 = 100;
/// Default transaction expiration window in seconds.
pub const DEFAULT_EXPIRATION_SECONDS: u64 = 30;

/// Page size the node serves for event queries.
const EVENTS_PAGE_SIZE: u64 = 100;
/// Cap on simultaneous in-flight page requests during event fan-out.
const MAX_CONCURRENT_PAGE_REQUESTS: usize = 8;

/// Client for the Meridian node REST API.
///
/// The chain id is the only state shared across concurrent calls: it is
/// written once (from configuration or the first successful node-info
/// fetch) and read-only afterwards. Everything else is stateless and safe
/// to call concurrently.
#[derive(Debug)]
pub struct MeridianNodeClient {
    pub(crate) network: MeridianNetwork,
    pub(crate) rest_client: ReqwestClient,
    chain_id: OnceCell<ChainId>,
}

impl MeridianNodeClient {
    /// Creates a node client over an already-configured HTTP client.
    ///
    /// Use `MeridianClientBuilder` instead of calling this directly.
    pub fn new(network: MeridianNetwork, rest_client: ReqwestClient) -> Self {
        Self {
            network,
            rest_client,
            chain_id: OnceCell::new(),
        }
    }

    /// Returns the network this client talks to.
    pub fn network(&self) -> &MeridianNetwork {
        &self.network
    }

    // === Node info ===

    /// Retrieves node info: chain id and current ledger state.
    pub async fn info(&self) -> MeridianResult<NodeInfo> {
        let url = self.build_url("")?;
        self.get_json(url, "node info").await
    }

    /// Checks node health. The node compares its latest ledger timestamp
    /// against `duration_secs` when provided, or its own default.
    pub async fn health_check(
        &self,
        duration_secs: Option<u64>,
    ) -> MeridianResult<HealthCheckResponse> {
        let mut url = self.build_url("-/healthy")?;
        if let Some(duration_secs) = duration_secs {
            url.query_pairs_mut()
                .append_pair("duration_secs", &duration_secs.to_string());
        }
        self.get_json(url, "health check").await
    }

    /// Retrieves the chain id of the network.
    ///
    /// A chain id supplied in the network configuration is returned without
    /// any network call. Otherwise the id is fetched once and cached for
    /// the lifetime of the client; concurrent first calls share a single
    /// in-flight fetch. A failed fetch leaves the cache empty so a later
    /// call can retry.
    pub async fn get_chain_id(&self) -> MeridianResult<ChainId> {
        if let Some(chain_id) = self.network.chain_id() {
            return Ok(chain_id);
        }
        self.chain_id
            .get_or_try_init(|| async {
                let info = self.info().await?;
                Ok::<ChainId, MeridianError>(info.chain_id())
            })
            .await
            .copied()
    }

    // === Accounts ===

    /// Retrieves account state (sequence number, authentication key),
    /// optionally at a specific ledger version.
    pub async fn account(
        &self,
        address: AccountAddress,
        ledger_version: Option<u64>,
    ) -> MeridianResult<AccountInfo> {
        let mut url = self.build_url(&format!("accounts/{}", address))?;
        if let Some(version) = ledger_version {
            url.query_pairs_mut()
                .append_pair("ledger_version", &version.to_string());
        }
        self.get_json(url, "account").await
    }

    // === Gas ===

    /// Retrieves the current gas price estimate from the network.
    pub async fn estimate_gas_price(&self) -> MeridianResult<GasEstimation> {
        let url = self.build_url("estimate_gas_price")?;
        self.get_json(url, "gas estimate").await
    }

    // === Transaction building ===

    /// Builds a fully-resolved single-signer raw transaction.
    ///
    /// Resolution precedence for each field: explicit option, then on-chain
    /// lookup (gas estimate when an estimation flag is set, account fetch
    /// for the sequence number), then the documented defaults. Performs one
    /// to three idempotent network reads depending on options and cache
    /// state.
    ///
    /// # Errors
    ///
    /// Fee-payer or additional-signer options are a usage error here; use
    /// [`Self::build_transaction_multi_agent`]. Any collaborator lookup
    /// failure aborts the build.
    pub async fn build_transaction(
        &self,
        sender: AccountAddress,
        payload: TransactionPayload,
        options: TransactionOptions,
    ) -> MeridianResult<RawTransaction> {
        if options.fee_payer.is_some() || !options.additional_signers.is_empty() {
            return Err(MeridianError::usage(
                "fee payer and additional signers require build_transaction_multi_agent",
            ));
        }
        self.resolve_raw_transaction(sender, payload, &options).await
    }

    /// Builds a multi-agent or fee-payer raw transaction.
    ///
    /// # Errors
    ///
    /// Returns a usage error, before any network call, unless the options
    /// carry at least one secondary signer or a fee payer.
    pub async fn build_transaction_multi_agent(
        &self,
        sender: AccountAddress,
        payload: TransactionPayload,
        options: TransactionOptions,
    ) -> MeridianResult<RawTransactionWithData> {
        if options.fee_payer.is_none() && options.additional_signers.is_empty() {
            return Err(MeridianError::usage(
                "multi-agent transactions need a fee payer and/or additional signers",
            ));
        }
        let secondary_signer_addresses = options.additional_signers.clone();
        let fee_payer = options.fee_payer;
        let raw_txn = self.resolve_raw_transaction(sender, payload, &options).await?;

        Ok(match fee_payer {
            Some(fee_payer_address) => RawTransactionWithData::MultiAgentWithFeePayer {
                raw_txn,
                secondary_signer_addresses,
                fee_payer_address,
            },
            None => RawTransactionWithData::MultiAgent {
                raw_txn,
                secondary_signer_addresses,
            },
        })
    }

    /// Shared defaulting logic for both build variants.
    async fn resolve_raw_transaction(
        &self,
        sender: AccountAddress,
        payload: TransactionPayload,
        options: &TransactionOptions,
    ) -> MeridianResult<RawTransaction> {
        if !payload.is_submittable() {
            return Err(MeridianError::usage(
                "view function payloads execute via view(), not as transactions",
            ));
        }

        let chain_id = match options.chain_id {
            Some(chain_id) => chain_id,
            None => self.get_chain_id().await?,
        };

        let gas_unit_price = match options.gas_unit_price {
            Some(price) => price,
            None if options.wants_gas_estimate() => {
                let estimation = self.estimate_gas_price().await?;
                if options.estimate_prioritized_gas_unit_price {
                    estimation.prioritized()
                } else {
                    estimation.recommended()
                }
            }
            None => DEFAULT_GAS_UNIT_PRICE,
        };

        let sequence_number = match options.sequence_number {
            Some(sequence_number) => sequence_number,
            None => self.account(sender, None).await?.sequence_number(),
        };

        let max_gas_amount = options.max_gas_amount.unwrap_or(DEFAULT_MAX_GAS_AMOUNT);
        let expiration_timestamp_secs = now_secs()
            .saturating_add(options.expiration_seconds.unwrap_or(DEFAULT_EXPIRATION_SECONDS));

        Ok(RawTransaction::new(
            sender,
            sequence_number,
            payload,
            max_gas_amount,
            gas_unit_price,
            expiration_timestamp_secs,
            chain_id,
        ))
    }

    // === Submission ===

    /// Submits one already-signed transaction.
    pub async fn submit_transaction(
        &self,
        signed_txn: &SignedTransaction,
    ) -> MeridianResult<PendingTransaction> {
        let url = self.build_url("transactions")?;
        let body = signed_txn.to_bytes()?;
        debug!(sender = %signed_txn.sender(), sequence_number = signed_txn.sequence_number(), "submitting transaction");
        let response = self
            .rest_client
            .post(url)
            .header(CONTENT_TYPE, CONTENT_TYPE_SIGNED_TRANSACTION_BCS)
            .header(ACCEPT, CONTENT_TYPE_JSON)
            .body(body)
            .send()
            .await?;
        Self::handle_response(response, "submit response").await
    }

    /// Submits many signed transactions in one request.
    ///
    /// The returned failure list identifies each rejected entry by its
    /// index in `signed_txns`; an empty list means full success. The call
    /// succeeding does not imply every entry was accepted, so callers must
    /// inspect the list.
    pub async fn batch_submit_transaction(
        &self,
        signed_txns: &[SignedTransaction],
    ) -> MeridianResult<BatchSubmitResult> {
        let url = self.build_url("transactions/batch")?;
        let body = bcs::to_bytes(signed_txns)?;
        debug!(count = signed_txns.len(), "submitting transaction batch");
        let response = self
            .rest_client
            .post(url)
            .header(CONTENT_TYPE, CONTENT_TYPE_SIGNED_TRANSACTION_BCS)
            .header(ACCEPT, CONTENT_TYPE_JSON)
            .body(body)
            .send()
            .await?;
        Self::handle_response(response, "batch submit response").await
    }

    /// Simulates a single-signer transaction without committing it.
    ///
    /// Simulation never needs a real signature: the request carries a
    /// zero-signature authenticator built from the signer's public key.
    /// Estimation flags ride as query parameters and the node fills the
    /// corresponding fields of the result.
    pub async fn simulate_transaction(
        &self,
        raw_txn: &RawTransaction,
        signer_public_key: &[u8],
        options: SimulateOptions,
    ) -> MeridianResult<Vec<Transaction>> {
        let signed = SignedTransaction::new(
            raw_txn.clone(),
            TransactionAuthenticator::simulation(signer_public_key.to_vec()),
        );
        self.simulate_signed(&signed, options).await
    }

    /// Simulates a multi-agent or fee-payer transaction without committing
    /// it.
    ///
    /// One public key is required per secondary signer address. A missing
    /// fee-payer key is replaced with an all-zero key, which the node
    /// accepts for simulation.
    pub async fn simulate_transaction_multi_agent(
        &self,
        raw_txn: &RawTransactionWithData,
        sender_public_key: &[u8],
        secondary_public_keys: &[Vec<u8>],
        fee_payer_public_key: Option<&[u8]>,
        options: SimulateOptions,
    ) -> MeridianResult<Vec<Transaction>> {
        let secondary_addresses = raw_txn.secondary_signer_addresses().to_vec();
        if secondary_public_keys.len() != secondary_addresses.len() {
            return Err(MeridianError::usage(format!(
                "expected {} secondary public keys, got {}",
                secondary_addresses.len(),
                secondary_public_keys.len()
            )));
        }

        let sender = AccountAuthenticator::simulation(sender_public_key.to_vec());
        let secondary_signers = secondary_public_keys
            .iter()
            .map(|key| AccountAuthenticator::simulation(key.clone()))
            .collect();

        let authenticator = match raw_txn.fee_payer_address() {
            Some(fee_payer_address) => TransactionAuthenticator::fee_payer(
                sender,
                secondary_addresses,
                secondary_signers,
                fee_payer_address,
                AccountAuthenticator::simulation(
                    fee_payer_public_key
                        .map(|key| key.to_vec())
                        .unwrap_or_else(|| vec![0u8; 32]),
                ),
            ),
            None => {
                TransactionAuthenticator::multi_agent(sender, secondary_addresses, secondary_signers)
            }
        };

        let signed = SignedTransaction::new(raw_txn.raw_txn().clone(), authenticator);
        self.simulate_signed(&signed, options).await
    }

    async fn simulate_signed(
        &self,
        signed_txn: &SignedTransaction,
        options: SimulateOptions,
    ) -> MeridianResult<Vec<Transaction>> {
        let mut url = self.build_url("transactions/simulate")?;
        {
            let mut query = url.query_pairs_mut();
            if options.estimate_gas_unit_price {
                query.append_pair("estimate_gas_unit_price", "true");
            }
            if options.estimate_max_gas_amount {
                query.append_pair("estimate_max_gas_amount", "true");
            }
            if options.estimate_prioritized_gas_unit_price {
                query.append_pair("estimate_prioritized_gas_unit_price", "true");
            }
        }
        let body = signed_txn.to_bytes()?;
        let response = self
            .rest_client
            .post(url)
            .header(CONTENT_TYPE, CONTENT_TYPE_SIGNED_TRANSACTION_BCS)
            .header(ACCEPT, CONTENT_TYPE_JSON)
            .body(body)
            .send()
            .await?;
        Self::handle_response(response, "simulation response").await
    }

    // === Transaction lookup and confirmation ===

    /// Gets a transaction record by hash. The record may still be pending.
    ///
    /// A 404 here is a hard error; only the poller treats it as "still
    /// pending".
    pub async fn transaction_by_hash(&self, hash: &HashValue) -> MeridianResult<Transaction> {
        let url = self.build_url(&format!("transactions/by_hash/{}", hash))?;
        self.get_json(url, "transaction by hash").await
    }

    /// Gets a committed transaction by ledger version.
    pub async fn transaction_by_version(&self, version: u64) -> MeridianResult<Transaction> {
        let url = self.build_url(&format!("transactions/by_version/{}", version))?;
        self.get_json(url, "transaction by version").await
    }

    /// Waits for a transaction via the node's long-poll endpoint.
    ///
    /// Issues a single long-lived request; the node holds it open until the
    /// transaction resolves or the node's own limit expires. No client-side
    /// polling.
    pub async fn wait_transaction_by_hash(&self, hash: &HashValue) -> MeridianResult<Transaction> {
        let url = self.build_url(&format!("transactions/wait_by_hash/{}", hash))?;
        self.get_json(url, "wait by hash").await
    }

    /// Polls until the transaction reaches a terminal on-chain state.
    ///
    /// The deadline is computed once from a monotonic clock at entry. Each
    /// iteration fetches the record by hash: a 404 means "not yet known"
    /// and polling continues; a pending record continues after one period;
    /// any other error is returned immediately. Once the deadline elapses
    /// no further request is issued and a [`MeridianError::PollTimeout`] is
    /// returned.
    pub async fn poll_for_transaction(
        &self,
        hash: &HashValue,
        options: PollOptions,
    ) -> MeridianResult<Transaction> {
        let deadline = Instant::now() + options.poll_timeout;
        loop {
            match self.transaction_by_hash(hash).await {
                Ok(txn) if txn.is_committed() => return Ok(txn),
                Ok(_) => {}
                Err(err) if err.is_not_found() => {}
                Err(err) => return Err(err),
            }
            if Instant::now() >= deadline {
                warn!(%hash, timeout = ?options.poll_timeout, "transaction not committed before poll deadline");
                return Err(MeridianError::PollTimeout {
                    hash: hash.to_hex(),
                    timeout: options.poll_timeout,
                });
            }
            sleep(options.poll_period).await;
        }
    }

    /// Polls a set of transactions; succeeds only when all of them commit.
    ///
    /// Same state machine as [`Self::poll_for_transaction`], applied to the
    /// shrinking set of not-yet-committed hashes under one shared deadline.
    pub async fn poll_for_transactions(
        &self,
        hashes: &[HashValue],
        options: PollOptions,
    ) -> MeridianResult<()> {
        let deadline = Instant::now() + options.poll_timeout;
        let mut remaining: Vec<HashValue> = hashes.to_vec();
        loop {
            let mut still_pending = Vec::with_capacity(remaining.len());
            for hash in &remaining {
                match self.transaction_by_hash(hash).await {
                    Ok(txn) if txn.is_committed() => {}
                    Ok(_) => still_pending.push(*hash),
                    Err(err) if err.is_not_found() => still_pending.push(*hash),
                    Err(err) => return Err(err),
                }
            }
            remaining = still_pending;
            if remaining.is_empty() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                warn!(remaining = remaining.len(), timeout = ?options.poll_timeout, "transactions not committed before poll deadline");
                return Err(MeridianError::PollTimeout {
                    hash: remaining
                        .iter()
                        .map(HashValue::to_hex)
                        .collect::<Vec<_>>()
                        .join(","),
                    timeout: options.poll_timeout,
                });
            }
            sleep(options.poll_period).await;
        }
    }

    // === Events ===

    /// Retrieves events by event-handle struct tag and field name.
    ///
    /// `start = None` lets the server pick the window (most recent);
    /// `limit = None` uses the server default of 100.
    pub async fn events_by_handle(
        &self,
        account: AccountAddress,
        event_handle: &str,
        field_name: &str,
        start: Option<u64>,
        limit: Option<u64>,
    ) -> MeridianResult<Vec<Event>> {
        let path = format!(
            "accounts/{}/events/{}/{}",
            account,
            urlencoding::encode(event_handle),
            field_name
        );
        self.paginated_events(&path, start, limit).await
    }

    /// Retrieves events by numeric creation number.
    pub async fn events_by_creation_number(
        &self,
        account: AccountAddress,
        creation_number: u64,
        start: Option<u64>,
        limit: Option<u64>,
    ) -> MeridianResult<Vec<Event>> {
        let path = format!("accounts/{}/events/{}", account, creation_number);
        self.paginated_events(&path, start, limit).await
    }

    /// Fetches `[start, start + limit)` from a paginated events endpoint.
    ///
    /// Ranges beyond one page are split into fixed-size sub-ranges fetched
    /// concurrently (at most [`MAX_CONCURRENT_PAGE_REQUESTS`] in flight) and
    /// reassembled in ascending-start order; the result is indistinguishable
    /// from a sequential fetch regardless of completion order. A short page
    /// means the stream is exhausted: later sub-ranges are dropped and the
    /// gathered prefix is returned.
    async fn paginated_events(
        &self,
        path: &str,
        start: Option<u64>,
        limit: Option<u64>,
    ) -> MeridianResult<Vec<Event>> {
        let limit = limit.unwrap_or(EVENTS_PAGE_SIZE);

        // Without a start offset there is no anchor to fan out from; the
        // server decides the window.
        let Some(start) = start else {
            return self.events_page(path, None, Some(limit)).await;
        };
        if limit <= EVENTS_PAGE_SIZE {
            return self.events_page(path, Some(start), Some(limit)).await;
        }

        let pages: Vec<(u64, u64)> = (0..limit)
            .step_by(EVENTS_PAGE_SIZE as usize)
            .map(|offset| (start + offset, EVENTS_PAGE_SIZE.min(limit - offset)))
            .collect();
        debug!(start, limit, pages = pages.len(), "fanning out event page fetches");

        let fetches = pages.into_iter().map(|(page_start, page_limit)| async move {
            let events = self.events_page(path, Some(page_start), Some(page_limit)).await?;
            Ok::<(Vec<Event>, u64), MeridianError>((events, page_limit))
        });
        let page_stream = stream::iter(fetches).buffered(MAX_CONCURRENT_PAGE_REQUESTS);
        pin_mut!(page_stream);

        let mut events = Vec::with_capacity(limit as usize);
        while let Some(result) = page_stream.next().await {
            let (page, requested) = result?;
            let exhausted = (page.len() as u64) < requested;
            events.extend(page);
            if exhausted {
                // Dropping the stream stops issuing the remaining sub-ranges.
                warn!(gathered = events.len(), requested = limit, "event stream exhausted before requested limit");
                break;
            }
        }
        Ok(events)
    }

    async fn events_page(
        &self,
        path: &str,
        start: Option<u64>,
        limit: Option<u64>,
    ) -> MeridianResult<Vec<Event>> {
        let mut url = self.build_url(path)?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(start) = start {
                query.append_pair("start", &start.to_string());
            }
            if let Some(limit) = limit {
                query.append_pair("limit", &limit.to_string());
            }
        }
        self.get_json(url, "events").await
    }

    // === View functions ===

    /// Invokes a read-only view function, returning its raw JSON results.
    ///
    /// The request body is BCS-encoded and marked with the binary view
    /// content type.
    pub async fn view(
        &self,
        request: &ViewFunction,
        ledger_version: Option<u64>,
    ) -> MeridianResult<Vec<serde_json::Value>> {
        let mut url = self.build_url("view")?;
        if let Some(version) = ledger_version {
            url.query_pairs_mut()
                .append_pair("ledger_version", &version.to_string());
        }
        let body = bcs::to_bytes(request)?;
        let response = self
            .rest_client
            .post(url)
            .header(CONTENT_TYPE, CONTENT_TYPE_VIEW_FUNCTION_BCS)
            .header(ACCEPT, CONTENT_TYPE_JSON)
            .body(body)
            .send()
            .await?;
        Self::handle_response(response, "view response").await
    }

    /// Invokes a view function and decodes the result array into a
    /// caller-supplied shape.
    ///
    /// # Errors
    ///
    /// Returns a decode error naming the function if the response arity or
    /// structure does not match `T`.
    pub async fn view_with_response<T: DeserializeOwned>(
        &self,
        request: &ViewFunction,
        ledger_version: Option<u64>,
    ) -> MeridianResult<T> {
        let values = self.view(request, ledger_version).await?;
        serde_json::from_value(serde_json::Value::Array(values)).map_err(|e| {
            MeridianError::decode(
                format!("view response for {}::{}", request.module, request.function),
                e.to_string(),
            )
        })
    }

    // === Helpers ===

    fn build_url(&self, path: &str) -> MeridianResult<Url> {
        if path.is_empty() {
            Ok(self.network.rest_url().join("v1")?)
        } else {
            Ok(self.network.rest_url().join("v1/")?.join(path)?)
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &'static str,
    ) -> MeridianResult<T> {
        let response = self
            .rest_client
            .get(url)
            .header(ACCEPT, CONTENT_TYPE_JSON)
            .send()
            .await?;
        Self::handle_response(response, context).await
    }

    /// Decodes a 2xx body into `T`; preserves status and body for anything
    /// else.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
        context: &str,
    ) -> MeridianResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return serde_json::from_str(&body)
                .map_err(|e| MeridianError::decode(context, e.to_string()));
        }

        let (message, error_code) = match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(parsed) => (
                parsed
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or(&body)
                    .to_string(),
                parsed
                    .get("error_code")
                    .and_then(|v| v.as_str())
                    .map(ToString::to_string),
            ),
            Err(_) => (body, None),
        };
        Err(MeridianError::Api {
            status_code: status.as_u16(),
            message,
            error_code,
        })
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs()
}
