use crate::client::builder::MeridianClientBuilder;
use crate::client::config::MeridianNetwork;
use crate::client::options::{PollOptions, SimulateOptions, TransactionOptions};
use crate::MeridianClient;
use meridian_sdk_types::api_types::address::AccountAddress;
use meridian_sdk_types::api_types::chain_id::ChainId;
use meridian_sdk_types::api_types::hash::HashValue;
use meridian_sdk_types::api_types::payload::{EntryFunction, TransactionPayload, ViewFunction};
use meridian_sdk_types::api_types::transaction::SignedTransaction;
use meridian_sdk_types::api_types::transaction_authenticator::TransactionAuthenticator;
use meridian_sdk_types::MeridianError;
use std::time::{Duration, Instant};
use url::Url;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_network(server: &MockServer, chain_id: Option<ChainId>) -> MeridianNetwork {
    MeridianNetwork::localnet()
        .with_name("mocknet")
        .with_rest_url(Url::parse(&server.uri()).unwrap())
        .with_indexer_url(None)
        .with_faucet_url(None)
        .with_chain_id(chain_id)
}

fn mock_client(server: &MockServer, chain_id: Option<ChainId>) -> MeridianClient {
    MeridianClientBuilder::new(mock_network(server, chain_id))
        .build()
        .unwrap()
}

fn transfer_payload() -> TransactionPayload {
    EntryFunction::new(
        "0x1::coin".parse().unwrap(),
        "transfer",
        vec![],
        vec![
            bcs::to_bytes(&AccountAddress::ONE).unwrap(),
            bcs::to_bytes(&1000u64).unwrap(),
        ],
    )
    .into()
}

fn test_hash(byte: u8) -> HashValue {
    let mut bytes = [0u8; 32];
    bytes[31] = byte;
    HashValue::new(bytes)
}

fn events_json(start: u64, count: u64) -> serde_json::Value {
    let events: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "type": "0x1::coin::TransferEvent",
                "guid": {
                    "creation_number": "1",
                    "account_address": AccountAddress::ZERO.to_hex(),
                },
                "sequence_number": (start + i).to_string(),
                "data": {"amount": ((start + i) * 100).to_string()},
            })
        })
        .collect();
    serde_json::Value::Array(events)
}

fn events_path() -> String {
    format!("/v1/accounts/{}/events/0x2/transfer", AccountAddress::ZERO)
}

fn node_info_json(chain_id: u8) -> serde_json::Value {
    serde_json::json!({
        "chain_id": chain_id,
        "epoch": "10",
        "ledger_version": "12345",
        "oldest_ledger_version": "0",
        "ledger_timestamp": "1000000",
        "node_role": "full_node",
        "block_height": "5000",
        "oldest_block_height": "0"
    })
}

fn dummy_signed_transaction(sequence_number: u64) -> SignedTransaction {
    let raw_txn = meridian_sdk_types::api_types::transaction::RawTransaction::new(
        AccountAddress::ONE,
        sequence_number,
        transfer_payload(),
        100_000,
        100,
        1_700_000_000,
        ChainId::Testnet,
    );
    SignedTransaction::new(raw_txn, TransactionAuthenticator::simulation(vec![0u8; 32]))
}

// === Events pagination ===

#[tokio::test]
async fn test_events_by_handle_concurrent_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(events_path()))
        .and(query_param("start", "0"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(events_json(0, 100)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(events_path()))
        .and(query_param("start", "100"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(events_json(100, 50)))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Localnet));
    let events = client
        .events_by_handle(AccountAddress::ZERO, "0x2", "transfer", Some(0), Some(150))
        .await
        .unwrap();

    assert_eq!(events.len(), 150);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.sequence_number(), i as u64);
    }
}

#[tokio::test]
async fn test_events_by_handle_default_page_size() {
    let server = MockServer::start().await;

    // No start parameter: the server decides the window and the default
    // limit of 100 applies.
    Mock::given(method("GET"))
        .and(path(events_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(events_json(0, 100)))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Localnet));
    let events = client
        .events_by_handle(AccountAddress::ZERO, "0x2", "transfer", None, None)
        .await
        .unwrap();

    assert_eq!(events.len(), 100);
    assert_eq!(events[99].sequence_number(), 99);
}

#[tokio::test]
async fn test_events_by_handle_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(events_path()))
        .and(query_param("start", "50"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(events_json(50, 5)))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Localnet));
    let events = client
        .events_by_handle(AccountAddress::ZERO, "0x2", "transfer", Some(50), Some(5))
        .await
        .unwrap();

    assert_eq!(events.len(), 5);
    assert_eq!(events[0].sequence_number(), 50);
    assert_eq!(events[4].sequence_number(), 54);
}

#[tokio::test]
async fn test_events_short_page_signals_exhaustion() {
    let server = MockServer::start().await;

    // First page is full, second page only has 20 of the 100 requested
    // records: the fetcher must stop and return the gathered prefix.
    Mock::given(method("GET"))
        .and(path(events_path()))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(events_json(0, 100)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(events_path()))
        .and(query_param("start", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(events_json(100, 20)))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Localnet));
    let events = client
        .events_by_handle(AccountAddress::ZERO, "0x2", "transfer", Some(0), Some(200))
        .await
        .unwrap();

    assert_eq!(events.len(), 120);
    assert_eq!(events[119].sequence_number(), 119);
}

#[tokio::test]
async fn test_events_by_creation_number() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/v1/accounts/{}/events/123",
            AccountAddress::ZERO
        )))
        .and(query_param("start", "50"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(events_json(50, 5)))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Localnet));
    let events = client
        .events_by_creation_number(AccountAddress::ZERO, 123, Some(50), Some(5))
        .await
        .unwrap();

    assert_eq!(events.len(), 5);
    assert_eq!(events[0].sequence_number(), 50);
}

// === Confirmation poller ===

#[tokio::test]
async fn test_poll_for_transactions_times_out_within_budget() {
    let server = MockServer::start().await;

    // The backend never learns about the transactions: every lookup is a
    // 404, which the poller treats as "still pending".
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "transaction not found",
            "error_code": "transaction_not_found"
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Localnet));
    let options = PollOptions {
        poll_period: Duration::from_millis(2),
        poll_timeout: Duration::from_millis(10),
    };

    let start = Instant::now();
    let result = client
        .poll_for_transactions(&[test_hash(1), test_hash(2)], options)
        .await;
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(9), "returned too early: {elapsed:?}");
    assert!(elapsed < Duration::from_millis(20), "overshot budget: {elapsed:?}");
    assert!(matches!(result, Err(MeridianError::PollTimeout { .. })));
}

#[tokio::test]
async fn test_poll_reports_non_not_found_error_immediately() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "message": "internal error"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Localnet));
    let options = PollOptions {
        poll_period: Duration::from_millis(2),
        poll_timeout: Duration::from_secs(5),
    };

    let start = Instant::now();
    let result = client.poll_for_transaction(&test_hash(1), options).await;

    assert!(start.elapsed() < Duration::from_secs(1));
    match result {
        Err(MeridianError::Api { status_code, .. }) => assert_eq!(status_code, 500),
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_poll_returns_committed_transaction() {
    let server = MockServer::start().await;

    let hash = test_hash(3);
    Mock::given(method("GET"))
        .and(path(format!("/v1/transactions/by_hash/{}", hash)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "type": "user_transaction",
            "hash": hash.to_hex(),
            "version": "12345",
            "success": true,
            "vm_status": "Executed successfully",
            "gas_used": "55"
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Localnet));
    let txn = client
        .poll_for_transaction(&hash, PollOptions::default())
        .await
        .unwrap();

    assert!(txn.is_success());
    assert_eq!(txn.version.unwrap().as_u64(), 12345);
}

#[tokio::test]
async fn test_poll_continues_past_pending_record() {
    let server = MockServer::start().await;

    let hash = test_hash(4);
    // The mempool already knows the transaction but it never commits.
    Mock::given(method("GET"))
        .and(path(format!("/v1/transactions/by_hash/{}", hash)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "type": "pending_transaction",
            "hash": hash.to_hex()
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Localnet));
    let options = PollOptions {
        poll_period: Duration::from_millis(2),
        poll_timeout: Duration::from_millis(10),
    };
    let result = client.poll_for_transaction(&hash, options).await;
    assert!(matches!(result, Err(MeridianError::PollTimeout { .. })));
}

#[tokio::test]
async fn test_wait_transaction_by_hash_uses_wait_endpoint() {
    let server = MockServer::start().await;

    let hash = test_hash(5);
    Mock::given(method("GET"))
        .and(path(format!("/v1/transactions/wait_by_hash/{}", hash)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "type": "user_transaction",
            "hash": hash.to_hex(),
            "version": "7",
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Localnet));
    let txn = client.wait_transaction_by_hash(&hash).await.unwrap();
    assert!(txn.is_committed());
}

// === Chain metadata cache ===

#[tokio::test]
async fn test_get_chain_id_uses_configured_value_without_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(node_info_json(2)))
        .expect(0)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Testnet));
    let chain_id = client.get_chain_id().await.unwrap();
    assert_eq!(chain_id, ChainId::Testnet);
}

#[tokio::test]
async fn test_get_chain_id_fetches_once_across_concurrent_calls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(node_info_json(42)))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    let fetches = (0..8).map(|_| client.get_chain_id());
    let results = futures::future::join_all(fetches).await;
    for result in results {
        assert_eq!(result.unwrap(), ChainId::Other(42));
    }
}

#[tokio::test]
async fn test_get_chain_id_retries_after_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1"))
        .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
            "message": "unavailable"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(node_info_json(4)))
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    assert!(client.get_chain_id().await.is_err());
    // The cache stays empty after a failure, so the next call retries.
    assert_eq!(client.get_chain_id().await.unwrap(), ChainId::Localnet);
}

// === Transaction building ===

#[tokio::test]
async fn test_build_transaction_resolves_from_chain() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/accounts/{}", AccountAddress::ONE)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sequence_number": "17",
            "authentication_key": "0x0000000000000000000000000000000000000001"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/estimate_gas_price"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "deprioritized_gas_estimate": 50,
            "gas_estimate": 120,
            "prioritized_gas_estimate": 180
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Testnet));
    let options = TransactionOptions {
        estimate_gas_unit_price: true,
        ..Default::default()
    };
    let raw_txn = client
        .build_transaction(AccountAddress::ONE, transfer_payload(), options)
        .await
        .unwrap();

    assert_eq!(raw_txn.sender, AccountAddress::ONE);
    assert_eq!(raw_txn.sequence_number, 17);
    assert_eq!(raw_txn.gas_unit_price, 120);
    assert_eq!(raw_txn.max_gas_amount, crate::client::rest_api::DEFAULT_MAX_GAS_AMOUNT);
    assert_eq!(raw_txn.chain_id, ChainId::Testnet);
}

#[tokio::test]
async fn test_build_transaction_explicit_options_win() {
    let server = MockServer::start().await;

    // Explicit values resolve everything, so no endpoint may be hit.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Testnet));
    let options = TransactionOptions {
        sequence_number: Some(99),
        max_gas_amount: Some(50_000),
        gas_unit_price: Some(250),
        expiration_seconds: Some(120),
        ..Default::default()
    };
    let raw_txn = client
        .build_transaction(AccountAddress::ONE, transfer_payload(), options)
        .await
        .unwrap();

    assert_eq!(raw_txn.sequence_number, 99);
    assert_eq!(raw_txn.max_gas_amount, 50_000);
    assert_eq!(raw_txn.gas_unit_price, 250);
}

#[tokio::test]
async fn test_build_transaction_prioritized_gas_estimate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/estimate_gas_price"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "gas_estimate": 120,
            "prioritized_gas_estimate": 180
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Testnet));
    let options = TransactionOptions {
        sequence_number: Some(0),
        estimate_prioritized_gas_unit_price: true,
        ..Default::default()
    };
    let raw_txn = client
        .build_transaction(AccountAddress::ONE, transfer_payload(), options)
        .await
        .unwrap();
    assert_eq!(raw_txn.gas_unit_price, 180);
}

#[tokio::test]
async fn test_build_multi_agent_without_signers_is_usage_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Testnet));
    let result = client
        .build_transaction_multi_agent(
            AccountAddress::ONE,
            transfer_payload(),
            TransactionOptions::default(),
        )
        .await;

    assert!(matches!(result, Err(MeridianError::Usage(_))));
}

#[tokio::test]
async fn test_build_multi_agent_with_fee_payer() {
    let server = MockServer::start().await;
    let client = mock_client(&server, Some(ChainId::Testnet));

    let fee_payer = AccountAddress::from_hex("0xfee").unwrap();
    let options = TransactionOptions {
        sequence_number: Some(3),
        fee_payer: Some(fee_payer),
        ..Default::default()
    };
    let raw_txn = client
        .build_transaction_multi_agent(AccountAddress::ONE, transfer_payload(), options)
        .await
        .unwrap();

    assert_eq!(raw_txn.fee_payer_address(), Some(fee_payer));
    assert_eq!(raw_txn.raw_txn().sequence_number, 3);
}

#[tokio::test]
async fn test_build_rejects_fee_payer_on_single_signer_build() {
    let server = MockServer::start().await;
    let client = mock_client(&server, Some(ChainId::Testnet));

    let options = TransactionOptions {
        sequence_number: Some(0),
        fee_payer: Some(AccountAddress::ZERO),
        ..Default::default()
    };
    let result = client
        .build_transaction(AccountAddress::ONE, transfer_payload(), options)
        .await;
    assert!(matches!(result, Err(MeridianError::Usage(_))));
}

#[tokio::test]
async fn test_build_rejects_view_function_payload() {
    let server = MockServer::start().await;
    let client = mock_client(&server, Some(ChainId::Testnet));

    let view = ViewFunction::new("0x1::coin".parse().unwrap(), "balance", vec![], vec![]);
    let options = TransactionOptions {
        sequence_number: Some(0),
        ..Default::default()
    };
    let result = client
        .build_transaction(AccountAddress::ONE, view.into(), options)
        .await;
    assert!(matches!(result, Err(MeridianError::Usage(_))));
}

// === Submission ===

#[tokio::test]
async fn test_submit_transaction() {
    let server = MockServer::start().await;

    let hash = test_hash(9);
    Mock::given(method("POST"))
        .and(path("/v1/transactions"))
        .and(header(
            "content-type",
            "application/x.meridian.signed_transaction+bcs",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "hash": hash.to_hex(),
            "sender": AccountAddress::ONE.to_hex(),
            "sequence_number": "7",
            "max_gas_amount": "100000",
            "gas_unit_price": "100",
            "expiration_timestamp_secs": "1700000000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Testnet));
    let pending = client
        .submit_transaction(&dummy_signed_transaction(7))
        .await
        .unwrap();

    assert_eq!(pending.hash, hash);
    assert_eq!(pending.sequence_number.as_u64(), 7);
}

#[tokio::test]
async fn test_batch_submit_reports_per_item_failures() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/transactions/batch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "transaction_failures": [
                {
                    "error": {"message": "invalid signature", "error_code": "vm_error"},
                    "transaction_index": 1
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Testnet));
    let txns = vec![
        dummy_signed_transaction(0),
        dummy_signed_transaction(1),
        dummy_signed_transaction(2),
    ];
    let result = client.batch_submit_transaction(&txns).await.unwrap();

    assert!(!result.all_accepted());
    assert_eq!(result.transaction_failures.len(), 1);
    assert_eq!(result.transaction_failures[0].transaction_index, 1);
}

#[tokio::test]
async fn test_batch_submit_empty_failure_list_means_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/transactions/batch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "transaction_failures": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Testnet));
    let txns = vec![dummy_signed_transaction(0), dummy_signed_transaction(1)];
    let result = client.batch_submit_transaction(&txns).await.unwrap();
    assert!(result.all_accepted());
}

#[tokio::test]
async fn test_simulate_transaction_passes_estimation_flags() {
    let server = MockServer::start().await;

    let hash = test_hash(6);
    Mock::given(method("POST"))
        .and(path("/v1/transactions/simulate"))
        .and(query_param("estimate_max_gas_amount", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "type": "user_transaction",
            "hash": hash.to_hex(),
            "version": "100",
            "success": true,
            "vm_status": "Executed successfully",
            "gas_used": "321"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Testnet));
    let raw_txn = dummy_signed_transaction(0).raw_txn;
    let options = SimulateOptions {
        estimate_max_gas_amount: true,
        ..Default::default()
    };
    let results = client
        .simulate_transaction(&raw_txn, &[0u8; 32], options)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert!(results[0].is_success());
    assert_eq!(results[0].gas_used.unwrap().as_u64(), 321);
}

#[tokio::test]
async fn test_simulate_multi_agent_checks_key_count() {
    let server = MockServer::start().await;
    let client = mock_client(&server, Some(ChainId::Testnet));

    let options = TransactionOptions {
        sequence_number: Some(0),
        additional_signers: vec![AccountAddress::ZERO],
        ..Default::default()
    };
    let raw_txn = client
        .build_transaction_multi_agent(AccountAddress::ONE, transfer_payload(), options)
        .await
        .unwrap();

    // One secondary address but no secondary key.
    let result = client
        .simulate_transaction_multi_agent(&raw_txn, &[0u8; 32], &[], None, SimulateOptions::default())
        .await;
    assert!(matches!(result, Err(MeridianError::Usage(_))));
}

// === View functions ===

#[tokio::test]
async fn test_view_with_typed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/view"))
        .and(header(
            "content-type",
            "application/x.meridian.view_function+bcs",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["1000000"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Testnet));
    let request = ViewFunction::new(
        "0x1::coin".parse().unwrap(),
        "balance",
        vec![],
        vec![bcs::to_bytes(&AccountAddress::ONE).unwrap()],
    );

    let (balance,): (String,) = client.view_with_response(&request, None).await.unwrap();
    assert_eq!(balance, "1000000");
}

#[tokio::test]
async fn test_view_decode_mismatch_names_function() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/view"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["1000000"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Testnet));
    let request = ViewFunction::new("0x1::coin".parse().unwrap(), "balance", vec![], vec![]);

    // Arity mismatch: one value cannot decode into a two-element shape.
    let result: Result<(String, String), _> = client.view_with_response(&request, None).await;
    match result {
        Err(MeridianError::Decode { context, .. }) => {
            assert!(context.contains("0x1::coin::balance"));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_view_at_ledger_version() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/view"))
        .and(query_param("ledger_version", "777"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["0"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Testnet));
    let request = ViewFunction::new("0x1::coin".parse().unwrap(), "balance", vec![], vec![]);
    let values = client.view(&request, Some(777)).await.unwrap();
    assert_eq!(values.len(), 1);
}

// === Error surface ===

#[tokio::test]
async fn test_transaction_by_hash_promotes_404() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "transaction not found",
            "error_code": "transaction_not_found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Testnet));
    let err = client.transaction_by_hash(&test_hash(1)).await.unwrap_err();
    assert!(err.is_not_found());
    match err {
        MeridianError::Api {
            status_code,
            error_code,
            ..
        } => {
            assert_eq!(status_code, 404);
            assert_eq!(error_code.as_deref(), Some("transaction_not_found"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_preserves_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Testnet));
    let err = client.info().await.unwrap_err();
    match err {
        MeridianError::Api {
            status_code,
            message,
            ..
        } => {
            assert_eq!(status_code, 502);
            assert_eq!(message, "bad gateway");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unconfigured_collaborators_error() {
    let server = MockServer::start().await;
    // mock_network strips the faucet and indexer URLs.
    let client = mock_client(&server, Some(ChainId::Testnet));

    let fund = client.fund(AccountAddress::ONE, 1000).await;
    assert!(matches!(fund, Err(MeridianError::Unconfigured("faucet"))));

    let query = client
        .query_indexer("query { ledger_infos { chain_id } }", serde_json::json!({}))
        .await;
    assert!(matches!(query, Err(MeridianError::Unconfigured("indexer"))));
}

#[tokio::test]
async fn test_health_check_passes_duration() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/-/healthy"))
        .and(query_param("duration_secs", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "meridian-node:ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some(ChainId::Testnet));
    let health = client.health_check(Some(5)).await.unwrap();
    assert_eq!(health.message, "meridian-node:ok");
}

#[tokio::test]
async fn test_indexer_query_passthrough() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("ledger_infos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"ledger_infos": [{"chain_id": 2}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let network = mock_network(&server, Some(ChainId::Testnet))
        .with_indexer_url(Some(Url::parse(&format!("{}/graphql", server.uri())).unwrap()));
    let client = MeridianClientBuilder::new(network).build().unwrap();

    let response = client
        .query_indexer("query { ledger_infos { chain_id } }", serde_json::json!({}))
        .await
        .unwrap();
    assert_eq!(response["data"]["ledger_infos"][0]["chain_id"], 2);
}
