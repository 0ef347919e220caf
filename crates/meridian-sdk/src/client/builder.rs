use crate::client::config::MeridianNetwork;
use crate::client::faucet::MeridianFaucetClient;
use crate::client::indexer::MeridianIndexerClient;
use crate::client::rest_api::MeridianNodeClient;
use crate::MeridianClient;
use meridian_sdk_types::headers::X_MERIDIAN_CLIENT;
use meridian_sdk_types::{MeridianError, MeridianResult};
use reqwest::{
    header::{self, HeaderMap, HeaderName, HeaderValue},
    Client as ReqwestClient,
};
use std::str::FromStr;
use std::time::Duration;

const X_MERIDIAN_SDK_HEADER_VALUE: &str = concat!("meridian-rust-sdk/", env!("CARGO_PKG_VERSION"));
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 5;

/// Builder for [`MeridianClient`].
///
/// Collects the network, default headers, timeout, and optionally a single
/// pre-built HTTP transport. Supplying a second transport override is a
/// construction error.
pub struct MeridianClientBuilder {
    network: MeridianNetwork,
    timeout: Duration,
    headers: HeaderMap,
    http_client: Option<ReqwestClient>,
}

impl MeridianClientBuilder {
    /// Creates a builder for the given network.
    pub fn new(network: MeridianNetwork) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(X_MERIDIAN_CLIENT),
            HeaderValue::from_static(X_MERIDIAN_SDK_HEADER_VALUE),
        );

        Self {
            network,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            headers,
            http_client: None,
        }
    }

    pub fn network(mut self, network: MeridianNetwork) -> Self {
        self.network = network;
        self
    }

    /// Sets the request timeout applied when the builder constructs the
    /// transport. Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a default header to every request.
    pub fn header(mut self, header_key: &str, header_val: &str) -> MeridianResult<Self> {
        let name = HeaderName::from_str(header_key)
            .map_err(|e| MeridianError::usage(format!("invalid header name: {e}")))?;
        let value = HeaderValue::from_str(header_val)
            .map_err(|e| MeridianError::usage(format!("invalid header value: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Authenticates every request with a bearer API key.
    pub fn api_key(mut self, api_key: &str) -> MeridianResult<Self> {
        let value = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| MeridianError::usage(format!("invalid api key: {e}")))?;
        self.headers.insert(header::AUTHORIZATION, value);
        Ok(self)
    }

    /// Supplies a pre-built HTTP transport instead of letting the builder
    /// construct one.
    ///
    /// # Errors
    ///
    /// At most one transport override is accepted; a second call is a usage
    /// error.
    pub fn http_client(mut self, http_client: ReqwestClient) -> MeridianResult<Self> {
        if self.http_client.is_some() {
            return Err(MeridianError::usage(
                "only one http client override is accepted",
            ));
        }
        self.http_client = Some(http_client);
        Ok(self)
    }

    /// Builds the client facade.
    ///
    /// The faucet and indexer collaborators are only constructed when the
    /// network configures their URLs; operations on an absent collaborator
    /// fail with an unconfigured error. The chain id is not fetched here:
    /// the node client resolves and caches it on first use.
    pub fn build(self) -> MeridianResult<MeridianClient> {
        let rest_client = match self.http_client {
            Some(client) => client,
            None => ReqwestClient::builder()
                .default_headers(self.headers)
                .timeout(self.timeout)
                .cookie_store(true)
                .build()?,
        };

        let faucet = self
            .network
            .faucet_url()
            .map(|_| MeridianFaucetClient::new(self.network.clone(), rest_client.clone()));
        let indexer = self
            .network
            .indexer_url()
            .map(|_| MeridianIndexerClient::new(self.network.clone(), rest_client.clone()));
        let node = MeridianNodeClient::new(self.network, rest_client);

        Ok(MeridianClient::new(node, faucet, indexer))
    }
}
