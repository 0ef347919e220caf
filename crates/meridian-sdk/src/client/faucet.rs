use crate::client::config::MeridianNetwork;
use meridian_sdk_types::api_types::address::AccountAddress;
use meridian_sdk_types::{MeridianError, MeridianResult};
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct FundResponse {
    txn_hashes: Vec<String>,
}

/// Client for the faucet service on non-production networks.
#[derive(Debug, Clone)]
pub struct MeridianFaucetClient {
    network: MeridianNetwork,
    rest_client: ReqwestClient,
}

impl MeridianFaucetClient {
    /// Creates a faucet client; only constructed when the network carries a
    /// faucet URL.
    pub fn new(network: MeridianNetwork, rest_client: ReqwestClient) -> MeridianFaucetClient {
        MeridianFaucetClient {
            network,
            rest_client,
        }
    }

    /// Funds an account, creating it if it doesn't exist. Returns the
    /// hashes of the funding transactions to wait on.
    ///
    /// Amounts above the service's configured maximum are clamped by the
    /// service.
    pub async fn fund(
        &self,
        address: AccountAddress,
        amount: u64,
    ) -> MeridianResult<Vec<String>> {
        let url = self
            .network
            .faucet_url()
            .ok_or(MeridianError::Unconfigured("faucet"))?
            .join("fund")?;
        let data = serde_json::json!({
            "address": address.to_hex(),
            "amount": amount,
        });
        let response = self.rest_client.post(url).json(&data).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(MeridianError::api(status.as_u16(), body));
        }
        let body: FundResponse = response.json().await?;
        Ok(body.txn_hashes)
    }
}
