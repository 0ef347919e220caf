use crate::client::config::MeridianNetwork;
use meridian_sdk_types::{MeridianError, MeridianResult};
use reqwest::Client as ReqwestClient;

/// Client for the GraphQL indexer service.
///
/// Query construction and result mapping are the caller's concern; this
/// client only carries a query document and variables to the endpoint and
/// hands back the raw response.
#[derive(Debug, Clone)]
pub struct MeridianIndexerClient {
    network: MeridianNetwork,
    rest_client: ReqwestClient,
}

impl MeridianIndexerClient {
    /// Creates an indexer client; only constructed when the network carries
    /// an indexer URL.
    pub fn new(network: MeridianNetwork, rest_client: ReqwestClient) -> MeridianIndexerClient {
        MeridianIndexerClient {
            network,
            rest_client,
        }
    }

    /// Executes a raw GraphQL query and returns the raw JSON response.
    pub async fn query(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> MeridianResult<serde_json::Value> {
        let url = self
            .network
            .indexer_url()
            .ok_or(MeridianError::Unconfigured("indexer"))?
            .clone();
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });
        let response = self.rest_client.post(url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(MeridianError::api(status.as_u16(), body));
        }
        Ok(response.json().await?)
    }
}
