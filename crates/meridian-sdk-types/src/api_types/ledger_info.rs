use crate::api_types::chain_id::ChainId;
use crate::api_types::numbers::U64;
use serde::{Deserialize, Serialize};

/// Node and ledger information returned from `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct NodeInfo {
    /// The chain ID of the network
    pub chain_id: u8,

    /// The current epoch number
    pub epoch: U64,

    /// The current ledger version
    pub ledger_version: U64,

    /// The oldest ledger version available
    pub oldest_ledger_version: U64,

    /// The ledger timestamp in microseconds
    pub ledger_timestamp: U64,

    /// The role of the node (e.g., "full_node")
    pub node_role: String,

    /// The current block height
    pub block_height: U64,

    /// The oldest block height available
    pub oldest_block_height: U64,

    /// The git hash of the node software
    #[serde(default)]
    pub git_hash: Option<String>,
}

impl NodeInfo {
    /// Get the chain ID as a ChainId enum
    pub fn chain_id(&self) -> ChainId {
        ChainId::from_u8(self.chain_id)
    }

    /// Get the ledger version as u64
    pub fn ledger_version(&self) -> u64 {
        self.ledger_version.as_u64()
    }

    /// Get the block height as u64
    pub fn block_height(&self) -> u64 {
        self.block_height.as_u64()
    }
}

/// Response from `GET /-/healthy`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// A human-readable health message.
    pub message: String,
}
