use crate::api_types::numbers::U64;
use serde::{Deserialize, Serialize};

/// Account state returned from `GET /accounts/{address}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    /// The account's current sequence number.
    pub sequence_number: U64,
    /// The account's authentication key as a hex string.
    pub authentication_key: String,
}

impl AccountInfo {
    /// Returns the sequence number as a plain u64.
    pub fn sequence_number(&self) -> u64 {
        self.sequence_number.as_u64()
    }
}
