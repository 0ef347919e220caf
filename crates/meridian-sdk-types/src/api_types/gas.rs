use serde::{Deserialize, Serialize};

/// Gas price estimation returned from `GET /estimate_gas_price`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasEstimation {
    /// Estimate for transactions that can wait.
    pub deprioritized_gas_estimate: Option<u64>,
    /// The recommended estimate.
    pub gas_estimate: u64,
    /// Estimate for transactions that should land quickly.
    pub prioritized_gas_estimate: Option<u64>,
}

impl GasEstimation {
    /// Returns the recommended gas unit price.
    pub fn recommended(&self) -> u64 {
        self.gas_estimate
    }

    /// Returns the prioritized gas unit price, falling back to the
    /// recommended one.
    pub fn prioritized(&self) -> u64 {
        self.prioritized_gas_estimate.unwrap_or(self.gas_estimate)
    }
}
