//! # Meridian Rust SDK
//!
//! Client SDK for the Meridian ledger network: build, submit, and confirm
//! transactions, fetch paginated event streams, and invoke read-only view
//! functions.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use meridian_sdk::client::builder::MeridianClientBuilder;
//! use meridian_sdk::client::config::MeridianNetwork;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = MeridianClientBuilder::new(MeridianNetwork::testnet()).build()?;
//!     let info = client.info().await?;
//!     println!("ledger version: {}", info.ledger_version());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

pub mod client;

mod meridian;

pub use meridian::MeridianClient;
pub use meridian_sdk_types::{MeridianError, MeridianResult};

#[cfg(test)]
mod tests;
