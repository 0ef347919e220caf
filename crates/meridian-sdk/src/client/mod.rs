//! Clients for the Meridian node, faucet, and indexer services.

pub mod builder;
pub mod config;
pub mod faucet;
pub mod indexer;
pub mod options;
pub mod rest_api;
