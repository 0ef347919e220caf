//! Core types for the Meridian Rust SDK.
//!
//! This crate holds the wire and API types shared by the client crates:
//! addresses, chain ids, transaction shapes, events, and the unified
//! [`MeridianError`] type.

#![forbid(unsafe_code)]

pub mod api_types;
pub mod error;
pub mod headers;

pub use error::{MeridianError, MeridianResult};
