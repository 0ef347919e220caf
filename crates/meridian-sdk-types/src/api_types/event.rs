//! Event types.
//!
//! Events are per-account append-only logs. Each record carries a type tag,
//! a globally-unique stream id (creation number + owning address), and a
//! sequence number that is strictly increasing within the stream.

use crate::api_types::address::AccountAddress;
use crate::api_types::numbers::U64;
use crate::error::{MeridianError, MeridianResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The globally unique identifier of an event stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventGuid {
    /// The creation number, unique within the owning account.
    pub creation_number: U64,
    /// The account that owns the event stream.
    pub account_address: AccountAddress,
}

impl fmt::Display for EventGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            self.account_address.to_short_string(),
            self.creation_number
        )
    }
}

/// An event record from the node API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The type of the event data.
    #[serde(rename = "type")]
    pub typ: String,
    /// The globally unique identifier of the stream this event belongs to.
    pub guid: EventGuid,
    /// The sequence number of this event within its stream.
    pub sequence_number: U64,
    /// The event data as JSON.
    pub data: serde_json::Value,
}

impl Event {
    /// Returns the sequence number as a plain u64.
    pub fn sequence_number(&self) -> u64 {
        self.sequence_number.as_u64()
    }

    /// Tries to decode the event data into a caller-supplied shape.
    ///
    /// # Errors
    ///
    /// Returns a decode error naming the event's stream and sequence number
    /// if the data does not match the requested type.
    pub fn data_as<T: for<'de> Deserialize<'de>>(&self) -> MeridianResult<T> {
        serde_json::from_value(self.data.clone()).map_err(|e| {
            MeridianError::decode(
                format!("event {} #{}", self.guid, self.sequence_number),
                e.to_string(),
            )
        })
    }
}
