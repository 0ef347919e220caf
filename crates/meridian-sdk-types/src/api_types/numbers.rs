use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A `u64` that travels as a decimal string on the wire.
///
/// The node API encodes 64-bit integers as strings so that JSON consumers
/// without 64-bit integer support do not lose precision.
#[derive(Debug, Clone, Copy, Eq, PartialOrd, PartialEq, Ord, Hash, Default)]
pub struct U64(u64);

impl U64 {
    /// Create a new U64 from a u64
    pub fn new(value: u64) -> Self {
        U64(value)
    }

    /// Get the inner u64 value
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Convert into u64
    pub fn into_u64(self) -> u64 {
        self.0
    }
}

impl Serialize for U64 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for U64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        u64::from_str(&string)
            .map(U64)
            .map_err(|err| D::Error::custom(err.to_string()))
    }
}

impl From<u64> for U64 {
    fn from(value: u64) -> Self {
        U64(value)
    }
}

impl From<U64> for u64 {
    fn from(value: U64) -> Self {
        value.0
    }
}

impl fmt::Display for U64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
