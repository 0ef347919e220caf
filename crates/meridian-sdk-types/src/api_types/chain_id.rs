use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Display};

/// The chain identifier of a Meridian network.
///
/// Encoded as a single byte everywhere: in raw transactions (replay
/// protection) and in the node-info response.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub enum ChainId {
    Mainnet,
    Testnet,
    Localnet,
    Other(u8),
}

impl ChainId {
    pub const MAINNET_ID: u8 = 1;
    pub const TESTNET_ID: u8 = 2;
    pub const LOCALNET_ID: u8 = 4;

    pub const fn from_u8(raw: u8) -> Self {
        match raw {
            Self::MAINNET_ID => Self::Mainnet,
            Self::TESTNET_ID => Self::Testnet,
            Self::LOCALNET_ID => Self::Localnet,
            other => Self::Other(other),
        }
    }

    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Mainnet => Self::MAINNET_ID,
            Self::Testnet => Self::TESTNET_ID,
            Self::Localnet => Self::LOCALNET_ID,
            Self::Other(other) => other,
        }
    }

    fn as_known_name(self) -> Option<&'static str> {
        match self {
            Self::Mainnet => Some("mainnet"),
            Self::Testnet => Some("testnet"),
            Self::Localnet => Some("localnet"),
            Self::Other(_) => None,
        }
    }
}

impl Debug for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_known_name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{}", self.as_u8()),
        }
    }
}

impl Serialize for ChainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::from_u8(u8::deserialize(deserializer)?))
    }
}

impl From<ChainId> for u8 {
    fn from(chain_id: ChainId) -> Self {
        chain_id.as_u8()
    }
}

impl From<u8> for ChainId {
    fn from(raw: u8) -> Self {
        ChainId::from_u8(raw)
    }
}
