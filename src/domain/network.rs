use crate::domain::errors::EvmError;
use serde::{Deserialize, Deserializer};
use std::fmt::{Display, Formatter};

/// Chains with a known Multicall2 deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum EvmNetwork {
    Eth = 1,
    Polygon = 137,
    Avalanche = 43114,
}

impl EvmNetwork {
    pub fn chain_id(self) -> u64 {
        self as u64
    }
}

impl TryFrom<u64> for EvmNetwork {
    type Error = EvmError;

    fn try_from(id: u64) -> Result<Self, EvmError> {
        match id {
            1 => Ok(EvmNetwork::Eth),
            137 => Ok(EvmNetwork::Polygon),
            43114 => Ok(EvmNetwork::Avalanche),
            _ => Err(EvmError::UnsupportedNetwork(id)),
        }
    }
}

impl Display for EvmNetwork {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chain_id())
    }
}

// chain ids arrive as decimal strings, e.g. from path segments
impl<'de> Deserialize<'de> for EvmNetwork {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let id: u64 = s.parse().map_err(serde::de::Error::custom)?;
        EvmNetwork::try_from(id).map_err(serde::de::Error::custom)
    }
}
