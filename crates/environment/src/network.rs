//! Network identifiers.
//!
//! Networks are keyed by their chain id rendered as a string, the same
//! name the deployment toolchain uses to select the active network.

use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// BNB Smart Chain mainnet.
pub const BSC_MAINNET: &str = "56";

/// BNB Smart Chain testnet.
pub const BSC_TESTNET: &str = "97";

/// Identifiers that appear in at least one table.
pub const KNOWN_NETWORKS: [&str; 2] = [BSC_MAINNET, BSC_TESTNET];

/// Identifier of the active network.
///
/// Any string is accepted. An identifier nothing is deployed on is a valid
/// value and simply resolves to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(String);

impl NetworkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// BNB Smart Chain mainnet.
    pub fn bsc_mainnet() -> Self {
        Self::new(BSC_MAINNET)
    }

    /// BNB Smart Chain testnet.
    pub fn bsc_testnet() -> Self {
        Self::new(BSC_TESTNET)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether any table has an entry for this identifier.
    pub fn is_known(&self) -> bool {
        KNOWN_NETWORKS.contains(&self.as_str())
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NetworkId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NetworkId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl FromStr for NetworkId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl AsRef<str> for NetworkId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_networks() {
        assert!(NetworkId::bsc_mainnet().is_known());
        assert!(NetworkId::bsc_testnet().is_known());
        assert!(!NetworkId::new("1").is_known());
        assert!(!NetworkId::new("").is_known());
    }

    #[test]
    fn test_parse_accepts_anything() {
        let id: NetworkId = "not-a-chain".parse().unwrap();
        assert_eq!(id.as_str(), "not-a-chain");
        assert_eq!(id.to_string(), "not-a-chain");
    }

    #[test]
    fn test_serde_transparent() {
        let id = NetworkId::bsc_testnet();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"97\"");

        let back: NetworkId = serde_json::from_str("\"56\"").unwrap();
        assert_eq!(back, NetworkId::bsc_mainnet());
    }
}
